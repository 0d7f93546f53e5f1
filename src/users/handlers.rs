use axum::{
    extract::State,
    routing::{get, patch},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::extractors::AuthUser,
    error::AppResult,
    state::AppState,
    users::dto::{EditUserDto, PublicUser},
    validation::JsonBody,
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/me", get(get_me))
        .route("/users", patch(edit_user))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn get_me(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<PublicUser>> {
    let me = state.users.get_me(user.id).await?;
    Ok(Json(me))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn edit_user(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(payload): JsonBody<EditUserDto>,
) -> AppResult<Json<PublicUser>> {
    let updated = state.users.edit_user(user.id, payload).await?;
    Ok(Json(updated))
}
