use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::dto::{AuthDto, TokenResponse},
    error::AppResult,
    state::AppState,
    users::dto::PublicUser,
    validation::JsonBody,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AuthDto>,
) -> AppResult<(StatusCode, Json<PublicUser>)> {
    let user = state.auth.signup(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip(state, payload))]
pub async fn signin(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AuthDto>,
) -> AppResult<Json<TokenResponse>> {
    let token = state.auth.signin(payload).await?;
    Ok(Json(token))
}
