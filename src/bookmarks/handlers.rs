use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::{
    auth::extractors::AuthUser,
    bookmarks::{
        dto::{CreateBookmarkDto, EditBookmarkDto},
        repo_types::Bookmark,
    },
    error::{AppError, AppResult},
    state::AppState,
    validation::JsonBody,
};

pub fn bookmark_routes() -> Router<AppState> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/:id",
            get(get_bookmark_by_id)
                .patch(edit_bookmark_by_id)
                .delete(delete_bookmark_by_id),
        )
}

/// An id that is not a UUID cannot name any bookmark.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Bookmark not found".into()))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn list_bookmarks(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Bookmark>>> {
    let rows = state.bookmarks.list_bookmarks(user.id).await?;
    Ok(Json(rows))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn create_bookmark(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(payload): JsonBody<CreateBookmarkDto>,
) -> AppResult<(StatusCode, Json<Bookmark>)> {
    let bookmark = state.bookmarks.create_bookmark(user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn get_bookmark_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<Bookmark>> {
    let id = parse_id(&id)?;
    let bookmark = state.bookmarks.get_bookmark_by_id(user.id, id).await?;
    Ok(Json(bookmark))
}

#[instrument(skip(state, user, payload), fields(user_id = %user.id))]
pub async fn edit_bookmark_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<EditBookmarkDto>,
) -> AppResult<Json<Bookmark>> {
    let id = parse_id(&id)?;
    let bookmark = state
        .bookmarks
        .edit_bookmark_by_id(user.id, id, payload)
        .await?;
    Ok(Json(bookmark))
}

#[instrument(skip(state, user), fields(user_id = %user.id))]
pub async fn delete_bookmark_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    state.bookmarks.delete_bookmark_by_id(user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
