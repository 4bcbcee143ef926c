//! `/post` routes.

use super::dto::WritePostRequest;
use super::error::ApiError;
use super::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use postboard_core::{Post, PostId, PostService, SqlitePostRepository};

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/post", get(find_all).post(save))
        .route("/post/:id", get(find_by_id).put(update_by_id).delete(delete_by_id))
}

async fn save(
    State(state): State<AppState>,
    Json(request): Json<WritePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let post = state.in_transaction(|tx| {
        PostService::new(SqlitePostRepository::new(tx)).create(request.title, request.content)
    })?;
    Ok((StatusCode::CREATED, Json(post)))
}

async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<Post>>, ApiError> {
    let posts =
        state.in_transaction(|tx| PostService::new(SqlitePostRepository::new(tx)).get_all())?;
    Ok(Json(posts))
}

async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
) -> Result<Json<Post>, ApiError> {
    let post =
        state.in_transaction(|tx| PostService::new(SqlitePostRepository::new(tx)).get_by_id(id))?;
    Ok(Json(post))
}

async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
    Json(request): Json<WritePostRequest>,
) -> Result<Json<Post>, ApiError> {
    let post = state.in_transaction(|tx| {
        PostService::new(SqlitePostRepository::new(tx)).update(id, request.title, request.content)
    })?;
    Ok(Json(post))
}

async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<PostId>,
) -> Result<&'static str, ApiError> {
    state.in_transaction(|tx| PostService::new(SqlitePostRepository::new(tx)).delete(id))
}
