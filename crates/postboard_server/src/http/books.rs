//! `/book` routes. Same shape and status codes as `/post`.

use super::dto::WriteBookRequest;
use super::error::ApiError;
use super::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use postboard_core::{Book, BookId, BookService, SqliteBookRepository};

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/book", get(find_all).post(save))
        .route("/book/:id", get(find_by_id).put(update).delete(delete_by_id))
}

async fn save(
    State(state): State<AppState>,
    Json(request): Json<WriteBookRequest>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let book = state.in_transaction(|tx| {
        BookService::new(SqliteBookRepository::new(tx)).create(request.title, request.author)
    })?;
    Ok((StatusCode::CREATED, Json(book)))
}

async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books =
        state.in_transaction(|tx| BookService::new(SqliteBookRepository::new(tx)).get_all())?;
    Ok(Json(books))
}

async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
) -> Result<Json<Book>, ApiError> {
    let book =
        state.in_transaction(|tx| BookService::new(SqliteBookRepository::new(tx)).get_by_id(id))?;
    Ok(Json(book))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
    Json(request): Json<WriteBookRequest>,
) -> Result<Json<Book>, ApiError> {
    let book = state.in_transaction(|tx| {
        BookService::new(SqliteBookRepository::new(tx)).update(id, request.title, request.author)
    })?;
    Ok(Json(book))
}

async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<BookId>,
) -> Result<&'static str, ApiError> {
    state.in_transaction(|tx| BookService::new(SqliteBookRepository::new(tx)).delete(id))
}
