//! Book CRUD handlers: list, read, create, update, delete.

use crate::model::BookPayload;
use crate::response::Reply;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
};

#[utoipa::path(
    get,
    path = "/api/v1/book",
    tag = "Books",
    responses(
        (status = 200, description = "All books with their count"),
        (status = 404, description = "Books could not be read")
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Reply {
    state.books.list().await
}

#[utoipa::path(
    get,
    path = "/api/v1/book/{id}",
    tag = "Book",
    params(("id" = String, Path, description = "Book ID (UUID)")),
    responses(
        (status = 200, description = "The book"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No book with this id")
    )
)]
pub async fn get_book(State(state): State<AppState>, Path(id): Path<String>) -> Reply {
    state.books.get(&id).await
}

#[utoipa::path(
    post,
    path = "/api/v1/book",
    tag = "Book",
    request_body = BookPayload,
    responses(
        (status = 200, description = "The created book"),
        (status = 400, description = "Malformed body or validation failure"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create_book(State(state): State<AppState>, body: Bytes) -> Reply {
    state.books.create(&body).await
}

#[utoipa::path(
    patch,
    path = "/api/v1/book/{id}",
    tag = "Book",
    params(("id" = String, Path, description = "Book ID (UUID)")),
    request_body = BookPayload,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Malformed id, body or validation failure"),
        (status = 404, description = "No book with this id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Reply {
    state.books.update(&id, &body).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/book/{id}",
    tag = "Book",
    params(("id" = String, Path, description = "Book ID (UUID)")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "No book with this id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_book(State(state): State<AppState>, Path(id): Path<String>) -> Reply {
    state.books.delete(&id).await
}
