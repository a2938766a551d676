//! Book CRUD routes. `/books` is kept as an alias of the collection route.

use crate::handlers::book::{create_book, delete_book, get_book, list_books, update_book};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/book", get(list_books).post(create_book))
        .route("/books", get(list_books))
        .route(
            "/book/:id",
            get(get_book).patch(update_book).delete(delete_book),
        )
        .with_state(state)
}
