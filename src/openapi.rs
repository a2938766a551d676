//! OpenAPI description of the book routes.

use crate::handlers::book;
use crate::model::{Book, BookPayload};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Bookshelf API", description = "Book catalogue CRUD over PostgreSQL"),
    paths(
        book::list_books,
        book::get_book,
        book::create_book,
        book::update_book,
        book::delete_book
    ),
    components(schemas(Book, BookPayload)),
    tags((name = "Book", description = "Single book operations"), (name = "Books", description = "Collection"))
)]
pub struct ApiDoc;
