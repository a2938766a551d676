//! Routers: book CRUD, operational routes, and the API description.

mod book;
mod common;

pub use book::book_routes;
pub use common::common_routes;
