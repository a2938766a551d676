//! Bookshelf: book catalogue REST backend over PostgreSQL.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use app::{build, router, App};
pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use model::{Book, BookPayload};
pub use repository::{BookRepository, InMemoryBookRepository, PgBookRepository};
pub use response::{Envelope, Reply};
pub use service::{BookService, BookValidator};
