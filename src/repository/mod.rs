//! Persistence boundary for books. The repository is the only component that
//! talks to the store.

mod memory;
mod pg;

pub use memory::InMemoryBookRepository;
pub use pg::PgBookRepository;

use crate::error::AppError;
use crate::model::Book;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Every row in the store's natural order. An empty table is `Ok(vec![])`.
    async fn list(&self) -> Result<Vec<Book>, AppError>;

    /// `AppError::NotFound` when no row has this id.
    async fn get(&self, id: Uuid) -> Result<Book, AppError>;

    /// Insert a fully populated book. Uniqueness of `id` is left to the store.
    async fn create(&self, book: &Book) -> Result<(), AppError>;

    /// Overwrite the mutable fields of row `id`. Returns the number of rows
    /// touched; zero means the row does not exist and the caller must report it.
    async fn update(&self, id: Uuid, book: &Book) -> Result<u64, AppError>;

    /// Remove row `id`. Returns the number of rows removed.
    async fn delete(&self, id: Uuid) -> Result<u64, AppError>;
}
