//! In-memory repository for tests and local experiments.
//!
//! Rows live in insertion order. Every trait call is counted, and the store can be
//! switched to "unavailable" to exercise failure paths.

use super::BookRepository;
use crate::error::AppError;
use crate::model::Book;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryBookRepository {
    rows: RwLock<Vec<Book>>,
    calls: AtomicUsize,
    unavailable: AtomicBool,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of repository operations invoked so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// While set, every operation fails with a store error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Current rows, bypassing the call counter.
    pub async fn snapshot(&self) -> Vec<Book> {
        self.rows.read().await.clone()
    }

    fn enter(&self) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Store(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        self.enter()?;
        Ok(self.rows.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Book, AppError> {
        self.enter()?;
        self.rows
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    async fn create(&self, book: &Book) -> Result<(), AppError> {
        self.enter()?;
        let mut rows = self.rows.write().await;
        if rows.iter().any(|b| b.id == book.id) {
            return Err(AppError::Store(sqlx::Error::Protocol(format!(
                "duplicate key value violates unique constraint \"books_pkey\" ({})",
                book.id
            ))));
        }
        rows.push(book.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, book: &Book) -> Result<u64, AppError> {
        self.enter()?;
        let mut rows = self.rows.write().await;
        match rows.iter_mut().find(|b| b.id == id) {
            Some(row) => {
                row.updated_at = book.updated_at;
                row.title = book.title.clone();
                row.author = book.author.clone();
                row.book_status = book.book_status;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        self.enter()?;
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|b| b.id != id);
        Ok((before - rows.len()) as u64)
    }
}
