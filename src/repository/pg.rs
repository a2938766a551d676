//! PostgreSQL-backed repository.

use super::BookRepository;
use crate::error::AppError;
use crate::model::Book;
use crate::sql;
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Clone)]
pub struct PgBookRepository {
    pool: PgPool,
}

impl PgBookRepository {
    pub fn new(pool: PgPool) -> Self {
        PgBookRepository { pool }
    }
}

#[async_trait]
impl BookRepository for PgBookRepository {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        tracing::debug!(sql = %sql::SELECT_ALL, "query");
        let rows = sqlx::query(sql::SELECT_ALL).fetch_all(&self.pool).await?;
        let books = rows.iter().map(book_from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(books)
    }

    async fn get(&self, id: Uuid) -> Result<Book, AppError> {
        tracing::debug!(sql = %sql::SELECT_BY_ID, %id, "query");
        let row = sqlx::query(sql::SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        Ok(book_from_row(&row)?)
    }

    async fn create(&self, book: &Book) -> Result<(), AppError> {
        tracing::debug!(
            sql = %sql::INSERT,
            id = %book.id,
            created_at = %book.created_at,
            updated_at = %book.updated_at,
            title = %book.title,
            author = %book.author,
            book_status = ?book.book_status,
            "execute"
        );
        sqlx::query(sql::INSERT)
            .bind(book.id)
            .bind(book.created_at)
            .bind(book.updated_at)
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.book_status)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn update(&self, id: Uuid, book: &Book) -> Result<u64, AppError> {
        tracing::debug!(
            sql = %sql::UPDATE_BY_ID,
            %id,
            updated_at = %book.updated_at,
            title = %book.title,
            author = %book.author,
            book_status = ?book.book_status,
            "execute"
        );
        let result = sqlx::query(sql::UPDATE_BY_ID)
            .bind(id)
            .bind(book.updated_at)
            .bind(&book.title)
            .bind(&book.author)
            .bind(book.book_status)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        tracing::debug!(sql = %sql::DELETE_BY_ID, %id, "execute");
        let result = sqlx::query(sql::DELETE_BY_ID)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Decode by column name so a reordered table cannot shift fields.
fn book_from_row(row: &PgRow) -> Result<Book, sqlx::Error> {
    Ok(Book {
        id: row.try_get("id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        title: row.try_get("title")?,
        author: row.try_get("author")?,
        book_status: row.try_get("book_status")?,
    })
}
