//! One method per HTTP verb. Each parses, validates, checks existence, calls the
//! repository, and classifies the outcome into a status and envelope.

use crate::error::AppError;
use crate::model::{Book, BookPayload};
use crate::repository::BookRepository;
use crate::response::{Envelope, Reply};
use crate::service::BookValidator;
use axum::http::StatusCode;
use std::sync::Arc;
use uuid::Uuid;

const BOOKS_NOT_FOUND: &str = "books were not found";
const BOOK_NOT_FOUND: &str = "book with the given ID is not found";
const STORE_FAILURE: &str = "internal storage error";

pub struct BookService {
    repo: Arc<dyn BookRepository>,
    verbose_errors: bool,
}

impl BookService {
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        BookService {
            repo,
            verbose_errors: false,
        }
    }

    /// Echo raw store messages to clients instead of a generic one.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    pub async fn list(&self) -> Reply {
        match self.repo.list().await {
            Ok(books) => Reply::ok(Envelope::books(books)),
            Err(e) => {
                tracing::error!(error = %e, "listing books failed");
                Reply::new(StatusCode::NOT_FOUND, Envelope::no_books(BOOKS_NOT_FOUND))
            }
        }
    }

    pub async fn get(&self, raw_id: &str) -> Reply {
        match self.try_get(raw_id).await {
            Ok(book) => Reply::ok(Envelope::book(book)),
            Err(AppError::NotFound(_)) => {
                tracing::warn!(id = %raw_id, "book not found");
                Reply::new(StatusCode::NOT_FOUND, Envelope::missing_book(BOOK_NOT_FOUND))
            }
            Err(e) => self.failure(e),
        }
    }

    pub async fn create(&self, body: &[u8]) -> Reply {
        match self.try_create(body).await {
            Ok(book) => {
                tracing::info!(id = %book.id, "book created");
                Reply::ok(Envelope::book(book))
            }
            Err(e) => self.failure(e),
        }
    }

    pub async fn update(&self, raw_id: &str, body: &[u8]) -> Reply {
        match self.try_update(raw_id, body).await {
            Ok(id) => {
                tracing::info!(%id, "book updated");
                Reply::no_content()
            }
            Err(e) => self.failure(e),
        }
    }

    pub async fn delete(&self, raw_id: &str) -> Reply {
        match self.try_delete(raw_id).await {
            Ok(id) => {
                tracing::info!(%id, "book deleted");
                Reply::no_content()
            }
            Err(e) => self.failure(e),
        }
    }

    async fn try_get(&self, raw_id: &str) -> Result<Book, AppError> {
        let id = parse_id(raw_id)?;
        self.repo.get(id).await
    }

    async fn try_create(&self, body: &[u8]) -> Result<Book, AppError> {
        let payload = parse_body(body)?;
        let book = Book::create_from(payload);
        BookValidator::validate(&book).map_err(AppError::Validation)?;
        self.repo.create(&book).await?;
        Ok(book)
    }

    async fn try_update(&self, raw_id: &str, body: &[u8]) -> Result<Uuid, AppError> {
        let id = parse_id(raw_id)?;
        let payload = parse_body(body)?;
        let existing = self.repo.get(id).await?;
        let book = existing.merged_with(payload);
        BookValidator::validate(&book).map_err(AppError::Validation)?;
        // Last writer wins; a row removed since the check above shows up as zero rows.
        if self.repo.update(existing.id, &book).await? == 0 {
            return Err(AppError::NotFound(existing.id.to_string()));
        }
        Ok(existing.id)
    }

    async fn try_delete(&self, raw_id: &str) -> Result<Uuid, AppError> {
        let id = parse_id(raw_id)?;
        let existing = self.repo.get(id).await?;
        if self.repo.delete(existing.id).await? == 0 {
            return Err(AppError::NotFound(existing.id.to_string()));
        }
        Ok(existing.id)
    }

    fn failure(&self, err: AppError) -> Reply {
        let status = err.status();
        let envelope = match err {
            AppError::Validation(violations) => {
                tracing::warn!(fields = ?violations.fields().collect::<Vec<_>>(), "book rejected");
                Envelope::violations(violations)
            }
            AppError::NotFound(id) => {
                tracing::warn!(%id, "book not found");
                Envelope::failure("book with this ID not found")
            }
            AppError::MalformedInput(msg) => {
                tracing::warn!(%msg, "malformed request");
                Envelope::failure(msg)
            }
            other => {
                tracing::error!(error = %other, "book operation failed");
                if self.verbose_errors {
                    Envelope::failure(other.to_string())
                } else {
                    Envelope::failure(STORE_FAILURE)
                }
            }
        };
        Reply::new(status, envelope)
    }
}

fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|e| AppError::MalformedInput(format!("invalid book id: {}", e)))
}

fn parse_body(body: &[u8]) -> Result<BookPayload, AppError> {
    BookPayload::from_slice(body)
        .map_err(|e| AppError::MalformedInput(format!("invalid book payload: {}", e)))
}
