//! Shared application state for all routes. Built once by the composition root.

use crate::service::BookService;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub books: Arc<BookService>,
}

/// State for operational routes that need to reach the database directly.
#[derive(Clone)]
pub struct OpsState {
    pub pool: Option<PgPool>,
}
