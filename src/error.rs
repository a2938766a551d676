//! Typed errors and HTTP mapping.

use crate::response::Envelope;
use crate::service::Violations;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Unparsable identifier or body. Never reaches the store.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Violations),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database: {0}")]
    Store(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MalformedInput(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(violations) => Envelope::violations(violations),
            other => Envelope::failure(other.to_string()),
        };
        (status, Json(body)).into_response()
    }
}
