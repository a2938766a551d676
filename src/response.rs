//! Standard response envelope: `error`, `msg`, and an optional payload.

use crate::model::Book;
use crate::service::Violations;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    Fields(Violations),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    One { book: Option<Book> },
    Many { count: usize, books: Option<Vec<Book>> },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Envelope {
    pub error: bool,
    pub msg: Option<Message>,
    #[serde(flatten)]
    pub payload: Option<Payload>,
}

impl Envelope {
    pub fn book(book: Book) -> Self {
        Envelope {
            error: false,
            msg: None,
            payload: Some(Payload::One { book: Some(book) }),
        }
    }

    pub fn books(books: Vec<Book>) -> Self {
        Envelope {
            error: false,
            msg: None,
            payload: Some(Payload::Many {
                count: books.len(),
                books: Some(books),
            }),
        }
    }

    pub fn empty() -> Self {
        Envelope {
            error: false,
            msg: None,
            payload: None,
        }
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        Envelope {
            error: true,
            msg: Some(Message::Text(msg.into())),
            payload: None,
        }
    }

    pub fn violations(violations: Violations) -> Self {
        Envelope {
            error: true,
            msg: Some(Message::Fields(violations)),
            payload: None,
        }
    }

    /// Absence of a single book: `book` is present and null.
    pub fn missing_book(msg: impl Into<String>) -> Self {
        Envelope {
            payload: Some(Payload::One { book: None }),
            ..Self::failure(msg)
        }
    }

    /// Absence of any books: zero count and a null collection.
    pub fn no_books(msg: impl Into<String>) -> Self {
        Envelope {
            payload: Some(Payload::Many {
                count: 0,
                books: None,
            }),
            ..Self::failure(msg)
        }
    }
}

/// What a service operation hands to the HTTP boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    pub status: StatusCode,
    pub envelope: Envelope,
}

impl Reply {
    pub fn new(status: StatusCode, envelope: Envelope) -> Self {
        Reply { status, envelope }
    }

    pub fn ok(envelope: Envelope) -> Self {
        Self::new(StatusCode::OK, envelope)
    }

    pub fn no_content() -> Self {
        Self::new(StatusCode::NO_CONTENT, Envelope::empty())
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        if self.status == StatusCode::NO_CONTENT {
            return self.status.into_response();
        }
        (self.status, Json(self.envelope)).into_response()
    }
}
