//! Field constraints checked before a book is written.

use crate::model::Book;
use serde::Serialize;
use std::collections::BTreeMap;

pub const MAX_TEXT_LEN: usize = 255;

/// Every violated field with a message, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Violations(BTreeMap<&'static str, String>);

impl Violations {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

pub struct BookValidator;

impl BookValidator {
    /// Check every constraint and return all violations at once.
    pub fn validate(book: &Book) -> Result<(), Violations> {
        let mut violations = Violations::default();

        if book.id.is_nil() {
            violations.push("id", "id must be a valid UUID");
        }
        if book.updated_at < book.created_at {
            violations.push("updated_at", "updated_at must not precede created_at");
        }
        check_text(&mut violations, "title", &book.title);
        check_text(&mut violations, "author", &book.author);
        if let Some(status) = book.book_status {
            if !(0..=9).contains(&status) {
                violations.push("book_status", "book_status must be a single digit");
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn check_text(violations: &mut Violations, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        violations.push(field, format!("{} is required", field));
    } else if value.chars().count() > MAX_TEXT_LEN {
        violations.push(
            field,
            format!("{} must be at most {} characters", field, MAX_TEXT_LEN),
        );
    }
}
