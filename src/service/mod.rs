//! BookService: request sequencing around the repository, and field validation.

mod book;
mod validation;
pub use book::BookService;
pub use validation::{BookValidator, Violations, MAX_TEXT_LEN};
