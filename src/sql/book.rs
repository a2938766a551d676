//! Statements for the `books` table.

/// Column list shared by every SELECT and INSERT. Rows are decoded by name, not position.
macro_rules! book_columns {
    () => {
        "id, created_at, updated_at, title, author, book_status"
    };
}

pub const BOOKS_TABLE: &str = "books";

pub const BOOK_COLUMNS: &str = book_columns!();

pub const SELECT_ALL: &str = concat!("SELECT ", book_columns!(), " FROM books");

pub const SELECT_BY_ID: &str = concat!("SELECT ", book_columns!(), " FROM books WHERE id = $1");

pub const INSERT: &str = concat!(
    "INSERT INTO books (",
    book_columns!(),
    ") VALUES ($1, $2, $3, $4, $5, $6)"
);

/// Only mutable fields are written; `id` and `created_at` are never touched.
pub const UPDATE_BY_ID: &str =
    "UPDATE books SET updated_at = $2, title = $3, author = $4, book_status = $5 WHERE id = $1";

pub const DELETE_BY_ID: &str = "DELETE FROM books WHERE id = $1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_expand_shared_column_list() {
        assert_eq!(
            SELECT_BY_ID,
            "SELECT id, created_at, updated_at, title, author, book_status FROM books WHERE id = $1"
        );
        assert_eq!(
            INSERT,
            "INSERT INTO books (id, created_at, updated_at, title, author, book_status) \
             VALUES ($1, $2, $3, $4, $5, $6)"
        );
        assert!(SELECT_ALL.contains(BOOK_COLUMNS) && SELECT_ALL.ends_with(BOOKS_TABLE));
    }

    #[test]
    fn insert_binds_one_placeholder_per_column() {
        let columns = BOOK_COLUMNS.split(", ").count();
        assert_eq!(INSERT.matches('$').count(), columns);
    }

    #[test]
    fn update_leaves_identity_alone() {
        assert!(!UPDATE_BY_ID.contains("created_at"));
        assert!(!UPDATE_BY_ID.contains("SET id"));
    }
}
