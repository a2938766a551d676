//! Runs against a real PostgreSQL when `DATABASE_URL` is set; skipped otherwise.

use bookshelf::config::DatabaseConfig;
use bookshelf::{AppError, Book, BookPayload, BookRepository, PgBookRepository};
use sqlx::PgPool;
use std::io;
use std::sync::{Arc, Mutex};
use tokio::sync::OnceCell;
use tracing_subscriber::fmt::MakeWriter;

const SCHEMA: &str = include_str!("../sql/books.sql");

// Create the table once across the whole test process.
static SCHEMA_READY: OnceCell<()> = OnceCell::const_new();

async fn setup() -> Option<PgPool> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let cfg = DatabaseConfig {
        url: Some(url),
        max_open: 5,
        max_idle: 1,
        ..DatabaseConfig::default()
    };
    let pool = bookshelf::store::connect(&cfg).await.expect("connect db");
    SCHEMA_READY
        .get_or_init(|| async {
            sqlx::query(SCHEMA).execute(&pool).await.expect("create books table");
        })
        .await;
    Some(pool)
}

fn new_book(title: &str) -> Book {
    Book::create_from(BookPayload {
        title: Some(title.into()),
        author: Some("Tester".into()),
        book_status: Some(Some(3)),
    })
}

#[tokio::test]
async fn pg_create_get_update_delete() {
    let Some(pool) = setup().await else {
        return;
    };
    let repo = PgBookRepository::new(pool);

    let book = new_book("Round trip");
    repo.create(&book).await.unwrap();
    assert_eq!(repo.get(book.id).await.unwrap(), book);
    assert!(repo.list().await.unwrap().iter().any(|b| b.id == book.id));

    let changed = book.merged_with(BookPayload {
        title: Some("Changed".into()),
        ..Default::default()
    });
    assert_eq!(repo.update(book.id, &changed).await.unwrap(), 1);
    let stored = repo.get(book.id).await.unwrap();
    assert_eq!(stored, changed);
    assert_eq!(stored.created_at, book.created_at);

    assert_eq!(repo.delete(book.id).await.unwrap(), 1);
    assert!(matches!(repo.get(book.id).await, Err(AppError::NotFound(_))));
    assert_eq!(repo.delete(book.id).await.unwrap(), 0);
    assert_eq!(repo.update(book.id, &changed).await.unwrap(), 0);
}

#[tokio::test]
async fn pg_duplicate_id_is_store_error() {
    let Some(pool) = setup().await else {
        return;
    };
    let repo = PgBookRepository::new(pool);

    let book = new_book("Duplicate");
    repo.create(&book).await.unwrap();
    assert!(matches!(repo.create(&book).await, Err(AppError::Store(_))));
    repo.delete(book.id).await.unwrap();
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn pg_writes_log_bound_parameters() {
    let Some(pool) = setup().await else {
        return;
    };
    let repo = PgBookRepository::new(pool);
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("bookshelf=debug"))
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let book = new_book("Logged title");
    repo.create(&book).await.unwrap();
    let changed = book.merged_with(BookPayload {
        author: Some("Logged author".into()),
        ..Default::default()
    });
    repo.update(book.id, &changed).await.unwrap();
    repo.delete(book.id).await.unwrap();

    let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("title=Logged title"), "{}", output);
    assert!(output.contains("author=Logged author"), "{}", output);
    assert!(output.contains("book_status=Some(3)"), "{}", output);
}
