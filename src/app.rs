//! Composition root: pool, then repository, then service, then router.

use crate::config::Settings;
use crate::error::AppError;
use crate::repository::{BookRepository, PgBookRepository};
use crate::routes::{book_routes, common_routes};
use crate::service::BookService;
use crate::state::{AppState, OpsState};
use crate::store;
use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Everything the HTTP driver needs, built once per process.
pub struct App {
    pub router: Router,
    pub pool: PgPool,
}

/// Open the store and wire the object graph. An unreachable database is an error here
/// and nowhere else.
pub async fn build(settings: &Settings) -> Result<App, AppError> {
    let pool = store::connect(&settings.database).await?;
    let repo: Arc<dyn BookRepository> = Arc::new(PgBookRepository::new(pool.clone()));
    let router = router(repo, Some(pool.clone()), settings);
    Ok(App { router, pool })
}

/// Wire a router around any repository. `pool` enables the readiness ping.
pub fn router(repo: Arc<dyn BookRepository>, pool: Option<PgPool>, settings: &Settings) -> Router {
    let service = BookService::new(repo).with_verbose_errors(settings.verbose_errors);
    let state = AppState {
        books: Arc::new(service),
    };
    Router::new()
        .merge(common_routes(OpsState { pool }))
        .nest("/api/v1", book_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(RequestBodyLimitLayer::new(settings.server.body_limit_bytes)),
        )
}
