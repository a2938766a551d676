//! Bookshelf server: loads settings, opens the database, serves the book API.
//!
//! Run from repo root: `cargo run -p bookshelf-server`

use bookshelf::Settings;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("bookshelf=info,bookshelf_server=info,tower_http=info")
            }),
        )
        .init();

    let app = match bookshelf::build(&settings).await {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "database unreachable at startup");
            return Err(e.into());
        }
    };

    let listener = TcpListener::bind(settings.server.bind_addr).await?;
    tracing::info!("bookshelf listening on http://{}", listener.local_addr()?);

    if settings.server.dev_stage {
        axum::serve(listener, app.router).await?;
    } else {
        axum::serve(listener, app.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        app.pool.close().await;
        tracing::info!("bookshelf stopped");
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
