pub mod handlers;
pub mod shared;

use std::sync::Arc;

use shared::config::{load_config, resolve_path};
use shared::translations::TranslationStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use axum::{routing::get, Router};
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::{ServeDir, ServeFile};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log directory
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = load_config()?;

    let translations_dir = resolve_path(&config.translations.dir);
    tracing::info!("Serving translations from {}", translations_dir.display());
    let store = Arc::new(TranslationStore::new(
        translations_dir,
        config.translations.default_language.clone(),
    ));

    let dist_dir = resolve_path(&config.frontend.dist_dir);
    if !dist_dir.join("index.html").exists() {
        tracing::warn!(
            "{} has no index.html, build the frontend first",
            dist_dir.display()
        );
    }
    // unknown paths are client-side routes
    let frontend = ServeDir::new(&dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/translations/:language/:category",
            get(handlers::translations::get_bundle),
        )
        .with_state(store)
        .fallback_service(frontend)
        .layer(middleware::from_fn(shared::request_log::request_logger))
        .layer(cors);

    let addr = config.server.socket_addr();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
