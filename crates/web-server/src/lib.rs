use axum::{extract::Request, routing::get, Router, ServiceExt};
use configuration::Settings;
use database::ArticleStore;
use service::ArticlesService;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::normalize_path::NormalizePath;

pub mod articles;
pub mod error;
pub mod middleware;
pub mod sanitize;
pub mod service;
pub mod validation;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub articles: ArticlesService,
}

impl AppState {
    /// Builds the state around an explicitly injected store.
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self {
            articles: ArticlesService::new(store),
        }
    }
}

/// Composes resource routers and middleware into the application router.
pub fn build_router(store: Arc<dyn ArticleStore>, settings: &Settings) -> Router {
    let app_state = Arc::new(AppState::new(store));

    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest(
            "/api/articles",
            articles::router(settings.server.body_limit_bytes),
        )
        .with_state(app_state)
        .layer(middleware::cors_layer(&settings.server.cors_allowed_origins));

    let app = middleware::with_security_headers(app);
    middleware::with_request_logging(app, settings.application.environment)
}

/// Serves `app` on an already-bound listener until Ctrl-C is received.
///
/// A trailing slash is trimmed before routing, so `/api/articles/` and
/// `/api/articles` reach the same handler.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    tracing::info!("Web server listening on http://{}", listener.local_addr()?);
    let app = NormalizePath::trim_trailing_slash(app);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Web server stopped.");
    Ok(())
}

/// The main function to configure and run the web server.
pub async fn run_server(settings: &Settings, store: Arc<dyn ArticleStore>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(settings.server.address()).await?;
    serve(listener, build_router(store, settings)).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received.");
}
