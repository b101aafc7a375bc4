//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, request timeout)
//! - Bind server to listener
//! - Serve the footer render model and its loading placeholder

use axum::{
    extract::State,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::commerce::MenuSource;
use crate::config::ListenerConfig;
use crate::footer::{FooterPlaceholder, FooterRenderer};

/// Application state injected into handlers.
pub struct AppState<S> {
    pub renderer: FooterRenderer<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            renderer: self.renderer.clone(),
        }
    }
}

/// HTTP server for the footer service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around a renderer.
    pub fn new<S>(config: &ListenerConfig, renderer: FooterRenderer<S>) -> Self
    where
        S: MenuSource + 'static,
    {
        let router = Self::build_router(config, AppState { renderer });
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router<S>(config: &ListenerConfig, state: AppState<S>) -> Router
    where
        S: MenuSource + 'static,
    {
        Router::new()
            .route("/footer", get(footer_handler::<S>))
            .route("/footer/placeholder", get(placeholder_handler))
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
            .layer(TraceLayer::new_for_http())
    }

    /// The assembled router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server received shutdown signal");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Render the footer. Menu backend failures degrade to an empty menu, so this
/// always answers 200.
async fn footer_handler<S>(State(state): State<AppState<S>>) -> impl IntoResponse
where
    S: MenuSource + 'static,
{
    Json(state.renderer.render().await)
}

async fn placeholder_handler() -> impl IntoResponse {
    Json(FooterPlaceholder::default())
}

async fn health_handler() -> &'static str {
    "ok"
}
