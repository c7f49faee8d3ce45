use crate::config::QuizConfig;
use crate::handlers;
use crate::services::providers::gemini::{GeminiClientConfig, GeminiEmbedder, GeminiGenerator};
use crate::services::providers::{Embedder, TextGenerator};
use crate::services::{get_metrics, InMemorySessionStore, SessionStore};
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::metrics_middleware;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: QuizConfig,
    pub store: Arc<dyn SessionStore>,
    pub embedder: Arc<dyn Embedder>,
    pub generator: Arc<dyn TextGenerator>,
}

/// Metrics endpoint for Prometheus scraping.
async fn metrics_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build the application with the real Gemini providers.
    pub async fn build(config: QuizConfig) -> Result<Self, AppError> {
        let embedder: Arc<dyn Embedder> = Arc::new(GeminiEmbedder::new(GeminiClientConfig {
            api_key: config.gemini.api_key.clone(),
            model: config.gemini.embedding_model.clone(),
        }));
        let generator: Arc<dyn TextGenerator> = Arc::new(GeminiGenerator::new(GeminiClientConfig {
            api_key: config.gemini.api_key.clone(),
            model: config.gemini.generation_model.clone(),
        }));
        let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

        Self::build_with_providers(config, store, embedder, generator).await
    }

    /// Assemble the router and listener with injected collaborators.
    ///
    /// Tests use this directly to swap the Gemini providers for mocks.
    pub async fn build_with_providers(
        config: QuizConfig,
        store: Arc<dyn SessionStore>,
        embedder: Arc<dyn Embedder>,
        generator: Arc<dyn TextGenerator>,
    ) -> Result<Self, AppError> {
        let max_upload_bytes = config.upload.max_size_bytes;
        let state = AppState {
            config: config.clone(),
            store,
            embedder,
            generator,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/metrics", get(metrics_handler))
            .route("/api/upload", post(handlers::upload_document))
            .route("/api/generate", post(handlers::generate_content))
            .layer(middleware::from_fn(metrics_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(DefaultBodyLimit::max(max_upload_bytes))
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
