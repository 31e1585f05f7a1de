//! Application startup and lifecycle management.
//!
//! Builds the router (page, assets, `/generate`, probes), constructs the
//! Gemini client once, and serves until a shutdown signal arrives.

use crate::config::AffirmationConfig;
use crate::handlers::{
    generate::generate_handler,
    health::{health_check, readiness_check},
};
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{request_id_middleware, security_headers_middleware};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Shared application state.
///
/// `text_provider` is built once at startup and only read afterwards.
/// `None` means the API key was missing; `/generate` then answers with a
/// configuration error.
#[derive(Clone)]
pub struct AppState {
    pub text_provider: Option<Arc<dyn TextProvider>>,
}

impl AppState {
    pub fn new(text_provider: Option<Arc<dyn TextProvider>>) -> Self {
        Self { text_provider }
    }

    /// Builds the Gemini client when a key is configured.
    pub fn from_config(config: &AffirmationConfig) -> Result<Self, AppError> {
        let Some(gemini_config) = GeminiConfig::from_settings(&config.gemini) else {
            tracing::error!(
                "GEMINI_API_KEY not found in environment; /generate will return a configuration error"
            );
            return Ok(Self::new(None));
        };

        let provider = GeminiTextProvider::new(gemini_config)
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!(e)))?;

        tracing::info!(
            model = %config.gemini.model,
            "Initialized Gemini text provider"
        );

        Ok(Self::new(Some(Arc::new(provider))))
    }
}

/// Builds the HTTP router.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        // No body size cap on /generate
        .route(
            "/generate",
            post(generate_handler).layer(DefaultBodyLimit::disable()),
        )
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: AffirmationConfig) -> Result<Self, AppError> {
        let state = AppState::from_config(&config)?;
        Self::build_with_state(config, state).await
    }

    /// Build the application around an already constructed state.
    pub async fn build_with_state(
        config: AffirmationConfig,
        state: AppState,
    ) -> Result<Self, AppError> {
        let address = config.common.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        if !config.static_dir.join("index.html").is_file() {
            tracing::warn!(
                static_dir = %config.static_dir.display(),
                "index.html not found; / will return 404"
            );
        }

        let router = build_router(state, &config.static_dir);

        tracing::info!("Affirmation service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                std::io::Error::other(format!("HTTP server error: {}", e))
            })
    }
}
