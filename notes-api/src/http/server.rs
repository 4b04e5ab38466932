//! HTTP server for the notes API

use super::api::build_router;
use super::state::AppState;
use anyhow::{Context, Result};
use axum::http::HeaderValue;
use axum::Router;
use notes_core::config::{Config, CorsConfig};
use notes_core::shutdown::ShutdownCoordinator;
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// CORS policy: mirror any origin unless a list is configured
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let origin = if config.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("Invalid CORS origin: {}", origin))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(config.max_age))
}

/// Router with CORS and request tracing applied
pub fn build_app(state: Arc<AppState>, config: &Config) -> Result<Router> {
    Ok(build_router(state)
        .layer(cors_layer(&config.cors)?)
        .layer(TraceLayer::new_for_http()))
}

/// Serve `app` on `listener` until `shutdown` fires
///
/// In-flight requests get the coordinator's timeout to finish.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: Arc<ShutdownCoordinator>,
) -> Result<()> {
    let signal = {
        let shutdown = shutdown.clone();
        async move {
            shutdown.wait_for_shutdown().await;
        }
    };
    let deadline = {
        let shutdown = shutdown.clone();
        async move {
            shutdown.wait_for_shutdown().await;
            tokio::time::sleep(shutdown.timeout()).await;
        }
    };

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .into_future();

    tokio::select! {
        result = server => result.context("HTTP server failed")?,
        _ = deadline => warn!("Shutdown timeout elapsed, dropping open connections"),
    }

    shutdown.mark_complete().await;
    Ok(())
}

/// Notes HTTP server
pub struct NotesServer {
    config: Config,
    state: Arc<AppState>,
    shutdown: Arc<ShutdownCoordinator>,
}

impl NotesServer {
    /// Create a new server
    pub fn new(config: Config, state: Arc<AppState>, shutdown: Arc<ShutdownCoordinator>) -> Self {
        Self {
            config,
            state,
            shutdown,
        }
    }

    /// Start the server and run until shutdown
    pub async fn run(self) -> Result<()> {
        let app = build_app(self.state, &self.config)?;

        let addr = self.config.server.bind_address;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        info!("Notes API listening on {}", addr);

        serve(listener, app, self.shutdown).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_accepts_configured_origins() {
        let config = CorsConfig {
            allowed_origins: vec!["https://notes.test".to_string()],
            ..CorsConfig::default()
        };
        assert!(cors_layer(&config).is_ok());
    }

    #[test]
    fn test_cors_layer_rejects_unencodable_origin() {
        let config = CorsConfig {
            allowed_origins: vec!["https://bad\norigin".to_string()],
            ..CorsConfig::default()
        };
        assert!(cors_layer(&config).is_err());
    }
}
