//! # HTTP Server
//!
//! Binds the catalog router to a socket, with CORS and request tracing.
//! A panicking handler answers with the generic JSON 500.

use std::any::Any;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::dataset::Dataset;
use crate::rest_api::{CatalogHandler, RestError, RestServer};

use super::config::HttpServerConfig;

/// HTTP server for the catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving `dataset`
    pub fn new(config: HttpServerConfig, dataset: Arc<Dataset>) -> Self {
        let handler = CatalogHandler::new(dataset).with_max_per_page(config.max_per_page);
        let router = with_layers(RestServer::new(handler).router(), &config);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C or SIGTERM
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}", e)))?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "catalog API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

/// Panic recovery innermost, then request tracing, then CORS.
fn with_layers(router: Router, config: &HttpServerConfig) -> Router {
    let cors = if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(cors::Any)
            .allow_methods(cors::Any)
            .allow_headers(cors::Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(cors::Any)
            .allow_headers(cors::Any)
    };

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    };
    RestError::unexpected(detail).into_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };
    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    #[cfg(not(unix))]
    ctrl_c.await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Table;

    fn empty_dataset() -> Arc<Dataset> {
        Arc::new(Dataset::new(
            Table::from_rows(Vec::new()),
            Table::from_rows(Vec::new()),
            Table::from_rows(Vec::new()),
            Table::from_rows(Vec::new()),
        ))
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(HttpServerConfig::default(), empty_dataset());
        assert_eq!(server.socket_addr(), "0.0.0.0:5000");
    }

    #[tokio::test]
    async fn test_panicking_route_is_a_json_500() {
        use axum::body::{to_bytes, Body};
        use axum::http::{Request, StatusCode};
        use axum::routing::get;
        use tower::ServiceExt;

        async fn explode() -> &'static str {
            panic!("row index out of range")
        }

        let router = with_layers(
            Router::new().route("/explode", get(explode)),
            &HttpServerConfig::default(),
        );
        let response = router
            .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"error": "An unexpected error occurred"}));
    }

    #[test]
    fn test_server_with_custom_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:3000".to_string()],
            ..HttpServerConfig::with_port(8080)
        };
        let server = HttpServer::new(config, empty_dataset());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
        let _router = server.router();
    }
}
