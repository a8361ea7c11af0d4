//! HTTP server implementation.
//!
//! A Hyper/Tokio server with two routes:
//!
//! - `GET /api/classify-number`: the classification endpoint
//! - `GET /health`: liveness probe
//!
//! Every response carries the permissive CORS headers, preflight OPTIONS
//! requests are answered before routing, and shutdown drains in-flight
//! connections up to the configured timeout.

use std::sync::Arc;
use std::time::Instant;

use bytes::Bytes;
use http::{Method, Request, Response, StatusCode, Uri};
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;

use numclass_facts::{FactClient, FactError};

use crate::config::ServerConfig;
use crate::cors;
use crate::routes::{self, HttpResponse};
use crate::shutdown::{ConnectionTracker, ShutdownSignal};

/// Path of the classification endpoint.
pub const CLASSIFY_PATH: &str = "/api/classify-number";

/// Path of the liveness probe.
pub const HEALTH_PATH: &str = "/health";

/// Health payload returned by `/health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    /// Service status, always "healthy" while the process serves.
    pub status: String,
    /// Service name.
    pub service: String,
    /// Service version.
    pub version: String,
    /// Seconds since the server was constructed.
    pub uptime_seconds: u64,
}

/// The numclass HTTP server.
///
/// Holds the configuration and the fact client; all per-request state
/// lives on the stack of the handling task. Cheap to share via `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// use numclass_server::{Server, ServerConfig};
///
/// let server = Server::new(ServerConfig::from_env())?;
/// server.run().await?;
/// ```
pub struct Server {
    config: ServerConfig,
    facts: FactClient,
    started: Instant,
}

impl Server {
    /// Creates a server from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::FactClient`] if the outbound HTTP client
    /// cannot be constructed.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let facts = FactClient::builder()
            .base_url(config.fact_base_url())
            .timeout(config.fact_timeout())
            .build()?;

        Ok(Self {
            config,
            facts,
            started: Instant::now(),
        })
    }

    /// Returns a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns a reference to the fact client.
    #[must_use]
    pub fn facts(&self) -> &FactClient {
        &self.facts
    }

    /// Runs the server until SIGTERM or SIGINT.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot bind to the configured
    /// address.
    pub async fn run(self) -> Result<(), ServerError> {
        let shutdown = ShutdownSignal::with_os_signals();
        self.run_with_shutdown(shutdown).await
    }

    /// Runs the server with a caller-controlled shutdown signal.
    ///
    /// # Errors
    ///
    /// Returns an error if the server cannot bind to the configured
    /// address.
    pub async fn run_with_shutdown(self, shutdown: ShutdownSignal) -> Result<(), ServerError> {
        let addr = self.config.socket_addr().map_err(|e| {
            ServerError::Bind(format!("invalid address '{}': {}", self.config.http_addr(), e))
        })?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind(format!("failed to bind to {}: {}", addr, e)))?;

        tracing::info!("Server listening on {}", addr);

        let server = Arc::new(self);
        let tracker = ConnectionTracker::new();

        loop {
            tokio::select! {
                result = listener.accept() => {
                    match result {
                        Ok((stream, remote_addr)) => {
                            let server = Arc::clone(&server);
                            let guard = tracker.acquire();
                            let shutdown = shutdown.clone();

                            tokio::spawn(async move {
                                if let Err(e) = server.serve_connection(stream, shutdown).await {
                                    tracing::error!("Connection error from {}: {}", remote_addr, e);
                                }
                                drop(guard);
                            });
                        }
                        Err(e) => {
                            tracing::error!("Failed to accept connection: {}", e);
                        }
                    }
                }

                _ = shutdown.recv() => {
                    tracing::info!("Shutdown signal received, stopping server");
                    break;
                }
            }
        }

        let timeout = server.config.shutdown_timeout();
        tracing::info!(
            "Waiting up to {:?} for {} connections to close",
            timeout,
            tracker.active()
        );

        tokio::select! {
            _ = tracker.drained() => {
                tracing::info!("All connections closed");
            }
            _ = tokio::time::sleep(timeout) => {
                tracing::warn!("Shutdown timeout reached, {} connections still active", tracker.active());
            }
        }

        tracing::info!("Server stopped");
        Ok(())
    }

    /// Serves one TCP connection.
    async fn serve_connection(
        self: &Arc<Self>,
        stream: tokio::net::TcpStream,
        shutdown: ShutdownSignal,
    ) -> Result<(), hyper::Error> {
        let io = TokioIo::new(stream);
        let server = Arc::clone(self);

        let service = service_fn(move |req: Request<Incoming>| {
            let server = Arc::clone(&server);
            async move {
                Ok::<_, std::convert::Infallible>(
                    server.respond(req.method().clone(), req.uri().clone()).await,
                )
            }
        });

        let conn = http1::Builder::new().serve_connection(io, service);

        tokio::select! {
            result = conn => result,
            _ = shutdown.recv() => Ok(()),
        }
    }

    /// Produces the response for one request.
    ///
    /// Routing works off method and URI alone; no route reads a request
    /// body. Exposed so tests can drive the full request path without a
    /// socket.
    pub async fn respond(&self, method: Method, uri: Uri) -> HttpResponse {
        let path = uri.path();
        tracing::debug!("{} {}", method, path);

        if method == Method::OPTIONS {
            return cors::preflight_response();
        }

        let mut response = match (method, path) {
            (Method::GET, CLASSIFY_PATH) => {
                routes::handle_classify(&self.facts, uri.query()).await
            }
            (Method::GET, HEALTH_PATH) => self.handle_health(),
            _ => routes::not_found(path),
        };

        cors::apply(&mut response);
        response
    }

    /// Handles the `/health` endpoint.
    fn handle_health(&self) -> HttpResponse {
        let status = HealthStatus {
            status: "healthy".to_string(),
            service: "numclass".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.started.elapsed().as_secs(),
        };

        let body = serde_json::to_string(&status)
            .unwrap_or_else(|_| r#"{"status":"healthy"}"#.to_string());

        Response::builder()
            .status(StatusCode::OK)
            .header("Content-Type", "application/json")
            .body(Full::new(Bytes::from(body)))
            .unwrap_or_else(|_| Response::new(Full::new(Bytes::from(r#"{"status":"healthy"}"#))))
    }
}

/// Server error types.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the configured address.
    #[error("bind error: {0}")]
    Bind(String),

    /// The outbound fact client could not be constructed.
    #[error("fact client error: {0}")]
    FactClient(#[from] FactError),
}
