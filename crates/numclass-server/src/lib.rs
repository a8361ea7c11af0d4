//! HTTP server for the numclass service.
//!
//! Exposes `GET /api/classify-number?number=<value>` plus a `/health`
//! probe, built on Hyper and Tokio. Responses are JSON; browser access
//! is unrestricted (permissive CORS on every response).
//!
//! # Example
//!
//! ```rust,ignore
//! use numclass_server::{Server, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServerConfig::from_env();
//!     let server = Server::new(config)?;
//!     server.run().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod cors;
pub mod routes;
pub mod server;
pub mod shutdown;

pub use config::{ServerConfig, ServerConfigBuilder};
pub use server::{Server, ServerError};
pub use shutdown::{ConnectionTracker, ShutdownSignal};
