//! Server configuration.
//!
//! Configuration is an explicit value built at startup and handed to the
//! server; there is no ambient global. [`ServerConfig::from_env`] layers
//! environment overrides on top of the defaults.
//!
//! # Example
//!
//! ```rust
//! use numclass_server::ServerConfig;
//! use std::time::Duration;
//!
//! let config = ServerConfig::builder()
//!     .http_addr("0.0.0.0:8080")
//!     .fact_timeout(Duration::from_secs(3))
//!     .build();
//!
//! assert_eq!(config.http_addr(), "0.0.0.0:8080");
//! ```

use std::net::SocketAddr;
use std::time::Duration;

/// Default HTTP bind address.
pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8080";

/// Default graceful shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Environment variable for the HTTP bind address.
pub const ENV_HTTP_ADDR: &str = "NUMCLASS_HTTP_ADDR";

/// Environment variable for the fact-service base URL.
pub const ENV_FACT_BASE_URL: &str = "NUMCLASS_FACT_BASE_URL";

/// Environment variable for the fact-request timeout (seconds).
pub const ENV_FACT_TIMEOUT_SECS: &str = "NUMCLASS_FACT_TIMEOUT_SECS";

/// Environment variable for the shutdown timeout (seconds).
pub const ENV_SHUTDOWN_TIMEOUT_SECS: &str = "NUMCLASS_SHUTDOWN_TIMEOUT_SECS";

/// Server configuration.
///
/// Use [`ServerConfig::builder()`] or [`ServerConfig::from_env()`] to
/// construct instances.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP bind address (e.g. "0.0.0.0:8080").
    http_addr: String,

    /// How long to wait for in-flight connections on shutdown.
    shutdown_timeout: Duration,

    /// Base URL of the external fact service.
    fact_base_url: String,

    /// Timeout for each outbound fact request.
    fact_timeout: Duration,
}

impl ServerConfig {
    /// Creates a configuration builder with default values.
    #[must_use]
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Builds a configuration from environment variables, falling back
    /// to defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let mut builder = Self::builder();

        if let Ok(addr) = std::env::var(ENV_HTTP_ADDR) {
            builder = builder.http_addr(addr);
        }
        if let Ok(url) = std::env::var(ENV_FACT_BASE_URL) {
            builder = builder.fact_base_url(url);
        }
        if let Some(secs) = env_u64(ENV_FACT_TIMEOUT_SECS) {
            builder = builder.fact_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = env_u64(ENV_SHUTDOWN_TIMEOUT_SECS) {
            builder = builder.shutdown_timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Returns the HTTP bind address.
    #[must_use]
    pub fn http_addr(&self) -> &str {
        &self.http_addr
    }

    /// Parses the bind address into a `SocketAddr`.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be parsed.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.http_addr.parse()
    }

    /// Returns the graceful shutdown timeout.
    #[must_use]
    pub fn shutdown_timeout(&self) -> Duration {
        self.shutdown_timeout
    }

    /// Returns the fact-service base URL.
    #[must_use]
    pub fn fact_base_url(&self) -> &str {
        &self.fact_base_url
    }

    /// Returns the fact-request timeout.
    #[must_use]
    pub fn fact_timeout(&self) -> Duration {
        self.fact_timeout
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok()?.parse().ok()
}

/// Builder for [`ServerConfig`].
#[derive(Debug, Clone)]
pub struct ServerConfigBuilder {
    http_addr: String,
    shutdown_timeout: Duration,
    fact_base_url: String,
    fact_timeout: Duration,
}

impl Default for ServerConfigBuilder {
    fn default() -> Self {
        Self {
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            shutdown_timeout: Duration::from_secs(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
            fact_base_url: numclass_facts::client::DEFAULT_BASE_URL.to_string(),
            fact_timeout: Duration::from_secs(numclass_facts::client::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ServerConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP bind address.
    #[must_use]
    pub fn http_addr(mut self, addr: impl Into<String>) -> Self {
        self.http_addr = addr.into();
        self
    }

    /// Sets the graceful shutdown timeout.
    #[must_use]
    pub fn shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }

    /// Sets the fact-service base URL.
    #[must_use]
    pub fn fact_base_url(mut self, url: impl Into<String>) -> Self {
        self.fact_base_url = url.into();
        self
    }

    /// Sets the fact-request timeout.
    #[must_use]
    pub fn fact_timeout(mut self, timeout: Duration) -> Self {
        self.fact_timeout = timeout;
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> ServerConfig {
        ServerConfig {
            http_addr: self.http_addr,
            shutdown_timeout: self.shutdown_timeout,
            fact_base_url: self.fact_base_url,
            fact_timeout: self.fact_timeout,
        }
    }
}
