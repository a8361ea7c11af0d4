//! HTTP client for the external numbers fact service.

use std::time::Duration;

use thiserror::Error;

/// Default base URL of the fact service.
pub const DEFAULT_BASE_URL: &str = "http://numbersapi.com";

/// Default timeout for a fact request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Fallback text used whenever a fact cannot be retrieved.
pub const NO_FACT_FALLBACK: &str = "No fun fact available.";

/// Errors from a fact-service request.
///
/// These never propagate past [`FactClient::math_fact_or_fallback`]; they
/// exist so the lower-level [`FactClient::math_fact`] can report what
/// went wrong and so tests can assert on the failure mode.
#[derive(Debug, Error)]
pub enum FactError {
    /// The HTTP client could not be constructed.
    #[error("failed to build fact client: {0}")]
    Build(#[source] reqwest::Error),

    /// Transport-level failure, including timeouts.
    #[error("fact request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("fact service returned status {0}")]
    Status(u16),

    /// The response body could not be read as text.
    #[error("failed to read fact body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Client for the numbers fact service.
///
/// One outbound GET per call, bounded by the configured timeout. No
/// retries; the fallback policy makes them unnecessary.
///
/// # Example
///
/// ```rust,ignore
/// use numclass_facts::FactClient;
///
/// let client = FactClient::builder().build()?;
/// let fact = client.math_fact_or_fallback(42).await;
/// ```
#[derive(Debug, Clone)]
pub struct FactClient {
    http: reqwest::Client,
    base_url: String,
}

impl FactClient {
    /// Creates a client builder with default settings.
    #[must_use]
    pub fn builder() -> FactClientBuilder {
        FactClientBuilder::default()
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the math fact for `n`.
    ///
    /// # Errors
    ///
    /// Returns a [`FactError`] on transport failure, timeout, non-2xx
    /// status, or an unreadable body.
    pub async fn math_fact(&self, n: u64) -> Result<String, FactError> {
        let url = format!("{}/{}/math", self.base_url, n);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(FactError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FactError::Status(status.as_u16()));
        }

        response.text().await.map_err(FactError::Body)
    }

    /// Fetches the math fact for `n`, substituting [`NO_FACT_FALLBACK`]
    /// on any failure.
    ///
    /// The failure is logged and absorbed; callers always get a string.
    pub async fn math_fact_or_fallback(&self, n: u64) -> String {
        match self.math_fact(n).await {
            Ok(fact) => fact,
            Err(e) => {
                tracing::warn!("Fact lookup for {} failed, using fallback: {}", n, e);
                NO_FACT_FALLBACK.to_string()
            }
        }
    }
}

/// Builder for [`FactClient`].
#[derive(Debug, Clone)]
pub struct FactClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for FactClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl FactClientBuilder {
    /// Sets the fact-service base URL (no trailing slash).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`FactError::Build`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn build(self) -> Result<FactClient, FactError> {
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(FactError::Build)?;

        Ok(FactClient {
            http,
            base_url: self.base_url,
        })
    }
}
