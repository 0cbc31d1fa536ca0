//! HTTP client with retry and exponential backoff
//!
//! Issues authenticated GET requests against the listings API:
//! - `Accept: application/json` and `X-Authorization: <api key>` on every request
//! - connect and read timeouts taken from the client config
//! - retries on 429 and 5xx with exponential backoff
//! - no retries on transport failures

use crate::config::{ClientConfig, RetryPolicy};
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::redirect::Policy;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Header carrying the API key
pub const AUTH_HEADER: &str = "X-Authorization";

/// HTTP client for the listings API
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
    retry: RetryPolicy,
}

impl HttpClient {
    /// Create a client with the default retry policy
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_retry(config, RetryPolicy::default())
    }

    /// Create a client with a custom retry policy
    pub fn with_retry(config: ClientConfig, retry: RetryPolicy) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let mut key = HeaderValue::from_str(config.api_key())
            .map_err(|_| Error::config("api key contains characters not allowed in a header"))?;
        key.set_sensitive(true);
        headers.insert(AUTH_HEADER, key);

        let client = Client::builder()
            .default_headers(headers)
            .connect_timeout(config.timeout())
            .read_timeout(config.timeout())
            .pool_max_idle_per_host(0)
            .redirect(Policy::none())
            .user_agent(format!("easybroker-client/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            config,
            retry,
        })
    }

    /// Connection settings this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Retry policy used by [`HttpClient::fetch`]
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    /// GET a URL with the client's retry policy
    pub async fn fetch(&self, url: &str) -> Result<Response> {
        self.fetch_with_policy(url, &self.retry).await
    }

    /// GET a URL with an explicit retry policy
    pub async fn fetch_with_policy(&self, url: &str, policy: &RetryPolicy) -> Result<Response> {
        for attempt in 0..=policy.max_retries {
            // Transport failures are not retried
            let response = self.client.get(url).send().await?;
            let status = response.status();

            if is_retryable_status(status) {
                if attempt < policy.max_retries {
                    let delay = policy.delay_for(attempt);
                    warn!(
                        "Request failed with {}, attempt {}/{}, retrying in {:?}",
                        status.as_u16(),
                        attempt.saturating_add(1),
                        policy.max_attempts(),
                        delay
                    );
                    tokio::time::sleep(delay).await;
                } else {
                    warn!(
                        "Request failed with {}, attempt {}/{}, giving up",
                        status.as_u16(),
                        attempt.saturating_add(1),
                        policy.max_attempts()
                    );
                }
                continue;
            }

            if status.is_success() {
                debug!("Request succeeded: GET {} ({})", url, status.as_u16());
                return Ok(response);
            }

            return Err(Error::http_status(status.as_u16()));
        }

        Err(Error::RetriesExceeded {
            max_retries: policy.max_retries,
        })
    }

    /// Backoff delay after the given zero-based attempt under the client's policy
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        self.retry.delay_for(attempt)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

/// Check if an HTTP status is retryable (429 or any 5xx and above)
pub fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.as_u16() >= 500
}
