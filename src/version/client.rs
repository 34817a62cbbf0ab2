//! HTTP capability used to read version markers

#[cfg(test)]
use mockall::automock;

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use tracing::{debug, warn};

use crate::version::error::HttpError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Cache behaviour for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Let intermediaries serve a cached copy
    #[default]
    Default,
    /// Always hit the origin
    NoStore,
}

/// Options for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FetchOptions {
    pub cache: CacheMode,
}

impl FetchOptions {
    pub fn no_store() -> Self {
        Self {
            cache: CacheMode::NoStore,
        }
    }
}

/// Trait for fetching a text resource
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetches `url` and returns the response body
    ///
    /// # Returns
    /// * `Ok(String)` - Body of a successful (2xx) response
    /// * `Err(HttpError)` - Transport failure or non-successful status
    async fn get(&self, url: &str, options: FetchOptions) -> Result<String, HttpError>;
}

/// [`HttpClient`] backed by reqwest
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a client with the crate user agent
    ///
    /// Fails when the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .inspect_err(|e| warn!("Failed to build HTTP client: {}", e))?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str, options: FetchOptions) -> Result<String, HttpError> {
        let mut request = self.client.get(url);
        if options.cache == CacheMode::NoStore {
            request = request
                .header(CACHE_CONTROL, "no-store")
                .header(PRAGMA, "no-cache");
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!("{} returned status {}", url, status);
            return Err(HttpError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
