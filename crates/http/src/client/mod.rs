//! Portal HTTP client

pub mod auth;
pub mod error;

use error::ClientError;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

const DEFAULT_USER_AGENT: &str = concat!("portal-client/", env!("CARGO_PKG_VERSION"));

/// Client for the public authentication endpoints
#[derive(Clone, Debug)]
pub struct PortalClient {
    client: Client,
    base_url: String,
}

impl PortalClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> PortalClientBuilder {
        PortalClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder for a path below the base URL
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors
    ///
    /// Non-2xx responses keep their body text so callers can extract a
    /// message from it; a blank body is replaced by the status line.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = match response.text().await {
                Ok(body) if !body.trim().is_empty() => body,
                _ => status.to_string(),
            };
            tracing::debug!(status = status.as_u16(), "request failed");
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for PortalClient
#[derive(Default)]
pub struct PortalClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl PortalClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (ignored on wasm, where the browser owns it)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<PortalClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base_url is empty".into()));
        }
        match reqwest::Url::parse(&base_url) {
            Ok(url) if !url.cannot_be_a_base() => {}
            _ => {
                return Err(ClientError::Configuration(format!(
                    "base_url is not an absolute URL: {base_url}"
                )));
            }
        }

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        client_builder = client_builder.user_agent(user_agent);

        let client = client_builder.build()?;

        Ok(PortalClient { client, base_url })
    }
}
