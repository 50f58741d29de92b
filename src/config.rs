use std::time::Duration;

use anyhow::Result;
use log::debug;
use reqwest::{
    Client,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};

use crate::auth::AuthClient;

/// Default backend API base URL.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080/api";

/// Upper bound on a login round trip.
pub const LOGIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Immutable client configuration: API base URL, request timeout and the
/// default headers every request carries. Read-only after construction.
pub struct AuthConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl AuthConfig {
    pub fn new(api_url: Option<String>) -> Self {
        Self {
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            timeout: LOGIN_TIMEOUT,
        }
    }

    /// Builds the configured reqwest Client.
    pub fn build_client(&self) -> Result<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent("authc-cli")
            .default_headers(headers)
            .timeout(self.timeout)
            .build()?;

        debug!("HTTP client configured for {}", self.api_url);
        Ok(client)
    }

    /// Builds the authenticator client from this configuration.
    pub fn build_auth_client(&self) -> Result<AuthClient> {
        Ok(AuthClient::new(self.build_client()?, self.api_url.clone()))
    }
}
