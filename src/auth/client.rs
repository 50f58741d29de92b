//! Authenticator client: a single POST to the backend login endpoint with
//! error-message normalization.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::{AuthError, DEFAULT_FAILURE_MESSAGE, classify_send_error};
use super::types::{ApiEnvelope, Credentials, ErrorBody};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticate: Send + Sync {
    async fn login_value(
        &self,
        username: &str,
        password: &str,
    ) -> Result<serde_json::Value, AuthError>;
}

/// HTTP client for the backend login endpoint.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    api_url: String,
}

impl AuthClient {
    /// Creates an authenticator client from a configured reqwest Client and
    /// the API base URL (e.g. `http://host:port/api`).
    pub fn new(client: Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
        }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// POSTs the credential pair to `{api_url}/login` and returns the
    /// response payload deserialized into `T`.
    ///
    /// Every failure collapses to one [`AuthError`] class; the underlying
    /// transport error is logged and discarded.
    #[tracing::instrument(skip(self, password))]
    pub async fn login<T: DeserializeOwned>(
        &self,
        username: &str,
        password: &str,
    ) -> Result<T, AuthError> {
        let url = format!("{}/login", self.api_url);

        debug!("POST {}...", url);

        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&credentials)
            .send()
            .await
            .map_err(|e| {
                debug!("login request failed without a response: {}", e);
                classify_send_error(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            // Use the backend's message if the error body carries one
            let body = response.json::<ErrorBody>().await.unwrap_or_default();
            let message = body
                .message
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());

            debug!("login rejected with status {}: {}", status, message);
            return Err(AuthError::Server(message));
        }

        let envelope = response.json::<ApiEnvelope>().await.map_err(|e| {
            debug!("failed to read login response body: {}", e);
            AuthError::Server(DEFAULT_FAILURE_MESSAGE.to_string())
        })?;

        serde_json::from_value(envelope.data).map_err(|e| {
            debug!("unexpected login payload shape: {}", e);
            AuthError::Server(DEFAULT_FAILURE_MESSAGE.to_string())
        })
    }
}

#[async_trait]
impl Authenticate for AuthClient {
    #[tracing::instrument(skip(self, password))]
    async fn login_value(
        &self,
        username: &str,
        password: &str,
    ) -> Result<serde_json::Value, AuthError> {
        self.login(username, password).await
    }
}
