use serde::{Deserialize, Serialize};

/// Credential pair sent as the login request body. Built per call, never
/// stored by the client.
#[derive(Serialize, Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Payload the backend returns for a successful login.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// Success body envelope: `{code, message, data}` with the payload under
/// `data`. Only the payload is extracted; the rest is backend-owned.
#[derive(Deserialize, Debug)]
pub(crate) struct ApiEnvelope {
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Error body, optionally carrying a human-readable `message`.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
