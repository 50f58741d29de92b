//! Classification of login failures into user-facing messages.

/// Message when the server rejects a login without an explanation of its own.
pub const DEFAULT_FAILURE_MESSAGE: &str = "login failed";

/// Message when the request went out but no response came back.
pub const NETWORK_ERROR_MESSAGE: &str = "network error, check the backend service";

/// Message when the request could not be built or dispatched at all.
pub const REQUEST_ERROR_MESSAGE: &str = "request configuration error";

/// A login failure, classified at the transport boundary.
///
/// Exactly one of three cases, checked in priority order: the server
/// answered with an error status, the request was sent but nothing came
/// back, or the request never left the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Response received with a non-success status; carries the backend's
    /// `message` field if it sent one, the default literal otherwise.
    Server(String),
    /// No response arrived (connection failure or timeout).
    Network,
    /// The request could not be constructed or dispatched.
    Request,
}

impl AuthError {
    /// The human-readable message surfaced to the caller.
    pub fn message(&self) -> &str {
        match self {
            AuthError::Server(msg) => msg,
            AuthError::Network => NETWORK_ERROR_MESSAGE,
            AuthError::Request => REQUEST_ERROR_MESSAGE,
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AuthError {}

/// Classifies a `send()` error, i.e. a failure that produced no response.
/// Builder errors mean the request never left the client; everything else
/// (connect failures, timeouts) is a connectivity problem.
pub fn classify_send_error(error: &reqwest::Error) -> AuthError {
    if error.is_builder() {
        AuthError::Request
    } else {
        AuthError::Network
    }
}
