//! Authenticator client with three-way error classification.

mod client;
mod error;
mod types;

pub use client::{AuthClient, Authenticate};
pub use error::{
    AuthError, DEFAULT_FAILURE_MESSAGE, NETWORK_ERROR_MESSAGE, REQUEST_ERROR_MESSAGE,
    classify_send_error,
};
pub use types::{Credentials, LoginResponse};

#[cfg(test)]
pub use client::MockAuthenticate;
