//! Failure taxonomy for calls against the remote API.
//!
//! Client-side validation (required fields, numeric parsing) is handled by
//! the forms before a request is ever built, so it does not appear here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response never arrived.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. The body is not parsed for
    /// a structured error; `op` names the operation for logs and messages.
    #[error("failed to {op} (HTTP {status})")]
    Status { op: &'static str, status: u16 },

    /// Login was rejected by the server.
    #[error("invalid email or password")]
    InvalidCredentials,
}
