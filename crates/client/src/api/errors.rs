//! API-specific error types
//!
//! Classifies every failure mode of the client facade. Each error is
//! surfaced to the caller only after the facade has emitted its single
//! notification, so callers must not re-notify for the same failure.

use thiserror::Error;

/// Fallback error text when a failed response carries no `message`
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// User-facing text for transport-level failures, shown regardless of
/// the underlying error
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";

/// User-facing text for responses that are not valid JSON
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Received an invalid response from the server.";

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport succeeded but the response status signals failure;
    /// the message comes from the response body (or the generic
    /// fallback)
    #[error("{0}")]
    Application(String),

    /// Transport itself failed; carries the underlying error text for
    /// logs while the user-facing message stays fixed
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not valid JSON, or the envelope did not match
    /// the expected type
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Bad endpoint, header, body, or environment configuration;
    /// detected before any network call
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// The text a notification for this error carries.
    ///
    /// Application errors surface their body-sourced message verbatim;
    /// network and malformed-response errors are replaced with fixed
    /// user-facing strings.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Application(msg) | Self::Config(msg) => msg,
            Self::Network(_) => NETWORK_ERROR_MESSAGE,
            Self::MalformedResponse(_) => MALFORMED_RESPONSE_MESSAGE,
        }
    }
}
