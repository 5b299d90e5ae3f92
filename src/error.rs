//! Error types for the Viafirma SDK.
//!
//! The remote service owns error semantics: transport failures and JSON
//! decode failures from the HTTP layer are passed through unmodified, and
//! the client never inspects response status codes or remote error payloads.

use thiserror::Error;

/// Result type for Viafirma operations.
pub type Result<T> = std::result::Result<T, ViafirmaError>;

/// Errors that can occur when using the Viafirma SDK.
#[derive(Error, Debug)]
pub enum ViafirmaError {
    /// HTTP request or response-decode error, unmodified from the transport.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ViafirmaError {
    /// Returns the HTTP status code carried by the underlying error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ViafirmaError::Http(e) => e.status().map(|s| s.as_u16()),
        }
    }
}
