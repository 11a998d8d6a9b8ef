//! Error types for the Swipecart plugin.
//!
//! This module defines the centralized error type [`SwipecartError`] and a type alias
//! [`Result`] used throughout the crate. All variants are implemented with `thiserror`.
//!
//! None of these errors are fatal: the plugin shim logs them and the search session
//! surfaces transport failures as inline UI text.

use thiserror::Error;

/// The main error type for Swipecart operations.
///
/// # Examples
///
/// ```
/// use swipecart::SwipecartError;
///
/// let err = SwipecartError::Http { status: 503 };
/// assert_eq!(err.to_string(), "Failed to fetch (HTTP 503)");
/// ```
#[derive(Debug, Error)]
pub enum SwipecartError {
    /// The search endpoint answered with a non-success status code.
    ///
    /// The message mirrors what the user sees in the inline error line.
    #[error("Failed to fetch (HTTP {status})")]
    Http {
        /// HTTP status code returned by the endpoint.
        status: u16,
    },

    /// The search endpoint answered with a body that is not a valid search response.
    #[error("Malformed search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A web request result arrived without a usable request context.
    ///
    /// Occurs when the `channel` or `epoch` entries of the context map are missing or
    /// cannot be parsed, which means the response cannot be matched to a request.
    #[error("Request context error: {0}")]
    Context(String),

    /// Configuration is invalid.
    ///
    /// Raised for an unparsable `endpoint` URL.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Swipecart operations.
pub type Result<T> = std::result::Result<T, SwipecartError>;
