//! Nextbike client error types.

use super::convert::ConversionError;

/// Errors from the Nextbike locations client.
#[derive(Debug, thiserror::Error)]
pub enum NextbikeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-success status code.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body was not valid JSON of the expected shape.
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Truncated response body, kept for diagnosing feed changes.
        body: Option<String>,
    },

    /// A place or bike carried a category this library does not know.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
