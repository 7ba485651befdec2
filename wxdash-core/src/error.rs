use thiserror::Error;

/// Per-city failure classification.
///
/// Every failure the fetch layer can produce is one of these values; nothing
/// escapes `fetch_one` as a panic or an untyped error, so a caller handling a
/// [`crate::FetchOutcome`] has handled everything.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The city query was empty or whitespace-only. No request is issued.
    #[error("Please enter a city name")]
    EmptyQuery,

    /// The upstream API reported that the city does not exist (404).
    #[error("City '{city}' not found")]
    NotFound { city: String },

    /// Transport-level failure: DNS, connection refused, timeout, or a body
    /// that could not be read off the wire.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Unexpected status code, or a 2xx body that does not match the
    /// expected shape.
    #[error("Invalid response from weather API: {message}")]
    InvalidResponse { message: String },
}

impl FetchError {
    pub fn network(message: impl Into<String>) -> Self {
        FetchError::Network { message: message.into() }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        FetchError::InvalidResponse { message: message.into() }
    }
}
