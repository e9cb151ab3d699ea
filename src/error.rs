//! Error types shared across the crate.

/// Errors produced by lookup operations.
///
/// `InvalidArgument` and `Configuration` are always raised before any network
/// interaction, so callers can rely on a failed precondition never having
/// reached the registry. `Remote` carries the registry's own exception
/// description verbatim.
#[derive(Debug, thiserror::Error)]
pub enum AbrError {
    /// Malformed search input, e.g. an ABN that fails its checksum or a blank
    /// search term.
    #[error("Invalid search input: {0}")]
    InvalidArgument(String),

    /// The client is missing required configuration, e.g. no GUID.
    #[error("Registry client misconfigured: {0}")]
    Configuration(String),

    /// The registry answered with an explicit exception payload.
    #[error("Registry exception: {0}")]
    Remote(String),

    /// The HTTP layer failed before a response body could be read.
    #[error("Registry transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The registry answered, but not with the envelope shape we expect.
    #[error("Unexpected registry response: {0}")]
    UnexpectedResponse(String),
}

impl AbrError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote(message.into())
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedResponse(message.into())
    }
}
