use thiserror::Error;

/// Errors returned by the API client.
///
/// Login/register rejections get a dedicated variant because callers treat
/// "bad credentials" differently from "the service is down".
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication failed ({status}): {message}")]
    AuthenticationFailed { status: u16, message: String },

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// True when the Auth Service rejected the supplied credentials.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::AuthenticationFailed { .. })
    }
}
