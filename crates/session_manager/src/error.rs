//! Session manager error types

use thiserror::Error;
use todo_client::ApiError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("auth service error: {0}")]
    Service(ApiError),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ApiError> for SessionError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationFailed { message, .. } => {
                SessionError::AuthenticationFailed(message)
            }
            other => SessionError::Service(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
