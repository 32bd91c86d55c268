//! Todo list error types

use thiserror::Error;
use todo_client::ApiError;

#[derive(Debug, Error)]
pub enum TodoListError {
    #[error("todo service request failed: {0}")]
    Service(#[from] ApiError),
}
