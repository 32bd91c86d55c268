use async_trait::async_trait;
use todo_core::{Todo, TodoPatch};

use crate::api::models::AuthResponse;
use crate::error::ApiError;

/// Auth Service operations. The session credential issued on a successful
/// login/register is carried ambiently by the implementation.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError>;

    async fn register(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError>;

    async fn logout(&self) -> Result<(), ApiError>;
}

/// Todo Service CRUD operations. Unauthenticated calls are rejected by the
/// server; the client performs no authentication of its own.
#[async_trait]
pub trait TodoApi: Send + Sync {
    async fn list_todos(&self) -> Result<Vec<Todo>, ApiError>;

    async fn create_todo(&self, title: &str) -> Result<Todo, ApiError>;

    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> Result<Todo, ApiError>;

    async fn delete_todo(&self, id: &str) -> Result<(), ApiError>;
}
