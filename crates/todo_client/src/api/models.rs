//! Request/response bodies for the Auth and Todo services.

use serde::{Deserialize, Serialize};

/// Body for `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Successful login/register response. The session credential itself arrives
/// as a cookie and is handled by the HTTP layer.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Body for `POST /todos`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTodoRequest {
    pub title: String,
}
