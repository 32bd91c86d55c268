use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use todo_core::{Config, Todo, TodoPatch};
use url::Url;

use crate::api::models::{AuthResponse, CreateTodoRequest, CredentialsRequest};
use crate::client_trait::{AuthApi, TodoApi};
use crate::error::ApiError;

/// HTTP implementation of [`AuthApi`] and [`TodoApi`].
///
/// A single reqwest client with an enabled cookie store backs both services,
/// so the session cookie issued by login/register rides along on every
/// subsequent todo call without the caller threading it through.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let base_url = config.api_base.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {e}", config.api_base)))?;

        let http = Client::builder()
            .default_headers(Self::default_headers())
            .cookie_store(true)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("todo-client/0.1"));
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Read the body of a non-auth response, mapping non-2xx statuses to
    /// `ApiError::Status` and malformed bodies to `ApiError::Decode`.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn expect_success(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn authenticate(
        &self,
        path: &str,
        username: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let request = CredentialsRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = self.http.post(self.url(path)).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("auth request to {path} rejected with status {status}");
            return Err(ApiError::AuthenticationFailed {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl AuthApi for HttpApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.authenticate("/auth/login", username, password).await
    }

    async fn register(&self, username: &str, password: &str) -> Result<AuthResponse, ApiError> {
        self.authenticate("/auth/register", username, password)
            .await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let response = self.http.post(self.url("/auth/logout")).send().await?;
        Self::expect_success(response).await
    }
}

#[async_trait]
impl TodoApi for HttpApiClient {
    async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.http.get(self.url("/todos")).send().await?;
        let todos: Vec<Todo> = Self::decode(response).await?;
        debug!("fetched {} todos", todos.len());
        Ok(todos)
    }

    async fn create_todo(&self, title: &str) -> Result<Todo, ApiError> {
        let request = CreateTodoRequest {
            title: title.to_string(),
        };
        let response = self
            .http
            .post(self.url("/todos"))
            .json(&request)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> Result<Todo, ApiError> {
        let response = self
            .http
            .put(self.url(&format!("/todos/{id}")))
            .json(patch)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_todo(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(&format!("/todos/{id}")))
            .send()
            .await?;
        Self::expect_success(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let config = Config {
            api_base: "http://localhost:5001/api/".to_string(),
            ..Config::default()
        };
        let client = HttpApiClient::new(&config).expect("client");
        assert_eq!(client.url("/todos"), "http://localhost:5001/api/todos");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let config = Config {
            api_base: "not a url".to_string(),
            ..Config::default()
        };
        let err = HttpApiClient::new(&config).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }
}
