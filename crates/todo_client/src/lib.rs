pub mod api;
pub mod client_trait;
pub mod error;

pub use api::client::HttpApiClient;
pub use api::models::AuthResponse;
pub use client_trait::{AuthApi, TodoApi};
pub use error::ApiError;
pub use todo_core::Config;
