//! # Session Manager
//!
//! Owns the client-side authentication session: restores the persisted
//! session identifier at startup, drives login/register/logout against the
//! Auth Service, and publishes state snapshots for views to subscribe to.

pub mod error;
pub mod manager;
pub mod state;
pub mod storage;

// Re-exports
pub use error::SessionError;
pub use manager::SessionManager;
pub use state::{SessionPhase, SessionState};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
