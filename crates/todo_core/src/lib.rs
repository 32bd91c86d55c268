//! todo_core - Core types shared by the todo client crates
//!
//! This crate provides the foundational types used across the client:
//! - `todo` - Todo, TodoPatch domain types mirroring the server schema
//! - `config` - Client configuration (API base URL, timeouts, storage)

pub mod config;
pub mod todo;

// Re-export commonly used types
pub use config::Config;
pub use todo::{Todo, TodoPatch};
