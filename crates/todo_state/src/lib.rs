//! todo_state - Observable state and controller for the todo list
//!
//! The controller owns the in-memory todo collection as a cache of server
//! state: every mutation is applied locally only after the Todo Service
//! confirms it, and a single in-flight guard serializes all remote calls
//! issued through one controller.

pub mod controller;
pub mod error;
pub mod state;

// Re-export commonly used types
pub use controller::TodoListController;
pub use error::TodoListError;
pub use state::TodoListState;
