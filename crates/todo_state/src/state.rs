//! Todo list state - observable snapshot rendered by the list view

use todo_core::Todo;

/// Snapshot of the todo list published to subscribers.
///
/// `todos` is a cache of server state; it only changes after a confirmed
/// remote call. `input` holds the draft title for the next todo and is
/// cleared when a create is confirmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListState {
    pub todos: Vec<Todo>,
    pub input: String,
    /// A list fetch is in flight.
    pub loading: bool,
    /// A mutation (create/update/delete) is in flight.
    pub submitting: bool,
    /// Set when the last list fetch failed; cleared when one starts.
    pub error: Option<String>,
}

impl TodoListState {
    /// A remote call is outstanding. Fetches and mutations share this guard,
    /// so the collection never sees two calls resolve out of order.
    pub fn busy(&self) -> bool {
        self.loading || self.submitting
    }
}
