//! Todo list controller service

use crate::error::TodoListError;
use crate::state::TodoListState;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use todo_client::TodoApi;
use todo_core::TodoPatch;
use tokio::sync::watch;
use tracing::{debug, warn};

/// Todo list controller - reconciles Todo Service responses into local state.
///
/// All operations are asynchronous remote calls that mutate the local
/// collection only after the server confirms them; a failed call leaves the
/// collection untouched and returns the error. One in-flight guard covers
/// both the list fetch and every mutation, so two calls issued through the
/// same controller can never resolve against each other out of order.
pub struct TodoListController {
    api: Arc<dyn TodoApi>,
    state_tx: watch::Sender<TodoListState>,
    generation: AtomicU64,
}

impl TodoListController {
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        let (state_tx, _rx) = watch::channel(TodoListState::default());
        Self {
            api,
            state_tx,
            generation: AtomicU64::new(0),
        }
    }

    /// Get the current list state.
    pub fn state(&self) -> TodoListState {
        self.state_tx.borrow().clone()
    }

    /// Subscribe to list state changes.
    pub fn subscribe(&self) -> watch::Receiver<TodoListState> {
        self.state_tx.subscribe()
    }

    /// Update the draft title for the next todo.
    pub fn set_input(&self, text: impl Into<String>) {
        let text = text.into();
        self.state_tx.send_modify(|state| state.input = text);
    }

    /// Discard any response still in flight for this controller.
    ///
    /// Called when the controller is torn down or superseded: a late
    /// response must be dropped instead of applied to state that no longer
    /// matters.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Fetch the full collection and replace local state wholesale.
    ///
    /// On failure the previous collection is kept and `error` is set so the
    /// view can offer a retry; calling `load` again retries and clears it.
    pub async fn load(&self) -> Result<(), TodoListError> {
        let begun = self.state_tx.send_if_modified(|state| {
            if state.busy() {
                return false;
            }
            state.loading = true;
            state.error = None;
            true
        });
        if !begun {
            return Ok(());
        }

        let generation = self.generation.load(Ordering::SeqCst);
        let result = self.api.list_todos().await;
        if self.is_stale(generation) {
            return Ok(());
        }

        match result {
            Ok(todos) => {
                debug!("loaded {} todos", todos.len());
                self.state_tx.send_modify(|state| {
                    state.loading = false;
                    state.todos = todos;
                });
                Ok(())
            }
            Err(e) => {
                warn!("failed to load todos: {}", e);
                self.state_tx.send_modify(|state| {
                    state.loading = false;
                    state.error = Some(e.to_string());
                });
                Err(e.into())
            }
        }
    }

    /// Submit the current draft title as a new todo.
    ///
    /// A no-op when the trimmed title is empty or another call is in
    /// flight. On success the server record is prepended and the draft is
    /// cleared.
    pub async fn create(&self) -> Result<(), TodoListError> {
        let mut title = None;
        self.state_tx.send_if_modified(|state| {
            let trimmed = state.input.trim();
            if trimmed.is_empty() || state.busy() {
                return false;
            }
            title = Some(trimmed.to_string());
            state.submitting = true;
            true
        });
        let Some(title) = title else {
            return Ok(());
        };

        let generation = self.generation.load(Ordering::SeqCst);
        let result = self.api.create_todo(&title).await;
        if self.is_stale(generation) {
            return Ok(());
        }

        match result {
            Ok(todo) => {
                self.state_tx.send_modify(|state| {
                    state.submitting = false;
                    state.todos.insert(0, todo);
                    state.input.clear();
                });
                Ok(())
            }
            Err(e) => {
                self.fail_mutation();
                Err(e.into())
            }
        }
    }

    /// Apply a partial update to the todo with `id`.
    ///
    /// A no-op when another call is in flight. On success the matching
    /// local record is replaced with the server's returned record in full.
    pub async fn update(&self, id: &str, patch: TodoPatch) -> Result<(), TodoListError> {
        if !self.try_begin_mutation() {
            return Ok(());
        }

        let generation = self.generation.load(Ordering::SeqCst);
        let result = self.api.update_todo(id, &patch).await;
        if self.is_stale(generation) {
            return Ok(());
        }

        match result {
            Ok(updated) => {
                self.state_tx.send_modify(|state| {
                    state.submitting = false;
                    if let Some(slot) = state.todos.iter_mut().find(|t| t.id == updated.id) {
                        *slot = updated;
                    }
                });
                Ok(())
            }
            Err(e) => {
                self.fail_mutation();
                Err(e.into())
            }
        }
    }

    /// Flip the completion flag of the todo with `id`.
    ///
    /// Convenience form of [`update`]; unknown ids are a no-op.
    ///
    /// [`update`]: TodoListController::update
    pub async fn toggle_completed(&self, id: &str) -> Result<(), TodoListError> {
        let completed = {
            let state = self.state_tx.borrow();
            state.todos.iter().find(|t| t.id == id).map(|t| t.completed)
        };
        let Some(completed) = completed else {
            return Ok(());
        };
        self.update(id, TodoPatch::completed(!completed)).await
    }

    /// Delete the todo with `id`, removing it locally once the server
    /// acknowledges.
    pub async fn delete(&self, id: &str) -> Result<(), TodoListError> {
        if !self.try_begin_mutation() {
            return Ok(());
        }

        let generation = self.generation.load(Ordering::SeqCst);
        let result = self.api.delete_todo(id).await;
        if self.is_stale(generation) {
            return Ok(());
        }

        match result {
            Ok(()) => {
                self.state_tx.send_modify(|state| {
                    state.submitting = false;
                    state.todos.retain(|t| t.id != id);
                });
                Ok(())
            }
            Err(e) => {
                self.fail_mutation();
                Err(e.into())
            }
        }
    }

    fn try_begin_mutation(&self) -> bool {
        self.state_tx.send_if_modified(|state| {
            if state.busy() {
                return false;
            }
            state.submitting = true;
            true
        })
    }

    fn fail_mutation(&self) {
        self.state_tx.send_modify(|state| state.submitting = false);
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != generation
    }
}
