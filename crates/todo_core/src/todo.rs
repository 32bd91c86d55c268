//! Todo - domain types mirroring the server schema
//!
//! The server owns every field: ids and timestamps are opaque strings the
//! client stores and displays but never interprets.

use serde::{Deserialize, Serialize};

/// A single todo item as returned by the Todo Service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Todo {
    /// Server-assigned unique identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display title, non-empty by the time it reaches the server.
    pub title: String,

    /// Completion flag.
    pub completed: bool,

    /// Server-assigned creation timestamp, opaque to the client.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Server-assigned last-modified timestamp, opaque to the client.
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Partial update payload for an existing todo. Omitted fields remain
/// unchanged on the server.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Patch that renames a todo.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    /// Patch that sets the completion flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_deserializes_wire_format() {
        let todo: Todo = serde_json::from_str(
            r#"{"_id":"1","title":"Buy milk","completed":false,"createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-02T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(todo.id, "1");
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
        assert_eq!(todo.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(todo.updated_at.as_deref(), Some("2024-01-02T00:00:00Z"));
    }

    #[test]
    fn todo_deserializes_without_timestamps() {
        let todo: Todo =
            serde_json::from_str(r#"{"_id":"3","title":"Buy milk","completed":false}"#).unwrap();

        assert_eq!(todo.id, "3");
        assert!(todo.created_at.is_none());
        assert!(todo.updated_at.is_none());
    }

    #[test]
    fn patch_omits_unset_fields() {
        let body = serde_json::to_value(TodoPatch::completed(true)).unwrap();
        assert_eq!(body, serde_json::json!({ "completed": true }));

        let body = serde_json::to_value(TodoPatch::title("Updated")).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "Updated" }));
    }
}
