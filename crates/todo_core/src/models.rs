//! Shared data types for the todo service.
//!
//! All types serialize with camelCase field names, matching the JSON the
//! HTTP surface exchanges with clients and the on-disk save records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Background color used when none has been chosen or saved.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffeaa7";

/// A single user-entered task with completion status.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique identifier, assigned at creation and never changed
    pub id: Uuid,

    /// Task text, stored trimmed
    pub text: String,

    /// Completion flag
    pub completed: bool,

    /// When this item was created
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Create a new pending item with a fresh identifier.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// The live list + color pair currently being edited.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TodoSnapshot {
    /// Items in insertion order
    pub todos: Vec<TodoItem>,

    /// Background color preference
    pub background_color: String,
}

/// A persisted snapshot, one JSON file per password.
///
/// Reads are forward-compatible: records missing `todos` or
/// `backgroundColor` fall back to an empty list and the default color.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecord {
    #[serde(default)]
    pub todos: Vec<TodoItem>,

    #[serde(default = "default_background_color")]
    pub background_color: String,

    /// When this record was written
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

fn default_background_color() -> String {
    DEFAULT_BACKGROUND_COLOR.to_string()
}

impl From<SaveRecord> for TodoSnapshot {
    fn from(record: SaveRecord) -> Self {
        Self {
            todos: record.todos,
            background_color: record.background_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_item_serializes_with_camel_case_fields() {
        let item = TodoItem::new("Buy milk");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["text"], "Buy milk");
        assert_eq!(json["completed"], false);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_save_record_defaults_missing_fields() {
        let record: SaveRecord = serde_json::from_str("{}").unwrap();

        assert!(record.todos.is_empty());
        assert_eq!(record.background_color, DEFAULT_BACKGROUND_COLOR);
        assert!(record.saved_at.is_none());
    }

    #[test]
    fn test_save_record_round_trips_through_snapshot() {
        let record = SaveRecord {
            todos: vec![TodoItem::new("Water plants")],
            background_color: "#74b9ff".to_string(),
            saved_at: Some(Utc::now()),
        };

        let snapshot = TodoSnapshot::from(record.clone());
        assert_eq!(snapshot.todos, record.todos);
        assert_eq!(snapshot.background_color, "#74b9ff");
    }
}
