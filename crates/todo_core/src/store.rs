//! TodoStore - the live todo list and background color
//!
//! One store instance owns the working state for the running process.
//! Items keep insertion order; identifiers are assigned once and never
//! reused. The store knows nothing about HTTP or persistence.

use thiserror::Error;
use uuid::Uuid;

use crate::models::{TodoItem, TodoSnapshot, DEFAULT_BACKGROUND_COLOR};

/// Errors raised by store mutations
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    /// Add called with text that trims to nothing
    #[error("Todo text is required")]
    EmptyText,

    /// Color update with an empty value
    #[error("Color is required")]
    EmptyColor,

    /// No item carries the given identifier
    #[error("Todo item '{0}' not found")]
    NotFound(Uuid),
}

/// Holds the current todo list and background color.
#[derive(Debug, Clone)]
pub struct TodoStore {
    items: Vec<TodoItem>,
    background_color: String,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

impl TodoStore {
    /// Create an empty store with the default background color.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current list and color, items in insertion order.
    pub fn snapshot(&self) -> TodoSnapshot {
        TodoSnapshot {
            todos: self.items.clone(),
            background_color: self.background_color.clone(),
        }
    }

    /// Append a new item. The text is trimmed before storing.
    pub fn add(&mut self, text: &str) -> Result<TodoItem, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }

        let item = TodoItem::new(text);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Set the completed flag of the item with the given id.
    pub fn set_completed(&mut self, id: Uuid, completed: bool) -> Result<TodoItem, StoreError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(StoreError::NotFound(id))?;
        item.completed = completed;
        Ok(item.clone())
    }

    /// Remove the item with the given id and return it.
    pub fn remove(&mut self, id: Uuid) -> Result<TodoItem, StoreError> {
        let pos = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or(StoreError::NotFound(id))?;
        Ok(self.items.remove(pos))
    }

    /// Replace the background color.
    pub fn set_color(&mut self, color: &str) -> Result<String, StoreError> {
        let color = color.trim();
        if color.is_empty() {
            return Err(StoreError::EmptyColor);
        }

        self.background_color = color.to_string();
        Ok(self.background_color.clone())
    }

    /// Replace the whole state with a loaded snapshot.
    pub fn restore(&mut self, snapshot: TodoSnapshot) {
        self.items = snapshot.todos;
        self.background_color = snapshot.background_color;
    }
}
