//! todo_core - Core types and the in-memory store for the todo service
//!
//! This crate provides the foundational types used by the HTTP surface:
//! - `models` - TodoItem, TodoSnapshot, SaveRecord
//! - `store` - TodoStore holding the live list and background color

pub mod models;
pub mod store;

// Re-export commonly used types
pub use models::{SaveRecord, TodoItem, TodoSnapshot, DEFAULT_BACKGROUND_COLOR};
pub use store::{StoreError, TodoStore};
