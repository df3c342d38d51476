//! Request and response bodies for the HTTP surface
use serde::{Deserialize, Serialize};
use todo_core::models::TodoItem;

/// Request: Create a todo item
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Request: Update a todo item's completion flag
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub completed: bool,
}

/// Request: Change the background color preference
#[derive(Debug, Deserialize)]
pub struct UpdateColorRequest {
    #[serde(default)]
    pub color: Option<String>,
}

/// Response: Current background color
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundColorResponse {
    pub background_color: String,
}

/// Request: Save a todo list snapshot
///
/// Both fields are optional; a missing body means "save the live state".
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    #[serde(default)]
    pub todos: Option<Vec<TodoItem>>,
    #[serde(default)]
    pub background_color: Option<String>,
}

/// Request: Load a saved todo list by password
#[derive(Debug, Deserialize)]
pub struct LoadRequest {
    #[serde(default)]
    pub password: Option<String>,
}

/// Response: Password addressing the freshly written save record
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub password: String,
    pub message: String,
}

/// Response: Loaded todo list and color
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResponse {
    pub todos: Vec<TodoItem>,
    pub background_color: String,
    pub message: String,
}
