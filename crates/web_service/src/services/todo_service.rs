use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AppError;
use todo_core::models::{TodoItem, TodoSnapshot};
use todo_core::store::TodoStore;

/// Async wrapper around the in-memory [`TodoStore`].
///
/// One instance lives in the app state for the whole process. Requests
/// hold the lock only for their single operation; `restore` is the only
/// way the state is replaced wholesale.
pub struct TodoService {
    store: RwLock<TodoStore>,
}

impl TodoService {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(TodoStore::new()),
        }
    }

    /// Current list and color.
    pub async fn snapshot(&self) -> TodoSnapshot {
        self.store.read().await.snapshot()
    }

    pub async fn add(&self, text: &str) -> Result<TodoItem, AppError> {
        let mut guard = self.store.write().await;
        Ok(guard.add(text)?)
    }

    pub async fn set_completed(&self, id: Uuid, completed: bool) -> Result<TodoItem, AppError> {
        let mut guard = self.store.write().await;
        Ok(guard.set_completed(id, completed)?)
    }

    pub async fn remove(&self, id: Uuid) -> Result<TodoItem, AppError> {
        let mut guard = self.store.write().await;
        Ok(guard.remove(id)?)
    }

    pub async fn set_color(&self, color: &str) -> Result<String, AppError> {
        let mut guard = self.store.write().await;
        Ok(guard.set_color(color)?)
    }

    /// Replace the live state with a loaded snapshot and return the result.
    pub async fn restore(&self, snapshot: TodoSnapshot) -> TodoSnapshot {
        let mut guard = self.store.write().await;
        guard.restore(snapshot);
        guard.snapshot()
    }
}

impl Default for TodoService {
    fn default() -> Self {
        Self::new()
    }
}
