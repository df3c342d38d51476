//! Flat-file persistence for todo snapshots, keyed by a generated password.
//!
//! One pretty-printed JSON file per password, named `<PASSWORD>.json`,
//! inside the data directory. Records are never expired or cleaned up.

use std::path::PathBuf;

use anyhow::anyhow;
use chrono::Utc;
use log::{error, info};
use tokio::fs;
use uuid::Uuid;

use crate::error::AppError;
use todo_core::models::{SaveRecord, TodoSnapshot};

/// How many colliding passwords are re-rolled before giving up.
const MAX_PASSWORD_ATTEMPTS: usize = 16;

pub struct SaveService {
    data_dir: PathBuf,
}

impl SaveService {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Create the data directory if it does not exist yet.
    pub async fn ensure_data_dir(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.data_dir).await?;
        Ok(())
    }

    fn record_path(&self, password: &str) -> PathBuf {
        self.data_dir.join(format!("{password}.json"))
    }

    /// 8-character uppercase token cut from a v4 UUID.
    fn generate_password() -> String {
        Uuid::new_v4().simple().to_string()[..8].to_uppercase()
    }

    /// Roll passwords until one does not address an existing record.
    async fn allocate_password(&self) -> Result<String, AppError> {
        for _ in 0..MAX_PASSWORD_ATTEMPTS {
            let password = Self::generate_password();
            if !fs::try_exists(self.record_path(&password)).await? {
                return Ok(password);
            }
        }
        Err(AppError::Internal(anyhow!(
            "no unused save password after {MAX_PASSWORD_ATTEMPTS} attempts"
        )))
    }

    /// Persist a snapshot and return the password that addresses it.
    ///
    /// The caller's live state is untouched whether this succeeds or fails.
    pub async fn save(&self, snapshot: TodoSnapshot) -> Result<String, AppError> {
        let password = self.allocate_password().await?;
        let record = SaveRecord {
            todos: snapshot.todos,
            background_color: snapshot.background_color,
            saved_at: Some(Utc::now()),
        };

        let json = serde_json::to_vec_pretty(&record)?;
        let path = self.record_path(&password);
        if let Err(err) = fs::write(&path, json).await {
            error!("Failed to write save record {}: {err}", path.display());
            return Err(AppError::Storage(err));
        }

        info!("Saved todo list under password {password}");
        Ok(password)
    }

    /// Look up a snapshot by password. Lookup is case-insensitive.
    pub async fn load(&self, password: &str) -> Result<TodoSnapshot, AppError> {
        let password = password.trim();
        if password.is_empty() {
            return Err(AppError::Validation("Password is required".to_string()));
        }

        let password = password.to_uppercase();
        let path = self.record_path(&password);

        let content = match fs::read(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::NotFound(
                    "Todo list not found with this password".to_string(),
                ));
            }
            Err(err) => {
                error!("Failed to read save record {}: {err}", path.display());
                return Err(AppError::Storage(err));
            }
        };

        let record: SaveRecord = serde_json::from_slice(&content).map_err(|err| {
            error!("Failed to parse save record {}: {err}", path.display());
            AppError::Serialization(err)
        })?;

        info!("Loaded todo list saved under password {password}");
        Ok(record.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use todo_core::models::{TodoItem, DEFAULT_BACKGROUND_COLOR};

    fn service(dir: &TempDir) -> SaveService {
        SaveService::new(dir.path().to_path_buf())
    }

    fn sample_snapshot() -> TodoSnapshot {
        let mut done = TodoItem::new("Buy milk");
        done.completed = true;
        TodoSnapshot {
            todos: vec![done, TodoItem::new("Water plants")],
            background_color: "#74b9ff".to_string(),
        }
    }

    #[test]
    fn test_generated_password_is_eight_uppercase_chars() {
        let password = SaveService::generate_password();

        assert_eq!(password.len(), 8);
        assert!(password
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn test_save_writes_record_addressed_by_password() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        let password = service.save(sample_snapshot()).await.unwrap();

        let path = dir.path().join(format!("{password}.json"));
        assert!(path.exists());
        let record: SaveRecord =
            serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        assert_eq!(record.todos.len(), 2);
        assert!(record.saved_at.is_some());
    }

    #[tokio::test]
    async fn test_load_round_trips_and_ignores_password_case() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);
        let snapshot = sample_snapshot();

        let password = service.save(snapshot.clone()).await.unwrap();
        let loaded = service.load(&password.to_lowercase()).await.unwrap();

        assert_eq!(loaded, snapshot);
    }

    #[tokio::test]
    async fn test_load_unknown_password_is_not_found() {
        let dir = TempDir::new().unwrap();

        let err = service(&dir).load("DEADBEEF").await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_load_empty_password_is_validation_error() {
        let dir = TempDir::new().unwrap();
        let service = service(&dir);

        assert!(matches!(
            service.load("").await.unwrap_err(),
            AppError::Validation(_)
        ));
        assert!(matches!(
            service.load("   ").await.unwrap_err(),
            AppError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn test_load_defaults_fields_missing_from_record() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("AAAA1111.json"), "{}").unwrap();

        let loaded = service(&dir).load("aaaa1111").await.unwrap();

        assert!(loaded.todos.is_empty());
        assert_eq!(loaded.background_color, DEFAULT_BACKGROUND_COLOR);
    }

    #[tokio::test]
    async fn test_load_rejects_corrupt_record() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("BBBB2222.json"), "not json").unwrap();

        let err = service(&dir).load("BBBB2222").await.unwrap_err();

        assert!(matches!(err, AppError::Serialization(_)));
    }
}
