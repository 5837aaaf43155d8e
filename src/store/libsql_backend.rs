//! libSQL backend — async `SettingsStore` implementation.
//!
//! Supports local file and in-memory databases; the in-memory form is the
//! test backend.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use libsql::{Connection, params};
use tracing::info;

use crate::error::StorageError;

use super::traits::SettingsStore;

const SETTINGS_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS settings (
    user_id    TEXT NOT NULL,
    key        TEXT NOT NULL,
    value      TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    PRIMARY KEY (user_id, key)
)";

/// libSQL settings store.
///
/// Holds a single connection reused for all operations;
/// `libsql::Connection` is `Send + Sync` and safe for concurrent async use.
pub struct LibSqlStore {
    conn: Connection,
}

impl LibSqlStore {
    /// Open (or create) a local database file and run the schema migration.
    pub async fn new_local(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StorageError::Open(format!("Failed to create store directory: {e}")))?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| StorageError::Open(format!("Failed to open libSQL database: {e}")))?;
        let conn = db
            .connect()
            .map_err(|e| StorageError::Open(format!("Failed to create connection: {e}")))?;

        let store = Self { conn };
        store.init_schema().await?;
        info!(path = %path.display(), "Settings store opened");
        Ok(store)
    }

    /// Create an in-memory store (for tests).
    pub async fn new_memory() -> Result<Self, StorageError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| StorageError::Open(format!("Failed to create in-memory store: {e}")))?;
        let conn = db
            .connect()
            .map_err(|e| StorageError::Open(format!("Failed to create connection: {e}")))?;

        let store = Self { conn };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StorageError> {
        self.conn
            .execute(SETTINGS_SCHEMA, ())
            .await
            .map_err(|e| StorageError::Migration(format!("settings schema: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for LibSqlStore {
    async fn set_setting(
        &self,
        user_id: &str,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<(), StorageError> {
        let now = Utc::now().to_rfc3339();
        let value_str =
            serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;

        self.conn
            .execute(
                "INSERT INTO settings (user_id, key, value, updated_at) VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT (user_id, key) DO UPDATE SET value = ?3, updated_at = ?4",
                params![user_id, key, value_str, now],
            )
            .await
            .map_err(|e| StorageError::Query(format!("set_setting: {e}")))?;

        Ok(())
    }

    async fn get_setting(
        &self,
        user_id: &str,
        key: &str,
    ) -> Result<Option<serde_json::Value>, StorageError> {
        let mut rows = self
            .conn
            .query(
                "SELECT value FROM settings WHERE user_id = ?1 AND key = ?2",
                params![user_id, key],
            )
            .await
            .map_err(|e| StorageError::Query(format!("get_setting: {e}")))?;

        match rows.next().await {
            Ok(Some(row)) => {
                let value_str: String = row
                    .get(0)
                    .map_err(|e| StorageError::Query(format!("get_setting: {e}")))?;
                let value = serde_json::from_str(&value_str)
                    .map_err(|e| StorageError::Serialization(e.to_string()))?;
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(StorageError::Query(format!("get_setting: {e}"))),
        }
    }

    async fn delete_setting(&self, user_id: &str, key: &str) -> Result<(), StorageError> {
        self.conn
            .execute(
                "DELETE FROM settings WHERE user_id = ?1 AND key = ?2",
                params![user_id, key],
            )
            .await
            .map_err(|e| StorageError::Query(format!("delete_setting: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn roundtrip_in_memory() {
        let store = LibSqlStore::new_memory().await.unwrap();
        let value = serde_json::json!({"company_name": "Acme", "outreach_goal": "demos"});

        store.set_setting("default", "company_profile", &value).await.unwrap();
        let loaded = store.get_setting("default", "company_profile").await.unwrap();
        assert_eq!(loaded, Some(value));
    }

    #[tokio::test]
    async fn upsert_replaces_value() {
        let store = LibSqlStore::new_memory().await.unwrap();

        store
            .set_setting("default", "onboarding_complete", &serde_json::json!(false))
            .await
            .unwrap();
        store
            .set_setting("default", "onboarding_complete", &serde_json::json!(true))
            .await
            .unwrap();

        assert!(store.get_flag("default", "onboarding_complete").await.unwrap());
    }

    #[tokio::test]
    async fn delete_clears_flag() {
        let store = LibSqlStore::new_memory().await.unwrap();
        store.set_flag("default", "onboarding_complete", true).await.unwrap();
        store.delete_setting("default", "onboarding_complete").await.unwrap();
        assert!(!store.get_flag("default", "onboarding_complete").await.unwrap());
    }

    #[tokio::test]
    async fn local_file_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.db");

        {
            let store = LibSqlStore::new_local(&path).await.unwrap();
            store.set_flag("default", "onboarding_complete", true).await.unwrap();
        }

        let store = LibSqlStore::new_local(&path).await.unwrap();
        assert!(store.get_flag("default", "onboarding_complete").await.unwrap());
    }
}
