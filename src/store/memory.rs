//! In-memory settings store for development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::StorageError;

use super::traits::SettingsStore;

/// HashMap-backed store; contents vanish on restart.
#[derive(Default)]
pub struct MemoryStore {
    settings: RwLock<HashMap<(String, String), serde_json::Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn set_setting(
        &self,
        user_id: &str,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<(), StorageError> {
        self.settings
            .write()
            .await
            .insert((user_id.to_string(), key.to_string()), value.clone());
        Ok(())
    }

    async fn get_setting(
        &self,
        user_id: &str,
        key: &str,
    ) -> Result<Option<serde_json::Value>, StorageError> {
        Ok(self
            .settings
            .read()
            .await
            .get(&(user_id.to_string(), key.to_string()))
            .cloned())
    }

    async fn delete_setting(&self, user_id: &str, key: &str) -> Result<(), StorageError> {
        self.settings
            .write()
            .await
            .remove(&(user_id.to_string(), key.to_string()));
        Ok(())
    }
}
