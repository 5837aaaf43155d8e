//! `SettingsStore` trait — the single async persistence seam.
//!
//! The service persists only small per-user settings (the company profile
//! and the onboarding-complete flag), so the whole store is a keyed JSON
//! blob interface with boolean helpers layered on top.

use async_trait::async_trait;

use crate::error::StorageError;

/// Backend-agnostic per-user settings store.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Store a JSON value under `(user_id, key)`, replacing any prior value.
    async fn set_setting(
        &self,
        user_id: &str,
        key: &str,
        value: &serde_json::Value,
    ) -> Result<(), StorageError>;

    /// Fetch the value under `(user_id, key)`, if any.
    async fn get_setting(
        &self,
        user_id: &str,
        key: &str,
    ) -> Result<Option<serde_json::Value>, StorageError>;

    /// Remove the value under `(user_id, key)`. Removing a missing key is not
    /// an error.
    async fn delete_setting(&self, user_id: &str, key: &str) -> Result<(), StorageError>;

    /// Store a boolean flag.
    async fn set_flag(&self, user_id: &str, key: &str, value: bool) -> Result<(), StorageError> {
        self.set_setting(user_id, key, &serde_json::Value::Bool(value))
            .await
    }

    /// Read a boolean flag. A missing or non-boolean value reads as `false`.
    async fn get_flag(&self, user_id: &str, key: &str) -> Result<bool, StorageError> {
        Ok(self
            .get_setting(user_id, key)
            .await?
            .and_then(|v| v.as_bool())
            .unwrap_or(false))
    }
}
