//! OnboardingManager — coordinates the wizard, the terminal submit, and the
//! persisted completion flag.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::{OnboardingError, StorageError};
use crate::store::SettingsStore;

use super::model::{WizardStep, settings_keys};
use super::wizard::{NextOutcome, WizardState};

/// Route target the caller should navigate to after a successful submit.
pub const AFTER_SUBMIT_ROUTE: &str = "/dashboard";

/// What a `next()` call did, in caller-facing terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NextAction {
    /// Invalid step or in-flight submission; nothing changed.
    Blocked { step: u32 },
    /// Moved to the given step.
    Advanced { step: u32 },
    /// Terminal submit succeeded; the caller should navigate.
    Completed { navigate_to: String },
}

/// Onboarding status for the REST surface.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingStatus {
    pub onboarding_completed: bool,
    pub current_step: u32,
    pub step_count: u32,
    pub submitting: bool,
}

/// Owns the wizard behind a lock and runs the terminal action against the
/// settings store.
pub struct OnboardingManager {
    store: Arc<dyn SettingsStore>,
    wizard: RwLock<WizardState>,
}

impl OnboardingManager {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self {
            store,
            wizard: RwLock::new(WizardState::new()),
        }
    }

    /// The step definitions, for rendering the form.
    pub async fn steps(&self) -> Vec<WizardStep> {
        self.wizard.read().await.steps().to_vec()
    }

    /// Store an answer for a field of the step currently shown.
    pub async fn set_field(&self, name: &str, value: &str) -> Result<(), OnboardingError> {
        self.wizard.write().await.set_field(name, value)
    }

    /// Backward navigation. Returns the step shown afterwards.
    pub async fn back(&self) -> u32 {
        let mut wizard = self.wizard.write().await;
        wizard.back();
        wizard.current_step_id()
    }

    /// Forward navigation, or the terminal submit on the last step.
    ///
    /// While the submit's async persistence is outstanding the wizard's
    /// guard stays raised, so concurrent `next()`/`back()` calls are no-ops.
    /// A failed submit leaves the step unchanged, clears the guard, and
    /// surfaces the error; there is no automatic retry.
    pub async fn next(&self) -> Result<NextAction, OnboardingError> {
        let profile = {
            let mut wizard = self.wizard.write().await;
            match wizard.next() {
                NextOutcome::Blocked => {
                    return Ok(NextAction::Blocked {
                        step: wizard.current_step_id(),
                    });
                }
                NextOutcome::Advanced(step) => return Ok(NextAction::Advanced { step }),
                NextOutcome::SubmitRequested => {
                    wizard.begin_submit()?;
                    wizard.profile()
                }
            }
        };

        let result = self.persist_completion(profile).await;
        self.wizard.write().await.end_submit();

        match result {
            Ok(()) => {
                info!("onboarding complete");
                Ok(NextAction::Completed {
                    navigate_to: AFTER_SUBMIT_ROUTE.to_string(),
                })
            }
            Err(e) => {
                warn!(error = %e, "onboarding submission failed");
                Err(OnboardingError::SubmissionFailed(e))
            }
        }
    }

    /// Persist the collected profile and raise the completion flag.
    async fn persist_completion(
        &self,
        mut profile: super::model::CompanyProfile,
    ) -> Result<(), StorageError> {
        profile.completed_at = Some(Utc::now());
        let value = serde_json::to_value(&profile)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        self.store
            .set_setting(
                settings_keys::DEFAULT_USER,
                settings_keys::COMPANY_PROFILE,
                &value,
            )
            .await?;
        self.store
            .set_flag(
                settings_keys::DEFAULT_USER,
                settings_keys::ONBOARDING_COMPLETE,
                true,
            )
            .await?;
        Ok(())
    }

    /// Whether the persisted completion flag is set.
    pub async fn is_complete(&self) -> Result<bool, StorageError> {
        self.store
            .get_flag(
                settings_keys::DEFAULT_USER,
                settings_keys::ONBOARDING_COMPLETE,
            )
            .await
    }

    /// Delete the completion flag (logout lifecycle).
    pub async fn reset_on_logout(&self) -> Result<(), StorageError> {
        self.store
            .delete_setting(
                settings_keys::DEFAULT_USER,
                settings_keys::ONBOARDING_COMPLETE,
            )
            .await
    }

    /// Current onboarding status (for the REST endpoint).
    pub async fn status(&self) -> OnboardingStatus {
        let completed = self.is_complete().await.unwrap_or(false);
        let wizard = self.wizard.read().await;
        OnboardingStatus {
            onboarding_completed: completed,
            current_step: wizard.current_step_id(),
            step_count: wizard.step_count(),
            submitting: wizard.is_submitting(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::*;
    use crate::store::MemoryStore;

    async fn fill_current_step(manager: &OnboardingManager) {
        let step = {
            let steps = manager.steps().await;
            let status = manager.status().await;
            steps[(status.current_step - 1) as usize].clone()
        };
        for field in &step.fields {
            manager.set_field(&field.name, "filled").await.unwrap();
        }
    }

    async fn walk_to_last_step(manager: &OnboardingManager) {
        for _ in 0..3 {
            fill_current_step(manager).await;
            let action = manager.next().await.unwrap();
            assert!(matches!(action, NextAction::Advanced { .. }));
        }
        fill_current_step(manager).await;
    }

    #[tokio::test]
    async fn full_walk_sets_flag_and_signals_dashboard() {
        let store = Arc::new(MemoryStore::new());
        let manager = OnboardingManager::new(Arc::clone(&store) as Arc<dyn SettingsStore>);

        walk_to_last_step(&manager).await;
        let action = manager.next().await.unwrap();
        assert_eq!(
            action,
            NextAction::Completed {
                navigate_to: "/dashboard".to_string()
            }
        );

        assert!(manager.is_complete().await.unwrap());
        let profile = store
            .get_setting("default", "company_profile")
            .await
            .unwrap()
            .expect("profile persisted");
        assert_eq!(profile["company_name"], "filled");
        assert!(profile["completed_at"].is_string());
    }

    #[tokio::test]
    async fn next_without_answers_is_blocked() {
        let manager = OnboardingManager::new(Arc::new(MemoryStore::new()));
        let action = manager.next().await.unwrap();
        assert_eq!(action, NextAction::Blocked { step: 1 });
    }

    #[tokio::test]
    async fn logout_deletes_flag() {
        let manager = OnboardingManager::new(Arc::new(MemoryStore::new()));
        walk_to_last_step(&manager).await;
        manager.next().await.unwrap();
        assert!(manager.is_complete().await.unwrap());

        manager.reset_on_logout().await.unwrap();
        assert!(!manager.is_complete().await.unwrap());
    }

    /// Store that stalls every write, to widen the in-flight window.
    struct SlowStore {
        inner: MemoryStore,
        delay: Duration,
    }

    #[async_trait]
    impl SettingsStore for SlowStore {
        async fn set_setting(
            &self,
            user_id: &str,
            key: &str,
            value: &serde_json::Value,
        ) -> Result<(), StorageError> {
            tokio::time::sleep(self.delay).await;
            self.inner.set_setting(user_id, key, value).await
        }

        async fn get_setting(
            &self,
            user_id: &str,
            key: &str,
        ) -> Result<Option<serde_json::Value>, StorageError> {
            self.inner.get_setting(user_id, key).await
        }

        async fn delete_setting(&self, user_id: &str, key: &str) -> Result<(), StorageError> {
            self.inner.delete_setting(user_id, key).await
        }
    }

    #[tokio::test]
    async fn second_next_during_submission_is_noop() {
        let store = Arc::new(SlowStore {
            inner: MemoryStore::new(),
            delay: Duration::from_millis(100),
        });
        let manager = Arc::new(OnboardingManager::new(store as Arc<dyn SettingsStore>));
        walk_to_last_step(&manager).await;

        let submit = {
            let manager = Arc::clone(&manager);
            tokio::spawn(async move { manager.next().await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        // In-flight guard: both navigation directions are no-ops.
        let action = manager.next().await.unwrap();
        assert_eq!(action, NextAction::Blocked { step: 4 });
        assert_eq!(manager.back().await, 4);

        let action = submit.await.unwrap().unwrap();
        assert!(matches!(action, NextAction::Completed { .. }));
        assert!(manager.is_complete().await.unwrap());
    }

    /// Store whose writes always fail.
    struct FailingStore;

    #[async_trait]
    impl SettingsStore for FailingStore {
        async fn set_setting(
            &self,
            _user_id: &str,
            _key: &str,
            _value: &serde_json::Value,
        ) -> Result<(), StorageError> {
            Err(StorageError::Query("disk full".to_string()))
        }

        async fn get_setting(
            &self,
            _user_id: &str,
            _key: &str,
        ) -> Result<Option<serde_json::Value>, StorageError> {
            Ok(None)
        }

        async fn delete_setting(&self, _user_id: &str, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn failed_submit_clears_guard_and_keeps_step() {
        let manager = OnboardingManager::new(Arc::new(FailingStore));
        walk_to_last_step(&manager).await;

        let err = manager.next().await.unwrap_err();
        assert!(matches!(err, OnboardingError::SubmissionFailed(_)));

        let status = manager.status().await;
        assert_eq!(status.current_step, 4);
        assert!(!status.submitting);
        assert!(!status.onboarding_completed);

        // User-retriable: a second attempt reaches the store again.
        let err = manager.next().await.unwrap_err();
        assert!(matches!(err, OnboardingError::SubmissionFailed(_)));
    }
}
