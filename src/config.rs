//! Configuration types.

use std::time::Duration;

/// Timing constants for the live-demo typing sequencer.
///
/// These stay configuration, never literals at call sites: the reveal pacing
/// is a product decision, not an implementation detail.
#[derive(Debug, Clone, Copy)]
pub struct TypingConfig {
    /// Delay between revealed subject characters.
    pub char_interval: Duration,
    /// Delay between revealed body words.
    pub word_interval: Duration,
    /// Pause between the end of the subject reveal and the start of the body.
    pub section_pause: Duration,
    /// How long the transient "copied" acknowledgement stays visible.
    pub copied_display: Duration,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            char_interval: Duration::from_millis(30),
            word_interval: Duration::from_millis(40),
            section_pause: Duration::from_millis(200),
            copied_display: Duration::from_secs(2),
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Service name for identification.
    pub name: String,
    /// Port for the REST/WebSocket server.
    pub port: u16,
    /// Path to the local settings database.
    pub db_path: String,
    /// Base URL of the external authentication service, if configured.
    pub auth_base_url: Option<String>,
    /// Typing sequencer pacing.
    pub typing: TypingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "pitchai".to_string(),
            port: 8080,
            db_path: "./data/pitchai.db".to_string(),
            auth_base_url: None,
            typing: TypingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port: u16 = std::env::var("PITCHAI_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let db_path =
            std::env::var("PITCHAI_DB_PATH").unwrap_or_else(|_| defaults.db_path.clone());

        let auth_base_url = std::env::var("PITCHAI_AUTH_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let typing = TypingConfig {
            char_interval: env_millis("PITCHAI_CHAR_INTERVAL_MS", defaults.typing.char_interval),
            word_interval: env_millis("PITCHAI_WORD_INTERVAL_MS", defaults.typing.word_interval),
            section_pause: env_millis("PITCHAI_SECTION_PAUSE_MS", defaults.typing.section_pause),
            copied_display: env_millis(
                "PITCHAI_COPIED_DISPLAY_MS",
                defaults.typing.copied_display,
            ),
        };

        Self {
            name: defaults.name,
            port,
            db_path,
            auth_base_url,
            typing,
        }
    }
}

fn env_millis(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.name, "pitchai");
        assert_eq!(config.port, 8080);
        assert!(config.auth_base_url.is_none());
    }

    #[test]
    fn default_typing_intervals() {
        let typing = TypingConfig::default();
        assert_eq!(typing.char_interval, Duration::from_millis(30));
        assert_eq!(typing.word_interval, Duration::from_millis(40));
        assert_eq!(typing.section_pause, Duration::from_millis(200));
        assert_eq!(typing.copied_display, Duration::from_secs(2));
    }
}
