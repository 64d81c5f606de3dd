//! Run configuration: file, defaults, environment overrides, validation.

use std::path::Path;
use std::time::Duration;

use element_locator::Selector;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::WorkflowError;

/// Placeholder the shipped config carries before the operator fills in a
/// real identifier.
pub const USER_ID_PLACEHOLDER: &str = "YOUR_USER_ID_HERE";

/// Environment variable that supplies or overrides the stored identifier.
pub const USER_ID_ENV: &str = "USER_ID";

/// Immutable configuration for one run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BotConfig {
    /// Storefront entry URL.
    pub website_url: String,

    /// The one control the run exists to click.
    pub button_selector: Selector,

    /// Bounded-wait budget for element lookups, in seconds.
    #[serde(default = "default_wait_time")]
    pub wait_time: u64,

    /// Run the browser without a visible window.
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Quick-login identifier. Must be supplied by the file or the
    /// `USER_ID` environment variable.
    #[serde(default)]
    pub user_id: String,
}

fn default_wait_time() -> u64 {
    15
}

fn default_headless() -> bool {
    true
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            website_url: "https://store.wizardry.info/".to_string(),
            button_selector: Selector::new("attribute", "free-button"),
            wait_time: default_wait_time(),
            headless: default_headless(),
            user_id: String::new(),
        }
    }
}

impl BotConfig {
    /// Load from `path` when present, fall back to defaults otherwise, then
    /// apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, WorkflowError> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|err| {
                WorkflowError::ConfigValidation(format!(
                    "failed to read {}: {err}",
                    path.display()
                ))
            })?;
            let config: Self = serde_json::from_str(&content).map_err(|err| {
                WorkflowError::ConfigValidation(format!(
                    "failed to parse {}: {err}",
                    path.display()
                ))
            })?;
            info!("loaded configuration from {}", path.display());
            config
        } else {
            warn!(
                "config file not found, using defaults: {}",
                path.display()
            );
            Self::default()
        };

        if let Ok(user_id) = std::env::var(USER_ID_ENV) {
            if !user_id.is_empty() {
                info!("using {USER_ID_ENV} from environment");
                config.user_id = user_id;
            }
        }

        Ok(config)
    }

    /// Reject configurations that would waste a browser launch. Runs before
    /// any session is created.
    pub fn validate(&self) -> Result<(), WorkflowError> {
        if self.website_url.trim().is_empty() {
            return Err(WorkflowError::ConfigValidation(
                "website_url must not be empty".to_string(),
            ));
        }
        if self.wait_time == 0 {
            return Err(WorkflowError::ConfigValidation(
                "wait_time must be a positive number of seconds".to_string(),
            ));
        }
        if self.user_id.is_empty() || self.user_id == USER_ID_PLACEHOLDER {
            return Err(WorkflowError::ConfigValidation(format!(
                "user_id must be set in config.json or the {USER_ID_ENV} environment variable"
            )));
        }
        Ok(())
    }

    /// The bounded-wait budget as a duration.
    pub fn wait_timeout(&self) -> Duration {
        Duration::from_secs(self.wait_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn valid_config() -> BotConfig {
        BotConfig {
            user_id: "operator-123".to_string(),
            ..BotConfig::default()
        }
    }

    #[test]
    #[serial]
    fn absent_file_falls_back_to_defaults() {
        std::env::remove_var(USER_ID_ENV);
        let dir = tempfile::tempdir().unwrap();
        let config = BotConfig::load(&dir.path().join("missing.json")).unwrap();

        assert_eq!(config.website_url, "https://store.wizardry.info/");
        assert_eq!(
            config.button_selector,
            Selector::new("attribute", "free-button")
        );
        assert_eq!(config.wait_time, 15);
        assert!(config.headless);
        assert!(config.user_id.is_empty());
    }

    #[test]
    #[serial]
    fn file_values_win_over_defaults() {
        std::env::remove_var(USER_ID_ENV);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "website_url": "https://store.example/",
                "button_selector": {{"type": "text", "value": "Claim"}},
                "wait_time": 5,
                "headless": false,
                "user_id": "operator-123"
            }}"#
        )
        .unwrap();

        let config = BotConfig::load(&path).unwrap();
        assert_eq!(config.website_url, "https://store.example/");
        assert_eq!(config.button_selector, Selector::new("text", "Claim"));
        assert_eq!(config.wait_time, 5);
        assert!(!config.headless);
        assert_eq!(config.user_id, "operator-123");
    }

    #[test]
    #[serial]
    fn environment_overrides_the_identifier() {
        std::env::set_var(USER_ID_ENV, "from-env");
        let dir = tempfile::tempdir().unwrap();
        let config = BotConfig::load(&dir.path().join("missing.json")).unwrap();
        std::env::remove_var(USER_ID_ENV);

        assert_eq!(config.user_id, "from-env");
    }

    #[test]
    fn placeholder_identifier_is_rejected() {
        let config = BotConfig {
            user_id: USER_ID_PLACEHOLDER.to_string(),
            ..BotConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, WorkflowError::ConfigValidation(_)));
    }

    #[test]
    fn empty_identifier_is_rejected() {
        let err = BotConfig::default().validate().unwrap_err();
        assert!(matches!(err, WorkflowError::ConfigValidation(_)));
    }

    #[test]
    fn empty_url_and_zero_wait_are_rejected() {
        let mut config = valid_config();
        config.website_url = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.wait_time = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn valid_config_passes_validation() {
        valid_config().validate().unwrap();
        assert_eq!(valid_config().wait_timeout(), Duration::from_secs(15));
    }
}
