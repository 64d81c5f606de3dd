//! Session bootstrap configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the Chromium executable path.
pub const CHROME_PATH_ENV: &str = "CLAIMBOT_CHROME";

/// Chromium launch settings for one workflow run.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Run without a visible window.
    pub headless: bool,

    /// Explicit browser binary; `None` lets the CDP client discover one.
    pub executable: Option<PathBuf>,

    /// Per-command CDP deadline.
    pub request_timeout: Duration,

    /// How long the browser process is allowed to take to come up.
    pub launch_timeout: Duration,

    /// Window size; the storefront lays out its login widget for a desktop
    /// viewport.
    pub window_size: (u32, u32),
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            headless: true,
            executable: None,
            request_timeout: Duration::from_secs(30),
            launch_timeout: Duration::from_secs(20),
            window_size: (1920, 1080),
        }
    }
}

impl SessionConfig {
    /// Config for one run, honoring the `CLAIMBOT_CHROME` override.
    pub fn for_run(headless: bool) -> Self {
        Self {
            headless,
            executable: std::env::var_os(CHROME_PATH_ENV).map(PathBuf::from),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_headless_with_desktop_viewport() {
        let config = SessionConfig::default();
        assert!(config.headless);
        assert_eq!(config.window_size, (1920, 1080));
        assert!(config.launch_timeout > Duration::ZERO);
    }
}
