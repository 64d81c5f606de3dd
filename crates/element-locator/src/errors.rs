//! Error types for element resolution.

use std::time::Duration;

use thiserror::Error;

/// Locator error enumeration
#[derive(Debug, Error, Clone)]
pub enum LocatorError {
    /// Selector kind outside the supported set; a configuration bug, reported
    /// before any wait is attempted.
    #[error("unsupported selector kind '{kind}'")]
    UnsupportedSelector { kind: String },

    /// Bounded wait elapsed without a present-and-clickable match.
    #[error("element not found for {selector} within {timeout:?}")]
    ElementNotFound { selector: String, timeout: Duration },

    /// CDP communication error while interacting with a resolved element.
    #[error("cdp error: {0}")]
    Cdp(String),
}

impl LocatorError {
    /// True when the failure means the element simply never showed up, as
    /// opposed to a configuration or transport problem.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LocatorError::ElementNotFound { .. })
    }
}
