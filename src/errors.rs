//! Classified failure taxonomy for one workflow run.

use cdp_session::SessionError;
use element_locator::{LocatorError, Selector};
use thiserror::Error;

/// Terminal classification of a failed run.
///
/// Every fatal step either completes or surfaces one of these; nothing
/// crosses the orchestrator boundary unclassified. Popup handling is the
/// single advisory category and never produces a value of this type.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The configuration is unusable. Raised before any browser cost.
    #[error("configuration invalid: {0}")]
    ConfigValidation(String),

    /// The browser session could not be started.
    #[error("browser session could not be started: {0}")]
    SessionSetup(#[source] SessionError),

    /// Session-level I/O failed mid-run (navigation, script evaluation).
    #[error("browser session failed: {0}")]
    Session(#[from] SessionError),

    /// The quick-login widget could not be driven to a submitted state.
    #[error("quick login failed: {reason}")]
    Login { reason: String },

    /// The configured target control could not be resolved or clicked. The
    /// primary deliverable of the run, so always fatal and always surfaced.
    #[error("target action '{selector}' failed: {source}")]
    ActionNotFound {
        selector: Selector,
        #[source]
        source: LocatorError,
    },
}

impl WorkflowError {
    /// Step-agnostic login failure from any underlying cause.
    pub(crate) fn login(reason: impl ToString) -> Self {
        WorkflowError::Login {
            reason: reason.to_string(),
        }
    }
}
