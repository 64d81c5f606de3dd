//! Workflow steps.
//!
//! Two structurally distinct categories: fatal steps implement [`Step`] and
//! abort the run on failure; advisory steps implement [`AdvisoryStep`] and
//! always report success to the orchestrator, surfacing problems only via
//! the log.

mod action;
mod login;
mod popup;

pub use action::ActionStep;
pub use login::LoginStep;
pub use popup::{PopupHandler, PopupPhase};

use async_trait::async_trait;
use cdp_session::Session;
use tracing::warn;

use crate::errors::WorkflowError;

/// A fatal workflow step: failure aborts the run with a classified error.
#[async_trait]
pub trait Step {
    /// Step name used in logs and state reporting.
    fn name(&self) -> &'static str;

    async fn run(&self, session: &Session) -> Result<(), WorkflowError>;
}

/// A best-effort step: the orchestrator only ever sees success.
#[async_trait]
pub trait AdvisoryStep {
    fn name(&self) -> &'static str;

    /// The fallible attempt; its error never leaves this module category.
    async fn try_run(&self, session: &Session) -> Result<(), WorkflowError>;

    /// Run and absorb: always succeeds from the caller's point of view.
    async fn run(&self, session: &Session) {
        absorb(self.name(), self.try_run(session).await);
    }
}

/// Drive an advisory outcome to an unconditional success.
fn absorb(step: &'static str, outcome: Result<(), WorkflowError>) {
    if let Err(err) = outcome {
        warn!(step, %err, "advisory step failed, continuing");
    }
}
