//! Quick-login submission.

use std::time::Duration;

use async_trait::async_trait;
use cdp_session::Session;
use element_locator::{resolver, Selector};
use tokio::time::sleep;
use tracing::{debug, info};

use crate::errors::WorkflowError;
use crate::steps::Step;
use crate::tempo::WorkflowTempo;

/// Input field candidates inside the quick-login container.
const INPUT_CANDIDATES: &[&str] = &["input#user-id-input", ".fast-login__input-container input"];

/// Submit control candidates inside the container; the global fallback below
/// covers markup revisions that move the button out.
const SUBMIT_CANDIDATES: &[&str] = &[
    ".fast-login__input-container-button",
    "[data-testid='fast-login-button-authorization-user-id']",
];

fn container_candidates() -> [Selector; 2] {
    [
        Selector::new("class", "fast-login"),
        Selector::new("class", "block--index-8"),
    ]
}

fn submit_fallback() -> Selector {
    Selector::new("attribute", "fast-login-button-authorization-user-id")
}

pub struct LoginStep {
    user_id: String,
    wait_timeout: Duration,
    tempo: WorkflowTempo,
}

impl LoginStep {
    pub fn new(user_id: String, wait_timeout: Duration, tempo: WorkflowTempo) -> Self {
        Self {
            user_id,
            wait_timeout,
            tempo,
        }
    }
}

#[async_trait]
impl Step for LoginStep {
    fn name(&self) -> &'static str {
        "quick-login"
    }

    async fn run(&self, session: &Session) -> Result<(), WorkflowError> {
        let page = session.page();

        debug!("waiting for the page to settle before login");
        sleep(self.tempo.login_settle).await;

        // The quick-login block sits below the fold.
        session.evaluate("window.scrollTo(0, 500);").await?;
        sleep(self.tempo.focus_settle).await;

        let container = resolver::resolve_first(page, &container_candidates(), self.wait_timeout)
            .await
            .map_err(WorkflowError::login)?;
        container
            .scroll_into_view()
            .await
            .map_err(WorkflowError::login)?;
        sleep(self.tempo.focus_settle).await;

        let input = resolver::find_scoped(&container, INPUT_CANDIDATES)
            .await
            .map_err(WorkflowError::login)?;
        input.click().await.map_err(WorkflowError::login)?;
        input
            .type_str(&self.user_id)
            .await
            .map_err(WorkflowError::login)?;
        info!("identifier entered");
        sleep(self.tempo.focus_settle).await;

        let submit = match resolver::find_scoped(&container, SUBMIT_CANDIDATES).await {
            Ok(button) => button,
            Err(err) => {
                debug!(%err, "scoped submit lookup missed, trying the page-wide selector");
                resolver::resolve(page, &submit_fallback(), self.wait_timeout)
                    .await
                    .map_err(WorkflowError::login)?
            }
        };
        submit.click().await.map_err(WorkflowError::login)?;
        info!("quick login submitted");

        // Authentication round trip.
        sleep(self.tempo.auth_settle).await;
        Ok(())
    }
}
