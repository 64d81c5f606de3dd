//! The target action: resolve the configured control and click it.

use std::time::Duration;

use async_trait::async_trait;
use cdp_session::Session;
use element_locator::{resolver, LocatorError, Selector};
use tokio::time::sleep;
use tracing::{debug, info};

use crate::errors::WorkflowError;
use crate::steps::Step;

pub struct ActionStep {
    selector: Selector,
    wait_timeout: Duration,
    settle: Duration,
}

impl ActionStep {
    pub fn new(selector: Selector, wait_timeout: Duration, settle: Duration) -> Self {
        Self {
            selector,
            wait_timeout,
            settle,
        }
    }

    fn failure(&self, source: LocatorError) -> WorkflowError {
        WorkflowError::ActionNotFound {
            selector: self.selector.clone(),
            source,
        }
    }
}

#[async_trait]
impl Step for ActionStep {
    fn name(&self) -> &'static str {
        "claim-action"
    }

    async fn run(&self, session: &Session) -> Result<(), WorkflowError> {
        // The free-items region is not guaranteed to be in the initial
        // viewport; scrolling also triggers its lazy load.
        debug!("scrolling to load the target region");
        session
            .evaluate("window.scrollTo(0, document.body.scrollHeight / 2);")
            .await?;
        sleep(self.settle).await;

        let element = resolver::resolve(session.page(), &self.selector, self.wait_timeout)
            .await
            .map_err(|source| self.failure(source))?;

        element
            .click()
            .await
            .map_err(|err| self.failure(LocatorError::Cdp(err.to_string())))?;
        info!(selector = %self.selector, "target control clicked");

        sleep(self.settle).await;
        Ok(())
    }
}
