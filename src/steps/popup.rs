//! Best-effort dismissal of transient overlays.
//!
//! Overlay presence is non-deterministic, so both passes are advisory: they
//! settle, search a small set of best-known dismiss patterns, click the first
//! hit if any, and treat every internal failure as a logged continuation.

use std::time::Duration;

use async_trait::async_trait;
use cdp_session::{Session, SessionError};
use tokio::time::sleep;
use tracing::{debug, info};

use crate::errors::WorkflowError;
use crate::steps::AdvisoryStep;

/// Dismiss controls of cookie/privacy consent banners.
const CONSENT_PATTERNS: &str =
    ".gdpr-buttons button, [class*='gdpr'] button, [class*='cookie'] button";

/// Close controls of modals left behind by the login round trip.
const CLOSE_PATTERNS: &str =
    "//button[contains(@class, 'close') or contains(@aria-label, 'close')]";

/// Which overlay family a pass is hunting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupPhase {
    /// Consent banner shown on first page load.
    Consent,
    /// Any leftover modal (or spawned window) after login.
    PostLogin,
}

pub struct PopupHandler {
    phase: PopupPhase,
    settle: Duration,
}

impl PopupHandler {
    pub fn new(phase: PopupPhase, settle: Duration) -> Self {
        Self { phase, settle }
    }

    async fn dismiss_consent(&self, session: &Session) -> Result<(), WorkflowError> {
        let buttons = session
            .page()
            .find_elements(CONSENT_PATTERNS)
            .await
            .map_err(SessionError::from)?;

        match buttons.first() {
            Some(button) => {
                info!(count = buttons.len(), "consent banner detected, dismissing");
                button.click().await.map_err(SessionError::from)?;
                sleep(self.settle).await;
            }
            None => debug!("no consent banner present"),
        }
        Ok(())
    }

    async fn clear_leftovers(&self, session: &Session) -> Result<(), WorkflowError> {
        if session.page_count().await? > 1 {
            info!("popup window detected, refocusing the original window");
            session.focus_original().await?;
        }

        let close_buttons = session
            .page()
            .find_xpaths(CLOSE_PATTERNS)
            .await
            .map_err(SessionError::from)?;

        match close_buttons.first() {
            // Only a visible close control is worth clicking; hidden ones
            // belong to already-dismissed dialogs.
            Some(button) => {
                if button.clickable_point().await.is_ok() {
                    info!("visible close control found, dismissing");
                    button.click().await.map_err(SessionError::from)?;
                    sleep(self.settle).await;
                } else {
                    debug!("close control present but not visible, leaving it");
                }
            }
            None => debug!("no leftover modal present"),
        }
        Ok(())
    }
}

#[async_trait]
impl AdvisoryStep for PopupHandler {
    fn name(&self) -> &'static str {
        match self.phase {
            PopupPhase::Consent => "consent-popup",
            PopupPhase::PostLogin => "post-login-popup",
        }
    }

    async fn try_run(&self, session: &Session) -> Result<(), WorkflowError> {
        sleep(self.settle).await;
        match self.phase {
            PopupPhase::Consent => self.dismiss_consent(session).await,
            PopupPhase::PostLogin => self.clear_leftovers(session).await,
        }
    }
}
