//! The orchestrator: a strictly sequential step machine over one browser
//! session, with guaranteed release on every exit path.

use std::fmt;
use std::time::{Duration, Instant};

use cdp_session::{Session, SessionConfig};
use tokio::time::sleep;
use tracing::{error, info};
use uuid::Uuid;

use crate::config::BotConfig;
use crate::errors::WorkflowError;
use crate::steps::{ActionStep, AdvisoryStep, LoginStep, PopupHandler, PopupPhase, Step};
use crate::tempo::WorkflowTempo;

/// Progress marker for one run. Error states collapse to [`Failed`] from any
/// non-terminal state.
///
/// [`Failed`]: WorkflowState::Failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    SessionOpen,
    Navigated,
    ConsentHandled,
    LoggedIn,
    PopupCleared,
    ActionDone,
    Closed,
    Failed,
}

impl WorkflowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::SessionOpen => "session-open",
            WorkflowState::Navigated => "navigated",
            WorkflowState::ConsentHandled => "consent-handled",
            WorkflowState::LoggedIn => "logged-in",
            WorkflowState::PopupCleared => "popup-cleared",
            WorkflowState::ActionDone => "action-done",
            WorkflowState::Closed => "closed",
            WorkflowState::Failed => "failed",
        }
    }
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a completed run.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub run_id: Uuid,
    pub state: WorkflowState,
    pub elapsed: Duration,
}

/// Drives one claim run end to end. External collaborators (CLI, scheduler)
/// call [`Workflow::run`] and consume only its success/failure.
pub struct Workflow {
    config: BotConfig,
    tempo: WorkflowTempo,
}

impl Workflow {
    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            tempo: WorkflowTempo::default(),
        }
    }

    /// Override the pacing policy (tests zero it).
    pub fn with_tempo(mut self, tempo: WorkflowTempo) -> Self {
        self.tempo = tempo;
        self
    }

    /// Execute one full run: validate, open the session, drive the step
    /// sequence, and release the session exactly once whatever happened.
    pub async fn run(&self) -> Result<RunReport, WorkflowError> {
        let run_id = Uuid::new_v4();
        let started = Instant::now();
        info!(%run_id, url = %self.config.website_url, "workflow run starting");

        // Fail fast: an unusable config must not cost a browser launch.
        self.config.validate()?;

        let session = Session::launch(&SessionConfig::for_run(self.config.headless))
            .await
            .map_err(WorkflowError::SessionSetup)?;
        let mut state = WorkflowState::SessionOpen;

        let outcome = self.drive(&session, &mut state).await;

        // The session is held open after the run body: briefly on success so
        // the claim visibly registers, longer on failure so the operator can
        // inspect the wreckage.
        let final_state = match &outcome {
            Ok(()) => {
                info!(%run_id, "workflow completed, dwelling before close");
                sleep(self.tempo.success_dwell).await;
                WorkflowState::Closed
            }
            Err(err) => {
                error!(%run_id, reached = %state, %err, "workflow failed, dwelling before close for diagnosis");
                sleep(self.tempo.failure_dwell).await;
                WorkflowState::Failed
            }
        };

        session.close().await;
        info!(%run_id, state = %final_state, "session released");

        outcome.map(|()| RunReport {
            run_id,
            state: final_state,
            elapsed: started.elapsed(),
        })
    }

    /// The strictly sequential step body. Never touches session release.
    async fn drive(
        &self,
        session: &Session,
        state: &mut WorkflowState,
    ) -> Result<(), WorkflowError> {
        info!(url = %self.config.website_url, "navigating to storefront");
        session.navigate(&self.config.website_url).await?;
        sleep(self.tempo.page_settle).await;
        *state = WorkflowState::Navigated;

        PopupHandler::new(PopupPhase::Consent, self.tempo.popup_settle)
            .run(session)
            .await;
        *state = WorkflowState::ConsentHandled;

        LoginStep::new(
            self.config.user_id.clone(),
            self.config.wait_timeout(),
            self.tempo.clone(),
        )
        .run(session)
        .await?;
        *state = WorkflowState::LoggedIn;

        PopupHandler::new(PopupPhase::PostLogin, self.tempo.popup_settle)
            .run(session)
            .await;
        *state = WorkflowState::PopupCleared;

        ActionStep::new(
            self.config.button_selector.clone(),
            self.config.wait_timeout(),
            self.tempo.action_settle,
        )
        .run(session)
        .await?;
        *state = WorkflowState::ActionDone;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::USER_ID_PLACEHOLDER;

    fn workflow_with(user_id: &str) -> Workflow {
        let config = BotConfig {
            user_id: user_id.to_string(),
            ..BotConfig::default()
        };
        Workflow::new(config).with_tempo(WorkflowTempo::instant())
    }

    #[tokio::test]
    async fn placeholder_identifier_fails_before_any_session() {
        let err = workflow_with(USER_ID_PLACEHOLDER).run().await.unwrap_err();
        assert!(matches!(err, WorkflowError::ConfigValidation(_)));
    }

    #[tokio::test]
    async fn empty_identifier_fails_before_any_session() {
        let err = workflow_with("").run().await.unwrap_err();
        assert!(matches!(err, WorkflowError::ConfigValidation(_)));
    }

    #[test]
    fn states_render_for_logging() {
        assert_eq!(WorkflowState::SessionOpen.to_string(), "session-open");
        assert_eq!(WorkflowState::Failed.to_string(), "failed");
    }
}
