//! Fixed settle and dwell periods of a run.

use std::time::Duration;

/// Pacing policy for one run.
///
/// The storefront renders its widgets asynchronously, so each step pauses for
/// a fixed settle period at known-slow points rather than re-checking page
/// state. Tests zero the whole policy via [`WorkflowTempo::instant`].
#[derive(Clone, Debug)]
pub struct WorkflowTempo {
    /// After navigation commits, before the consent pass.
    pub page_settle: Duration,

    /// Popup passes settle this long before searching and after dismissing.
    pub popup_settle: Duration,

    /// Before hunting the quick-login widget.
    pub login_settle: Duration,

    /// Between scroll/focus nudges inside the login widget.
    pub focus_settle: Duration,

    /// After submitting, for the authentication round trip.
    pub auth_settle: Duration,

    /// After the half-page scroll, before resolving the target control, and
    /// again after the click while its effect registers.
    pub action_settle: Duration,

    /// The session stays open this long after success, so the claimed item
    /// is visible in a headful run.
    pub success_dwell: Duration,

    /// The session stays open this long after a fatal failure, for diagnosis.
    pub failure_dwell: Duration,
}

impl Default for WorkflowTempo {
    fn default() -> Self {
        Self {
            page_settle: Duration::from_secs(3),
            popup_settle: Duration::from_secs(2),
            login_settle: Duration::from_secs(4),
            focus_settle: Duration::from_secs(1),
            auth_settle: Duration::from_secs(5),
            action_settle: Duration::from_secs(3),
            success_dwell: Duration::from_secs(10),
            failure_dwell: Duration::from_secs(30),
        }
    }
}

impl WorkflowTempo {
    /// All-zero tempo; keeps test runs instant.
    pub fn instant() -> Self {
        Self {
            page_settle: Duration::ZERO,
            popup_settle: Duration::ZERO,
            login_settle: Duration::ZERO,
            focus_settle: Duration::ZERO,
            auth_settle: Duration::ZERO,
            action_settle: Duration::ZERO,
            success_dwell: Duration::ZERO,
            failure_dwell: Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_dwell_exceeds_success_dwell() {
        let tempo = WorkflowTempo::default();
        assert!(tempo.failure_dwell > tempo.success_dwell);
    }

    #[test]
    fn instant_tempo_is_all_zero() {
        let tempo = WorkflowTempo::instant();
        assert_eq!(tempo.success_dwell, Duration::ZERO);
        assert_eq!(tempo.failure_dwell, Duration::ZERO);
        assert_eq!(tempo.login_settle, Duration::ZERO);
    }
}
