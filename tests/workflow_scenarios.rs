//! Live-browser scenarios for the full workflow. Ignored by default because
//! they require Chrome/Chromium on the host machine (and, for the success
//! path, a reachable storefront with a valid identifier).
//!
//! Run with:
//! ```bash
//! export CLAIMBOT_E2E=1
//! export USER_ID=<real id>             # success scenario only
//! cargo test --test workflow_scenarios -- --ignored --nocapture
//! ```

use std::env;
use std::time::Duration;

use claimbot_cli::config::BotConfig;
use claimbot_cli::errors::WorkflowError;
use claimbot_cli::tempo::WorkflowTempo;
use claimbot_cli::workflow::Workflow;
use element_locator::{LocatorError, Selector};

fn e2e_enabled() -> bool {
    env::var("CLAIMBOT_E2E")
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Short waits and no dwells: scenario tests should fail fast, not sit in
/// diagnostic pauses.
fn test_tempo() -> WorkflowTempo {
    WorkflowTempo {
        success_dwell: Duration::ZERO,
        failure_dwell: Duration::ZERO,
        ..WorkflowTempo::instant()
    }
}

#[tokio::test]
#[ignore = "requires Chrome/Chromium and a real USER_ID; set CLAIMBOT_E2E=1"]
async fn configured_attribute_selector_claims_the_item() {
    if !e2e_enabled() {
        eprintln!("skipping workflow scenario (CLAIMBOT_E2E not set)");
        return;
    }
    let Ok(user_id) = env::var("USER_ID") else {
        eprintln!("skipping success scenario (USER_ID not set)");
        return;
    };

    let config = BotConfig {
        user_id,
        ..BotConfig::default()
    };
    let report = Workflow::new(config)
        .with_tempo(test_tempo())
        .run()
        .await
        .expect("claim run succeeds");
    assert_eq!(report.state.to_string(), "closed");
}

#[tokio::test]
#[ignore = "requires Chrome/Chromium; set CLAIMBOT_E2E=1"]
async fn missing_quick_login_widget_classifies_as_login_failure() {
    if !e2e_enabled() {
        eprintln!("skipping workflow scenario (CLAIMBOT_E2E not set)");
        return;
    }

    // example.com has no quick-login container, so the login step exhausts
    // its candidate chain.
    let config = BotConfig {
        website_url: "https://example.com/".to_string(),
        wait_time: 2,
        user_id: "operator-123".to_string(),
        ..BotConfig::default()
    };
    let err = Workflow::new(config)
        .with_tempo(test_tempo())
        .run()
        .await
        .unwrap_err();
    assert!(matches!(err, WorkflowError::Login { .. }), "got: {err}");
}

#[tokio::test]
#[ignore = "requires Chrome/Chromium and a real USER_ID; set CLAIMBOT_E2E=1"]
async fn unmatched_text_selector_carries_element_not_found_context() {
    if !e2e_enabled() {
        eprintln!("skipping workflow scenario (CLAIMBOT_E2E not set)");
        return;
    }
    let Ok(user_id) = env::var("USER_ID") else {
        eprintln!("skipping text-selector scenario (USER_ID not set)");
        return;
    };

    let config = BotConfig {
        button_selector: Selector::new("text", "No Such Button Text"),
        wait_time: 2,
        user_id,
        ..BotConfig::default()
    };
    let err = Workflow::new(config)
        .with_tempo(test_tempo())
        .run()
        .await
        .unwrap_err();
    assert!(
        matches!(
            err,
            WorkflowError::ActionNotFound {
                source: LocatorError::ElementNotFound { .. },
                ..
            }
        ),
        "got: {err}"
    );
}
