//! claimbot - unattended weekly claim automation: one storefront, one stored
//! identifier, one button.
//!
//! The branching core lives in [`workflow`]: a strictly sequential step
//! machine over a single browser [`cdp_session::Session`], with classified
//! failures and guaranteed session release. Everything else is plumbing:
//! [`config`] resolves the JSON file plus environment overrides, and
//! [`schedule`] re-fires the workflow weekly without ever dying to a failed
//! run.

pub mod config;
pub mod errors;
pub mod schedule;
pub mod steps;
pub mod tempo;
pub mod workflow;

pub use config::BotConfig;
pub use errors::WorkflowError;
pub use tempo::WorkflowTempo;
pub use workflow::{RunReport, Workflow, WorkflowState};
