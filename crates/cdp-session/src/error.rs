//! Session-level failure types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The launch configuration was rejected before a process was spawned.
    #[error("browser config error: {0}")]
    Config(String),

    /// The browser process failed to launch or connect.
    #[error("failed to launch chromium: {0}")]
    Launch(String),

    /// A CDP command failed mid-session.
    #[error("cdp error: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),
}
