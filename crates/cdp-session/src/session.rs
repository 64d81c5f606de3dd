//! Exclusive ownership of one Chromium session per run.

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::SessionError;

/// Flags the bot always passes; the set the storefront tolerates in
/// containerized runs, with crash reporting and automation fingerprinting
/// switched off.
const LAUNCH_ARGS: &[&str] = &[
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--disable-setuid-sandbox",
    "--disable-crash-reporter",
    "--disable-breakpad",
    "--crash-dumps-dir=/tmp",
    "--disable-blink-features=AutomationControlled",
    "--no-first-run",
    "--no-default-browser-check",
];

/// The single browser session owned by the orchestrator for a run.
///
/// Holds the browser process, the CDP handler task, and the original page.
/// Consuming [`Session::close`] is the only release path, so double-release
/// is unrepresentable.
pub struct Session {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

impl Session {
    /// Launch Chromium and open the initial page.
    pub async fn launch(config: &SessionConfig) -> Result<Self, SessionError> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .request_timeout(config.request_timeout)
            .launch_timeout(config.launch_timeout)
            .window_size(config.window_size.0, config.window_size.1);

        let mut args: Vec<&str> = LAUNCH_ARGS.to_vec();
        if config.headless {
            args.push("--headless=new");
            args.push("--hide-scrollbars");
            args.push("--mute-audio");
        } else {
            builder = builder.with_head();
        }
        builder = builder.args(args);

        if let Some(path) = &config.executable {
            debug!(path = %path.display(), "using configured chromium executable");
            builder = builder.chrome_executable(path);
        }

        let browser_config = builder.build().map_err(SessionError::Config)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|err| SessionError::Launch(err.to_string()))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    debug!("cdp handler stream ended");
                    break;
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(err) => {
                let mut browser = browser;
                let _ = browser.close().await;
                let _ = browser.wait().await;
                handler_task.abort();
                return Err(SessionError::Launch(format!(
                    "failed to open initial page: {err}"
                )));
            }
        };

        info!(headless = config.headless, "chromium session established");
        Ok(Self {
            browser,
            page,
            handler: handler_task,
        })
    }

    /// The original page the workflow drives.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Navigate the original page and wait for the load to commit.
    pub async fn navigate(&self, url: &str) -> Result<(), SessionError> {
        debug!(url, "navigating");
        self.page.goto(url).await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    /// Evaluate a script on the original page, discarding its result.
    pub async fn evaluate(&self, script: &str) -> Result<(), SessionError> {
        self.page.evaluate(script).await?;
        Ok(())
    }

    /// Number of open top-level pages; more than one means the site spawned a
    /// popup window.
    pub async fn page_count(&self) -> Result<usize, SessionError> {
        Ok(self.browser.pages().await?.len())
    }

    /// Re-focus the original (first-opened) window.
    pub async fn focus_original(&self) -> Result<(), SessionError> {
        self.page.bring_to_front().await?;
        Ok(())
    }

    /// Release the session: close the browser, reap the process, stop the
    /// handler task. Close errors are logged, not surfaced; there is no
    /// recovery beyond reporting.
    pub async fn close(mut self) {
        if let Err(err) = self.browser.close().await {
            warn!(%err, "browser close reported an error");
        }
        if let Err(err) = self.browser.wait().await {
            warn!(%err, "browser process did not exit cleanly");
        }
        self.handler.abort();
        info!("chromium session released");
    }
}
