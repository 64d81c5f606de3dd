//! Weekly trigger loop: fire the workflow every Monday at 10:00 local time.
//!
//! A failed run is logged and swallowed; the loop must outlive any single
//! run. The only way out is a process interrupt, handled by the caller.

use chrono::{DateTime, Datelike, Duration as ChronoDuration, Local, TimeZone, Timelike, Weekday};
use tokio::time::sleep;
use tracing::{error, info};

use crate::config::BotConfig;
use crate::workflow::Workflow;

/// Environment toggle: fire one run immediately at process start.
pub const RUN_ON_STARTUP_ENV: &str = "RUN_ON_STARTUP";

const FIRE_WEEKDAY: Weekday = Weekday::Mon;
const FIRE_HOUR: u32 = 10;

/// Run the trigger loop forever.
pub async fn run_forever(config: BotConfig) {
    info!("scheduler started: every Monday at {FIRE_HOUR}:00");

    if run_on_startup() {
        info!("{RUN_ON_STARTUP_ENV} enabled, running immediately");
        fire(&config).await;
    } else {
        info!("waiting for the next scheduled slot");
    }

    loop {
        let now = Local::now();
        let next = next_occurrence(&now);
        let wait = (next - now).to_std().unwrap_or_default();
        info!(
            next = %next.format("%Y-%m-%d %H:%M:%S"),
            wait = %humantime::format_duration(wait),
            "sleeping until the next run"
        );
        sleep(wait).await;

        fire(&config).await;
        info!("next run scheduled in 7 days");
    }
}

/// The next Monday-10:00 occurrence strictly after `now`.
pub fn next_occurrence<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let mut candidate = now
        .clone()
        .with_hour(FIRE_HOUR)
        .and_then(|t| t.with_minute(0))
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or_else(|| now.clone());

    while candidate.weekday() != FIRE_WEEKDAY {
        candidate = candidate + ChronoDuration::days(1);
    }
    if candidate <= *now {
        candidate = candidate + ChronoDuration::days(7);
    }
    candidate
}

async fn fire(config: &BotConfig) {
    info!("starting scheduled bot run");
    match Workflow::new(config.clone()).run().await {
        Ok(report) => {
            info!(run_id = %report.run_id, elapsed = ?report.elapsed, "scheduled run completed");
        }
        Err(err) => {
            // A single failed run must never stop future runs.
            error!(%err, "scheduled run failed; waiting for the next occurrence");
        }
    }
}

fn run_on_startup() -> bool {
    std::env::var(RUN_ON_STARTUP_ENV)
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}
