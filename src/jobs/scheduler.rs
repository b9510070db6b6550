//! Midnight scheduling for the daily payments job.
//!
//! The next run time is always recomputed from the wall clock in the
//! configured timezone, so the schedule cannot drift the way an
//! elapsed-ticks timer would. The boundary math is a pure function of
//! (now, timezone) and is tested directly.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Days, NaiveTime, TimeDelta, Utc};
use chrono_tz::Tz;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use super::payments;
use crate::model::AppState;

/// First instant of the next calendar day in `tz`, as a UTC timestamp.
/// If a DST jump removes midnight itself, the first existing hour after it
/// is used instead.
pub fn next_midnight(now: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    let local_day = now.with_timezone(&tz).date_naive();
    let next_day = local_day
        .checked_add_days(Days::new(1))
        .unwrap_or(local_day);
    for hour in 0..3 {
        let candidate = next_day.and_time(NaiveTime::MIN) + TimeDelta::hours(hour);
        if let Some(resolved) = candidate.and_local_timezone(tz).earliest() {
            return resolved.with_timezone(&Utc);
        }
    }
    // No representable time in the first hours of the day; try again in a day.
    now + TimeDelta::days(1)
}

/// Sleeps until each local midnight and runs the payments aggregation once
/// per day. A failed run is logged and the next midnight is armed regardless;
/// the loop only ends on shutdown.
pub async fn run_daily(state: Arc<AppState>, cancel: CancellationToken) {
    let tz = state.config.tz();
    loop {
        let now = Utc::now();
        let at = next_midnight(now, tz);
        let wait = (at - now).to_std().unwrap_or(Duration::ZERO);
        info!(run_at = %at, "daily payments job armed");
        tokio::select! {
            _ = cancel.cancelled() => {
                info!("daily payments job stopped");
                return;
            }
            _ = tokio::time::sleep(wait) => {
                let run = payments::collect_daily_payments(
                    &state.sheets,
                    &state.schema,
                    &state.config,
                    &cancel,
                )
                .await;
                if let Err(err) = run {
                    error!(error = %err, "daily payments run failed");
                }
            }
        }
    }
}
