//! Date helpers shared by the lifecycle commands and the daily job.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Date format used everywhere a calendar date is stored or compared.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Calendar date of `now` in the given timezone.
pub fn local_date(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date string in the configured zone.
pub fn today(tz: Tz) -> String {
    format_date(local_date(Utc::now(), tz))
}

/// Yesterday's date string in the configured zone; the daily job aggregates
/// the day that just ended.
pub fn yesterday(tz: Tz) -> String {
    let today = local_date(Utc::now(), tz);
    format_date(today.pred_opt().unwrap_or(today))
}
