//! Daily payment reconciliation.
//!
//! Once per day the bot walks every order list, sums the payment amounts of
//! rows whose paid date is yesterday, and upserts the grand total into the
//! payments list's row for that date. One unreadable list does not sink the
//! run: it is logged and skipped.

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::config::BotConfig;
use crate::sheets::{CellWrite, Schema, SheetsClient, SheetsError};
use crate::util;

/// Payments-list layout: the date keys column A, its total sits in column B.
pub const DATE_COLUMN: &str = "A";
pub const TOTAL_COLUMN: &str = "B";

/// Sum of `amounts` on rows whose paid date equals `date` exactly. Cells that
/// do not parse as whole numbers are skipped.
pub fn sum_for_date(paid_dates: &[String], amounts: &[String], date: &str) -> i64 {
    paid_dates
        .iter()
        .enumerate()
        .filter(|(_, paid)| paid.as_str() == date)
        .filter_map(|(i, _)| amounts.get(i))
        .filter_map(|amount| amount.trim().parse::<i64>().ok())
        .sum()
}

/// Where the summary for `date` goes: an existing row to overwrite, or the
/// first free row to append to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarySlot {
    Existing(u32),
    Append(u32),
}

pub fn summary_slot(dates: &[String], date: &str) -> SummarySlot {
    match dates.iter().position(|d| d == date) {
        Some(i) => SummarySlot::Existing((i + 1) as u32),
        None => SummarySlot::Append(dates.len() as u32 + 1),
    }
}

/// One reconciliation run for yesterday in the job's timezone.
pub async fn collect_daily_payments(
    client: &SheetsClient,
    schema: &Schema,
    config: &BotConfig,
    cancel: &CancellationToken,
) -> Result<(), SheetsError> {
    collect_for_date(client, schema, config, cancel, &util::yesterday(config.tz())).await
}

async fn collect_for_date(
    client: &SheetsClient,
    schema: &Schema,
    config: &BotConfig,
    cancel: &CancellationToken,
    date: &str,
) -> Result<(), SheetsError> {
    let titles = client.sheet_titles().await?;
    let mut total: i64 = 0;
    let mut scanned = 0usize;

    for title in &titles {
        if *title == config.payments_list || *title == config.summary_list {
            continue;
        }
        if cancel.is_cancelled() {
            return Ok(());
        }
        match read_list_sum(client, schema, title, date).await {
            Ok(sum) => {
                total += sum;
                scanned += 1;
            }
            Err(err) => {
                warn!(list = %title, error = %err, "skipping list in daily aggregation");
            }
        }
        // Pause between lists to stay under the store's read rate limits.
        let delay = tokio::time::sleep(std::time::Duration::from_secs(config.job_delay_secs));
        tokio::select! {
            _ = cancel.cancelled() => return Ok(()),
            _ = delay => {}
        }
    }

    let existing = client.read_column(&config.payments_list, DATE_COLUMN).await?;
    let writes = match summary_slot(&existing, date) {
        SummarySlot::Existing(row) => vec![CellWrite::new(
            &config.payments_list,
            TOTAL_COLUMN,
            row,
            total.to_string(),
        )],
        SummarySlot::Append(row) => vec![
            CellWrite::new(&config.payments_list, DATE_COLUMN, row, date),
            CellWrite::new(&config.payments_list, TOTAL_COLUMN, row, total.to_string()),
        ],
    };
    client.batch_update(&writes).await?;

    info!(%date, total, lists = scanned, "daily payments summary updated");
    Ok(())
}

async fn read_list_sum(
    client: &SheetsClient,
    schema: &Schema,
    list: &str,
    date: &str,
) -> Result<i64, SheetsError> {
    let paid_dates = client.read_column(list, schema.paid_date).await?;
    let amounts = client.read_column(list, schema.payment_price).await?;
    Ok(sum_for_date(&paid_dates, &amounts, date))
}
