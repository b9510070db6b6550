//! Order row operations on top of the raw client.
//!
//! Row targeting and field defaulting are plain functions so the math is
//! testable without a network; the async functions only assemble writes.

use super::client::{CellWrite, SheetsClient, SheetsError};
use super::schema::{Schema, FIRST_DATA_ROW};

/// The free-text fields of a request command, in payload-line order. Missing
/// lines are filled with the configured placeholder, never left unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFields {
    pub full_name: String,
    pub buyout_price: String,
    pub payment_price: String,
    pub payment_details: String,
    pub ad_date: String,
    pub size: String,
    pub social_link: String,
    pub article_number: String,
}

impl RequestFields {
    /// Lines 1..=8 of the request payload (line 0 is the hashtag).
    pub fn from_lines(lines: &[String], placeholder: &str) -> Self {
        let field = |i: usize| {
            lines
                .get(i)
                .cloned()
                .unwrap_or_else(|| placeholder.to_string())
        };
        Self {
            full_name: field(1),
            buyout_price: field(2),
            payment_price: field(3),
            payment_details: field(4),
            ad_date: field(5),
            size: field(6),
            social_link: field(7),
            article_number: field(8),
        }
    }
}

/// Row the next order lands on, given how many cells the discovery column
/// currently holds (headers included). An untouched column starts the data
/// region instead.
pub fn target_row(occupied: usize) -> u32 {
    if occupied == 0 {
        FIRST_DATA_ROW
    } else {
        occupied as u32 + 1
    }
}

/// Row of the order created by the request message `key`, if any.
pub async fn find_order(
    client: &SheetsClient,
    schema: &Schema,
    list: &str,
    key: &str,
) -> Result<Option<u32>, SheetsError> {
    client.find_row(list, schema.correlation, key).await
}

/// Appends a new order row: requester, payload fields, fresh status, request
/// date and the correlation key that later replies will look up.
#[allow(clippy::too_many_arguments)]
pub async fn append_request(
    client: &SheetsClient,
    schema: &Schema,
    list: &str,
    row: u32,
    handle: &str,
    fields: &RequestFields,
    status: &str,
    date: &str,
    correlation_key: &str,
) -> Result<(), SheetsError> {
    let writes = vec![
        CellWrite::new(list, schema.handle, row, handle),
        CellWrite::new(list, schema.article_number, row, &fields.article_number),
        CellWrite::new(list, schema.full_name, row, &fields.full_name),
        CellWrite::new(list, schema.status, row, status),
        CellWrite::new(list, schema.buyout_price, row, &fields.buyout_price),
        CellWrite::new(list, schema.request_date, row, date),
        CellWrite::new(list, schema.payment_price, row, &fields.payment_price),
        CellWrite::new(list, schema.payment_details, row, &fields.payment_details),
        CellWrite::new(list, schema.social_link, row, &fields.social_link),
        CellWrite::new(list, schema.ad_date, row, &fields.ad_date),
        CellWrite::new(list, schema.size, row, &fields.size),
        CellWrite::new(list, schema.correlation, row, correlation_key),
    ];
    client.batch_update(&writes).await
}

/// Records when the payment arrived and under which order number.
pub async fn write_payment(
    client: &SheetsClient,
    schema: &Schema,
    list: &str,
    row: u32,
    received_date: &str,
    order_number: &str,
) -> Result<(), SheetsError> {
    let writes = vec![
        CellWrite::new(list, schema.received_date, row, received_date),
        CellWrite::new(list, schema.order_number, row, order_number),
    ];
    client.batch_update(&writes).await
}

/// Flips the status label and stamps the paid date.
pub async fn mark_paid(
    client: &SheetsClient,
    schema: &Schema,
    list: &str,
    row: u32,
    paid_status: &str,
    date: &str,
) -> Result<(), SheetsError> {
    let writes = vec![
        CellWrite::new(list, schema.status, row, paid_status),
        CellWrite::new(list, schema.paid_date, row, date),
    ];
    client.batch_update(&writes).await
}

/// Stores whether feedback exists and where to find it.
pub async fn write_feedback(
    client: &SheetsClient,
    schema: &Schema,
    list: &str,
    row: u32,
    availability: &str,
    link: &str,
) -> Result<(), SheetsError> {
    let writes = vec![
        CellWrite::new(list, schema.feedback_available, row, availability),
        CellWrite::new(list, schema.feedback_link, row, link),
    ];
    client.batch_update(&writes).await
}

/// Logical delete: clears the full row range. Later scans skip the row only
/// because its cleared cells no longer match anything.
pub async fn clear_order(
    client: &SheetsClient,
    schema: &Schema,
    list: &str,
    row: u32,
) -> Result<(), SheetsError> {
    let (first, last) = schema.row_bounds();
    let range = format!("{list}!{first}{row}:{last}{row}");
    client.clear_range(&range).await
}
