//! Marks an order as fully paid: status label flips and the paid date is
//! stamped, which is what the daily aggregation later keys on.

use serenity::client::Context;
use serenity::model::channel::Message;

use crate::model::AppState;
use crate::responses;
use crate::sheets::{orders, SheetsError};
use crate::util;

pub async fn run(
    ctx: &Context,
    msg: &Message,
    state: &AppState,
    reply_first_line: &str,
) -> Result<(), SheetsError> {
    let config = &state.config;
    let Some((list, row)) = super::locate_order(ctx, msg, state, reply_first_line).await? else {
        return Ok(());
    };

    let date = util::today(config.tz());
    orders::mark_paid(
        &state.sheets,
        &state.schema,
        list,
        row,
        &config.paid_status,
        &date,
    )
    .await?;

    let _ = msg
        .reply(&ctx.http, responses::pick(&config.paid_replies))
        .await;
    Ok(())
}
