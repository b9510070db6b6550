//! Stores feedback availability and link for an order.

use serenity::client::Context;
use serenity::model::channel::Message;

use crate::model::AppState;
use crate::responses;
use crate::sheets::{orders, SheetsError};

pub async fn run(
    ctx: &Context,
    msg: &Message,
    state: &AppState,
    lines: &[String],
    reply_first_line: &str,
) -> Result<(), SheetsError> {
    let config = &state.config;
    let Some((list, row)) = super::locate_order(ctx, msg, state, reply_first_line).await? else {
        return Ok(());
    };

    let field = |i: usize| {
        lines
            .get(i)
            .cloned()
            .unwrap_or_else(|| config.empty_placeholder.clone())
    };
    orders::write_feedback(&state.sheets, &state.schema, list, row, &field(1), &field(2)).await?;

    let _ = msg
        .reply(&ctx.http, responses::pick(&config.feedback_replies))
        .await;
    Ok(())
}
