//! Cancels an order. The row's cells are cleared rather than removed, so
//! later appends and scans keep their positions; a cleared order is never
//! recreated.

use serenity::client::Context;
use serenity::model::channel::Message;

use crate::model::AppState;
use crate::responses;
use crate::sheets::{orders, SheetsError};

pub async fn run(
    ctx: &Context,
    msg: &Message,
    state: &AppState,
    reply_first_line: &str,
) -> Result<(), SheetsError> {
    let Some((list, row)) = super::locate_order(ctx, msg, state, reply_first_line).await? else {
        return Ok(());
    };

    orders::clear_order(&state.sheets, &state.schema, list, row).await?;

    let _ = msg
        .reply(&ctx.http, responses::pick(&state.config.rejection_replies))
        .await;
    Ok(())
}
