//! One module per command, plus the parser that recognizes them and the two
//! store-lookup steps every reply-driven command shares.

pub mod feedback;
pub mod greeting;
pub mod paid;
pub mod parser;
pub mod payment;
pub mod rejection;
pub mod request;

use serenity::client::Context;
use serenity::model::channel::Message;

use crate::model::AppState;
use crate::sheets::{orders, SheetsError};

/// Verifies the target list exists right now. On a missing list the sender
/// gets the configured notice and the command is over; the caller makes no
/// further store calls.
pub(crate) async fn ensure_list(
    ctx: &Context,
    msg: &Message,
    state: &AppState,
    list: &str,
) -> Result<bool, SheetsError> {
    if state.sheets.list_exists(list).await? {
        return Ok(true);
    }
    let _ = msg
        .reply(&ctx.http, &state.config.list_not_found_notice)
        .await;
    Ok(false)
}

/// Recovers the list from the replied-to request line and the order row from
/// the correlation column. `Ok(None)` means the command should be dropped
/// silently: either the list notice was already sent, or the correlation key
/// matched no row (no reply, no mutation).
pub(crate) async fn locate_order<'a>(
    ctx: &Context,
    msg: &Message,
    state: &AppState,
    reply_first_line: &'a str,
) -> Result<Option<(&'a str, u32)>, SheetsError> {
    let list = parser::list_name(reply_first_line);
    if !ensure_list(ctx, msg, state, list).await? {
        return Ok(None);
    }
    let Some(replied) = msg.referenced_message.as_deref() else {
        return Ok(None);
    };
    let key = replied.id.get().to_string();
    let row = orders::find_order(&state.sheets, &state.schema, list, &key).await?;
    Ok(row.map(|row| (list, row)))
}
