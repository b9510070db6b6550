//! Opens a new order: one appended row in the list named by the hashtag
//! suffix.

use serenity::client::Context;
use serenity::model::channel::Message;

use super::parser;
use crate::model::AppState;
use crate::responses;
use crate::sheets::orders::{self, RequestFields};
use crate::sheets::SheetsError;
use crate::util;

pub async fn run(
    ctx: &Context,
    msg: &Message,
    state: &AppState,
    lines: &[String],
) -> Result<(), SheetsError> {
    let config = &state.config;
    let list = parser::list_name(&lines[0]);
    if !super::ensure_list(ctx, msg, state, list).await? {
        return Ok(());
    }

    let fields = RequestFields::from_lines(lines, &config.empty_placeholder);
    let handle = format!("{}{}", config.handle_prefix, msg.author.name);
    let date = util::today(config.tz());
    let correlation_key = msg.id.get().to_string();

    // The target row comes from a read of current occupancy, so hold the
    // per-list lock across the read and the write.
    let lock = state.list_lock(list).await;
    let guard = lock.lock().await;
    let occupied = state
        .sheets
        .read_column(list, state.schema.handle)
        .await?
        .len();
    let row = orders::target_row(occupied);
    orders::append_request(
        &state.sheets,
        &state.schema,
        list,
        row,
        &handle,
        &fields,
        &config.ordered_status,
        &date,
        &correlation_key,
    )
    .await?;
    drop(guard);

    let _ = msg
        .reply(&ctx.http, responses::pick(&config.request_replies))
        .await;
    Ok(())
}
