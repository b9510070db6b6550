//! Friendly reply to the configured greeting trigger. No store interaction;
//! runs independently of any hashtag processing on the same message.

use serenity::client::Context;
use serenity::model::channel::Message;

use crate::model::AppState;
use crate::responses;
use crate::sheets::SheetsError;

pub async fn run(ctx: &Context, msg: &Message, state: &AppState) -> Result<(), SheetsError> {
    let config = &state.config;
    let text = format!(
        "{}{}, {}",
        config.handle_prefix,
        msg.author.name,
        responses::pick(&config.greeting_replies)
    );
    let _ = msg.reply(&ctx.http, text).await;
    Ok(())
}
