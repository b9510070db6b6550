//! Gateway event handling: builds the parser's view of each inbound message,
//! dispatches the resulting commands, and keeps a failed command from taking
//! the receive loop down with it.

use serenity::async_trait;
use serenity::client::Context;
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::commands::{
    self,
    parser::{self, Command, MessageView, ReplyView},
};
use crate::model::AppState;
use crate::sheets::SheetsError;

pub struct Handler {
    pub allowed_guild_id: GuildId,
    /// Process-wide shutdown signal. Passed along into command handling so
    /// an in-flight store call does not outlive shutdown.
    pub shutdown: CancellationToken,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.guild_id != Some(self.allowed_guild_id) || msg.author.bot {
            return;
        }
        if msg.content.is_empty() {
            return;
        }
        let Some(state) = AppState::from_ctx(&ctx).await else {
            return;
        };

        let reply = msg.referenced_message.as_deref().map(|replied| ReplyView {
            text: (!replied.content.is_empty()).then_some(replied.content.as_str()),
            has_media: !replied.attachments.is_empty(),
        });
        let view = MessageView {
            text: &msg.content,
            reply,
        };

        for command in parser::parse(&view, &state.config) {
            let outcome = tokio::select! {
                _ = self.shutdown.cancelled() => return,
                outcome = dispatch(&ctx, &msg, &state, &command) => outcome,
            };
            if let Err(err) = outcome {
                error!(
                    chat = %msg.channel_id,
                    sender = %msg.author.name,
                    error = %err,
                    "command failed"
                );
                report_failure(&ctx, &msg, &state, &err).await;
            }
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected and ready!", ready.user.name);
    }
}

async fn dispatch(
    ctx: &Context,
    msg: &Message,
    state: &AppState,
    command: &Command,
) -> Result<(), SheetsError> {
    match command {
        Command::Greeting => commands::greeting::run(ctx, msg, state).await,
        Command::Request { lines } => commands::request::run(ctx, msg, state, lines).await,
        Command::Payment {
            lines,
            reply_first_line,
        } => commands::payment::run(ctx, msg, state, lines, reply_first_line).await,
        Command::Paid { reply_first_line } => {
            commands::paid::run(ctx, msg, state, reply_first_line).await
        }
        Command::Feedback {
            lines,
            reply_first_line,
        } => commands::feedback::run(ctx, msg, state, lines, reply_first_line).await,
        Command::Rejection { reply_first_line } => {
            commands::rejection::run(ctx, msg, state, reply_first_line).await
        }
        Command::WrongHashtag => notice(ctx, msg, &state.config.wrong_hashtag_notice).await,
        Command::MissingReply => notice(ctx, msg, &state.config.missing_reply_notice).await,
        Command::ReplyIsMedia => notice(ctx, msg, &state.config.media_reply_notice).await,
        Command::IncorrectReply => notice(ctx, msg, &state.config.incorrect_reply_notice).await,
    }
}

async fn notice(ctx: &Context, msg: &Message, text: &str) -> Result<(), SheetsError> {
    let _ = msg.reply(&ctx.http, text).await;
    Ok(())
}

/// Manual-triage breadcrumbs for a command that died mid-flight: the failure
/// itself, then where and from whom the message came.
async fn report_failure(ctx: &Context, msg: &Message, state: &AppState, err: &SheetsError) {
    let _ = msg
        .channel_id
        .say(&ctx.http, format!("!Error!\n{err}"))
        .await;
    let details = format!(
        "Chat id - {}\nSender - {}{}\nMessage text:\n{}",
        msg.channel_id, state.config.handle_prefix, msg.author.name, msg.content
    );
    let _ = msg.channel_id.say(&ctx.http, details).await;
}
