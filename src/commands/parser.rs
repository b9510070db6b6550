//! Turns an inbound chat message (plus its reply context) into typed
//! commands, with no I/O. The handler feeds it a borrowed view of the
//! message; everything the lifecycle operations need later is carried in the
//! emitted variants.
//!
//! Hashtag matching is exact-prefix and case-sensitive against the configured
//! literals. No trimming, no normalization: what the sender typed is what is
//! matched and what is stored.

use crate::config::BotConfig;

/// The message being replied to, as far as parsing cares: its text (absent
/// for media-only messages) and whether it carries media.
#[derive(Debug, Clone, Copy)]
pub struct ReplyView<'a> {
    pub text: Option<&'a str>,
    pub has_media: bool,
}

/// Borrowed view of an inbound message.
#[derive(Debug, Clone, Copy)]
pub struct MessageView<'a> {
    pub text: &'a str,
    pub reply: Option<ReplyView<'a>>,
}

/// A recognized command. Reply-driven variants carry the first line of the
/// replied-to request (the list name is recovered from it) and, where the
/// operation reads extra fields, the payload lines of the current message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The configured greeting trigger. Emitted alongside any hashtag command
    /// the same message may also contain.
    Greeting,
    Request {
        lines: Vec<String>,
    },
    Payment {
        lines: Vec<String>,
        reply_first_line: String,
    },
    Paid {
        reply_first_line: String,
    },
    Feedback {
        lines: Vec<String>,
        reply_first_line: String,
    },
    Rejection {
        reply_first_line: String,
    },
    WrongHashtag,
    MissingReply,
    ReplyIsMedia,
    IncorrectReply,
}

/// List name embedded in a request's first line: everything after the first
/// `_`. A line without a delimiter yields itself, which then simply fails the
/// list-existence check downstream.
pub fn list_name(first_line: &str) -> &str {
    match first_line.split_once('_') {
        Some((_, rest)) => rest,
        None => first_line,
    }
}

/// Parses one message into zero, one, or two commands (a greeting does not
/// preclude hashtag processing of the same text).
pub fn parse(view: &MessageView<'_>, config: &BotConfig) -> Vec<Command> {
    let mut commands = Vec::new();

    if view.text == config.greeting_trigger {
        commands.push(Command::Greeting);
    }

    if !view.text.starts_with(&config.hashtag_marker) {
        return commands;
    }

    let lines: Vec<String> = view.text.split('\n').map(str::to_string).collect();

    if view.text.starts_with(&config.request_hashtag) {
        commands.push(Command::Request { lines });
        return commands;
    }

    let first_line = lines[0].as_str();
    if !config.action_hashtags().contains(&first_line) {
        commands.push(Command::WrongHashtag);
        return commands;
    }

    let Some(reply) = view.reply else {
        commands.push(Command::MissingReply);
        return commands;
    };

    let reply_text = match reply.text {
        Some(text) if !reply.has_media => text,
        _ => {
            commands.push(Command::ReplyIsMedia);
            return commands;
        }
    };

    if !reply_text.starts_with(&config.request_hashtag) {
        commands.push(Command::IncorrectReply);
        return commands;
    }

    let reply_first_line = reply_text
        .split('\n')
        .next()
        .unwrap_or_default()
        .to_string();

    if first_line == config.payment_hashtag {
        commands.push(Command::Payment {
            lines,
            reply_first_line,
        });
    } else if first_line == config.paid_hashtag {
        commands.push(Command::Paid { reply_first_line });
    } else if first_line == config.feedback_hashtag {
        commands.push(Command::Feedback {
            lines,
            reply_first_line,
        });
    } else {
        commands.push(Command::Rejection { reply_first_line });
    }

    commands
}
