//! Bot configuration: hashtag literals, status labels, list names and the
//! reply pools, loaded from a JSON file once at startup and validated before
//! anything touches the network.
//!
//! Secrets (gateway token, spreadsheet id, store token) stay in the
//! environment and are read in `main.rs`; this file only describes behavior.

use std::fs;
use std::path::Path;

use chrono_tz::Tz;
use serde::Deserialize;
use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

fn default_job_delay_secs() -> u64 {
    5
}

fn default_timezone() -> String {
    "Europe/Moscow".to_string()
}

/// Everything the bot needs to know about how commands look and how to answer
/// them. Field names mirror the keys of `Config.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BotConfig {
    /// Literal prefix that marks a message as a structured command (`#`).
    pub hashtag_marker: String,
    /// Hashtag that opens a new order; the list name follows after `_` in the
    /// same line (`#request_Shop1`).
    pub request_hashtag: String,
    pub payment_hashtag: String,
    pub paid_hashtag: String,
    pub feedback_hashtag: String,
    pub rejection_hashtag: String,
    /// Exact message text that summons a friendly greeting.
    pub greeting_trigger: String,

    /// Written into any order field the sender left out.
    pub empty_placeholder: String,
    /// Prepended to the sender's username when it is stored or echoed (`@`).
    pub handle_prefix: String,

    /// Status label a freshly created order gets.
    pub ordered_status: String,
    /// Status label written by the paid command.
    pub paid_status: String,

    /// Sheet holding one summary row per day.
    pub payments_list: String,
    /// Sheet excluded from aggregation alongside the payments list.
    pub summary_list: String,

    /// IANA timezone the daily job uses for its midnight boundary.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Pause between per-list reads in the daily job, to stay under the
    /// store's rate limits.
    #[serde(default = "default_job_delay_secs")]
    pub job_delay_secs: u64,

    pub greeting_replies: Vec<String>,
    pub request_replies: Vec<String>,
    pub payment_replies: Vec<String>,
    pub paid_replies: Vec<String>,
    pub feedback_replies: Vec<String>,
    pub rejection_replies: Vec<String>,

    pub wrong_hashtag_notice: String,
    pub missing_reply_notice: String,
    pub media_reply_notice: String,
    pub incorrect_reply_notice: String,
    pub list_not_found_notice: String,
}

impl BotConfig {
    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: BotConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// The four hashtags that must arrive as a reply to a request message.
    pub fn action_hashtags(&self) -> [&str; 4] {
        [
            &self.payment_hashtag,
            &self.paid_hashtag,
            &self.feedback_hashtag,
            &self.rejection_hashtag,
        ]
    }

    /// Parsed timezone. `validate` guarantees the string is a known zone.
    pub fn tz(&self) -> Tz {
        self.timezone.parse().unwrap_or(chrono_tz::UTC)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hashtag_marker.is_empty() {
            return Err(ConfigError::Invalid(
                "hashtagMarker must not be empty".to_string(),
            ));
        }

        let tagged = [
            ("requestHashtag", &self.request_hashtag),
            ("paymentHashtag", &self.payment_hashtag),
            ("paidHashtag", &self.paid_hashtag),
            ("feedbackHashtag", &self.feedback_hashtag),
            ("rejectionHashtag", &self.rejection_hashtag),
        ];
        for (name, tag) in tagged {
            if !tag.starts_with(&self.hashtag_marker) {
                return Err(ConfigError::Invalid(format!(
                    "{} must start with the hashtag marker `{}`",
                    name, self.hashtag_marker
                )));
            }
        }

        let pools = [
            ("greetingReplies", &self.greeting_replies),
            ("requestReplies", &self.request_replies),
            ("paymentReplies", &self.payment_replies),
            ("paidReplies", &self.paid_replies),
            ("feedbackReplies", &self.feedback_replies),
            ("rejectionReplies", &self.rejection_replies),
        ];
        for (name, pool) in pools {
            if pool.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "{} must contain at least one reply",
                    name
                )));
            }
        }

        if self.timezone.parse::<Tz>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "unknown timezone `{}`",
                self.timezone
            )));
        }

        if self.payments_list.is_empty() || self.summary_list.is_empty() {
            return Err(ConfigError::Invalid(
                "paymentsList and summaryList must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
