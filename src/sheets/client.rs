//! Thin REST client for the spreadsheet that holds all durable state.
//!
//! The bot never keeps its own copy of a list: every command re-reads the
//! ranges it needs, so external edits (renamed lists, deleted rows) are picked
//! up on the next message. Token acquisition lives outside the bot; the
//! client just sends the bearer token it was given.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors from the spreadsheet API.
#[derive(Debug, Error)]
pub enum SheetsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("store returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// One pending cell write, addressed by a full A1 range.
#[derive(Debug, Clone)]
pub struct CellWrite {
    pub range: String,
    pub value: String,
}

impl CellWrite {
    pub fn new(list: &str, column: &str, row: u32, value: impl Into<String>) -> Self {
        Self {
            range: format!("{list}!{column}{row}"),
            value: value.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Option<Vec<Vec<Value>>>,
}

#[derive(Debug, Serialize)]
struct WriteRange<'a> {
    range: &'a str,
    values: [[&'a str; 1]; 1],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchUpdateBody<'a> {
    value_input_option: &'static str,
    data: Vec<WriteRange<'a>>,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct SheetInfo {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetInfo {
    #[serde(default)]
    sheets: Vec<SheetInfo>,
}

/// Client for one spreadsheet.
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    token: String,
}

impl SheetsClient {
    pub const DEFAULT_BASE_URL: &'static str = "https://sheets.googleapis.com/v4";

    pub fn new(spreadsheet_id: String, token: String) -> Result<Self, SheetsError> {
        Self::with_base_url(Self::DEFAULT_BASE_URL.to_string(), spreadsheet_id, token)
    }

    pub fn with_base_url(
        base_url: String,
        spreadsheet_id: String,
        token: String,
    ) -> Result<Self, SheetsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            http,
            base_url,
            spreadsheet_id,
            token,
        })
    }

    /// Titles of every sheet in the spreadsheet. Fetched fresh on each call;
    /// existence is never cached.
    pub async fn sheet_titles(&self) -> Result<Vec<String>, SheetsError> {
        let url = format!(
            "{}/spreadsheets/{}?fields=sheets.properties.title",
            self.base_url, self.spreadsheet_id
        );
        let info: SpreadsheetInfo = self.get_json(&url).await?;
        Ok(info.sheets.into_iter().map(|s| s.properties.title).collect())
    }

    /// Whether a sheet with this exact title exists right now.
    pub async fn list_exists(&self, name: &str) -> Result<bool, SheetsError> {
        Ok(self.sheet_titles().await?.iter().any(|t| t == name))
    }

    /// All values of one column, top to bottom. Rows with an empty cell in
    /// this column come back as empty strings; an empty range is `vec![]`.
    pub async fn read_column(&self, list: &str, column: &str) -> Result<Vec<String>, SheetsError> {
        let url = format!(
            "{}/spreadsheets/{}/values/{}!{}:{}",
            self.base_url, self.spreadsheet_id, list, column, column
        );
        let range: ValueRange = self.get_json(&url).await?;
        let rows = range.values.unwrap_or_default();
        Ok(rows.into_iter().map(|row| first_cell(&row)).collect())
    }

    /// 1-based row of the first cell in `column` that equals `key` exactly.
    pub async fn find_row(
        &self,
        list: &str,
        column: &str,
        key: &str,
    ) -> Result<Option<u32>, SheetsError> {
        let values = self.read_column(list, column).await?;
        Ok(values
            .iter()
            .position(|v| v == key)
            .map(|i| (i + 1) as u32))
    }

    /// Batched best-effort cell writes; values go through the store's own
    /// input parsing, matching what a human typing them would get.
    pub async fn batch_update(&self, writes: &[CellWrite]) -> Result<(), SheetsError> {
        if writes.is_empty() {
            return Ok(());
        }
        let body = BatchUpdateBody {
            value_input_option: "USER_ENTERED",
            data: writes
                .iter()
                .map(|w| WriteRange {
                    range: &w.range,
                    values: [[w.value.as_str()]],
                })
                .collect(),
        };
        let url = format!(
            "{}/spreadsheets/{}/values:batchUpdate",
            self.base_url, self.spreadsheet_id
        );
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Clears an A1 range. Cleared cells stop matching lookups but the row
    /// itself keeps its position.
    pub async fn clear_range(&self, range: &str) -> Result<(), SheetsError> {
        let url = format!(
            "{}/spreadsheets/{}/values/{}:clear",
            self.base_url, self.spreadsheet_id, range
        );
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, SheetsError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn check_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, SheetsError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(SheetsError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            })
        }
    }
}

/// The store hands cells back as JSON values; anything non-string (bare
/// numbers, booleans) is rendered to its literal text.
fn first_cell(row: &[Value]) -> String {
    match row.first() {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}
