use derive_more::{AsRef, Display, From, Into};
use serde::Deserialize;
use std::fmt;

/// Target chat identifier: a numeric id (`-1001234567890`) or a public `@channel` name
#[derive(Debug, Clone, PartialEq, Eq, Hash, From, Into, Display, AsRef)]
#[from(String, &str)]
pub struct ChatId(String);

impl ChatId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Bot API token. Never printed: `Debug` is redacted and there is no `Display`.
#[derive(Clone, PartialEq, Eq, From)]
#[from(String, &str)]
pub struct BotToken(String);

impl BotToken {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken(***)")
    }
}

/// Raw outcome of one Bot API call: HTTP status plus the untouched response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Only a plain 200 counts; every other status is a failure.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Telegram's `description` field, when the body is its JSON envelope.
    pub fn description(&self) -> Option<String> {
        serde_json::from_str::<TelegramReply>(&self.body)
            .ok()
            .and_then(|r| r.description)
    }
}

/// Envelope Telegram wraps every Bot API reply in
#[derive(Debug, Deserialize)]
pub struct TelegramReply {
    pub ok: bool,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

/// Per-run tally of what happened to the requested files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[display("sent={sent} failed={failed} missing={missing}")]
pub struct SendSummary {
    pub sent: usize,
    pub failed: usize,
    pub missing: usize,
}
