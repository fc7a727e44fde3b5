use derive_more::Display;
use std::env;
use url::Url;

use crate::models::types::{BotToken, ChatId};

pub const BOT_TOKEN_VAR: &str = "BOT_TOKEN";
pub const CHAT_ID_VAR: &str = "CHAT_ID";
pub const API_BASE_URL_VAR: &str = "TELEGRAM_API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "https://api.telegram.org";

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SettingsError {
    /// One or more required variables are unset or blank; the list is for logs, the text is fixed
    #[display("请在 GitHub Actions Secrets 中设置 BOT_TOKEN 和 CHAT_ID")]
    Missing(Vec<&'static str>),
    #[display("环境变量 TELEGRAM_API_BASE_URL 无效: {value} ({reason})")]
    InvalidBaseUrl { value: String, reason: String },
}

impl std::error::Error for SettingsError {}

/// Credentials and endpoint for one run. Built once in `main`, then passed down.
#[derive(Debug, Clone)]
pub struct Settings {
    pub bot_token: BotToken,
    pub chat_id: ChatId,
    pub api_base_url: String,
}

impl Settings {
    /// Reads `BOT_TOKEN`, `CHAT_ID` and the optional `TELEGRAM_API_BASE_URL` from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] but over an arbitrary key lookup.
    ///
    /// Blank values are treated as unset. Both required variables are checked before
    /// returning, so the error names every missing one.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let token = read(BOT_TOKEN_VAR);
        let chat_id = read(CHAT_ID_VAR);

        let (token, chat_id) = match (token, chat_id) {
            (Some(t), Some(c)) => (t, c),
            (t, c) => {
                let mut missing = Vec::new();
                if t.is_none() {
                    missing.push(BOT_TOKEN_VAR);
                }
                if c.is_none() {
                    missing.push(CHAT_ID_VAR);
                }
                return Err(SettingsError::Missing(missing));
            }
        };

        let api_base_url = match read(API_BASE_URL_VAR) {
            Some(raw) => parse_base_url(&raw)?,
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        Ok(Self {
            bot_token: BotToken::from(token),
            chat_id: ChatId::from(chat_id),
            api_base_url,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<String, SettingsError> {
    let invalid = |reason: String| SettingsError::InvalidBaseUrl {
        value: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    Ok(raw.trim_end_matches('/').to_string())
}
