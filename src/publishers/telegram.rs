use async_trait::async_trait;
use bon::Builder;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use tokio::fs::File;
use tracing::{debug, error};

use crate::models::method::ApiMethod;
use crate::models::types::{ApiResponse, BotToken, ChatId};
use crate::services::settings::Settings;
use crate::traits::telegram_api::TelegramApi;

/// A real implementation of the `TelegramApi` trait that sends HTTP requests to the Telegram Bot API.
#[derive(Builder)]
pub struct RealTelegramApi {
    #[builder(default)]
    pub client: Client,
    #[builder(into)]
    pub base_url: String,
    pub token: BotToken,
    pub chat_id: ChatId,
}

impl RealTelegramApi {
    /// Creates a client for the chat and endpoint described by `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::builder()
            .base_url(settings.api_base_url.clone())
            .token(settings.bot_token.clone())
            .chat_id(settings.chat_id.clone())
            .build()
    }

    async fn collect(
        &self,
        method: ApiMethod,
        response: reqwest::Response,
    ) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            let e = e.without_url();
            error!(method = %method, error = %e, "failed to read Telegram response body");
            e
        })?;
        debug!(method = %method, status, body_len = body.len(), "Telegram response");
        Ok(ApiResponse::new(status, body))
    }
}

#[async_trait]
impl TelegramApi for RealTelegramApi {
    /// Posts `text` to `sendMessage` as `application/x-www-form-urlencoded`.
    async fn send_text(&self, text: &str) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>> {
        let method = ApiMethod::SendMessage;
        let url = method.url(&self.base_url, self.token.expose());
        let message = SendMessageForm {
            chat_id: self.chat_id.as_str(),
            text,
        };
        debug!(url = %method.redacted_url(&self.base_url), text_len = text.len(), "sending text message");

        let response = self
            .client
            .post(&url)
            .form(&message)
            .send()
            .await
            .map_err(|e| {
                // reqwest embeds the full URL (token included) in its Display
                let e = e.without_url();
                error!(error = %e, "HTTP error sending Telegram message");
                e
            })?;

        self.collect(method, response).await
    }

    /// Streams `file` to `sendDocument` as `multipart/form-data` with fields `chat_id` and `document`.
    async fn send_document(
        &self,
        file_name: &str,
        file: File,
        len: u64,
    ) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>> {
        let method = ApiMethod::SendDocument;
        let url = method.url(&self.base_url, self.token.expose());
        let form = Form::new()
            .text("chat_id", self.chat_id.to_string())
            .part(
                "document",
                Part::stream_with_length(file, len).file_name(file_name.to_string()),
            );
        debug!(url = %method.redacted_url(&self.base_url), file = file_name, size = len, "uploading document");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!(error = %e, file = file_name, "HTTP error uploading Telegram document");
                e
            })?;

        self.collect(method, response).await
    }
}

#[derive(Debug, Serialize)]
struct SendMessageForm<'a> {
    chat_id: &'a str,
    text: &'a str,
}
