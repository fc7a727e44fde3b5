//! In-memory `TelegramApi` double for unit tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::models::types::ApiResponse;
use crate::traits::telegram_api::TelegramApi;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Text(String),
    Document { name: String, bytes: Vec<u8> },
}

/// Records every call and answers with scripted statuses (200 once the script runs out).
pub struct RecordingApi {
    calls: Mutex<Vec<Call>>,
    statuses: Mutex<VecDeque<u16>>,
    transport_error: bool,
}

impl RecordingApi {
    pub fn with_statuses(statuses: &[u16]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            statuses: Mutex::new(statuses.iter().copied().collect()),
            transport_error: false,
        }
    }

    pub fn failing_transport() -> Self {
        Self {
            transport_error: true,
            ..Self::with_statuses(&[])
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: Call) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.lock().unwrap().push(call);
        if self.transport_error {
            return Err("connection refused".into());
        }
        let status = self.statuses.lock().unwrap().pop_front().unwrap_or(200);
        let body = if status == 200 {
            r#"{"ok":true}"#.to_string()
        } else {
            format!(r#"{{"ok":false,"error_code":{},"description":"scripted failure"}}"#, status)
        };
        Ok(ApiResponse::new(status, body))
    }
}

#[async_trait]
impl TelegramApi for RecordingApi {
    async fn send_text(&self, text: &str) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>> {
        self.answer(Call::Text(text.to_string()))
    }

    async fn send_document(
        &self,
        file_name: &str,
        mut file: File,
        _len: u64,
    ) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>> {
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).await?;
        self.answer(Call::Document {
            name: file_name.to_string(),
            bytes,
        })
    }
}
