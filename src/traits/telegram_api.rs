use async_trait::async_trait;
use tokio::fs::File;

use crate::models::types::ApiResponse;

/// `TelegramApi` is the capability the notifier and the file sender need from the Bot API.
///
/// The chat is fixed by the implementation, so callers only pass content. A returned
/// `ApiResponse` means the request reached the server; callers decide what its status means.
/// `Err` is reserved for transport failures (DNS, connect, TLS, body read).
#[async_trait]
pub trait TelegramApi: Send + Sync {
    /// Sends a text message to the configured chat.
    async fn send_text(&self, text: &str) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>>;

    /// Uploads the contents of `file` (`len` bytes) as a document named `file_name`
    /// to the configured chat. The file is consumed by the upload.
    async fn send_document(
        &self,
        file_name: &str,
        file: File,
        len: u64,
    ) -> Result<ApiResponse, Box<dyn std::error::Error + Send + Sync>>;
}
