pub mod method;
pub mod types;

pub use method::ApiMethod;
pub use types::{ApiResponse, BotToken, ChatId, SendSummary, TelegramReply};
