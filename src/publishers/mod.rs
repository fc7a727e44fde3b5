pub mod telegram;

pub use telegram::RealTelegramApi;
