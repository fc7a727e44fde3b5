use anyhow::{Context, anyhow};
use chrono::{DateTime, FixedOffset, Utc};
use std::io::Write;
use tracing::{info, warn};

use crate::traits::telegram_api::TelegramApi;

/// Fixed label in front of the build timestamp
pub const NOTICE_LABEL: &str = "CI 构建完成，时间：";

/// UTC+8, no DST
pub const UTC8: FixedOffset = match FixedOffset::east_opt(8 * 3600) {
    Some(offset) => offset,
    None => panic!("UTC+8 is within the ±24h FixedOffset range"),
};
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats `now` as wall-clock time in UTC+8, `YYYY-MM-DD HH:MM:SS`.
pub fn timestamp_utc8(now: DateTime<Utc>) -> String {
    now.with_timezone(&UTC8).format(TIMESTAMP_FORMAT).to_string()
}

pub fn notice_text(now: DateTime<Utc>) -> String {
    format!("{}{}", NOTICE_LABEL, timestamp_utc8(now))
}

/// Posts the build notice. A rejected notice is reported and returns `Ok(false)`;
/// only a transport failure is an error.
pub async fn send_notice<W: Write>(
    api: &dyn TelegramApi,
    now: DateTime<Utc>,
    out: &mut W,
) -> anyhow::Result<bool> {
    let text = notice_text(now);
    info!(text = %text, "sending build notice");

    let response = api
        .send_text(&text)
        .await
        .map_err(|e| anyhow!(e))
        .context("发送通知消息时网络错误")?;

    if response.is_success() {
        writeln!(out, "通知消息发送成功")?;
        Ok(true)
    } else {
        warn!(status = response.status, description = ?response.description(), "build notice rejected");
        writeln!(out, "通知消息发送失败: HTTP {}", response.status)?;
        writeln!(out, "{}", response.body)?;
        Ok(false)
    }
}
