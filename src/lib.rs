pub mod models;
pub mod publishers;
pub mod services;
pub mod traits;

use chrono::Utc;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

use crate::models::types::SendSummary;
use crate::publishers::telegram::RealTelegramApi;
use crate::services::notifier::send_notice;
use crate::services::sender::send_files;
use crate::services::settings::{Settings, SettingsError};
use crate::traits::telegram_api::TelegramApi;

/// Which of the two flows a binary runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Timestamped notice first, then the files (`courier`)
    NoticeAndFiles,
    /// Files only (`courier-files`)
    FilesOnly,
}

/// How a run ended. Per-file failures still count as `Delivered`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    ConfigError,
    NothingToSend,
    Delivered(SendSummary),
    Interrupted,
}

impl Outcome {
    pub fn exit_status(&self) -> u8 {
        match self {
            Outcome::ConfigError | Outcome::Interrupted => 1,
            Outcome::NothingToSend | Outcome::Delivered(_) => 0,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        ExitCode::from(outcome.exit_status())
    }
}

/// Initialize structured logging on stderr (default to info if RUST_LOG not set).
/// Stdout stays reserved for the operator-facing status lines.
pub fn init_logging() {
    let log_spec = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(log_spec))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// High-level entrypoint over the process environment.
pub async fn run_from_env<W: Write>(files: &[PathBuf], mode: RunMode, out: &mut W) -> Outcome {
    run_with_settings(Settings::from_env(), files, mode, out).await
}

/// Same as [`run_from_env`] with settings read through `lookup`.
pub async fn run_with_lookup<F, W>(lookup: F, files: &[PathBuf], mode: RunMode, out: &mut W) -> Outcome
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    run_with_settings(Settings::from_lookup(lookup), files, mode, out).await
}

/// Check the settings and the file list, then talk to the real Bot API.
async fn run_with_settings<W: Write>(
    settings: Result<Settings, SettingsError>,
    files: &[PathBuf],
    mode: RunMode,
    out: &mut W,
) -> Outcome {
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, detail = ?e, "configuration error");
            let _ = writeln!(out, "错误: {}", e);
            return Outcome::ConfigError;
        }
    };

    if files.is_empty() {
        info!("no files given");
        let _ = writeln!(out, "没有指定要发送的文件");
        return Outcome::NothingToSend;
    }

    info!(chat_id = %settings.chat_id, files = files.len(), mode = ?mode, "starting delivery");
    let api = RealTelegramApi::from_settings(&settings);
    match deliver(&api, files, mode, out).await {
        Ok(summary) => Outcome::Delivered(summary),
        Err(e) => {
            error!(error = %format!("{:#}", e), "delivery interrupted");
            let _ = writeln!(out, "发送中断: {:#}", e);
            Outcome::Interrupted
        }
    }
}

/// Notice (if the mode asks for it) followed by the files, against any `TelegramApi`.
/// A rejected notice does not stop the files.
pub async fn deliver<W: Write>(
    api: &dyn TelegramApi,
    files: &[PathBuf],
    mode: RunMode,
    out: &mut W,
) -> anyhow::Result<SendSummary> {
    if mode == RunMode::NoticeAndFiles {
        send_notice(api, Utc::now(), out).await?;
    }
    send_files(api, files, out).await
}
