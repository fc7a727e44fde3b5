use anyhow::{Context, anyhow};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tracing::{info, warn};

use crate::models::types::SendSummary;
use crate::traits::telegram_api::TelegramApi;

/// What happened to a single input path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Sent,
    Rejected,
    Unreadable,
    Missing,
}

/// Name the document is uploaded under: the last path component, or the whole path if there is none.
pub fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Uploads every path in order. Missing, unreadable and rejected files are reported and skipped;
/// only a transport failure stops the loop.
pub async fn send_files<W: Write>(
    api: &dyn TelegramApi,
    paths: &[PathBuf],
    out: &mut W,
) -> anyhow::Result<SendSummary> {
    let mut summary = SendSummary::default();
    for path in paths {
        match send_file(api, path, out).await? {
            FileOutcome::Sent => summary.sent += 1,
            FileOutcome::Rejected | FileOutcome::Unreadable => summary.failed += 1,
            FileOutcome::Missing => summary.missing += 1,
        }
    }
    info!(%summary, "file sending finished");
    Ok(summary)
}

pub async fn send_file<W: Write>(
    api: &dyn TelegramApi,
    path: &Path,
    out: &mut W,
) -> anyhow::Result<FileOutcome> {
    let metadata = if path.as_os_str().is_empty() {
        None
    } else {
        tokio::fs::metadata(path).await.ok()
    };
    let Some(metadata) = metadata else {
        warn!(path = %path.display(), "file not found or empty path, skipping");
        writeln!(out, "文件不存在或路径为空: {}", path.display())?;
        return Ok(FileOutcome::Missing);
    };

    if !metadata.is_file() {
        warn!(path = %path.display(), "not a regular file");
        writeln!(out, "文件读取失败: {} (不是普通文件)", path.display())?;
        return Ok(FileOutcome::Unreadable);
    }

    // Streamed from disk; the handle is dropped once the request body is consumed
    let file = match File::open(path).await {
        Ok(file) => file,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "file exists but cannot be opened");
            writeln!(out, "文件读取失败: {} ({})", path.display(), e)?;
            return Ok(FileOutcome::Unreadable);
        }
    };

    let name = document_name(path);
    let size = metadata.len();
    info!(file = %name, size, "uploading document");
    let response = api
        .send_document(&name, file, size)
        .await
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("上传文件 {} 时网络错误", name))?;

    if response.is_success() {
        writeln!(out, "成功发送: {}", name)?;
        Ok(FileOutcome::Sent)
    } else {
        warn!(file = %name, status = response.status, description = ?response.description(), "document rejected");
        writeln!(out, "发送失败: {}", name)?;
        writeln!(out, "{}", response.body)?;
        Ok(FileOutcome::Rejected)
    }
}
