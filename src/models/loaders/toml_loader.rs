use crate::error::{AppError, AppResult, FileError, SessionError};
use crate::models::selection::SessionFile;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 解析会话文件内容
///
/// 至少需要一个 `[[selection]]`。
pub fn parse_session(content: &str) -> AppResult<SessionFile> {
    let session: SessionFile = toml::from_str(content)?;

    if session.selections.is_empty() {
        return Err(SessionError::NoSelections.into());
    }

    Ok(session)
}

/// 从 TOML 文件加载会话
pub async fn load_session_file(session_file_path: &Path) -> Result<SessionFile> {
    if !session_file_path.exists() {
        return Err(AppError::from(FileError::NotFound {
            path: session_file_path.display().to_string(),
        })
        .into());
    }

    let content = fs::read_to_string(session_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(session_file_path.display().to_string(), e))?;

    let mut session = parse_session(&content)
        .with_context(|| format!("无法解析会话文件: {}", session_file_path.display()))?;

    session.file_path = Some(session_file_path.to_string_lossy().to_string());

    tracing::info!(
        "成功加载 {} 个选择: {}",
        session.selections.len(),
        session_file_path.display()
    );

    Ok(session)
}
