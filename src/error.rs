use thiserror::Error;

/// 应用程序错误类型
///
/// 核心的查找与模拟函数都是全函数，不会返回错误；这里只覆盖配置、会话文件和报告文件。
#[derive(Debug, Error)]
pub enum AppError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    #[error("会话文件错误: {0}")]
    Session(#[from] SessionError),
    #[error("文件错误: {0}")]
    File(#[from] FileError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 配置值不合法
    #[error("配置项 {name} 的值 '{value}' 不合法: {reason}")]
    InvalidValue {
        name: String,
        value: String,
        reason: String,
    },
}

/// 会话文件错误
#[derive(Debug, Error)]
pub enum SessionError {
    /// TOML 解析失败
    #[error("TOML解析失败: {source}")]
    ParseFailed {
        #[source]
        source: toml::de::Error,
    },
    /// 会话文件中没有任何选择
    #[error("会话文件中没有任何 [[selection]]")]
    NoSelections,
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Session(SessionError::ParseFailed { source: err })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建配置值错误
    pub fn invalid_config(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        AppError::Config(ConfigError::InvalidValue {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        })
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
