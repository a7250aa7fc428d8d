use crate::error::{AppError, AppResult};

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 会话文件（TOML，包含若干 [[selection]]）
    pub session_file: String,
    /// 输出报告文件
    pub report_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 柱状图最长的柱宽（字符数）
    pub chart_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_file: "sessions/demo.toml".to_string(),
            report_file: "demo_report.txt".to_string(),
            verbose_logging: false,
            chart_width: 40,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            session_file: std::env::var("SESSION_FILE").unwrap_or(default.session_file),
            report_file: std::env::var("REPORT_FILE").unwrap_or(default.report_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            chart_width: std::env::var("CHART_WIDTH").ok().and_then(|v| v.parse().ok()).unwrap_or(default.chart_width),
        }
    }

    /// 检查配置是否可用
    pub fn validate(&self) -> AppResult<()> {
        if self.chart_width == 0 {
            return Err(AppError::invalid_config("CHART_WIDTH", self.chart_width, "柱宽必须大于 0"));
        }
        if self.session_file.trim().is_empty() {
            return Err(AppError::invalid_config("SESSION_FILE", &self.session_file, "路径不能为空"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_chart_width_is_rejected() {
        let config = Config {
            chart_width: 0,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("CHART_WIDTH"));
    }
}
