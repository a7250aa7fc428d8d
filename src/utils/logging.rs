/// 日志工具模块
///
/// 提供日志初始化、报告文件和格式化输出的辅助函数
use crate::error::{AppError, AppResult};
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug 或 info。重复调用不会报错。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化报告文件
///
/// # 参数
/// - `report_file_path`: 报告文件路径
pub fn init_report_file(report_file_path: &str) -> AppResult<()> {
    let header = format!(
        "{}\nHR 文档抽取对比报告 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(report_file_path, header)
        .map_err(|e| AppError::file_write_failed(report_file_path, e))
}

/// 向报告文件追加内容
pub fn append_report(report_file_path: &str, content: &str) -> AppResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(report_file_path)
        .map_err(|e| AppError::file_write_failed(report_file_path, e))?;

    writeln!(file, "{}", content).map_err(|e| AppError::file_write_failed(report_file_path, e))
}

/// 记录程序启动信息
///
/// # 参数
/// - `selection_count`: 会话中的选择数量
pub fn log_startup(selection_count: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - HR 文档抽取对比演示");
    info!("📋 待展示的选择: {}", selection_count);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `shown`: 成功展示的数量
/// - `absent`: 没有对应文档的数量
/// - `total`: 总数
/// - `report_file_path`: 报告文件路径
pub fn print_final_stats(shown: usize, absent: usize, total: usize, report_file_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部展示完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 已展示: {}/{}", shown, total);
    info!("❌ 无对应文档: {}", absent);
    info!("{}", "=".repeat(60));
    info!("\n报告已保存至: {}", report_file_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("HealthPlus", 6), "Health...");
        assert_eq!(truncate_text("福利计划说明", 4), "福利计划...");
    }

    #[test]
    fn test_report_file_header_and_append() {
        let path = std::env::temp_dir().join(format!(
            "hr_extraction_demo_report_{}.txt",
            std::process::id()
        ));
        let path_str = path.to_string_lossy().to_string();

        init_report_file(&path_str).unwrap();
        append_report(&path_str, "Benefits Plan / Simple").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with(&"=".repeat(60)));
        assert!(content.contains("HR 文档抽取对比报告"));
        assert!(content.ends_with("Benefits Plan / Simple\n"));

        fs::remove_file(&path).unwrap();
    }
}
