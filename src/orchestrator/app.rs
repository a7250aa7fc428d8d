//! 演示应用 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：校验配置、初始化报告文件、加载会话文件
//! 2. **逐个展示**：对会话中的每个选择运行 `DemoFlow`，渲染文本视图
//! 3. **输出**：视图打印到标准输出，同时追加到报告文件
//! 4. **全局统计**：汇总已展示和无对应文档的数量

use crate::config::Config;
use crate::models::{load_session_file, SessionFile};
use crate::orchestrator::render;
use crate::utils::logging;
use crate::workflow::{DemoFlow, DemoOutcome};
use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    session: SessionFile,
    flow: DemoFlow,
}

/// 展示统计
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DemoStats {
    pub shown: usize,
    pub absent: usize,
    pub total: usize,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        config.validate()?;

        info!("\n📁 正在加载会话文件: {}", config.session_file);
        let session = load_session_file(Path::new(&config.session_file)).await?;

        Ok(Self::with_session(config, session))
    }

    /// 使用已加载的会话创建应用
    pub fn with_session(config: Config, session: SessionFile) -> Self {
        let flow = DemoFlow::new(&config);
        Self {
            config,
            session,
            flow,
        }
    }

    /// 运行应用主逻辑
    pub fn run(&self) -> Result<DemoStats> {
        logging::init_report_file(&self.config.report_file)?;
        logging::log_startup(self.session.selections.len());

        let mut stats = DemoStats {
            total: self.session.selections.len(),
            ..Default::default()
        };

        for (idx, selection) in self.session.selections.iter().enumerate() {
            info!(
                "\n📦 展示第 {}/{} 个选择",
                idx + 1,
                self.session.selections.len()
            );

            let outcome = self.flow.run(selection);
            if outcome.record.is_some() {
                stats.shown += 1;
            } else {
                stats.absent += 1;
                warn!("{} ⚠️ 没有对应的合成文档", selection);
            }

            let rendered = self.render(&outcome);
            println!("{}", rendered);
            logging::append_report(&self.config.report_file, &rendered)?;
            logging::append_report(&self.config.report_file, &export_json(&outcome))?;
        }

        logging::print_final_stats(
            stats.shown,
            stats.absent,
            stats.total,
            &self.config.report_file,
        );

        Ok(stats)
    }

    fn render(&self, outcome: &DemoOutcome) -> String {
        [
            render::render_document_view(outcome),
            render::render_extraction_view(outcome),
            render::render_metrics_view(outcome, self.config.chart_width),
        ]
        .join("\n")
    }
}

/// 报告中附带的机器可读结果
fn export_json(outcome: &DemoOutcome) -> String {
    serde_json::to_string_pretty(outcome).unwrap_or_default()
}
