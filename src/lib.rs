//! # HR Extraction Demo
//!
//! 对比传统 OCR 与 LLM 抽取在合成 HR 文档上效果的演示程序。
//! 所有"抽取"都是对固定数据的确定性字符串变换，所有"指标"都来自静态表。
//!
//! ## 架构设计
//!
//! ### ① 模型层（Models）
//! - `models/` - 文档、抽取结果、指标、选择等值类型，以及会话文件加载
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯函数核心，不持有状态、不打日志
//! - `document_catalog` - 按 (类型, 复杂度) 查找合成文档
//! - `dataset_validator` - 文档校验与列诊断
//! - `extraction_simulator` - OCR / LLM 抽取模拟
//! - `metrics_table` - 静态指标表与问答打分
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - `DemoFlow` 定义"一次选择"的完整流程（查找 → 校验 → 抽取 → 指标）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 读取会话、逐个展示、输出报告
//! - `orchestrator/render` - 文本视图与柱状图

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ComplexityLevel, DocumentRecord, DocumentType, Selection};
pub use orchestrator::{App, DemoStats};
pub use workflow::{DemoFlow, DemoOutcome};
