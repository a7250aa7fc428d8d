//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责读取会话、逐个展示选择并输出报告，相当于演示的"展示层"。
//!
//! ## 模块划分
//!
//! ### `app` - 演示应用
//! - 管理应用生命周期（初始化、运行）
//! - 加载会话文件（Vec<Selection>）
//! - 输出全局统计信息
//!
//! ### `render` - 文本视图
//! - 文档视图、抽取视图、指标视图
//! - 指标表格和柱状图
//!
//! ## 层次关系
//!
//! ```text
//! app (处理 Vec<Selection>)
//!     ↓
//! workflow::DemoFlow (处理单个 Selection)
//!     ↓
//! services (能力层：catalog / validator / simulator / metrics)
//! ```

pub mod app;
pub mod render;

pub use app::{App, DemoStats};
