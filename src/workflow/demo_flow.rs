//! 演示流程 - 流程层
//!
//! 核心职责：定义"一次选择"的完整处理流程
//!
//! 流程顺序：
//! 1. 查找文档 → 校验
//! 2. 模拟抽取（选中方法 + OCR 对比）
//! 3. 查指标

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::dataset::{ColumnarDataset, DatasetReport};
use crate::models::document::DocumentRecord;
use crate::models::extraction::ExtractionResult;
use crate::models::metrics::MetricsEntry;
use crate::models::selection::Selection;
use crate::services::{
    compare, diagnose_columns, is_valid, lookup_document, metrics_comparison, try_lookup_metrics,
};
use crate::utils::logging::truncate_text;

/// 一次选择的处理结果
///
/// 文档缺失时 `record` 为 `None`，后续各项为空。
#[derive(Debug, Clone, Serialize)]
pub struct DemoOutcome {
    pub selection: Selection,
    pub record: Option<DocumentRecord>,
    pub is_valid: bool,
    /// 文档表格的列诊断
    pub table_report: Option<DatasetReport>,
    /// OCR 输出在前，选中方法（非 OCR 时）在后
    pub extractions: Vec<ExtractionResult>,
    /// 选中方法的指标，没有数据时为 `None`
    pub selected_metrics: Option<MetricsEntry>,
    /// 全部方法的指标（图表用）
    pub comparison: Vec<MetricsEntry>,
}

/// 演示流程
///
/// - 按顺序调用各项核心能力
/// - 不持有任何会话状态，选择由调用方显式传入
pub struct DemoFlow {
    verbose_logging: bool,
}

impl DemoFlow {
    /// 创建新的演示流程
    pub fn new(config: &Config) -> Self {
        Self {
            verbose_logging: config.verbose_logging,
        }
    }

    pub fn run(&self, selection: &Selection) -> DemoOutcome {
        info!("{} 📄 查找合成文档...", selection);

        let record = lookup_document(selection.document_type, &selection.complexity_level);
        let Some(doc) = record.as_ref() else {
            warn!("{} ⚠️ 所选类型与复杂度没有对应的合成文档", selection);
            return DemoOutcome {
                selection: selection.clone(),
                record: None,
                is_valid: false,
                table_report: None,
                extractions: Vec::new(),
                selected_metrics: None,
                comparison: Vec::new(),
            };
        };

        let valid = is_valid(Some(doc));
        if valid {
            info!("{} ✓ 文档校验通过，共 {} 个条目", selection, doc.fields.len());
        } else {
            warn!("{} ⚠️ 文档校验失败，条目为空", selection);
        }

        let table_report = doc.table.as_deref().map(|table| {
            let report = diagnose_columns(&ColumnarDataset::from_table(table));
            debug!(
                "{} 表格诊断: {} 列, 主键唯一: {}",
                selection,
                report.column_names.len(),
                report.primary_key_unique
            );
            report
        });

        // ========== 模拟抽取 ==========
        let extractions = if valid {
            compare(Some(doc), &selection.extraction_method)
        } else {
            Vec::new()
        };

        if self.verbose_logging {
            self.log_extractions(selection, &extractions);
        }

        // ========== 指标 ==========
        let document_label = selection.document_type.label();
        let selected_metrics = try_lookup_metrics(document_label, &selection.extraction_method);
        let comparison = metrics_comparison(document_label);

        match &selected_metrics {
            Some(entry) => info!(
                "{} ✓ 准确率 {:.2}, 未找到率 {:.2}",
                selection, entry.accuracy, entry.information_not_found
            ),
            None => info!("{} 该组合没有指标数据", selection),
        }

        DemoOutcome {
            selection: selection.clone(),
            record,
            is_valid: valid,
            table_report,
            extractions,
            selected_metrics,
            comparison,
        }
    }

    // ========== 日志辅助方法 ==========

    fn log_extractions(&self, selection: &Selection, extractions: &[ExtractionResult]) {
        for result in extractions {
            info!(
                "{}   {} ({:?}): {}",
                selection,
                result.method_name,
                result.kind,
                truncate_text(&result.content, 80)
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{ComplexityLevel, DocumentType};
    use crate::models::extraction::{ExtractionKind, TRADITIONAL_OCR};

    fn flow() -> DemoFlow {
        DemoFlow::new(&Config::default())
    }

    #[test]
    fn test_benefits_plan_with_llm_method() {
        let selection = Selection::new(
            DocumentType::BenefitsPlan,
            ComplexityLevel::tag("Simple"),
            "TalentMine (Claude v3 Haiku)",
        );
        let outcome = flow().run(&selection);

        assert!(outcome.is_valid);
        assert_eq!(outcome.extractions.len(), 2);
        assert_eq!(outcome.extractions[0].kind, ExtractionKind::RawText);
        assert_eq!(outcome.extractions[1].kind, ExtractionKind::EnrichedTable);

        let metrics = outcome.selected_metrics.unwrap();
        assert_eq!((metrics.accuracy, metrics.information_not_found), (0.90, 0.00));
        assert_eq!(outcome.comparison.len(), 14);

        let report = outcome.table_report.unwrap();
        assert_eq!(report.column_names.len(), 4);
        assert!(report.primary_key_unique);
    }

    #[test]
    fn test_ocr_selection_has_single_extraction() {
        let selection = Selection::new(
            DocumentType::CompensationMatrix,
            ComplexityLevel::tag("Hierarchical"),
            TRADITIONAL_OCR,
        );
        let outcome = flow().run(&selection);

        assert_eq!(outcome.extractions.len(), 1);
        assert!(outcome.selected_metrics.is_none());
        assert!(outcome.comparison.is_empty());
    }

    #[test]
    fn test_absent_document() {
        let selection = Selection::new(
            DocumentType::PerformanceReview,
            ComplexityLevel::tag("Simple"),
            TRADITIONAL_OCR,
        );
        let outcome = flow().run(&selection);

        assert!(outcome.record.is_none());
        assert!(!outcome.is_valid);
        assert!(outcome.extractions.is_empty());
        assert!(outcome.comparison.is_empty());
    }
}
