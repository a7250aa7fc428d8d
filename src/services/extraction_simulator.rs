//! 抽取模拟 - 业务能力层
//!
//! 两种互相独立的模拟策略，都是确定性的字符串变换：
//! - OCR：拼接文档条目，丢掉 `:` 和 `-` 等结构标记，永远不还原表格
//! - LLM：原样嵌入文档表格，并声明保留了行列关系
//!
//! 不调用任何真实的 OCR 或模型。

use crate::models::document::DocumentRecord;
use crate::models::extraction::{ExtractionKind, ExtractionResult, TRADITIONAL_OCR};

/// OCR 输出固定后缀
pub const OCR_DISCLAIMER: &str = " (Simulated OCR errors may occur)";

/// LLM 抽取不适用时的固定提示
pub const LLM_NOT_APPLICABLE: &str = "LLM extraction not applicable or data missing.";

/// OCR 会丢失的结构标记
const STRUCTURE_MARKERS: &[char] = &[':', '-'];

/// 模拟传统 OCR 抽取
///
/// 记录缺失时返回空字符串。
pub fn simulate_ocr(record: Option<&DocumentRecord>) -> String {
    let Some(record) = record else {
        return String::new();
    };

    let text = record
        .fields
        .iter()
        .map(|field| field.replace(STRUCTURE_MARKERS, " "))
        .collect::<Vec<_>>()
        .join(" ");

    format!("{}{}", text.trim(), OCR_DISCLAIMER)
}

/// 模拟 LLM 语义增强抽取
///
/// 记录缺失、方法名为空或记录没有表格时，返回 [`LLM_NOT_APPLICABLE`]，从不返回空。
pub fn simulate_llm(record: Option<&DocumentRecord>, method_name: Option<&str>) -> String {
    let (Some(table), Some(method_name)) = (
        record.and_then(|r| r.table.as_deref()),
        method_name.filter(|name| !name.is_empty()),
    ) else {
        return LLM_NOT_APPLICABLE.to_string();
    };

    format!(
        "**LLM Model: {}**\n\n\
         Extracted Semantically Enriched Table Data:\n\n\
         ```\n{}\n```\n\
         (Simulated preservation of row-column relationships and contextual dependencies)",
        method_name, table
    )
}

/// 按方法名选择模拟策略，给出完整的抽取结果
pub fn simulate(record: Option<&DocumentRecord>, method_name: &str) -> ExtractionResult {
    let kind = ExtractionKind::for_method(method_name);

    let (content, is_applicable) = match kind {
        ExtractionKind::RawText => (simulate_ocr(record), record.is_some()),
        ExtractionKind::EnrichedTable => (
            simulate_llm(record, Some(method_name)),
            !method_name.is_empty() && record.is_some_and(DocumentRecord::has_table),
        ),
    };

    ExtractionResult {
        method_name: method_name.to_string(),
        kind,
        content,
        is_applicable,
    }
}

/// 对比视图：先给出 OCR 输出，选中的方法不是 OCR 时再给出该方法的输出
pub fn compare(record: Option<&DocumentRecord>, method_name: &str) -> Vec<ExtractionResult> {
    let mut results = vec![simulate(record, TRADITIONAL_OCR)];
    if method_name != TRADITIONAL_OCR {
        results.push(simulate(record, method_name));
    }
    results
}
