use serde::{Deserialize, Serialize};

/// 传统 OCR 方法名
pub const TRADITIONAL_OCR: &str = "Traditional OCR";

/// 默认的抽取方法
pub const DEFAULT_METHOD: &str = "TalentMine (Claude v3 Haiku)";

/// 参与指标对比的全部方法（图表顺序）
pub const COMPARED_METHODS: [&str; 14] = [
    "Traditional OCR",
    "AWS Textract",
    "AWS Textract Visual Q&A",
    "TalentMine (Claude v3 Haiku)",
    "Claude Instant",
    "Claude v2",
    "Claude v2.1",
    "Claude v3 Sonnet",
    "Claude v3 Opus",
    "Claude v3.5 Haiku",
    "Claude v3.5 Sonnet v1/v2",
    "Claude v3.7 Sonnet",
    "Claude v4 Sonnet",
    "Claude v4 Opus",
];

/// 抽取视图中可选的方法
pub const SELECTABLE_METHODS: [&str; 4] = [
    "Traditional OCR",
    "TalentMine (Claude v3 Haiku)",
    "AWS Textract",
    "AWS Textract Visual Q&A",
];

/// 抽取结果的形态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExtractionKind {
    /// OCR 风格的纯文本，丢失结构
    RawText,
    /// LLM 风格的结构化表格
    EnrichedTable,
}

impl ExtractionKind {
    /// 方法名决定走哪条模拟路径：只有传统 OCR 走纯文本，其余都视为 LLM 抽取
    pub fn for_method(method_name: &str) -> Self {
        if method_name == TRADITIONAL_OCR {
            ExtractionKind::RawText
        } else {
            ExtractionKind::EnrichedTable
        }
    }
}

/// 单个方法的模拟抽取输出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub method_name: String,
    pub kind: ExtractionKind,
    pub content: String,
    pub is_applicable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_for_method() {
        assert_eq!(ExtractionKind::for_method(TRADITIONAL_OCR), ExtractionKind::RawText);
        assert_eq!(
            ExtractionKind::for_method("AWS Textract"),
            ExtractionKind::EnrichedTable
        );
        assert_eq!(ExtractionKind::for_method(DEFAULT_METHOD), ExtractionKind::EnrichedTable);
    }

    #[test]
    fn test_selectable_methods_are_compared() {
        for method in SELECTABLE_METHODS {
            assert!(COMPARED_METHODS.contains(&method), "{} 不在对比列表中", method);
        }
    }
}
