use serde::{Deserialize, Serialize};

/// 某个方法在某类文档上的表现
///
/// `accuracy` 与 `information_not_found` 各自位于 [0, 1]，两者之和不要求为 1
/// （部分回答正确但并未缺失的情况）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsEntry {
    pub document_type: String,
    pub method_name: String,
    pub accuracy: f64,
    pub information_not_found: f64,
}

impl MetricsEntry {
    pub fn new(
        document_type: impl Into<String>,
        method_name: impl Into<String>,
        accuracy: f64,
        information_not_found: f64,
    ) -> Self {
        Self {
            document_type: document_type.into(),
            method_name: method_name.into(),
            accuracy,
            information_not_found,
        }
    }

    /// 无数据时的占位条目 (0.0, 0.0)
    pub fn unknown(document_type: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self::new(document_type, method_name, 0.0, 0.0)
    }
}

/// 按问答对计算出的得分
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundTruthScore {
    pub accuracy: f64,
    pub information_not_found: f64,
}
