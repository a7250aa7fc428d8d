use serde::{Deserialize, Serialize};
use std::fmt;

/// 合成 HR 文档类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// 福利计划
    #[serde(rename = "Benefits Plan")]
    BenefitsPlan,
    /// 薪酬矩阵
    #[serde(rename = "Compensation Matrix")]
    CompensationMatrix,
    /// 绩效评估
    #[serde(rename = "Performance Review")]
    PerformanceReview,
}

impl DocumentType {
    /// 所有文档类型（按选择器中的顺序）
    pub const ALL: [DocumentType; 3] = [
        DocumentType::BenefitsPlan,
        DocumentType::CompensationMatrix,
        DocumentType::PerformanceReview,
    ];

    /// 获取显示名称
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::BenefitsPlan => "Benefits Plan",
            DocumentType::CompensationMatrix => "Compensation Matrix",
            DocumentType::PerformanceReview => "Performance Review",
        }
    }

    /// 从显示名称解析（精确匹配）
    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "Benefits Plan" => Some(DocumentType::BenefitsPlan),
            "Compensation Matrix" => Some(DocumentType::CompensationMatrix),
            "Performance Review" => Some(DocumentType::PerformanceReview),
            _ => None,
        }
    }

    /// 该文档类型可选的复杂度
    pub fn complexity_options(self) -> Vec<ComplexityLevel> {
        match self {
            DocumentType::BenefitsPlan => vec![ComplexityLevel::tag("Simple")],
            DocumentType::CompensationMatrix => vec![ComplexityLevel::tag("Hierarchical")],
            DocumentType::PerformanceReview => vec![ComplexityLevel::Level(1)],
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 文档复杂度
///
/// 不同文档类型使用不同的表示：字符串标签（"Simple"）或整数级别（1）。
/// 两者互不转换，`Tag("1")` 与 `Level(1)` 是不同的值。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ComplexityLevel {
    Tag(String),
    Level(i64),
}

impl ComplexityLevel {
    pub fn tag(tag: impl Into<String>) -> Self {
        ComplexityLevel::Tag(tag.into())
    }
}

impl From<&str> for ComplexityLevel {
    fn from(tag: &str) -> Self {
        ComplexityLevel::Tag(tag.to_string())
    }
}

impl From<i64> for ComplexityLevel {
    fn from(level: i64) -> Self {
        ComplexityLevel::Level(level)
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexityLevel::Tag(tag) => write!(f, "{}", tag),
            ComplexityLevel::Level(level) => write!(f, "Level {}", level),
        }
    }
}

// 会话文件里的复杂度既可能是字符串也可能是整数
impl<'de> Deserialize<'de> for ComplexityLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct ComplexityVisitor;

        impl<'de> Visitor<'de> for ComplexityVisitor {
            type Value = ComplexityLevel;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string tag or an integer complexity level")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(ComplexityLevel::Tag(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(ComplexityLevel::Level(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                i64::try_from(value)
                    .map(ComplexityLevel::Level)
                    .map_err(|_| E::custom(format!("complexity level {} is out of range", value)))
            }
        }

        deserializer.deserialize_any(ComplexityVisitor)
    }
}

/// 一份合成 HR 文档
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub document_type: DocumentType,
    pub complexity_level: ComplexityLevel,
    /// 文档中的条目，每项形如 "PlanName: HealthPlus"
    pub fields: Vec<String>,
    /// 简化的表格文本，`|` 分隔列，换行分隔行
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

impl DocumentRecord {
    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        level: ComplexityLevel,
    }

    #[test]
    fn test_label_round_trip() {
        for document_type in DocumentType::ALL {
            assert_eq!(
                DocumentType::from_label(document_type.label()),
                Some(document_type)
            );
        }
        assert_eq!(DocumentType::from_label("benefits plan"), None);
        assert_eq!(DocumentType::from_label("Unknown Type"), None);
    }

    #[test]
    fn test_complexity_options() {
        assert_eq!(
            DocumentType::BenefitsPlan.complexity_options(),
            vec![ComplexityLevel::tag("Simple")]
        );
        assert_eq!(
            DocumentType::PerformanceReview.complexity_options(),
            vec![ComplexityLevel::Level(1)]
        );
    }

    #[test]
    fn test_complexity_from_toml_string_or_integer() {
        let tag: Wrapper = toml::from_str(r#"level = "Hierarchical""#).unwrap();
        assert_eq!(tag.level, ComplexityLevel::tag("Hierarchical"));

        let level: Wrapper = toml::from_str("level = 1").unwrap();
        assert_eq!(level.level, ComplexityLevel::Level(1));

        assert!(toml::from_str::<Wrapper>("level = true").is_err());
    }

    #[test]
    fn test_string_level_is_not_integer_level() {
        assert_ne!(ComplexityLevel::tag("1"), ComplexityLevel::Level(1));
    }
}
