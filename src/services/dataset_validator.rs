//! 数据集校验 - 业务能力层
//!
//! 两种互不相同的能力：
//! - `is_valid`：对 `DocumentRecord` 做结构冒烟检查，用于决定是否展示后续内容
//! - `diagnose_columns`：对按列组织的表格数据给出结构化诊断报告

use std::collections::BTreeMap;

use crate::models::dataset::{ColumnarDataset, DataKind, DatasetReport};
use crate::models::document::DocumentRecord;

/// 记录存在且 `fields` 非空时才可用于抽取
pub fn is_valid(record: Option<&DocumentRecord>) -> bool {
    record.is_some_and(|record| !record.fields.is_empty())
}

/// 诊断按列组织的数据集
///
/// 统计每列的缺失值数量，按第一个非缺失值推断列类型，
/// 并检查第一列（视为主键）是否唯一。空数据集得到空报告，主键视为唯一。
pub fn diagnose_columns(dataset: &ColumnarDataset) -> DatasetReport {
    let mut missing_values = BTreeMap::new();
    let mut data_types = BTreeMap::new();

    for (name, values) in dataset.columns() {
        let missing_count = values.iter().filter(|v| v.is_none()).count();
        if missing_count > 0 {
            missing_values.insert(name.to_string(), missing_count);
        }

        let kind = values
            .iter()
            .flatten()
            .next()
            .map(|value| value.kind())
            .unwrap_or(DataKind::Missing);
        data_types.insert(name.to_string(), kind);
    }

    let primary_key_unique = match dataset.columns().next() {
        Some((_, values)) => {
            let present: Vec<_> = values.iter().flatten().collect();
            present
                .iter()
                .enumerate()
                .all(|(i, value)| !present[i + 1..].contains(value))
        }
        None => true,
    };

    DatasetReport {
        column_names: dataset.column_names(),
        missing_values,
        data_types,
        primary_key_unique,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dataset::CellValue;
    use crate::models::document::{ComplexityLevel, DocumentType};

    fn int(v: i64) -> Option<CellValue> {
        Some(CellValue::Int(v))
    }

    fn text(v: &str) -> Option<CellValue> {
        Some(CellValue::Text(v.to_string()))
    }

    fn record(fields: Vec<&str>) -> DocumentRecord {
        DocumentRecord {
            document_type: DocumentType::BenefitsPlan,
            complexity_level: ComplexityLevel::tag("Simple"),
            fields: fields.into_iter().map(String::from).collect(),
            table: None,
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(!is_valid(None));
        assert!(!is_valid(Some(&record(vec![]))));
        assert!(is_valid(Some(&record(vec!["PlanName: HealthPlus"]))));
    }

    #[test]
    fn test_clean_dataset() {
        let dataset = ColumnarDataset::new()
            .with_column("col1", vec![int(1), int(2), int(3)])
            .with_column("col2", vec![text("a"), text("b"), text("c")]);

        let report = diagnose_columns(&dataset);
        assert_eq!(report.column_names, vec!["col1", "col2"]);
        assert!(!report.has_missing_values());
        assert_eq!(report.data_types["col1"], DataKind::Integer);
        assert_eq!(report.data_types["col2"], DataKind::Text);
        assert!(report.primary_key_unique);
    }

    #[test]
    fn test_missing_values_are_counted() {
        let dataset = ColumnarDataset::new()
            .with_column("col1", vec![int(1), int(2), None])
            .with_column("col2", vec![text("a"), None, text("c")]);

        let report = diagnose_columns(&dataset);
        assert_eq!(report.missing_values.get("col1"), Some(&1));
        assert_eq!(report.missing_values.get("col2"), Some(&1));
        assert!(report.primary_key_unique);
    }

    #[test]
    fn test_duplicate_primary_key() {
        let dataset = ColumnarDataset::new()
            .with_column("col1", vec![int(1), int(2), int(1)])
            .with_column("col2", vec![text("a"), text("b"), text("c")]);

        assert!(!diagnose_columns(&dataset).primary_key_unique);
    }

    #[test]
    fn test_missing_keys_do_not_collide() {
        let dataset = ColumnarDataset::new().with_column("id", vec![None, int(1), None]);
        let report = diagnose_columns(&dataset);
        assert!(report.primary_key_unique);
        assert_eq!(report.missing_values.get("id"), Some(&2));
    }

    #[test]
    fn test_all_missing_column() {
        let dataset = ColumnarDataset::new().with_column("notes", vec![None, None]);
        assert_eq!(diagnose_columns(&dataset).data_types["notes"], DataKind::Missing);
    }

    #[test]
    fn test_empty_dataset() {
        let report = diagnose_columns(&ColumnarDataset::new());
        assert!(report.column_names.is_empty());
        assert!(report.missing_values.is_empty());
        assert!(report.data_types.is_empty());
        assert!(report.primary_key_unique);
    }
}
