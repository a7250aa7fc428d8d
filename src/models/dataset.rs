//! 按列组织的表格数据及其诊断报告

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 单元格的值，缺失值用 `None` 表示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// 从表格文本推断单元格类型，空白视为缺失
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(value) = raw.parse::<i64>() {
            return Some(CellValue::Int(value));
        }
        if let Ok(value) = raw.parse::<f64>() {
            return Some(CellValue::Float(value));
        }
        Some(CellValue::Text(raw.to_string()))
    }

    pub fn kind(&self) -> DataKind {
        match self {
            CellValue::Int(_) => DataKind::Integer,
            CellValue::Float(_) => DataKind::Float,
            CellValue::Text(_) => DataKind::Text,
        }
    }
}

/// 推断出的列类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataKind {
    Integer,
    Float,
    Text,
    /// 整列都是缺失值
    Missing,
}

/// 按列组织的数据集，列顺序即插入顺序
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnarDataset {
    columns: Vec<(String, Vec<Option<CellValue>>)>,
}

impl ColumnarDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一列；同名列会被覆盖，但保留原位置
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<Option<CellValue>>) -> Self {
        let name = name.into();
        match self.columns.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing_values)) => *existing_values = values,
            None => self.columns.push((name, values)),
        }
        self
    }

    /// 解析 `|` 分隔的表格文本，第一行为表头
    ///
    /// 数据行的列数不足时以缺失值补齐，多出的单元格被忽略。
    pub fn from_table(table: &str) -> Self {
        let mut lines = table.lines().filter(|line| !line.trim().is_empty());

        let headers: Vec<String> = match lines.next() {
            Some(header) => header.split('|').map(|h| h.trim().to_string()).collect(),
            None => return Self::default(),
        };

        let mut values: Vec<Vec<Option<CellValue>>> = vec![Vec::new(); headers.len()];
        for line in lines {
            let cells: Vec<&str> = line.split('|').collect();
            for (idx, column) in values.iter_mut().enumerate() {
                column.push(cells.get(idx).and_then(|cell| CellValue::parse(cell)));
            }
        }

        headers
            .into_iter()
            .zip(values)
            .fold(Self::default(), |dataset, (name, column)| {
                dataset.with_column(name, column)
            })
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &[Option<CellValue>])> {
        self.columns
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

/// 数据集诊断报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetReport {
    pub column_names: Vec<String>,
    /// 只包含存在缺失值的列
    pub missing_values: BTreeMap<String, usize>,
    pub data_types: BTreeMap<String, DataKind>,
    /// 第一列（视为主键）的非缺失值是否两两不同
    pub primary_key_unique: bool,
}

impl DatasetReport {
    pub fn has_missing_values(&self) -> bool {
        !self.missing_values.is_empty()
    }
}
