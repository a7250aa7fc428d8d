//! 用户的一次选择
//!
//! 封装"选了哪份文档、哪个复杂度、哪种抽取方法"。由展示层显式传入每一次核心调用，
//! 核心本身不保存任何会话状态。

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::models::document::{ComplexityLevel, DocumentType};
use crate::models::extraction::DEFAULT_METHOD;

/// 一次文档与方法的选择
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub document_type: DocumentType,
    pub complexity_level: ComplexityLevel,
    #[serde(default = "default_method")]
    pub extraction_method: String,
}

fn default_method() -> String {
    DEFAULT_METHOD.to_string()
}

impl Selection {
    pub fn new(
        document_type: DocumentType,
        complexity_level: impl Into<ComplexityLevel>,
        extraction_method: impl Into<String>,
    ) -> Self {
        Self {
            document_type,
            complexity_level: complexity_level.into(),
            extraction_method: extraction_method.into(),
        }
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[文档 {} 复杂度 {} 方法 {}]",
            self.document_type, self.complexity_level, self.extraction_method
        )
    }
}

/// 会话文件：一组待展示的选择
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionFile {
    #[serde(rename = "selection", default)]
    pub selections: Vec<Selection>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}
