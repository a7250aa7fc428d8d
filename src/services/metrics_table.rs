//! 指标表 - 业务能力层
//!
//! 静态的 (文档类型, 方法) → (准确率, 未找到率) 表，只有 "Benefits Plan" 有标注答案。
//! 另外提供按问答对计算得分的能力。

use phf::phf_map;
use std::collections::BTreeMap;

use crate::models::document::DocumentType;
use crate::models::extraction::COMPARED_METHODS;
use crate::models::metrics::{GroundTruthScore, MetricsEntry};

#[derive(Debug, Clone, Copy)]
struct Rates {
    accuracy: f64,
    information_not_found: f64,
}

const fn rates(accuracy: f64, information_not_found: f64) -> Rates {
    Rates {
        accuracy,
        information_not_found,
    }
}

/// Benefits Plan 的对比结果
static BENEFITS_PLAN_RATES: phf::Map<&'static str, Rates> = phf_map! {
    "Traditional OCR" => rates(0.00, 1.00),
    "AWS Textract" => rates(0.00, 1.00),
    "AWS Textract Visual Q&A" => rates(0.40, 0.60),
    "TalentMine (Claude v3 Haiku)" => rates(0.90, 0.00),
    "Claude Instant" => rates(0.70, 0.00),
    "Claude v2" => rates(0.60, 0.30),
    "Claude v2.1" => rates(0.70, 0.20),
    "Claude v3 Sonnet" => rates(1.00, 0.00),
    "Claude v3 Opus" => rates(0.90, 0.00),
    "Claude v3.5 Haiku" => rates(0.80, 0.00),
    "Claude v3.5 Sonnet v1/v2" => rates(1.00, 0.00),
    "Claude v3.7 Sonnet" => rates(1.00, 0.00),
    "Claude v4 Sonnet" => rates(1.00, 0.00),
    "Claude v4 Opus" => rates(1.00, 0.00),
};

fn rates_for(document_type: &str) -> Option<&'static phf::Map<&'static str, Rates>> {
    match DocumentType::from_label(document_type)? {
        DocumentType::BenefitsPlan => Some(&BENEFITS_PLAN_RATES),
        DocumentType::CompensationMatrix | DocumentType::PerformanceReview => None,
    }
}

/// 文档类型是否有标注答案
pub fn has_ground_truth(document_type: &str) -> bool {
    rates_for(document_type).is_some()
}

/// 查找指标，没有数据时返回 `None`
pub fn try_lookup_metrics(document_type: &str, method_name: &str) -> Option<MetricsEntry> {
    let rates = rates_for(document_type)?.get(method_name)?;
    Some(MetricsEntry::new(
        document_type,
        method_name,
        rates.accuracy,
        rates.information_not_found,
    ))
}

/// 查找指标
///
/// 表中没有的组合返回 (0.0, 0.0)。该值与真实的"全对且无缺失"无法区分，
/// 需要区分时使用 [`try_lookup_metrics`]。
pub fn lookup_metrics(document_type: &str, method_name: &str) -> MetricsEntry {
    try_lookup_metrics(document_type, method_name)
        .unwrap_or_else(|| MetricsEntry::unknown(document_type, method_name))
}

/// 图表用的全部方法指标（按图表顺序）；没有标注答案的文档类型返回空列表
pub fn metrics_comparison(document_type: &str) -> Vec<MetricsEntry> {
    COMPARED_METHODS
        .iter()
        .filter_map(|method| try_lookup_metrics(document_type, method))
        .collect()
}

/// 按问答对计算准确率和未找到率
///
/// - 标注为空：(1.0, 0.0)
/// - 抽取结果为空：(0.0, 1.0)
/// - 其余：答对的问题数 / 总问题数，未答对的一律计入未找到
pub fn score_against_ground_truth(
    extracted: &BTreeMap<String, String>,
    ground_truth: &BTreeMap<String, String>,
) -> GroundTruthScore {
    if ground_truth.is_empty() {
        return GroundTruthScore {
            accuracy: 1.0,
            information_not_found: 0.0,
        };
    }

    if extracted.is_empty() {
        return GroundTruthScore {
            accuracy: 0.0,
            information_not_found: 1.0,
        };
    }

    let total = ground_truth.len();
    let correct = ground_truth
        .iter()
        .filter(|(question, answer)| extracted.get(*question) == Some(*answer))
        .count();

    GroundTruthScore {
        accuracy: correct as f64 / total as f64,
        information_not_found: (total - correct) as f64 / total as f64,
    }
}
