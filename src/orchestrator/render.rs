//! 文本视图渲染
//!
//! 把一次选择的处理结果渲染成三个文本视图：文档、抽取输出、指标（含两张柱状图）。
//! 只做格式化，不做任何业务判断。

use crate::models::extraction::{ExtractionKind, SELECTABLE_METHODS};
use crate::models::metrics::MetricsEntry;
use crate::workflow::DemoOutcome;

/// 文档与校验视图
pub fn render_document_view(outcome: &DemoOutcome) -> String {
    let mut out = String::new();
    out.push_str(&section("1. Loaded Synthetic HR Document"));
    out.push_str(&format!(
        "Document Type: {}\nComplexity: {}\n\n",
        outcome.selection.document_type, outcome.selection.complexity_level
    ));

    let Some(record) = &outcome.record else {
        out.push_str(
            "No synthetic document data available for the selected type and complexity.\n",
        );
        return out;
    };

    let fields_json = serde_json::to_string_pretty(&record.fields).unwrap_or_default();
    out.push_str(&format!("Simulated Document Data:\n{}\n\n", fields_json));

    if outcome.is_valid {
        out.push_str("Dataset is valid for processing: true\n");
    } else {
        out.push_str("Dataset validation failed: false. Data might be missing or malformed.\n");
    }

    if let Some(report) = &outcome.table_report {
        out.push_str(&format!(
            "Table columns: {}\nMissing values: {}\nPrimary key unique: {}\n",
            report.column_names.join(", "),
            if report.has_missing_values() {
                report
                    .missing_values
                    .iter()
                    .map(|(column, count)| format!("{}={}", column, count))
                    .collect::<Vec<_>>()
                    .join(", ")
            } else {
                "none".to_string()
            },
            report.primary_key_unique
        ));
    }

    out
}

/// 抽取输出视图
pub fn render_extraction_view(outcome: &DemoOutcome) -> String {
    let mut out = section("2. Simulated Extraction Output");
    out.push_str(&format!(
        "Selectable methods: {}\nSelected: {}\n\n",
        SELECTABLE_METHODS.join(", "),
        outcome.selection.extraction_method
    ));

    if outcome.extractions.is_empty() {
        out.push_str("Please select a document to see extraction output.\n");
        return out;
    }

    for result in &outcome.extractions {
        let heading = match result.kind {
            ExtractionKind::RawText => "Raw OCR Output".to_string(),
            ExtractionKind::EnrichedTable => {
                format!("{} Enhanced Semantic Output", result.method_name)
            }
        };
        out.push_str(&format!("#### {}\n{}\n\n", heading, result.content));
    }

    out
}

/// 指标视图
pub fn render_metrics_view(outcome: &DemoOutcome, chart_width: usize) -> String {
    let mut out = section("3. Simulated Performance Metrics");

    if outcome.record.is_none() {
        out.push_str("Please select a document to see simulated metrics.\n");
        return out;
    }

    if outcome.comparison.is_empty() {
        out.push_str(
            "Metrics calculation is currently supported for 'Benefits Plan' document type only.\n",
        );
        return out;
    }

    if let Some(entry) = &outcome.selected_metrics {
        out.push_str(&format!(
            "Selected method: {} (accuracy {:.2}, information not found {:.2})\n\n",
            entry.method_name, entry.accuracy, entry.information_not_found
        ));
    }

    out.push_str(&render_metrics_table(&outcome.comparison));
    out.push('\n');
    out.push_str(&render_bar_chart(
        "Simulated Accuracy by Extraction Method",
        &outcome.comparison,
        |entry| entry.accuracy,
        chart_width,
    ));
    out.push('\n');
    out.push_str(&render_bar_chart(
        "Simulated Information Not Found Rate by Extraction Method",
        &outcome.comparison,
        |entry| entry.information_not_found,
        chart_width,
    ));

    out
}

/// 指标表格
pub fn render_metrics_table(entries: &[MetricsEntry]) -> String {
    let name_width = method_column_width(entries);
    let mut out = format!(
        "{:<name_width$} | Accuracy | Information Not Found\n",
        "Method"
    );
    out.push_str(&format!("{}\n", "-".repeat(name_width + 34)));
    for entry in entries {
        out.push_str(&format!(
            "{:<name_width$} | {:>8.2} | {:>21.2}\n",
            entry.method_name, entry.accuracy, entry.information_not_found
        ));
    }
    out
}

/// 横向柱状图，值域 [0, 1] 映射到 [0, width] 个字符
pub fn render_bar_chart(
    title: &str,
    entries: &[MetricsEntry],
    value: impl Fn(&MetricsEntry) -> f64,
    width: usize,
) -> String {
    let name_width = method_column_width(entries);
    let mut out = format!("{}\n", title);
    for entry in entries {
        let v = value(entry).clamp(0.0, 1.0);
        let bar_len = (v * width as f64).round() as usize;
        out.push_str(&format!(
            "{:<name_width$} | {} {:.2}\n",
            entry.method_name,
            "█".repeat(bar_len),
            v
        ));
    }
    out
}

fn method_column_width(entries: &[MetricsEntry]) -> usize {
    entries
        .iter()
        .map(|entry| entry.method_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Method".len())
}

fn section(title: &str) -> String {
    format!("{}\n{}\n{}\n", "=".repeat(60), title, "=".repeat(60))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::document::{ComplexityLevel, DocumentType};
    use crate::models::selection::Selection;
    use crate::workflow::DemoFlow;

    fn outcome(document_type: DocumentType, level: ComplexityLevel, method: &str) -> DemoOutcome {
        DemoFlow::new(&Config::default()).run(&Selection::new(document_type, level, method))
    }

    #[test]
    fn test_bar_chart_scales_to_width() {
        let entries = vec![
            MetricsEntry::new("Benefits Plan", "A", 1.0, 0.0),
            MetricsEntry::new("Benefits Plan", "B", 0.5, 0.5),
        ];
        let chart = render_bar_chart("Accuracy", &entries, |e| e.accuracy, 10);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], "Accuracy");
        assert_eq!(lines[1].matches('█').count(), 10);
        assert_eq!(lines[2].matches('█').count(), 5);
        assert!(lines[2].ends_with("0.50"));
    }

    #[test]
    fn test_document_view_for_absent_record() {
        let view = render_document_view(&outcome(
            DocumentType::BenefitsPlan,
            ComplexityLevel::tag("Hierarchical"),
            "Traditional OCR",
        ));
        assert!(view.contains("No synthetic document data available"));
    }

    #[test]
    fn test_document_view_shows_fields_as_json() {
        let view = render_document_view(&outcome(
            DocumentType::BenefitsPlan,
            ComplexityLevel::tag("Simple"),
            "Traditional OCR",
        ));
        assert!(view.contains("\"PlanName: HealthPlus\""));
        assert!(view.contains("Dataset is valid for processing: true"));
        assert!(view.contains("Primary key unique: true"));
    }

    #[test]
    fn test_extraction_view_shows_comparison() {
        let view = render_extraction_view(&outcome(
            DocumentType::BenefitsPlan,
            ComplexityLevel::tag("Simple"),
            "AWS Textract",
        ));
        assert!(view.contains("#### Raw OCR Output"));
        assert!(view.contains("#### AWS Textract Enhanced Semantic Output"));
    }

    #[test]
    fn test_metrics_view_without_ground_truth() {
        let view = render_metrics_view(
            &outcome(
                DocumentType::PerformanceReview,
                ComplexityLevel::Level(1),
                "Claude v3 Sonnet",
            ),
            20,
        );
        assert!(view.contains("supported for 'Benefits Plan' document type only"));
    }

    #[test]
    fn test_metrics_view_lists_every_method() {
        let view = render_metrics_view(
            &outcome(
                DocumentType::BenefitsPlan,
                ComplexityLevel::tag("Simple"),
                "TalentMine (Claude v3 Haiku)",
            ),
            20,
        );
        assert!(view.contains("accuracy 0.90, information not found 0.00"));
        assert!(view.contains("Simulated Accuracy by Extraction Method"));
        assert!(view.contains("Claude v4 Opus"));
    }
}
