//! 文档目录 - 业务能力层
//!
//! 只负责"按 (类型, 复杂度) 取出合成文档"能力。查找是全函数：
//! 命中返回新构造的记录，其余组合返回 `None`，这是正常结果而不是错误。

use crate::models::document::{ComplexityLevel, DocumentRecord, DocumentType};

/// 目录中的复杂度键
enum FixtureLevel {
    Tag(&'static str),
    Level(i64),
}

impl FixtureLevel {
    fn matches(&self, level: &ComplexityLevel) -> bool {
        match (self, level) {
            (FixtureLevel::Tag(expected), ComplexityLevel::Tag(actual)) => expected == actual,
            (FixtureLevel::Level(expected), ComplexityLevel::Level(actual)) => expected == actual,
            _ => false,
        }
    }
}

struct Fixture {
    document_type: DocumentType,
    level: FixtureLevel,
    fields: &'static [&'static str],
    table: &'static str,
}

static FIXTURES: [Fixture; 3] = [
    Fixture {
        document_type: DocumentType::BenefitsPlan,
        level: FixtureLevel::Tag("Simple"),
        fields: &[
            "PlanName: HealthPlus",
            "Coverage: Individual, Family",
            "Deductible: $500",
            "Premium: $100/month",
        ],
        table: "PlanName | Coverage | Deductible | Premium\n\
                HealthPlus | Individual, Family | $500 | $100/month",
    },
    Fixture {
        document_type: DocumentType::CompensationMatrix,
        level: FixtureLevel::Tag("Hierarchical"),
        fields: &[
            "Role: Software Engineer L5",
            "SalaryRange: $120k-$180k",
            "BonusTarget: 15%",
            "EquityGrant: 500 units",
        ],
        table: "Role | Salary Range | Bonus Target | Equity Grant\n\
                Software Engineer L5 | $120k-$180k | 15% | 500 units",
    },
    Fixture {
        document_type: DocumentType::PerformanceReview,
        level: FixtureLevel::Level(1),
        fields: &[
            "Employee: Jane Doe",
            "Rating: Exceeds Expectations",
            "Comments: Strong leadership, met all goals.",
            "Goals: Lead new project by Q3",
        ],
        table: "Employee | Rating | Comments | Goals\n\
                Jane Doe | Exceeds Expectations | Strong leadership, met all goals. | Lead new project by Q3",
    },
];

/// 按文档类型和复杂度查找合成文档
///
/// 返回的记录的 `document_type` / `complexity_level` 与输入一致。
pub fn lookup_document(
    document_type: DocumentType,
    complexity_level: &ComplexityLevel,
) -> Option<DocumentRecord> {
    FIXTURES
        .iter()
        .find(|fixture| {
            fixture.document_type == document_type && fixture.level.matches(complexity_level)
        })
        .map(|fixture| DocumentRecord {
            document_type,
            complexity_level: complexity_level.clone(),
            fields: fixture.fields.iter().map(|f| f.to_string()).collect(),
            table: Some(fixture.table.to_string()),
        })
}

/// 按显示名称查找，未知的文档类型同样返回 `None`
pub fn lookup_document_by_label(
    document_label: &str,
    complexity_level: &ComplexityLevel,
) -> Option<DocumentRecord> {
    DocumentType::from_label(document_label)
        .and_then(|document_type| lookup_document(document_type, complexity_level))
}
