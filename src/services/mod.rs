pub mod dataset_validator;
pub mod document_catalog;
pub mod extraction_simulator;
pub mod metrics_table;

pub use dataset_validator::{diagnose_columns, is_valid};
pub use document_catalog::{lookup_document, lookup_document_by_label};
pub use extraction_simulator::{compare, simulate, simulate_llm, simulate_ocr};
pub use metrics_table::{
    has_ground_truth, lookup_metrics, metrics_comparison, score_against_ground_truth,
    try_lookup_metrics,
};
