pub mod dataset;
pub mod document;
pub mod extraction;
pub mod loaders;
pub mod metrics;
pub mod selection;

pub use dataset::{CellValue, ColumnarDataset, DataKind, DatasetReport};
pub use document::{ComplexityLevel, DocumentRecord, DocumentType};
pub use extraction::{ExtractionKind, ExtractionResult};
pub use loaders::{load_session_file, parse_session};
pub use metrics::{GroundTruthScore, MetricsEntry};
pub use selection::{Selection, SessionFile};
