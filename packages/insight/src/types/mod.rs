//! Domain data types for the research pipeline.

pub mod analysis;
pub mod confidence;
pub mod document;
pub mod report;

pub use analysis::{Analysis, EvidenceItem};
pub use confidence::{Confidence, ConfidenceBadge, ConfidenceLabel};
pub use document::Document;
pub use report::{EmptyReport, InsightReport, PipelineOutcome, NO_VALID_DOCUMENTS};
