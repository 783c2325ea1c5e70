use thiserror::Error;

/// Reasons a speed log cannot be segmented.
#[derive(Debug, Error, PartialEq)]
pub enum SegmentationError {
    /// Acceleration needs a previous sample, so fewer than two records
    /// cannot be classified at all (distinct from "no obstructions").
    #[error("at least 2 records are needed to compute acceleration, got {found}")]
    InsufficientInput { found: usize },

    #[error("record {index} at {timestamp}: {reason}")]
    MalformedRecord {
        index: usize,
        timestamp: String,
        reason: &'static str,
    },
}
