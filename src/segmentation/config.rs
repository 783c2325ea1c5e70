use serde::{Deserialize, Serialize};

/// What to do with an obstruction that is still open when the log ends.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrailingPeriodPolicy {
    /// Discard it. Periods are only sealed by a sample that leaves the run.
    DropUnterminated,
    /// Seal it with the last record's timestamp as the end time.
    SealAtLastSample,
}

impl Default for TrailingPeriodPolicy {
    fn default() -> Self {
        TrailingPeriodPolicy::DropUnterminated
    }
}

/// Configuration for obstruction segmentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SegmentationConfig {
    pub trailing_period: TrailingPeriodPolicy,

    /// Reject records whose speed is negative or not finite before segmenting.
    /// Turn off only when the record source already guarantees this.
    pub validate_records: bool,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            trailing_period: TrailingPeriodPolicy::DropUnterminated,
            validate_records: true,
        }
    }
}
