pub mod algorithm;
pub mod config;
pub mod error;

pub use algorithm::{segment_records, trace_records, MotionStep, ObstructionSegmenter};
pub use config::{SegmentationConfig, TrailingPeriodPolicy};
pub use error::SegmentationError;
