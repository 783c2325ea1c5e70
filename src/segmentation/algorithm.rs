use serde::Serialize;

use crate::models::{ObstructionPeriod, Record};
use crate::motion::{MotionStateKind, MotionStateMachine};
use crate::segmentation::config::{SegmentationConfig, TrailingPeriodPolicy};
use crate::segmentation::error::SegmentationError;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

/// Motion state assigned to one sample, for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionStep {
    pub index: usize,
    pub timestamp: String,
    /// `None` for the first sample, which has no predecessor.
    pub acceleration: Option<f64>,
    pub state: MotionStateKind,
}

/// Replays a speed log through the motion state machine and reports the
/// obstruction periods found in it.
#[derive(Debug, Clone, Default)]
pub struct ObstructionSegmenter {
    config: SegmentationConfig,
}

impl ObstructionSegmenter {
    pub fn new(config: SegmentationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SegmentationConfig {
        &self.config
    }

    pub fn segment(&self, records: &[Record]) -> Result<Vec<ObstructionPeriod>, SegmentationError> {
        segment_records(records, &self.config)
    }

    pub fn trace(&self, records: &[Record]) -> Result<Vec<MotionStep>, SegmentationError> {
        trace_records(records, &self.config)
    }
}

/// The obstruction currently being accumulated. Empty outside a run.
#[derive(Debug, Default)]
struct OpenObstruction {
    start_time: Option<String>,
    vision_states: Vec<i64>,
}

impl OpenObstruction {
    fn is_open(&self) -> bool {
        !self.vision_states.is_empty()
    }

    fn push(&mut self, record: &Record) {
        // A run that begins at the first sample has no entry step, so the
        // first counted sample opens it either way.
        if self.start_time.is_none() {
            self.start_time = Some(record.timestamp.clone());
        }
        self.vision_states.push(record.vision_state);
    }

    /// Closes the run and resets the accumulator. Empty runs produce nothing.
    fn seal(&mut self, end_time: &str) -> Option<ObstructionPeriod> {
        let OpenObstruction {
            start_time,
            vision_states,
        } = std::mem::take(self);

        let start_time = start_time?;
        if vision_states.is_empty() {
            return None;
        }

        Some(ObstructionPeriod {
            severity: vision_states.len(),
            start_time,
            end_time: end_time.to_string(),
            vision_states,
        })
    }
}

/// Main segmentation function: turns an ordered speed log into obstruction periods.
pub fn segment_records(
    records: &[Record],
    config: &SegmentationConfig,
) -> Result<Vec<ObstructionPeriod>, SegmentationError> {
    check_records(records, config)?;

    let mut machine = MotionStateMachine::starting_at(records[0].speed);
    let mut open = OpenObstruction::default();
    let mut periods = Vec::new();

    for pair in records.windows(2) {
        let (previous, record) = (&pair[0], &pair[1]);
        let acceleration = record.speed - previous.speed;
        let step = machine.advance(acceleration, record.speed);

        if step.current.is_obstructed() {
            if step.entered_obstruction() {
                log_debug!("Obstruction opened at {}", record.timestamp);
            }
            open.push(record);
        } else if step.left_obstruction() {
            if let Some(period) = open.seal(&record.timestamp) {
                log_debug!(
                    "Sealed obstruction {} - {} (severity {})",
                    period.start_time,
                    period.end_time,
                    period.severity
                );
                periods.push(period);
            }
        }
    }

    if open.is_open() {
        match config.trailing_period {
            TrailingPeriodPolicy::DropUnterminated => {
                log_info!(
                    "Dropping unterminated obstruction of {} samples at end of log",
                    open.vision_states.len()
                );
            }
            TrailingPeriodPolicy::SealAtLastSample => {
                let last = &records[records.len() - 1];
                if let Some(period) = open.seal(&last.timestamp) {
                    periods.push(period);
                }
            }
        }
    }

    log_info!(
        "Segmented {} records into {} obstruction periods",
        records.len(),
        periods.len()
    );

    Ok(periods)
}

/// Per-sample motion states, starting with the initial state of sample 0.
pub fn trace_records(
    records: &[Record],
    config: &SegmentationConfig,
) -> Result<Vec<MotionStep>, SegmentationError> {
    check_records(records, config)?;

    let mut machine = MotionStateMachine::starting_at(records[0].speed);
    let mut steps = Vec::with_capacity(records.len());
    steps.push(MotionStep {
        index: 0,
        timestamp: records[0].timestamp.clone(),
        acceleration: None,
        state: machine.state(),
    });

    for (index, pair) in records.windows(2).enumerate() {
        let record = &pair[1];
        let acceleration = record.speed - pair[0].speed;
        let step = machine.advance(acceleration, record.speed);
        steps.push(MotionStep {
            index: index + 1,
            timestamp: record.timestamp.clone(),
            acceleration: Some(acceleration),
            state: step.current,
        });
    }

    Ok(steps)
}

/// Rejects input that cannot be segmented before any period is built.
fn check_records(records: &[Record], config: &SegmentationConfig) -> Result<(), SegmentationError> {
    if records.len() < 2 {
        return Err(SegmentationError::InsufficientInput {
            found: records.len(),
        });
    }

    if config.validate_records {
        for (index, record) in records.iter().enumerate() {
            if let Some(reason) = record.speed_problem() {
                return Err(SegmentationError::MalformedRecord {
                    index,
                    timestamp: record.timestamp.clone(),
                    reason,
                });
            }
        }
    }

    Ok(())
}
