use serde::{Deserialize, Serialize};

/// A sealed run of Stopped/Decelerating samples.
///
/// `start_time` is the timestamp of the first sample inside the run;
/// `end_time` is the timestamp of the first sample *after* it.
/// `severity` always equals `vision_states.len()` and is at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObstructionPeriod {
    pub severity: usize,
    pub start_time: String,
    pub end_time: String,
    pub vision_states: Vec<i64>,
}
