use serde::{Deserialize, Serialize};

/// One sample from the bus log: when it was taken, what the vision
/// classifier saw, and how fast the bus was going.
///
/// `timestamp` is carried as an opaque token and never parsed. Records are
/// consumed in the order they are given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub timestamp: String,
    pub vision_state: i64,
    pub speed: f64,
}

impl Record {
    pub fn new(timestamp: impl Into<String>, vision_state: i64, speed: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            vision_state,
            speed,
        }
    }

    /// Speed must be a finite, non-negative number.
    pub fn speed_problem(&self) -> Option<&'static str> {
        if !self.speed.is_finite() {
            Some("speed is not a finite number")
        } else if self.speed < 0.0 {
            Some("speed is negative")
        } else {
            None
        }
    }
}
