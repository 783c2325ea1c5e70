use serde::{Deserialize, Serialize};

/// Motion of the bus between two consecutive samples.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum MotionStateKind {
    Stopped,
    Accelerating,
    Cruising,
    Decelerating,
}

impl MotionStateKind {
    /// State before any acceleration is known, chosen from the first speed.
    pub fn initial(speed: f64) -> Self {
        if speed > 0.0 {
            MotionStateKind::Cruising
        } else {
            MotionStateKind::Stopped
        }
    }

    /// Next state for the given first-difference acceleration and current
    /// speed. Conditions are checked in order; if none holds the state is
    /// kept.
    pub fn transition(self, acceleration: f64, speed: f64) -> Self {
        match self {
            MotionStateKind::Stopped => {
                if acceleration > 0.0 {
                    MotionStateKind::Accelerating
                } else {
                    self
                }
            }
            MotionStateKind::Accelerating => {
                if acceleration < 0.0 {
                    MotionStateKind::Decelerating
                } else if acceleration == 0.0 {
                    MotionStateKind::Cruising
                } else {
                    self
                }
            }
            MotionStateKind::Decelerating => {
                if acceleration > 0.0 {
                    MotionStateKind::Accelerating
                } else if acceleration == 0.0 && speed > 0.0 {
                    MotionStateKind::Cruising
                } else if acceleration == 0.0 && speed == 0.0 {
                    MotionStateKind::Stopped
                } else {
                    self
                }
            }
            MotionStateKind::Cruising => {
                if acceleration < 0.0 {
                    MotionStateKind::Decelerating
                } else if acceleration > 0.0 {
                    MotionStateKind::Accelerating
                } else {
                    self
                }
            }
        }
    }

    /// Stopped and Decelerating samples count towards an obstruction.
    pub fn is_obstructed(&self) -> bool {
        matches!(self, MotionStateKind::Stopped | MotionStateKind::Decelerating)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MotionStateKind::Stopped => "Stopped",
            MotionStateKind::Accelerating => "Accelerating",
            MotionStateKind::Cruising => "Cruising",
            MotionStateKind::Decelerating => "Decelerating",
        }
    }
}

/// The state on either side of one `advance` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub previous: MotionStateKind,
    pub current: MotionStateKind,
}

impl Step {
    pub fn entered_obstruction(&self) -> bool {
        self.current.is_obstructed() && !self.previous.is_obstructed()
    }

    pub fn left_obstruction(&self) -> bool {
        self.previous.is_obstructed() && !self.current.is_obstructed()
    }
}

/// Holds the running motion state while a speed series is replayed.
#[derive(Debug, Clone)]
pub struct MotionStateMachine {
    state: MotionStateKind,
}

impl MotionStateMachine {
    pub fn starting_at(speed: f64) -> Self {
        Self {
            state: MotionStateKind::initial(speed),
        }
    }

    pub fn state(&self) -> MotionStateKind {
        self.state
    }

    pub fn advance(&mut self, acceleration: f64, speed: f64) -> Step {
        let previous = self.state;
        self.state = previous.transition(acceleration, speed);
        Step {
            previous,
            current: self.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MotionStateKind::*;
    use super::*;

    #[test]
    fn initial_state_follows_first_speed() {
        assert_eq!(MotionStateKind::initial(0.0), Stopped);
        assert_eq!(MotionStateKind::initial(3.5), Cruising);
    }

    #[test]
    fn stopped_only_leaves_on_positive_acceleration() {
        assert_eq!(Stopped.transition(1.0, 1.0), Accelerating);
        assert_eq!(Stopped.transition(0.0, 0.0), Stopped);
        assert_eq!(Stopped.transition(-1.0, 0.0), Stopped);
    }

    #[test]
    fn accelerating_transitions() {
        assert_eq!(Accelerating.transition(-0.5, 4.0), Decelerating);
        assert_eq!(Accelerating.transition(0.0, 4.0), Cruising);
        assert_eq!(Accelerating.transition(2.0, 6.0), Accelerating);
    }

    #[test]
    fn decelerating_splits_on_speed_when_acceleration_is_zero() {
        assert_eq!(Decelerating.transition(1.0, 2.0), Accelerating);
        assert_eq!(Decelerating.transition(0.0, 2.0), Cruising);
        assert_eq!(Decelerating.transition(0.0, 0.0), Stopped);
        assert_eq!(Decelerating.transition(-1.0, 1.0), Decelerating);
    }

    #[test]
    fn cruising_transitions() {
        assert_eq!(Cruising.transition(-1.0, 3.0), Decelerating);
        assert_eq!(Cruising.transition(1.0, 5.0), Accelerating);
        assert_eq!(Cruising.transition(0.0, 4.0), Cruising);
    }

    #[test]
    fn no_single_step_from_stopped_to_cruising_or_decelerating() {
        for accel in [-2.0, -0.1, 0.0, 0.1, 2.0] {
            let next = Stopped.transition(accel, 1.0);
            assert_ne!(next, Cruising);
            assert_ne!(next, Decelerating);
        }
    }

    #[test]
    fn machine_reports_both_sides_of_a_step() {
        let mut machine = MotionStateMachine::starting_at(5.0);
        let step = machine.advance(-5.0, 0.0);
        assert_eq!(step.previous, Cruising);
        assert_eq!(step.current, Decelerating);
        assert!(step.entered_obstruction());
        assert!(!step.left_obstruction());

        let step = machine.advance(0.0, 0.0);
        assert_eq!(step.current, Stopped);
        assert!(!step.entered_obstruction());

        let step = machine.advance(2.0, 2.0);
        assert!(step.left_obstruction());
        assert_eq!(machine.state(), Accelerating);
    }
}
