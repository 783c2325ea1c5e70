pub mod state;

pub use state::{MotionStateKind, MotionStateMachine, Step};
