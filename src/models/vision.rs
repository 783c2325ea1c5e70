/// Labels the on-board vision classifier is trained with.
///
/// The segmenter never looks at these; they only annotate reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisionLabel {
    Moving,
    StoppedAtBusStop,
    StoppedAtIntersection,
    StoppedAtObstruction,
}

impl VisionLabel {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(VisionLabel::Moving),
            1 => Some(VisionLabel::StoppedAtBusStop),
            2 => Some(VisionLabel::StoppedAtIntersection),
            3 => Some(VisionLabel::StoppedAtObstruction),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VisionLabel::Moving => "Moving",
            VisionLabel::StoppedAtBusStop => "Stopped @ Bus Stop",
            VisionLabel::StoppedAtIntersection => "Stopped @ Intersection",
            VisionLabel::StoppedAtObstruction => "Stopped @ Obstruction",
        }
    }
}
