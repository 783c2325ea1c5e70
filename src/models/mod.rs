pub mod obstruction;
pub mod record;
pub mod vision;

pub use obstruction::ObstructionPeriod;
pub use record::Record;
pub use vision::VisionLabel;
