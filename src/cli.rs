use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::report::OutputFormat;
use crate::segmentation::TrailingPeriodPolicy;
use crate::settings::UserSettings;

/// Lists the periods a bus spent stopped or slowing down, with the vision
/// states seen during each one.
#[derive(Debug, Parser)]
#[command(name = "busview")]
#[command(version)]
#[command(about = "Find obstruction periods in a bus speed log", long_about = None)]
pub struct Cli {
    /// CSV log with a header row and `timestamp,vision state,speed` columns
    pub input: PathBuf,

    /// JSON settings file (missing file means defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format, overrides the settings file
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Report an obstruction still open at the end of the log instead of dropping it
    #[arg(long)]
    pub seal_trailing: bool,

    /// Skip speed validation
    #[arg(long)]
    pub no_validate: bool,

    /// Print the motion state of every sample before the report
    #[arg(long)]
    pub trace: bool,

    /// Write the effective settings back to the settings file
    #[arg(long, requires = "config")]
    pub save_config: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }

    /// Command-line flags win over the settings file.
    pub fn apply_overrides(&self, settings: &mut UserSettings) {
        if let Some(format) = self.format {
            settings.output.format = format;
        }
        if self.seal_trailing {
            settings.segmentation.trailing_period = TrailingPeriodPolicy::SealAtLastSample;
        }
        if self.no_validate {
            settings.segmentation.validate_records = false;
        }
    }
}
