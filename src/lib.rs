//! Obstruction finder for bus speed logs.
//!
//! Speed samples are replayed through a four-state motion machine
//! (Stopped, Accelerating, Cruising, Decelerating). Runs of Stopped or
//! Decelerating samples become [`ObstructionPeriod`]s carrying their time
//! bounds, a severity (samples spent in the run) and the vision states the
//! on-board classifier reported meanwhile.

pub mod cli;
pub mod ingest;
pub mod models;
pub mod motion;
pub mod report;
pub mod segmentation;
pub mod settings;
mod utils;

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};

pub use models::{ObstructionPeriod, Record, VisionLabel};
pub use motion::{MotionStateKind, MotionStateMachine};
pub use segmentation::{
    segment_records, ObstructionSegmenter, SegmentationConfig, SegmentationError,
    TrailingPeriodPolicy,
};

use cli::Cli;
use settings::{SettingsStore, UserSettings};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG takes precedence over -v
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut stdout = io::stdout().lock();
    run_with(cli, &mut stdout)
}

/// Runs the whole pipeline for already-parsed arguments, writing the report to `out`.
/// Nothing is written unless segmentation succeeds.
pub fn run_with<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    log::info!("busview starting on {}", cli.input.display());

    let mut store = cli
        .config
        .as_ref()
        .map(|path| SettingsStore::new(path.clone()))
        .transpose()?;
    let mut settings = store
        .as_ref()
        .map(|store| store.settings().clone())
        .unwrap_or_else(UserSettings::default);
    cli.apply_overrides(&mut settings);

    if cli.save_config {
        if let Some(store) = store.as_mut() {
            store.update(settings.clone())?;
        }
    }

    let records = ingest::read_records(&cli.input)?;
    let segmenter = ObstructionSegmenter::new(settings.segmentation.clone());

    let periods = segmenter.segment(&records)?;
    let mut output = if cli.trace {
        report::render_trace(&segmenter.trace(&records)?)
    } else {
        String::new()
    };
    output.push_str(&report::render(&periods, settings.output.format)?);

    report::write_report(out, &output)
}
