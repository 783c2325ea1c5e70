use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::models::{ObstructionPeriod, VisionLabel};
use crate::segmentation::MotionStep;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

/// JSON shape of a period, with the vision codes spelled out.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PeriodReport<'a> {
    severity: usize,
    start_time: &'a str,
    end_time: &'a str,
    vision_states: &'a [i64],
    vision_labels: Vec<Option<&'static str>>,
}

impl<'a> From<&'a ObstructionPeriod> for PeriodReport<'a> {
    fn from(period: &'a ObstructionPeriod) -> Self {
        Self {
            severity: period.severity,
            start_time: &period.start_time,
            end_time: &period.end_time,
            vision_states: &period.vision_states,
            vision_labels: period
                .vision_states
                .iter()
                .map(|&code| VisionLabel::from_code(code).map(|label| label.as_str()))
                .collect(),
        }
    }
}

/// `<start> - <end> : <severity> : <states>`, each state preceded by a space.
pub fn format_period(period: &ObstructionPeriod) -> String {
    let mut line = format!(
        "{} - {} : {} : ",
        period.start_time, period.end_time, period.severity
    );
    for state in &period.vision_states {
        line.push(' ');
        line.push_str(&state.to_string());
    }
    line
}

pub fn render_text(periods: &[ObstructionPeriod]) -> String {
    periods
        .iter()
        .map(|period| format_period(period) + "\n")
        .collect()
}

pub fn render_json(periods: &[ObstructionPeriod]) -> Result<String> {
    let reports: Vec<PeriodReport> = periods.iter().map(PeriodReport::from).collect();
    Ok(serde_json::to_string_pretty(&reports)?)
}

pub fn render(periods: &[ObstructionPeriod], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(periods)),
        OutputFormat::Json => render_json(periods),
    }
}

/// One line per sample: index, timestamp, acceleration and motion state.
pub fn render_trace(steps: &[MotionStep]) -> String {
    steps
        .iter()
        .map(|step| {
            let acceleration = step
                .acceleration
                .map(|a| a.to_string())
                .unwrap_or_else(|| "-".to_string());
            format!(
                "{}\t{}\t{}\t{}\n",
                step.index,
                step.timestamp,
                acceleration,
                step.state.as_str()
            )
        })
        .collect()
}

pub fn write_report<W: Write>(out: &mut W, report: &str) -> Result<()> {
    out.write_all(report.as_bytes())?;
    out.flush()?;
    Ok(())
}
