//! Reads bus logs exported by the vision tagger.
//!
//! The file starts with a header row; every following row carries at least
//! `timestamp, vision state, speed` in that order. Extra columns are ignored.
//! Quotes are not special: a field is everything between two commas.

use anyhow::{anyhow, Context, Result};
use std::io::Read;
use std::path::Path;

use crate::models::Record;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_info;

const MIN_FIELDS: usize = 3;

pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open bus log {}", path.display()))?;
    let records = parse_records(file)
        .with_context(|| format!("Failed to read bus log {}", path.display()))?;

    log_info!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn parse_records<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.context("Malformed CSV row")?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        records.push(parse_row(&row).with_context(|| format!("Bad record on line {line}"))?);
    }

    Ok(records)
}

fn parse_row(row: &csv::StringRecord) -> Result<Record> {
    if row.len() < MIN_FIELDS {
        return Err(anyhow!(
            "expected at least {MIN_FIELDS} fields, found {}",
            row.len()
        ));
    }

    let timestamp = &row[0];
    let vision_state = row[1]
        .trim()
        .parse::<i64>()
        .with_context(|| format!("vision state {:?} is not an integer", &row[1]))?;
    let speed = row[2]
        .trim()
        .parse::<f64>()
        .with_context(|| format!("speed {:?} is not a number", &row[2]))?;

    Ok(Record::new(timestamp, vision_state, speed))
}
