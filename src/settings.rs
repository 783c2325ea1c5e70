use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::report::OutputFormat;
use crate::segmentation::SegmentationConfig;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_info, log_warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// Everything a settings file can hold. Missing sections fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserSettings {
    pub segmentation: SegmentationConfig,
    pub output: OutputSettings,
}

pub struct SettingsStore {
    path: PathBuf,
    data: UserSettings,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            let data = serde_json::from_str(&contents)
                .with_context(|| format!("Invalid settings in {}", path.display()))?;
            log_info!("Loaded settings from {}", path.display());
            data
        } else {
            log_warn!("No settings at {}; using defaults", path.display());
            UserSettings::default()
        };

        Ok(Self { path, data })
    }

    pub fn settings(&self) -> &UserSettings {
        &self.data
    }

    pub fn update(&mut self, settings: UserSettings) -> Result<()> {
        self.persist(&settings)?;
        self.data = settings;
        Ok(())
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
