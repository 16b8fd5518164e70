//! Project settings (moodlift.yaml) parsing.
//!
//! Settings define where images are written and how canvases are filled.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MoodError, Result};
use crate::render::{
    FillStrategy, Synthesizer, DEFAULT_BASE_RESOLUTION, DEFAULT_SHAPE_COUNT, DEFAULT_SHAPE_SIZE,
};

/// Accepted range for `base_resolution`.
const BASE_RESOLUTION_RANGE: std::ops::RangeInclusive<u32> = 100..=4096;

/// Settings loaded from moodlift.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory generated images are written to.
    pub output: PathBuf,

    /// Canvas side in pixels at size 100.
    pub base_resolution: u32,

    /// Fill strategy.
    pub fill: FillStrategy,

    /// Number of squares overlaid by the shapes fill.
    pub shape_count: u32,

    /// Side of each square, in pixels.
    pub shape_size: u32,
}

fn default_output() -> PathBuf {
    PathBuf::from("static/images")
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: default_output(),
            base_resolution: DEFAULT_BASE_RESOLUTION,
            fill: FillStrategy::default(),
            shape_count: DEFAULT_SHAPE_COUNT,
            shape_size: DEFAULT_SHAPE_SIZE,
        }
    }
}

impl Settings {
    /// Load settings from a moodlift.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MoodError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read settings: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse settings from a YAML string and check their ranges.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_yaml::from_str(content).map_err(|e| MoodError::Config {
            message: format!("Invalid settings: {}", e),
            help: Some("Check moodlift.yaml syntax".to_string()),
        })?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the synthesizer cannot honour.
    pub fn validate(&self) -> Result<()> {
        if !BASE_RESOLUTION_RANGE.contains(&self.base_resolution) {
            return Err(MoodError::Config {
                message: format!("base_resolution {} is out of range", self.base_resolution),
                help: Some(format!(
                    "Use a value between {} and {}",
                    BASE_RESOLUTION_RANGE.start(),
                    BASE_RESOLUTION_RANGE.end()
                )),
            });
        }

        if self.shape_size == 0 {
            return Err(MoodError::Config {
                message: "shape_size must be at least 1".to_string(),
                help: None,
            });
        }

        if self.output.as_os_str().is_empty() {
            return Err(MoodError::Config {
                message: "output directory must not be empty".to_string(),
                help: Some("Set `output:` in moodlift.yaml".to_string()),
            });
        }

        Ok(())
    }

    /// Synthesis parameters described by these settings.
    pub fn synthesizer(&self) -> Synthesizer {
        Synthesizer {
            base_resolution: self.base_resolution,
            fill: self.fill,
            shape_count: self.shape_count,
            shape_size: self.shape_size,
        }
    }

    /// Render settings as YAML (for `moodlift init`).
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| MoodError::Config {
            message: format!("Failed to serialize settings: {}", e),
            help: None,
        })
    }
}
