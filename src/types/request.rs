//! Render requests and their validation.

use serde::{Deserialize, Serialize};

use crate::error::{MoodError, Result};

/// Largest accepted `size` value.
pub const MAX_SIZE: i32 = 100;

/// A request to render one mood image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub mood: String,
    pub size: i32,
    #[serde(default)]
    pub grayscale: bool,
}

impl RenderRequest {
    pub fn new(mood: impl Into<String>, size: i32, grayscale: bool) -> Self {
        Self {
            mood: mood.into(),
            size,
            grayscale,
        }
    }

    /// Check the request before it reaches the synthesizer.
    ///
    /// Size 0 is valid and produces an empty canvas.
    pub fn validate(&self) -> Result<()> {
        if self.mood.trim().is_empty() {
            return Err(MoodError::Validation {
                message: "mood must not be empty".to_string(),
                help: Some("Pass a mood such as `calm` or `happy`".to_string()),
            });
        }

        if !(0..=MAX_SIZE).contains(&self.size) {
            return Err(MoodError::Validation {
                message: format!("size {} is out of range", self.size),
                help: Some(format!("Use a size between 0 and {}", MAX_SIZE)),
            });
        }

        Ok(())
    }
}
