//! The image generation entry point.
//!
//! `ImageGenerator` ties palette resolution, synthesis and PNG output
//! together. It holds only immutable settings, so one instance can serve
//! concurrent requests.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Settings;
use crate::error::{MoodError, Result};
use crate::render::{clock_seed, write_png, Synthesizer};
use crate::types::{resolve_palette, RenderRequest};

/// Record of one generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedImage {
    /// Path of the written PNG.
    pub path: PathBuf,
    /// Mood label as requested.
    pub mood: String,
    /// Name of the palette the mood resolved to.
    pub palette: String,
    pub width: usize,
    pub height: usize,
    pub grayscale: bool,
    /// Seed that reproduces this image.
    pub seed: u64,
}

impl GeneratedImage {
    /// File name of the image, for building a public URL.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// Generates mood images into an output directory.
#[derive(Debug, Clone)]
pub struct ImageGenerator {
    output_dir: PathBuf,
    synthesizer: Synthesizer,
}

impl ImageGenerator {
    /// Create a generator, creating the output directory if needed.
    ///
    /// Failing to create the directory is a startup error.
    pub fn new(output_dir: impl Into<PathBuf>, synthesizer: Synthesizer) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|e| MoodError::Config {
            message: format!(
                "Cannot create output directory {}: {}",
                output_dir.display(),
                e
            ),
            help: Some("Check permissions or set `output:` in moodlift.yaml".to_string()),
        })?;

        Ok(Self {
            output_dir,
            synthesizer,
        })
    }

    /// Create a generator from loaded settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Self::new(&settings.output, settings.synthesizer())
    }

    /// Get the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Get the synthesis parameters.
    pub fn synthesizer(&self) -> &Synthesizer {
        &self.synthesizer
    }

    /// Generate one image, seeding from the wall clock.
    ///
    /// Input is expected to be validated by the caller; a negative size is
    /// treated as zero.
    pub fn generate_image(&self, mood: &str, size: i32, grayscale: bool) -> Result<GeneratedImage> {
        let request = RenderRequest::new(mood, size, grayscale);
        self.generate(&request, clock_seed())
    }

    /// Generate one image with an explicit seed.
    pub fn generate(&self, request: &RenderRequest, seed: u64) -> Result<GeneratedImage> {
        let palette = resolve_palette(&request.mood);
        let canvas =
            self.synthesizer
                .synthesize_seeded(&palette, request.size, request.grayscale, seed);

        let path = write_png(&canvas, &self.output_dir, &request.mood)?;

        Ok(GeneratedImage {
            path,
            mood: request.mood.clone(),
            palette: palette.name.to_string(),
            width: canvas.width(),
            height: canvas.height(),
            grayscale: request.grayscale,
            seed,
        })
    }
}
