//! Rendering module for moodlift.
//!
//! This module handles filling canvases from palettes and writing them
//! out as PNG files.

mod canvas;
mod png;
mod synth;

pub use canvas::Canvas;
pub use png::{encode_png, mood_slug, output_filename, write_png};
pub use synth::{
    clock_seed, FillStrategy, Synthesizer, DEFAULT_BASE_RESOLUTION, DEFAULT_SHAPE_COUNT,
    DEFAULT_SHAPE_SIZE,
};
