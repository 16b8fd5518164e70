//! moodlift - Procedural mood image generator
//!
//! A library for turning a mood label into a palette, filling a canvas from
//! that palette and writing the result out as a PNG file.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod output;
pub mod render;
pub mod types;

pub use config::{load_settings, Settings, CONFIG_FILENAME};
pub use error::{MoodError, Result};
pub use generator::{GeneratedImage, ImageGenerator};
pub use render::{write_png, Canvas, FillStrategy, Synthesizer};
pub use types::{resolve_palette, Colour, Mood, Palette, RenderRequest};
