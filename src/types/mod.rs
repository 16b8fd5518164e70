//! Core domain types for moodlift.
//!
//! - `Colour` - RGBA colour values
//! - `Palette` - Ordered colour collections
//! - `Mood` - Known mood labels and their palettes
//! - `RenderRequest` - A validated-before-use render request

mod colour;
mod mood;
mod palette;
mod request;

pub use colour::Colour;
pub use mood::{fallback_palette, resolve_palette, Mood, FALLBACK_NAME};
pub use palette::{Palette, PaletteSummary};
pub use request::{RenderRequest, MAX_SIZE};
