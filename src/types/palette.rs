//! Palette type for ordered mood colour collections.

use rand::Rng;
use serde::Serialize;

use super::Colour;

/// An ordered, never-empty list of colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Palette name (the mood label, or `fallback`)
    pub name: &'static str,

    /// Colours in table order. The first entry is the primary colour.
    colours: Vec<Colour>,
}

impl Palette {
    /// Build a palette from a static colour table.
    ///
    /// Tables are compile-time constants; an empty one is a programming error.
    pub(crate) fn from_table(name: &'static str, table: &[Colour]) -> Self {
        debug_assert!(!table.is_empty(), "palette `{}` has no colours", name);
        Self {
            name,
            colours: table.to_vec(),
        }
    }

    /// The first colour in the palette.
    pub fn primary(&self) -> Colour {
        self.colours[0]
    }

    /// Pick a colour uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Colour {
        self.colours[rng.gen_range(0..self.colours.len())]
    }

    /// Check if a colour belongs to this palette.
    pub fn contains(&self, colour: Colour) -> bool {
        self.colours.contains(&colour)
    }

    /// Get the colours in order.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Get the number of colours.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Hex strings for machine-readable output.
    pub fn to_summary(&self) -> PaletteSummary {
        PaletteSummary {
            name: self.name.to_string(),
            colours: self.colours.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Serializable view of a palette (`moodlift palette --json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteSummary {
    pub name: String,
    pub colours: Vec<String>,
}
