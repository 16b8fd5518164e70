//! Image synthesizer - turns a palette into a canvas.
//!
//! Synthesis is a pure function of its inputs and the random source. The
//! caller owns the source, so a fixed seed reproduces the exact pixels.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::types::{Palette, MAX_SIZE};

use super::Canvas;

/// Pixels per side at `size = 100`.
pub const DEFAULT_BASE_RESOLUTION: u32 = 512;

/// Squares overlaid by the `shapes` fill.
pub const DEFAULT_SHAPE_COUNT: u32 = 5;

/// Side of each overlaid square, in pixels.
pub const DEFAULT_SHAPE_SIZE: u32 = 20;

/// How the canvas is filled from the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FillStrategy {
    /// Solid primary colour with random squares on top.
    #[default]
    Shapes,
    /// Every pixel an independent random palette colour.
    Noise,
}

/// Synthesis parameters shared by every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Synthesizer {
    pub base_resolution: u32,
    pub fill: FillStrategy,
    pub shape_count: u32,
    pub shape_size: u32,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self {
            base_resolution: DEFAULT_BASE_RESOLUTION,
            fill: FillStrategy::default(),
            shape_count: DEFAULT_SHAPE_COUNT,
            shape_size: DEFAULT_SHAPE_SIZE,
        }
    }
}

impl Synthesizer {
    /// Side length in pixels for a request size.
    ///
    /// Sizes are clamped to `[0, 100]`, so negative input yields 0.
    pub fn dimension(&self, size: i32) -> usize {
        let size = size.clamp(0, MAX_SIZE) as u64;
        (self.base_resolution as u64 * size / MAX_SIZE as u64) as usize
    }

    /// Fill a fresh canvas from the palette.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        palette: &Palette,
        size: i32,
        grayscale: bool,
        rng: &mut R,
    ) -> Canvas {
        let side = self.dimension(size);
        if side == 0 {
            return Canvas::empty();
        }

        let mut canvas = match self.fill {
            FillStrategy::Shapes => self.fill_shapes(palette, side, rng),
            FillStrategy::Noise => fill_noise(palette, side, rng),
        };

        if grayscale {
            canvas.apply_grayscale();
        }

        canvas
    }

    /// Synthesize with a `StdRng` seeded from `seed`.
    pub fn synthesize_seeded(
        &self,
        palette: &Palette,
        size: i32,
        grayscale: bool,
        seed: u64,
    ) -> Canvas {
        let mut rng = StdRng::seed_from_u64(seed);
        self.synthesize(palette, size, grayscale, &mut rng)
    }

    fn fill_shapes<R: Rng + ?Sized>(&self, palette: &Palette, side: usize, rng: &mut R) -> Canvas {
        let mut canvas = Canvas::new(side, side, palette.primary());
        let half = (self.shape_size / 2) as i64;
        let side_len = self.shape_size as i64;

        for _ in 0..self.shape_count {
            // Centre inside the canvas; the square itself may hang off the edge
            let cx = rng.gen_range(0..side) as i64;
            let cy = rng.gen_range(0..side) as i64;
            let colour = palette.choose(rng);
            let (x0, y0) = (cx - half, cy - half);
            canvas.fill_rect(x0, y0, x0 + side_len, y0 + side_len, colour);
        }

        canvas
    }
}

fn fill_noise<R: Rng + ?Sized>(palette: &Palette, side: usize, rng: &mut R) -> Canvas {
    let mut canvas = Canvas::new(side, side, palette.primary());
    for y in 0..side {
        for x in 0..side {
            canvas.set(x, y, palette.choose(rng));
        }
    }
    canvas
}

/// A seed taken from the wall clock, for production calls.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{resolve_palette, Colour, Mood};

    fn noise() -> Synthesizer {
        Synthesizer {
            fill: FillStrategy::Noise,
            ..Default::default()
        }
    }

    #[test]
    fn test_dimension_mapping() {
        let synth = Synthesizer::default();
        assert_eq!(synth.dimension(0), 0);
        assert_eq!(synth.dimension(50), 256);
        assert_eq!(synth.dimension(100), 512);
        assert_eq!(synth.dimension(1), 5);
    }

    #[test]
    fn test_dimension_clamps() {
        let synth = Synthesizer::default();
        assert_eq!(synth.dimension(-5), 0);
        assert_eq!(synth.dimension(i32::MIN), 0);
        assert_eq!(synth.dimension(250), 512);
    }

    #[test]
    fn test_dimension_monotonic() {
        let synth = Synthesizer::default();
        for size in 1..MAX_SIZE {
            assert!(synth.dimension(size) < synth.dimension(size + 1));
        }
    }

    #[test]
    fn test_square_canvas() {
        let palette = resolve_palette("happy");
        for size in [1, 7, 33, 100] {
            let canvas = Synthesizer::default().synthesize_seeded(&palette, size, false, 1);
            assert_eq!(canvas.width(), canvas.height());
        }
    }

    #[test]
    fn test_size_zero_is_empty() {
        let palette = resolve_palette("calm");
        for synth in [Synthesizer::default(), noise()] {
            for grayscale in [false, true] {
                let canvas = synth.synthesize_seeded(&palette, 0, grayscale, 3);
                assert!(canvas.is_empty());
                assert_eq!(canvas.size(), (0, 0));
            }
        }
    }

    #[test]
    fn test_negative_size_is_empty() {
        let canvas = Synthesizer::default().synthesize_seeded(&resolve_palette("sad"), -20, true, 3);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_calm_only_uses_palette_colours() {
        let palette = resolve_palette("calm");
        for synth in [Synthesizer::default(), noise()] {
            let canvas = synth.synthesize_seeded(&palette, 50, false, 42);
            assert_eq!(canvas.size(), (256, 256));
            assert!(canvas.iter().all(|c| palette.contains(c)));
        }
    }

    #[test]
    fn test_grayscale_output() {
        let palette = resolve_palette("calm");
        for synth in [Synthesizer::default(), noise()] {
            let colour = synth.synthesize_seeded(&palette, 50, false, 42);
            let gray = synth.synthesize_seeded(&palette, 50, true, 42);
            assert!(gray.iter().all(|c| c.is_gray() && c.is_opaque()));

            // Same layout as the colour render, just desaturated
            let mut expected = colour;
            expected.apply_grayscale();
            assert_eq!(gray, expected);
        }
    }

    #[test]
    fn test_grayscale_idempotent() {
        let mut canvas = noise().synthesize_seeded(&resolve_palette("excited"), 10, true, 5);
        let once = canvas.clone();
        canvas.apply_grayscale();
        assert_eq!(canvas, once);
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        for mood in Mood::ALL {
            let palette = mood.palette();
            for synth in [Synthesizer::default(), noise()] {
                for grayscale in [false, true] {
                    let a = synth.synthesize_seeded(&palette, 30, grayscale, 1234);
                    let b = synth.synthesize_seeded(&palette, 30, grayscale, 1234);
                    assert_eq!(a, b);
                }
            }
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let palette = resolve_palette("angry");
        let a = noise().synthesize_seeded(&palette, 20, false, 1);
        let b = noise().synthesize_seeded(&palette, 20, false, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_shapes_background_is_primary() {
        let palette = resolve_palette("happy");
        let synth = Synthesizer {
            shape_count: 0,
            ..Default::default()
        };
        let canvas = synth.synthesize_seeded(&palette, 10, false, 9);
        assert!(canvas.iter().all(|c| c == palette.primary()));
    }

    #[test]
    fn test_shapes_cover_bounded_area() {
        // One 4x4 square can recolour at most 16 pixels
        let palette = resolve_palette("angry");
        let synth = Synthesizer {
            base_resolution: 100,
            shape_count: 1,
            shape_size: 4,
            ..Default::default()
        };
        for seed in 0..20 {
            let canvas = synth.synthesize_seeded(&palette, 100, false, seed);
            let changed = canvas.iter().filter(|&c| c != palette.primary()).count();
            assert!(changed <= 16, "seed {} changed {} pixels", seed, changed);
        }
    }

    #[test]
    fn test_shapes_have_exact_side() {
        // Over enough seeds some square lands fully inside with a non-primary
        // colour; it must cover exactly side * side pixels.
        let palette = resolve_palette("angry");
        for shape_size in [1u32, 3, 4, 7] {
            let synth = Synthesizer {
                base_resolution: 100,
                shape_count: 1,
                shape_size,
                ..Default::default()
            };
            let max_changed = (0..200)
                .map(|seed| {
                    let canvas = synth.synthesize_seeded(&palette, 100, false, seed);
                    canvas.iter().filter(|&c| c != palette.primary()).count()
                })
                .max()
                .unwrap();
            let area = (shape_size * shape_size) as usize;
            assert_eq!(max_changed, area, "shape_size {}", shape_size);
        }
    }

    #[test]
    fn test_shapes_larger_than_canvas_clip() {
        let palette = resolve_palette("sad");
        let synth = Synthesizer {
            base_resolution: 100,
            shape_count: 5,
            shape_size: 400,
            ..Default::default()
        };
        let canvas = synth.synthesize_seeded(&palette, 2, false, 11);
        assert_eq!(canvas.size(), (2, 2));
        assert!(canvas.iter().all(|c| palette.contains(c)));
    }

    #[test]
    fn test_fallback_palette_stays_gray() {
        let palette = resolve_palette("unknown-mood-xyz");
        let canvas = noise().synthesize_seeded(&palette, 10, false, 8);
        assert!(canvas.iter().all(|c| c.is_gray()));
        assert!(canvas.iter().all(|c| c != Colour::BLACK));
    }

    #[test]
    fn test_fill_strategy_names() {
        let fill: FillStrategy = serde_yaml::from_str("noise").unwrap();
        assert_eq!(fill, FillStrategy::Noise);
        assert_eq!(FillStrategy::default(), FillStrategy::Shapes);
    }
}
