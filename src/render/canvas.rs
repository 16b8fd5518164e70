//! Canvas - the in-memory pixel grid a synthesis call produces.

use crate::types::Colour;

/// A grid of colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Pixel grid (row-major: pixels[y][x]).
    pixels: Vec<Vec<Colour>>,

    /// Width in pixels.
    width: usize,

    /// Height in pixels.
    height: usize,
}

impl Canvas {
    /// Create a canvas filled with a single colour.
    pub fn new(width: usize, height: usize, fill: Colour) -> Self {
        if width == 0 || height == 0 {
            return Self::empty();
        }

        Self {
            pixels: vec![vec![fill; width]; height],
            width,
            height,
        }
    }

    /// A zero-area canvas.
    pub fn empty() -> Self {
        Self {
            pixels: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Check if the canvas has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Set a pixel. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, colour: Colour) {
        if let Some(px) = self.pixels.get_mut(y).and_then(|row| row.get_mut(x)) {
            *px = colour;
        }
    }

    /// Fill the half-open rectangle `[x0, x1) × [y0, y1)`, clipped to the canvas.
    pub fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, colour: Colour) {
        let clip = |v: i64, max: usize| v.clamp(0, max as i64) as usize;
        let (x0, x1) = (clip(x0, self.width), clip(x1, self.width));
        let (y0, y1) = (clip(y0, self.height), clip(y1, self.height));

        for row in &mut self.pixels[y0..y1.max(y0)] {
            for px in &mut row[x0..x1.max(x0)] {
                *px = colour;
            }
        }
    }

    /// Replace every pixel with its grayscale equivalent.
    pub fn apply_grayscale(&mut self) {
        for px in self.pixels.iter_mut().flatten() {
            *px = px.to_grayscale();
        }
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }

    /// Iterate over every pixel in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Colour> + '_ {
        self.pixels.iter().flatten().copied()
    }

    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.width * self.height * 4);
        for colour in self.iter() {
            buffer.extend_from_slice(&colour.to_rgba());
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Colour = Colour::rgb(255, 0, 0);

    #[test]
    fn test_new_fills() {
        let canvas = Canvas::new(3, 2, RED);
        assert_eq!(canvas.size(), (3, 2));
        assert!(canvas.iter().all(|c| c == RED));
        assert_eq!(canvas.iter().count(), 6);
    }

    #[test]
    fn test_zero_dimension_is_empty() {
        assert!(Canvas::new(0, 10, RED).is_empty());
        assert_eq!(Canvas::new(10, 0, RED).size(), (0, 0));
        assert_eq!(Canvas::empty().to_rgba_buffer(), Vec::<u8>::new());
    }

    #[test]
    fn test_set_out_of_bounds_ignored() {
        let mut canvas = Canvas::new(2, 2, Colour::BLACK);
        canvas.set(5, 5, RED);
        canvas.set(1, 0, RED);
        assert_eq!(canvas.get(1, 0), Some(RED));
        assert_eq!(canvas.get(5, 5), None);
        assert_eq!(canvas.iter().filter(|&c| c == RED).count(), 1);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = Canvas::new(4, 4, Colour::BLACK);
        canvas.fill_rect(-2, -2, 2, 2, RED);
        assert_eq!(canvas.get(0, 0), Some(RED));
        assert_eq!(canvas.get(1, 1), Some(RED));
        assert_eq!(canvas.get(2, 2), Some(Colour::BLACK));
        assert_eq!(canvas.iter().filter(|&c| c == RED).count(), 4);

        canvas.fill_rect(3, 3, 100, 100, Colour::WHITE);
        assert_eq!(canvas.get(3, 3), Some(Colour::WHITE));

        // Fully outside or inverted rectangles are no-ops
        let before = canvas.clone();
        canvas.fill_rect(10, 10, 20, 20, RED);
        canvas.fill_rect(3, 3, 1, 1, RED);
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_apply_grayscale() {
        let mut canvas = Canvas::new(2, 1, RED);
        canvas.set(1, 0, Colour::rgb(0, 0, 30));
        canvas.apply_grayscale();
        assert_eq!(canvas.get(0, 0), Some(Colour::rgb(85, 85, 85)));
        assert_eq!(canvas.get(1, 0), Some(Colour::rgb(10, 10, 10)));
    }

    #[test]
    fn test_to_rgba_buffer() {
        let mut canvas = Canvas::new(2, 1, Colour::BLACK);
        canvas.set(1, 0, Colour::WHITE);
        assert_eq!(
            canvas.to_rgba_buffer(),
            vec![0, 0, 0, 255, 255, 255, 255, 255]
        );
    }
}
