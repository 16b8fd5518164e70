//! Colour type and conversions.

use std::fmt;

use palette::Srgb;

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create an opaque colour from one of the `palette::named` constants.
    pub const fn named(c: Srgb<u8>) -> Self {
        Self::rgb(c.red, c.green, c.blue)
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Check if all three colour channels are equal.
    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Replace the colour channels with their unweighted mean.
    ///
    /// This is `(R + G + B) / 3` with integer division, not perceptual luma.
    /// Alpha is kept as-is.
    pub fn to_grayscale(self) -> Self {
        let sum = self.r as u16 + self.g as u16 + self.b as u16;
        let gray = (sum / 3) as u8;
        Self::new(gray, gray, gray, self.a)
    }
}

impl From<Srgb<u8>> for Colour {
    fn from(c: Srgb<u8>) -> Self {
        Self::named(c)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}
