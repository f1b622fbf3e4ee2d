//! RGBA color keys for adjacency modeling

use std::fmt;

/// An RGBA color used as an exact-match key in the transition model
///
/// Channels are compared byte for byte; two pixels with identical channel
/// values are the same color regardless of where they appear in the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// Fully transparent black, the initial fill of every output canvas
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);

    /// Create a color from channel values in RGBA order
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Create a fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    /// Raw channel values in RGBA order
    pub const fn channels(self) -> [u8; 4] {
        self.0
    }

    /// Alpha channel value
    pub const fn alpha(self) -> u8 {
        self.0[3]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(rgba: image::Rgba<u8>) -> Self {
        Self(rgba.0)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        Self(color.0)
    }
}
