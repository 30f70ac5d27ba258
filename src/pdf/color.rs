//! Defines the [PdfColor] struct, an RGB color in the sRGB color space.

/// A color with 8-bit red, green, and blue channels.
///
/// Opacity is not part of the color itself: annotations carry a single
/// opacity scalar shared by their stroke and fill colors, applied through an
/// external graphics-state resource rather than per-color alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfColor {
    r: u8,
    g: u8,
    b: u8,
}

impl PdfColor {
    pub const BLACK: PdfColor = PdfColor::new(0, 0, 0);
    pub const WHITE: PdfColor = PdfColor::new(255, 255, 255);
    pub const RED: PdfColor = PdfColor::new(255, 0, 0);
    pub const GREEN: PdfColor = PdfColor::new(0, 255, 0);
    pub const BLUE: PdfColor = PdfColor::new(0, 0, 255);
    pub const YELLOW: PdfColor = PdfColor::new(255, 255, 0);

    /// Creates a new [PdfColor] from the given channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        PdfColor { r, g, b }
    }

    /// Returns the red channel of this color.
    #[inline]
    pub fn red(&self) -> u8 {
        self.r
    }

    /// Returns the green channel of this color.
    #[inline]
    pub fn green(&self) -> u8 {
        self.g
    }

    /// Returns the blue channel of this color.
    #[inline]
    pub fn blue(&self) -> u8 {
        self.b
    }

    /// Returns `true` if all three channels are equal, in which case the
    /// color can be expressed with a single-value gray operator in content
    /// streams.
    #[inline]
    pub fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }
}
