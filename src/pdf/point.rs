//! Defines the [PdfPoint] struct, a single coordinate in page space.

/// A single x, y coordinate pair in page space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PdfPoint {
    pub x: f32,
    pub y: f32,
}

impl PdfPoint {
    /// Creates a new [PdfPoint] with the given coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        PdfPoint { x, y }
    }
}

impl From<(f32, f32)> for PdfPoint {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        PdfPoint::new(x, y)
    }
}
