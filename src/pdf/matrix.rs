//! Defines the [PdfMatrix] struct, the affine placement matrix applied to
//! drawable page objects.

use crate::pdf::rect::PdfRect;

/// An affine transformation matrix in the six-value form used by page
/// content: `a b c d e f`, mapping `x' = a·x + c·y + e`, `y' = b·x + d·y + f`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfMatrix {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl PdfMatrix {
    pub const IDENTITY: PdfMatrix = PdfMatrix::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    /// Creates a new [PdfMatrix] from the six matrix values.
    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        PdfMatrix { a, b, c, d, e, f }
    }

    /// Returns the matrix that scales and translates a unit square to
    /// exactly fill the given rectangle. Aspect ratio is not preserved.
    pub fn fill_rect(rect: PdfRect) -> Self {
        PdfMatrix::new(
            rect.width(),
            0.0,
            0.0,
            rect.height(),
            rect.left,
            rect.bottom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_scales_and_offsets() {
        let matrix = PdfMatrix::fill_rect(PdfRect::new(50.0, 75.0, 250.0, 175.0));

        assert_eq!(matrix.a, 200.0);
        assert_eq!(matrix.b, 0.0);
        assert_eq!(matrix.c, 0.0);
        assert_eq!(matrix.d, 100.0);
        assert_eq!(matrix.e, 50.0);
        assert_eq!(matrix.f, 75.0);
    }
}
