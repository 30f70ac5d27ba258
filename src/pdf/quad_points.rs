//! Defines the [PdfQuadPoints] struct, a four-cornered region used by
//! text-markup annotations.

use crate::pdf::point::PdfPoint;

/// An arbitrary, possibly rotated, quadrilateral region in page space.
///
/// Text-markup annotations describe each line or run of selected text with
/// one [PdfQuadPoints]; a multi-line selection carries one quad per line.
/// Corners are named for their position in an unrotated selection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PdfQuadPoints {
    pub left_top: PdfPoint,
    pub right_top: PdfPoint,
    pub right_bottom: PdfPoint,
    pub left_bottom: PdfPoint,
}

impl PdfQuadPoints {
    /// Creates a new [PdfQuadPoints] from the four corner points.
    #[inline]
    pub const fn new(
        left_top: PdfPoint,
        right_top: PdfPoint,
        right_bottom: PdfPoint,
        left_bottom: PdfPoint,
    ) -> Self {
        PdfQuadPoints {
            left_top,
            right_top,
            right_bottom,
            left_bottom,
        }
    }

    /// Creates a new axis-aligned [PdfQuadPoints] covering the given extent.
    pub fn from_extent(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        PdfQuadPoints {
            left_top: PdfPoint::new(left, top),
            right_top: PdfPoint::new(right, top),
            right_bottom: PdfPoint::new(right, bottom),
            left_bottom: PdfPoint::new(left, bottom),
        }
    }
}
