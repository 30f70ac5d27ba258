//! Defines the [PdfRect] struct, an axis-aligned rectangle in page space.

/// Tolerance below which a coordinate is treated as zero, absorbing
/// float round-trips through the engine boundary.
pub(crate) const ZERO_EPSILON: f32 = 1e-6;

#[inline]
pub(crate) fn is_zero_epsilon(value: f32) -> bool {
    value.abs() < ZERO_EPSILON
}

/// An axis-aligned rectangle in page space.
///
/// Page space has its origin at the bottom-left corner of the page, with the
/// y axis pointing up. An all-zero rectangle is treated as "unset".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PdfRect {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl PdfRect {
    /// Creates a new [PdfRect] from the given corner coordinates.
    #[inline]
    pub const fn new(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        PdfRect {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Returns the width of this rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Returns the height of this rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Returns `true` if all four coordinates are zero within
    /// [ZERO_EPSILON], the convention for a rectangle that was never set.
    pub fn is_unset(&self) -> bool {
        is_zero_epsilon(self.left)
            && is_zero_epsilon(self.bottom)
            && is_zero_epsilon(self.right)
            && is_zero_epsilon(self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rect_is_unset() {
        assert!(PdfRect::default().is_unset());
    }

    #[test]
    fn rounding_noise_is_still_unset() {
        assert!(PdfRect::new(1e-7, -1e-7, 5e-7, 0.0).is_unset());
    }

    #[test]
    fn set_rect_is_not_unset() {
        assert!(!PdfRect::new(100.0, 100.0, 200.0, 200.0).is_unset());
        assert!(!PdfRect::new(0.0, 0.0, 0.0, 1.0).is_unset());
    }

    #[test]
    fn width_and_height() {
        let rect = PdfRect::new(100.0, 50.0, 300.0, 200.0);

        assert_eq!(rect.width(), 200.0);
        assert_eq!(rect.height(), 150.0);
    }
}
