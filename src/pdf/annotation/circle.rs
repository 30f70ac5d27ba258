//! Defines the [PdfCircleAnnotation] struct, a markup annotation of subtype
//! [PdfAnnotationSubtype::Circle].

use std::f32::consts::PI;

use once_cell::sync::Lazy;

use crate::pdf::annotation::annotation_builder_methods;
use crate::pdf::annotation::attributes::PdfAnnotationAttributes;
use crate::pdf::annotation::{PdfAnnotation, PdfAnnotationSubtype};
use crate::pdf::appearance::{
    join_sections, paint_mode_operator, paint_operators, width_operator, OPACITY_REFERENCE,
};

// Content streams have no ellipse primitive, so the inscribed ellipse is
// approximated with four cubic Bézier segments, one per quadrant. For the
// control point distance see https://stackoverflow.com/a/27863181.
pub(crate) static CONTROL_POINTS_DISTANCE: Lazy<f32> =
    Lazy::new(|| (4.0 / 3.0) * (PI / 8.0).tan());

/// An ellipse annotation inscribed in its bounding rectangle.
#[derive(Debug, Clone)]
pub struct PdfCircleAnnotation {
    attributes: PdfAnnotationAttributes,
}

impl PdfCircleAnnotation {
    /// Creates a new, unbound [PdfCircleAnnotation].
    pub fn new() -> Self {
        PdfCircleAnnotation {
            attributes: PdfAnnotationAttributes::new(),
        }
    }

    annotation_builder_methods!();

    /// Traces the inscribed ellipse of the stroke-inset rectangle: four
    /// cubic segments starting at top-center and proceeding clockwise,
    /// closed with `h`.
    fn ellipse_path(&self) -> String {
        let rect = self.attributes.rect;
        let half_width = self.attributes.stroke_width / 2.0;

        let left = rect.left + half_width;
        let right = rect.right - half_width;
        let bottom = rect.bottom + half_width;
        let top = rect.top - half_width;

        let x_mid = left + (right - left) / 2.0;
        let y_mid = bottom + (top - bottom) / 2.0;
        let x_offset = ((right - left) / 2.0) * *CONTROL_POINTS_DISTANCE;
        let y_offset = ((top - bottom) / 2.0) * *CONTROL_POINTS_DISTANCE;

        let segments = [
            format!("{x_mid:.3} {top:.3} m"),
            format!(
                "{:.3} {:.3} {:.3} {:.3} {:.3} {:.3} c",
                x_mid + x_offset,
                top,
                right,
                y_mid + y_offset,
                right,
                y_mid
            ),
            format!(
                "{:.3} {:.3} {:.3} {:.3} {:.3} {:.3} c",
                right,
                y_mid - y_offset,
                x_mid + x_offset,
                bottom,
                x_mid,
                bottom
            ),
            format!(
                "{:.3} {:.3} {:.3} {:.3} {:.3} {:.3} c",
                x_mid - x_offset,
                bottom,
                left,
                y_mid - y_offset,
                left,
                y_mid
            ),
            format!(
                "{:.3} {:.3} {:.3} {:.3} {:.3} {:.3} c",
                left,
                y_mid + y_offset,
                x_mid - x_offset,
                top,
                x_mid,
                top
            ),
            "h".to_string(),
            paint_mode_operator(self.attributes.fill_color, self.attributes.stroke_color)
                .to_string(),
        ];

        segments.join("\n")
    }
}

impl Default for PdfCircleAnnotation {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAnnotation for PdfCircleAnnotation {
    fn subtype(&self) -> PdfAnnotationSubtype {
        PdfAnnotationSubtype::Circle
    }

    #[inline]
    fn attributes(&self) -> &PdfAnnotationAttributes {
        &self.attributes
    }

    #[inline]
    fn attributes_mut(&mut self) -> &mut PdfAnnotationAttributes {
        &mut self.attributes
    }

    fn generate_appearance(&mut self) {
        let appearance = join_sections([
            width_operator(self.attributes.stroke_width),
            paint_operators(self.attributes.fill_color, self.attributes.stroke_color),
            OPACITY_REFERENCE.to_string(),
            self.ellipse_path(),
        ]);

        self.attributes.appearance = Some(appearance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::color::PdfColor;
    use crate::pdf::rect::PdfRect;

    #[test]
    fn control_points_distance_matches_four_segment_constant() {
        assert!((*CONTROL_POINTS_DISTANCE - 0.552_284_8).abs() < 1e-6);
    }

    #[test]
    fn ellipse_starts_at_top_center_and_closes() {
        let mut annotation = PdfCircleAnnotation::new()
            .with_rect(PdfRect::new(100.0, 100.0, 200.0, 200.0))
            .with_stroke_width(2.0)
            .with_stroke_color(PdfColor::RED);
        annotation.generate_appearance();

        let appearance = annotation.appearance().unwrap();

        // Inset rect is (101, 101)..(199, 199); top-center is (150, 199).
        assert!(appearance.contains("150.000 199.000 m"));
        assert!(appearance.ends_with("h\nS"));
        assert_eq!(appearance.matches(" c").count(), 4);
    }

    #[test]
    fn control_points_offset_by_half_axis_times_constant() {
        let mut annotation = PdfCircleAnnotation::new()
            .with_rect(PdfRect::new(0.0, 0.0, 100.0, 100.0))
            .with_stroke_color(PdfColor::BLACK)
            .with_fill_color(PdfColor::WHITE);
        annotation.generate_appearance();

        // Half axis is 50, so the first control point of the first quadrant
        // sits at x = 50 + 50 * 0.5523 = 77.614.
        assert!(annotation
            .appearance()
            .unwrap()
            .contains("77.614 100.000 100.000 77.614 100.000 50.000 c"));
    }

    #[test]
    fn both_colors_fill_and_stroke_the_ellipse() {
        let mut annotation = PdfCircleAnnotation::new()
            .with_rect(PdfRect::new(0.0, 0.0, 10.0, 10.0))
            .with_stroke_color(PdfColor::BLACK)
            .with_fill_color(PdfColor::GREEN);
        annotation.generate_appearance();

        assert!(annotation.appearance().unwrap().ends_with("h\nB"));
    }
}
