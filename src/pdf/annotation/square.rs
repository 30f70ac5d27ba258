//! Defines the [PdfSquareAnnotation] struct, a markup annotation of subtype
//! [PdfAnnotationSubtype::Square].

use crate::pdf::annotation::annotation_builder_methods;
use crate::pdf::annotation::attributes::PdfAnnotationAttributes;
use crate::pdf::annotation::{PdfAnnotation, PdfAnnotationSubtype};
use crate::pdf::appearance::{
    join_sections, paint_mode_operator, paint_operators, width_operator, OPACITY_REFERENCE,
};

/// A rectangle annotation drawn inside its bounding rectangle.
///
/// The drawn path is inset by half the stroke width on every side so the
/// stroke stays entirely within the annotation rectangle.
#[derive(Debug, Clone)]
pub struct PdfSquareAnnotation {
    attributes: PdfAnnotationAttributes,
}

impl PdfSquareAnnotation {
    /// Creates a new, unbound [PdfSquareAnnotation].
    pub fn new() -> Self {
        PdfSquareAnnotation {
            attributes: PdfAnnotationAttributes::new(),
        }
    }

    annotation_builder_methods!();

    fn rect_path(&self) -> String {
        let rect = self.attributes.rect;
        let stroke_width = self.attributes.stroke_width;

        let x = rect.left + stroke_width / 2.0;
        let y = rect.bottom + stroke_width / 2.0;
        let width = rect.width() - stroke_width;
        let height = rect.height() - stroke_width;

        format!(
            "{:.3} {:.3} {:.3} {:.3} re\n{}",
            x,
            y,
            width,
            height,
            paint_mode_operator(self.attributes.fill_color, self.attributes.stroke_color)
        )
    }
}

impl Default for PdfSquareAnnotation {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAnnotation for PdfSquareAnnotation {
    fn subtype(&self) -> PdfAnnotationSubtype {
        PdfAnnotationSubtype::Square
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
            self.rect_path(),
        ]);

        self.attributes.appearance = Some(appearance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::color::PdfColor;
    use crate::pdf::rect::PdfRect;

    fn sample() -> PdfSquareAnnotation {
        PdfSquareAnnotation::new()
            .with_rect(PdfRect::new(100.0, 100.0, 200.0, 200.0))
            .with_stroke_width(10.0)
            .with_stroke_color(PdfColor::RED)
            .with_fill_color(PdfColor::GREEN)
    }

    #[test]
    fn appearance_insets_rect_by_half_stroke_width() {
        let mut annotation = sample();
        annotation.generate_appearance();

        let appearance = annotation.appearance().unwrap();

        assert!(appearance.contains("105.000 105.000 90.000 90.000 re"));
    }

    #[test]
    fn inset_path_stays_strictly_inside_nominal_rect() {
        let mut annotation = sample();
        annotation.generate_appearance();

        // x + width == right - stroke_width / 2 on every side.
        let rect = annotation.attributes().rect;
        let width = annotation.attributes().stroke_width;
        let x = rect.left + width / 2.0;
        let path_width = rect.width() - width;

        assert_eq!(x + path_width, rect.right - width / 2.0);
    }

    #[test]
    fn appearance_orders_width_colors_opacity_path() {
        let mut annotation = sample();
        annotation.generate_appearance();

        assert_eq!(
            annotation.appearance().unwrap(),
            "10.000 w\n\
             0.000 1.000 0.000 rg\n\
             1.000 0.000 0.000 RG\n\
             /GS gs\n\
             105.000 105.000 90.000 90.000 re\n\
             B"
        );
    }

    #[test]
    fn stroke_only_square_strokes_the_path() {
        let mut annotation = PdfSquareAnnotation::new()
            .with_rect(PdfRect::new(0.0, 0.0, 10.0, 10.0))
            .with_stroke_color(PdfColor::BLACK);
        annotation.generate_appearance();

        assert!(annotation.appearance().unwrap().ends_with("re\nS"));
    }

    #[test]
    fn fill_only_square_fills_the_path() {
        let mut annotation = PdfSquareAnnotation::new()
            .with_rect(PdfRect::new(0.0, 0.0, 10.0, 10.0))
            .with_fill_color(PdfColor::BLUE);
        annotation.generate_appearance();

        assert!(annotation.appearance().unwrap().ends_with("re\nf"));
    }

    #[test]
    fn generation_is_idempotent() {
        let mut annotation = sample();
        annotation.generate_appearance();
        let first = annotation.appearance().unwrap().to_string();

        annotation.generate_appearance();

        assert_eq!(annotation.appearance().unwrap(), first);
    }
}
