//! Defines the [PdfUnderlineAnnotation] struct, a markup annotation of
//! subtype [PdfAnnotationSubtype::Underline].

use crate::engine::{PdfAnnotationEngine, PdfAnnotationHandle};
use crate::error::PdfMarkupError;
use crate::pdf::annotation::annotation_builder_methods;
use crate::pdf::annotation::attributes::PdfAnnotationAttributes;
use crate::pdf::annotation::{PdfAnnotation, PdfAnnotationSubtype};
use crate::pdf::appearance::{join_sections, paint_operators, OPACITY_REFERENCE};
use crate::pdf::quad_points::PdfQuadPoints;

/// Vertical offset, in page units, lifting the drawn line off the raw
/// bottom edge of each quad so it sits just under the text's baseline.
const BASELINE_OFFSET: f32 = 1.3;

/// A text underline annotation drawing one straight segment across the
/// bottom edge of each selected line's quadrilateral.
#[derive(Debug, Clone)]
pub struct PdfUnderlineAnnotation {
    attributes: PdfAnnotationAttributes,
    quad_points: Vec<PdfQuadPoints>,
}

impl PdfUnderlineAnnotation {
    /// Creates a new, unbound [PdfUnderlineAnnotation].
    pub fn new() -> Self {
        PdfUnderlineAnnotation {
            attributes: PdfAnnotationAttributes::new(),
            quad_points: Vec::new(),
        }
    }

    annotation_builder_methods!();

    /// Appends one quadrilateral covering a line of selected text.
    pub fn with_quad(mut self, quad: PdfQuadPoints) -> Self {
        self.quad_points.push(quad);
        self
    }

    /// Replaces all quadrilaterals of this annotation.
    pub fn with_quads(mut self, quads: Vec<PdfQuadPoints>) -> Self {
        self.quad_points = quads;
        self
    }

    fn underline_paths(&self) -> String {
        let paths: Vec<String> = self
            .quad_points
            .iter()
            .map(|quad| {
                format!(
                    "{:.3} {:.3} m {:.3} {:.3} l S",
                    quad.left_bottom.x,
                    quad.left_bottom.y + BASELINE_OFFSET,
                    quad.right_bottom.x,
                    quad.right_bottom.y + BASELINE_OFFSET
                )
            })
            .collect();

        paths.join("\n")
    }
}

impl Default for PdfUnderlineAnnotation {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAnnotation for PdfUnderlineAnnotation {
    fn subtype(&self) -> PdfAnnotationSubtype {
        PdfAnnotationSubtype::Underline
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
            "1 w".to_string(),
            paint_operators(self.attributes.fill_color, self.attributes.stroke_color),
            OPACITY_REFERENCE.to_string(),
            self.underline_paths(),
        ]);

        self.attributes.appearance = Some(appearance);
    }

    fn finalize(
        &self,
        engine: &dyn PdfAnnotationEngine,
        annotation: PdfAnnotationHandle,
    ) -> Result<(), PdfMarkupError> {
        for quad in &self.quad_points {
            engine.append_attachment_points(annotation, *quad)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::color::PdfColor;
    use crate::pdf::rect::PdfRect;

    #[test]
    fn line_sits_above_raw_bottom_edge() {
        let mut annotation = PdfUnderlineAnnotation::new()
            .with_rect(PdfRect::new(100.0, 100.0, 200.0, 200.0))
            .with_stroke_color(PdfColor::RED)
            .with_quad(PdfQuadPoints::from_extent(100.0, 100.0, 200.0, 200.0));
        annotation.generate_appearance();

        assert!(annotation
            .appearance()
            .unwrap()
            .contains("100.000 101.300 m 200.000 101.300 l S"));
    }

    #[test]
    fn each_quad_draws_one_segment() {
        let mut annotation = PdfUnderlineAnnotation::new()
            .with_rect(PdfRect::new(0.0, 0.0, 200.0, 400.0))
            .with_stroke_color(PdfColor::BLACK)
            .with_quads(vec![
                PdfQuadPoints::from_extent(0.0, 0.0, 200.0, 100.0),
                PdfQuadPoints::from_extent(0.0, 200.0, 200.0, 300.0),
            ]);
        annotation.generate_appearance();

        assert_eq!(
            annotation.appearance().unwrap().matches("l S").count(),
            2
        );
    }
}
