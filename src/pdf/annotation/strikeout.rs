//! Defines the [PdfStrikeoutAnnotation] struct, a markup annotation of
//! subtype [PdfAnnotationSubtype::Strikeout].

use crate::engine::{PdfAnnotationEngine, PdfAnnotationHandle};
use crate::error::PdfMarkupError;
use crate::pdf::annotation::annotation_builder_methods;
use crate::pdf::annotation::attributes::PdfAnnotationAttributes;
use crate::pdf::annotation::{PdfAnnotation, PdfAnnotationSubtype};
use crate::pdf::appearance::{join_sections, paint_operators, OPACITY_REFERENCE};
use crate::pdf::quad_points::PdfQuadPoints;

/// A text strikeout annotation drawing one straight segment through the
/// vertical midpoint of each selected line's quadrilateral.
#[derive(Debug, Clone)]
pub struct PdfStrikeoutAnnotation {
    attributes: PdfAnnotationAttributes,
    quad_points: Vec<PdfQuadPoints>,
}

impl PdfStrikeoutAnnotation {
    /// Creates a new, unbound [PdfStrikeoutAnnotation].
    pub fn new() -> Self {
        PdfStrikeoutAnnotation {
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

    fn strikeout_paths(&self) -> String {
        let paths: Vec<String> = self
            .quad_points
            .iter()
            .map(|quad| {
                format!(
                    "{:.3} {:.3} m {:.3} {:.3} l S",
                    (quad.left_top.x + quad.left_bottom.x) / 2.0,
                    (quad.left_top.y + quad.left_bottom.y) / 2.0,
                    (quad.right_top.x + quad.right_bottom.x) / 2.0,
                    (quad.right_top.y + quad.right_bottom.y) / 2.0
                )
            })
            .collect();

        paths.join("\n")
    }
}

impl Default for PdfStrikeoutAnnotation {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAnnotation for PdfStrikeoutAnnotation {
    fn subtype(&self) -> PdfAnnotationSubtype {
        PdfAnnotationSubtype::Strikeout
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
            // Reset any inherited dash pattern to a solid hairline.
            "[] 0 d 1 w".to_string(),
            paint_operators(self.attributes.fill_color, self.attributes.stroke_color),
            OPACITY_REFERENCE.to_string(),
            self.strikeout_paths(),
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
    fn segment_runs_through_vertical_midpoint() {
        let mut annotation = PdfStrikeoutAnnotation::new()
            .with_rect(PdfRect::new(100.0, 100.0, 200.0, 200.0))
            .with_stroke_color(PdfColor::RED)
            .with_quad(PdfQuadPoints::from_extent(100.0, 100.0, 200.0, 200.0));
        annotation.generate_appearance();

        assert!(annotation
            .appearance()
            .unwrap()
            .contains("100.000 150.000 m 200.000 150.000 l S"));
    }

    #[test]
    fn dash_reset_precedes_color_operators() {
        let mut annotation = PdfStrikeoutAnnotation::new()
            .with_rect(PdfRect::new(0.0, 0.0, 10.0, 10.0))
            .with_stroke_color(PdfColor::BLACK)
            .with_quad(PdfQuadPoints::from_extent(0.0, 0.0, 10.0, 10.0));
        annotation.generate_appearance();

        assert!(annotation
            .appearance()
            .unwrap()
            .starts_with("[] 0 d 1 w\n0.000 G"));
    }
}
