//! Defines the [PdfHighlightAnnotation] struct, a markup annotation of
//! subtype [PdfAnnotationSubtype::Highlight].

use crate::engine::{PdfAnnotationEngine, PdfAnnotationHandle};
use crate::error::PdfMarkupError;
use crate::pdf::annotation::annotation_builder_methods;
use crate::pdf::annotation::attributes::PdfAnnotationAttributes;
use crate::pdf::annotation::{PdfAnnotation, PdfAnnotationSubtype};
use crate::pdf::appearance::{color_operator, join_sections, OPACITY_REFERENCE};
use crate::pdf::color::PdfColor;
use crate::pdf::quad_points::PdfQuadPoints;

/// The color applied when none is set; matches the yellow Acrobat Reader
/// uses for new highlights.
pub const DEFAULT_HIGHLIGHT_COLOR: PdfColor = PdfColor::YELLOW;

/// A text highlight annotation covering one quadrilateral per selected
/// line of text.
///
/// Highlight semantics are historically asymmetric: the color is set
/// through the *stroke* accessor but painted through the *fill* channel of
/// the appearance stream, because the highlight's interior is the only
/// thing drawn. This is a deliberate behavioral contract preserved from
/// established readers, not an oversight.
#[derive(Debug, Clone)]
pub struct PdfHighlightAnnotation {
    attributes: PdfAnnotationAttributes,
    quad_points: Vec<PdfQuadPoints>,
}

impl PdfHighlightAnnotation {
    /// Creates a new, unbound [PdfHighlightAnnotation].
    pub fn new() -> Self {
        PdfHighlightAnnotation {
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

    /// Returns the quadrilaterals configured on this annotation.
    #[inline]
    pub fn quads(&self) -> &[PdfQuadPoints] {
        &self.quad_points
    }

    fn quad_fill_paths(&self) -> String {
        let paths: Vec<String> = self
            .quad_points
            .iter()
            .map(|quad| {
                format!(
                    "{:.3} {:.3} m {:.3} {:.3} l {:.3} {:.3} l {:.3} {:.3} l h f",
                    quad.left_top.x,
                    quad.left_top.y,
                    quad.right_top.x,
                    quad.right_top.y,
                    quad.right_bottom.x,
                    quad.right_bottom.y,
                    quad.left_bottom.x,
                    quad.left_bottom.y
                )
            })
            .collect();

        paths.join("\n")
    }
}

impl Default for PdfHighlightAnnotation {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAnnotation for PdfHighlightAnnotation {
    fn subtype(&self) -> PdfAnnotationSubtype {
        PdfAnnotationSubtype::Highlight
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
        // The color named through the stroke accessor paints the interior.
        let color = self
            .attributes
            .stroke_color
            .unwrap_or(DEFAULT_HIGHLIGHT_COLOR);

        let appearance = join_sections([
            color_operator(color, true),
            OPACITY_REFERENCE.to_string(),
            self.quad_fill_paths(),
        ]);

        self.attributes.appearance = Some(appearance);
    }

    fn apply_defaults(&mut self) {
        if self.attributes.stroke_color.is_none() {
            self.attributes.stroke_color = Some(DEFAULT_HIGHLIGHT_COLOR);
        }
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
    use crate::pdf::rect::PdfRect;

    fn two_line_selection() -> PdfHighlightAnnotation {
        PdfHighlightAnnotation::new()
            .with_rect(PdfRect::new(100.0, 100.0, 200.0, 400.0))
            .with_quad(PdfQuadPoints::from_extent(100.0, 100.0, 200.0, 200.0))
            .with_quad(PdfQuadPoints::from_extent(100.0, 300.0, 200.0, 400.0))
    }

    #[test]
    fn each_quad_becomes_one_closed_fill_sub_path() {
        let mut annotation = two_line_selection().with_stroke_color(PdfColor::RED);
        annotation.generate_appearance();

        let appearance = annotation.appearance().unwrap();

        assert_eq!(appearance.matches("h f").count(), 2);
        assert!(appearance.contains(
            "100.000 200.000 m 200.000 200.000 l 200.000 100.000 l 100.000 100.000 l h f"
        ));
    }

    #[test]
    fn stroke_accessor_paints_through_fill_channel() {
        let mut annotation = two_line_selection().with_stroke_color(PdfColor::RED);
        annotation.generate_appearance();

        let appearance = annotation.appearance().unwrap();

        assert!(appearance.starts_with("1.000 0.000 0.000 rg"));
        assert!(!appearance.contains("RG"));
    }

    #[test]
    fn unset_color_defaults_to_yellow() {
        let mut annotation = two_line_selection();
        annotation.generate_appearance();

        assert!(annotation
            .appearance()
            .unwrap()
            .starts_with("1.000 1.000 0.000 rg"));
    }
}
