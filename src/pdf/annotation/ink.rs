//! Defines the [PdfInkAnnotation] struct, a markup annotation of subtype
//! [PdfAnnotationSubtype::Ink].

use crate::engine::{PdfAnnotationEngine, PdfAnnotationHandle};
use crate::error::PdfMarkupError;
use crate::pdf::annotation::annotation_builder_methods;
use crate::pdf::annotation::attributes::PdfAnnotationAttributes;
use crate::pdf::annotation::{PdfAnnotation, PdfAnnotationSubtype};
use crate::pdf::appearance::{
    join_sections, line_style_operator, paint_operators, stroke_path_operators, width_operator,
    OPACITY_REFERENCE,
};
use crate::pdf::line_style::PdfLineStyle;
use crate::pdf::point::PdfPoint;

/// A freehand drawing annotation composed of one or more open point paths.
///
/// Each point list is rendered as one disjoint stroked sub-path in the
/// appearance stream and mirrored into the native annotation's ink list at
/// bind time, so the engine-side geometry always matches the rendered
/// appearance. Line caps and joins default to round/round.
#[derive(Debug, Clone)]
pub struct PdfInkAnnotation {
    attributes: PdfAnnotationAttributes,
    line_style: PdfLineStyle,
    strokes: Vec<Vec<PdfPoint>>,
}

impl PdfInkAnnotation {
    /// Creates a new, unbound [PdfInkAnnotation].
    pub fn new() -> Self {
        PdfInkAnnotation {
            attributes: PdfAnnotationAttributes::new(),
            line_style: PdfLineStyle::ROUND,
            strokes: Vec::new(),
        }
    }

    annotation_builder_methods!();

    /// Sets the line cap and join styles applied to every stroke.
    pub fn with_line_style(mut self, line_style: PdfLineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// Appends one freehand stroke, an open path through the given points.
    pub fn with_stroke(mut self, points: Vec<PdfPoint>) -> Self {
        self.strokes.push(points);
        self
    }

    /// Replaces all strokes of this annotation.
    pub fn with_strokes(mut self, strokes: Vec<Vec<PdfPoint>>) -> Self {
        self.strokes = strokes;
        self
    }

    /// Returns the strokes configured on this annotation.
    #[inline]
    pub fn strokes(&self) -> &[Vec<PdfPoint>] {
        &self.strokes
    }
}

impl Default for PdfInkAnnotation {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAnnotation for PdfInkAnnotation {
    fn subtype(&self) -> PdfAnnotationSubtype {
        PdfAnnotationSubtype::Ink
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
            paint_operators(self.attributes.fill_color, self.attributes.stroke_color),
            width_operator(self.attributes.stroke_width),
            OPACITY_REFERENCE.to_string(),
            line_style_operator(self.line_style),
            stroke_path_operators(&self.strokes),
        ]);

        self.attributes.appearance = Some(appearance);
    }

    /// Registers every point list with the engine as a native ink stroke.
    /// Divergence between the ink list and the appearance stream is a
    /// correctness bug, not merely cosmetic.
    fn finalize(
        &self,
        engine: &dyn PdfAnnotationEngine,
        annotation: PdfAnnotationHandle,
    ) -> Result<(), PdfMarkupError> {
        for stroke in &self.strokes {
            engine.add_ink_stroke(annotation, stroke)?;
        }

        Ok(())
    }
}
