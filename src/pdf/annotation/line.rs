//! Defines the [PdfLineAnnotation] struct, a markup annotation of subtype
//! [PdfAnnotationSubtype::Line].

use crate::pdf::annotation::annotation_builder_methods;
use crate::pdf::annotation::attributes::PdfAnnotationAttributes;
use crate::pdf::annotation::{PdfAnnotation, PdfAnnotationSubtype};
use crate::pdf::appearance::{
    join_sections, line_style_operator, paint_operators, stroke_path_operators, width_operator,
    OPACITY_REFERENCE,
};
use crate::pdf::line_style::PdfLineStyle;
use crate::pdf::point::PdfPoint;

/// A straight line annotation between two endpoints.
///
/// Line caps and joins default to butt/miter. A raw appearance override can
/// be supplied for variants needing operators outside this module's
/// vocabulary (arrow heads and the like); the override replaces the
/// generated stream verbatim and its validity is the caller's
/// responsibility.
#[derive(Debug, Clone)]
pub struct PdfLineAnnotation {
    attributes: PdfAnnotationAttributes,
    line_style: PdfLineStyle,
    endpoints: [PdfPoint; 2],
    appearance_override: Option<String>,
}

impl PdfLineAnnotation {
    /// Creates a new, unbound [PdfLineAnnotation].
    pub fn new() -> Self {
        PdfLineAnnotation {
            attributes: PdfAnnotationAttributes::new(),
            line_style: PdfLineStyle::BUTT_MITER,
            endpoints: [PdfPoint::default(); 2],
            appearance_override: None,
        }
    }

    annotation_builder_methods!();

    /// Sets the line cap and join styles of this line.
    pub fn with_line_style(mut self, line_style: PdfLineStyle) -> Self {
        self.line_style = line_style;
        self
    }

    /// Sets the begin and end points of this line.
    pub fn with_endpoints(mut self, begin: PdfPoint, end: PdfPoint) -> Self {
        self.endpoints = [begin, end];
        self
    }

    /// Supplies a raw appearance stream that replaces the generated one
    /// verbatim.
    pub fn with_appearance_override(mut self, appearance: impl Into<String>) -> Self {
        self.appearance_override = Some(appearance.into());
        self
    }
}

impl Default for PdfLineAnnotation {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAnnotation for PdfLineAnnotation {
    fn subtype(&self) -> PdfAnnotationSubtype {
        PdfAnnotationSubtype::Line
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
        if let Some(appearance) = &self.appearance_override {
            self.attributes.appearance = Some(appearance.clone());
            return;
        }

        let segment = [self.endpoints.to_vec()];
        let appearance = join_sections([
            paint_operators(self.attributes.fill_color, self.attributes.stroke_color),
            width_operator(self.attributes.stroke_width),
            OPACITY_REFERENCE.to_string(),
            line_style_operator(self.line_style),
            stroke_path_operators(&segment),
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
    fn appearance_strokes_begin_to_end() {
        let mut annotation = PdfLineAnnotation::new()
            .with_rect(PdfRect::new(0.0, 0.0, 200.0, 200.0))
            .with_stroke_width(3.0)
            .with_stroke_color(PdfColor::BLUE)
            .with_endpoints(PdfPoint::new(10.0, 20.0), PdfPoint::new(150.0, 180.0));
        annotation.generate_appearance();

        let appearance = annotation.appearance().unwrap();

        assert!(appearance.contains("10.000 20.000 m 150.000 180.000 l S"));
        assert!(appearance.contains("0 j 0 J"));
    }

    #[test]
    fn override_replaces_generated_stream_verbatim() {
        let raw = "1 w\n0 G\n0 0 m 5 5 l S";
        let mut annotation = PdfLineAnnotation::new()
            .with_rect(PdfRect::new(0.0, 0.0, 10.0, 10.0))
            .with_stroke_color(PdfColor::BLACK)
            .with_appearance_override(raw);
        annotation.generate_appearance();

        assert_eq!(annotation.appearance().unwrap(), raw);
    }
}
