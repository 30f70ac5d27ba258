//! Defines the [PdfStampAnnotation] struct, a markup annotation of subtype
//! [PdfAnnotationSubtype::Stamp].

use crate::engine::{PdfAnnotationEngine, PdfAnnotationHandle, PdfDocumentHandle};
use crate::error::PdfMarkupError;
use crate::pdf::annotation::annotation_builder_methods;
use crate::pdf::annotation::attributes::PdfAnnotationAttributes;
use crate::pdf::annotation::{PdfAnnotation, PdfAnnotationSubtype};
use crate::pdf::color::PdfColor;
use crate::pdf::object::image::{build_image_object, PdfImageFormat, PdfImageObjectParams};
use crate::pdf::object::path::{build_path_object, PdfPathObjectParams};
use crate::pdf::object::text::PdfTextObjectParams;
use crate::pdf::point::PdfPoint;

/// The single drawable object a stamp annotation embeds.
#[derive(Debug, Clone)]
pub enum PdfStampObject {
    /// A standalone multi-path stroked shape.
    Path(PdfPathObjectParams),
    /// A raster image scaled to exactly fill the annotation rectangle.
    Image(PdfImageObjectParams),
    /// Inline text. Reserved; rejected at validation.
    Text(PdfTextObjectParams),
}

/// A stamp annotation carrying exactly one embedded page object.
///
/// Stamps have no synthesized appearance stream of their own; their visual
/// content is the embedded object, built through the engine at bind time
/// and appended to the native annotation.
#[derive(Debug, Clone)]
pub struct PdfStampAnnotation {
    attributes: PdfAnnotationAttributes,
    object: Option<PdfStampObject>,
}

impl PdfStampAnnotation {
    /// Creates a new, unbound [PdfStampAnnotation].
    pub fn new() -> Self {
        PdfStampAnnotation {
            attributes: PdfAnnotationAttributes::new(),
            object: None,
        }
    }

    annotation_builder_methods!();

    /// Embeds a stroked path object with round caps and joins.
    pub fn with_path_object(
        mut self,
        strokes: Vec<Vec<PdfPoint>>,
        stroke_width: f32,
        stroke_color: PdfColor,
        stroke_alpha: u8,
    ) -> Self {
        self.object = Some(PdfStampObject::Path(PdfPathObjectParams::new(
            strokes,
            stroke_width,
            stroke_color,
            stroke_alpha,
        )));
        self
    }

    /// Embeds an image object scaled to exactly fill the annotation
    /// rectangle.
    pub fn with_image_object(
        mut self,
        format: PdfImageFormat,
        document: PdfDocumentHandle,
        path: impl Into<std::path::PathBuf>,
    ) -> Self {
        self.object = Some(PdfStampObject::Image(PdfImageObjectParams::new(
            format, document, path,
        )));
        self
    }

    /// Embeds an inline text object. Reserved; binding fails with
    /// [PdfMarkupError::UnsupportedObjectType] until the engine boundary
    /// grows font support.
    pub fn with_text_object(mut self, params: PdfTextObjectParams) -> Self {
        self.object = Some(PdfStampObject::Text(params));
        self
    }

    /// Returns the embedded object configured on this annotation.
    #[inline]
    pub fn object(&self) -> Option<&PdfStampObject> {
        self.object.as_ref()
    }
}

impl Default for PdfStampAnnotation {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAnnotation for PdfStampAnnotation {
    fn subtype(&self) -> PdfAnnotationSubtype {
        PdfAnnotationSubtype::Stamp
    }

    #[inline]
    fn attributes(&self) -> &PdfAnnotationAttributes {
        &self.attributes
    }

    #[inline]
    fn attributes_mut(&mut self) -> &mut PdfAnnotationAttributes {
        &mut self.attributes
    }

    /// Stamps draw through their embedded object; no appearance stream is
    /// synthesized.
    fn generate_appearance(&mut self) {
        self.attributes.appearance = None;
    }

    /// Requires a rectangle and exactly one supported embedded object;
    /// the embedded object supplies its own colors.
    fn pre_check(&self) -> Result<(), PdfMarkupError> {
        self.attributes().pre_check(false)?;

        match self.object {
            Some(PdfStampObject::Path(_)) | Some(PdfStampObject::Image(_)) => Ok(()),
            Some(PdfStampObject::Text(_)) | None => Err(PdfMarkupError::UnsupportedObjectType),
        }
    }

    fn finalize(
        &self,
        engine: &dyn PdfAnnotationEngine,
        annotation: PdfAnnotationHandle,
    ) -> Result<(), PdfMarkupError> {
        let object = match &self.object {
            Some(PdfStampObject::Path(params)) => build_path_object(engine, params)?,
            Some(PdfStampObject::Image(params)) => {
                build_image_object(engine, self.attributes.rect, params)?
            }
            // Unreachable past pre_check, but kept total.
            Some(PdfStampObject::Text(_)) | None => {
                return Err(PdfMarkupError::UnsupportedObjectType)
            }
        };

        engine.append_object(annotation, object)?;

        Ok(())
    }
}
