//! Defines the [PdfAnnotationAttributes] struct, the record of identity,
//! geometry, and style shared by every markup annotation kind.

use log::{debug, trace};
use uuid::Uuid;

use crate::engine::{
    PdfAnnotationEngine, PdfAnnotationHandle, PdfAppearanceMode, PdfColorChannel,
};
use crate::error::PdfMarkupError;
use crate::pdf::color::PdfColor;
use crate::pdf::rect::{is_zero_epsilon, PdfRect};

/// The default annotation opacity: fully opaque.
pub const DEFAULT_OPACITY: u8 = 255;

/// The base annotation record embedded in every shape builder.
///
/// Holds identity (unique name and optional title), the bounding rectangle,
/// stroke width, shared opacity, the optional stroke and fill colors, and
/// the most recently synthesized appearance stream.
#[derive(Debug, Clone)]
pub struct PdfAnnotationAttributes {
    pub(crate) name: String,
    pub(crate) title: String,
    pub(crate) rect: PdfRect,
    pub(crate) stroke_width: f32,
    pub(crate) opacity: u8,
    pub(crate) stroke_color: Option<PdfColor>,
    pub(crate) fill_color: Option<PdfColor>,
    pub(crate) appearance: Option<String>,
}

impl PdfAnnotationAttributes {
    /// Creates a new attributes record with a freshly generated unique name
    /// and the default opacity.
    pub(crate) fn new() -> Self {
        PdfAnnotationAttributes {
            name: Uuid::new_v4().to_string(),
            title: String::new(),
            rect: PdfRect::default(),
            stroke_width: 0.0,
            opacity: DEFAULT_OPACITY,
            stroke_color: None,
            fill_color: None,
            appearance: None,
        }
    }

    /// Validates this record ahead of binding.
    ///
    /// Fails with [PdfMarkupError::InvalidGeometry] when the rectangle was
    /// never set, and with [PdfMarkupError::MissingStyle] when the shape
    /// requires paint but neither color is set. Runs before any engine call
    /// so that a rejected annotation leaves no native state behind.
    pub(crate) fn pre_check(&self, requires_paint: bool) -> Result<(), PdfMarkupError> {
        if self.rect.is_unset() {
            return Err(PdfMarkupError::InvalidGeometry);
        }

        if requires_paint && self.stroke_color.is_none() && self.fill_color.is_none() {
            return Err(PdfMarkupError::MissingStyle);
        }

        Ok(())
    }

    /// Pushes the shared attributes to a freshly created native annotation,
    /// in fixed order: title, rectangle, border width, stroke color, fill
    /// color, unique name, appearance stream. Conditional steps are skipped
    /// when their field is unset; the first failing call aborts the push.
    pub(crate) fn write_to_engine(
        &self,
        engine: &dyn PdfAnnotationEngine,
        annotation: PdfAnnotationHandle,
    ) -> Result<(), PdfMarkupError> {
        if !self.title.is_empty() {
            engine.set_string_value(annotation, "T", &self.title)?;
        }

        engine.set_rect(annotation, self.rect)?;

        if !is_zero_epsilon(self.stroke_width) {
            engine.set_border_width(annotation, self.stroke_width)?;
        }

        if let Some(stroke) = self.stroke_color {
            engine.set_color(annotation, PdfColorChannel::Stroke, stroke, self.opacity)?;
        }

        if let Some(fill) = self.fill_color {
            engine.set_color(annotation, PdfColorChannel::Fill, fill, self.opacity)?;
        }

        engine.set_string_value(annotation, "NM", &self.name)?;

        if let Some(appearance) = self.appearance.as_deref().filter(|ap| !ap.is_empty()) {
            debug!("annotation {annotation} normal appearance:\n{appearance}");
            engine.set_appearance(annotation, PdfAppearanceMode::Normal, appearance)?;
        }

        trace!("annotation {annotation} base attributes written");

        Ok(())
    }
}
