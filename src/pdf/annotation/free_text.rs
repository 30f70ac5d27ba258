//! Defines the [PdfFreeTextAnnotation] struct, a markup annotation of
//! subtype [PdfAnnotationSubtype::FreeText].

use crate::engine::{PdfAnnotationEngine, PdfAnnotationHandle};
use crate::error::PdfMarkupError;
use crate::pdf::annotation::annotation_builder_methods;
use crate::pdf::annotation::attributes::PdfAnnotationAttributes;
use crate::pdf::annotation::{PdfAnnotation, PdfAnnotationSubtype};
use crate::pdf::color::PdfColor;

/// The font size applied when the caller leaves it unset.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// The font color applied when the caller leaves it unset.
pub const DEFAULT_FONT_COLOR: PdfColor = PdfColor::BLACK;

/// A free text annotation that displays its contents directly on the page.
///
/// This crate performs no glyph layout: the appearance stream is left empty
/// so the engine (or a downstream reader) may synthesize its own, guided by
/// the default-appearance string written at bind time. Callers that have
/// already rendered the text can supply the finished stream verbatim with
/// [PdfFreeTextAnnotation::with_appearance_override]; its validity is their
/// responsibility.
#[derive(Debug, Clone)]
pub struct PdfFreeTextAnnotation {
    attributes: PdfAnnotationAttributes,
    contents: String,
    font_size: f32,
    font_color: Option<PdfColor>,
    appearance_override: Option<String>,
}

impl PdfFreeTextAnnotation {
    /// Creates a new, unbound [PdfFreeTextAnnotation].
    pub fn new() -> Self {
        PdfFreeTextAnnotation {
            attributes: PdfAnnotationAttributes::new(),
            contents: String::new(),
            font_size: 0.0,
            font_color: None,
            appearance_override: None,
        }
    }

    annotation_builder_methods!();

    /// Sets the textual contents of this annotation.
    pub fn with_contents(mut self, contents: impl Into<String>) -> Self {
        self.contents = contents.into();
        self
    }

    /// Sets the font size used by the default-appearance string.
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the font color used by the default-appearance string.
    pub fn with_font_color(mut self, font_color: PdfColor) -> Self {
        self.font_color = Some(font_color);
        self
    }

    /// Supplies a pre-rendered appearance stream used verbatim in place of
    /// leaving the appearance to the engine.
    pub fn with_appearance_override(mut self, appearance: impl Into<String>) -> Self {
        self.appearance_override = Some(appearance.into());
        self
    }

    /// Returns the default-appearance ("DA") string describing the text
    /// size and color for any downstream renderer.
    fn default_appearance_string(&self) -> String {
        let color = self.font_color.unwrap_or(DEFAULT_FONT_COLOR);

        format!(
            "{} Tf {:.3} {:.3} {:.3} rg",
            self.font_size,
            f32::from(color.red()) / 255.0,
            f32::from(color.green()) / 255.0,
            f32::from(color.blue()) / 255.0
        )
    }
}

impl Default for PdfFreeTextAnnotation {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAnnotation for PdfFreeTextAnnotation {
    fn subtype(&self) -> PdfAnnotationSubtype {
        PdfAnnotationSubtype::FreeText
    }

    #[inline]
    fn attributes(&self) -> &PdfAnnotationAttributes {
        &self.attributes
    }

    #[inline]
    fn attributes_mut(&mut self) -> &mut PdfAnnotationAttributes {
        &mut self.attributes
    }

    /// Free text generates no appearance of its own; a supplied pre-rendered
    /// stream is kept, otherwise the slot stays empty and the engine may
    /// synthesize one from the default-appearance string.
    fn generate_appearance(&mut self) {
        self.attributes.appearance = self.appearance_override.clone();
    }

    fn apply_defaults(&mut self) {
        if self.font_size == 0.0 {
            self.font_size = DEFAULT_FONT_SIZE;
        }

        if self.font_color.is_none() {
            self.font_color = Some(DEFAULT_FONT_COLOR);
        }
    }

    /// Text is legible without stroke or fill colors; only the rectangle is
    /// required.
    fn pre_check(&self) -> Result<(), PdfMarkupError> {
        self.attributes().pre_check(false)
    }

    fn finalize(
        &self,
        engine: &dyn PdfAnnotationEngine,
        annotation: PdfAnnotationHandle,
    ) -> Result<(), PdfMarkupError> {
        engine.set_string_value(annotation, "Contents", &self.contents)?;
        engine.set_string_value(annotation, "DA", &self.default_appearance_string())?;

        Ok(())
    }
}
