//! Defines the [PdfAnnotationSubtype] enum and the [PdfAnnotation] trait,
//! the shared lifecycle of every markup annotation kind.
//!
//! A shape builder is configured with chainable `with_*` methods, asked to
//! synthesize its appearance stream with [PdfAnnotation::generate_appearance]
//! (a pure function of the current fields, repeatable, overwriting any prior
//! value), and finally bound with [PdfAnnotation::add_to_page], which
//! consumes the builder so it can never be bound twice.

pub mod attributes;

pub mod circle;
pub mod delete;
pub mod free_text;
pub mod highlight;
pub mod ink;
pub mod line;
pub mod square;
pub mod stamp;
pub mod strikeout;
pub mod underline;

use log::trace;

use crate::engine::{PdfAnnotationEngine, PdfAnnotationHandle, PdfPageHandle};
use crate::error::PdfMarkupError;
use crate::pdf::annotation::attributes::PdfAnnotationAttributes;

/// The semantic annotation kind recorded in the document. Drives the
/// reader's default rendering when no appearance stream is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PdfAnnotationSubtype {
    Square,
    Circle,
    Ink,
    Line,
    FreeText,
    Highlight,
    Underline,
    Strikeout,
    Stamp,
}

impl PdfAnnotationSubtype {
    /// Returns the subtype name as recorded in the annotation dictionary.
    pub fn name(&self) -> &'static str {
        match self {
            PdfAnnotationSubtype::Square => "Square",
            PdfAnnotationSubtype::Circle => "Circle",
            PdfAnnotationSubtype::Ink => "Ink",
            PdfAnnotationSubtype::Line => "Line",
            PdfAnnotationSubtype::FreeText => "FreeText",
            PdfAnnotationSubtype::Highlight => "Highlight",
            PdfAnnotationSubtype::Underline => "Underline",
            PdfAnnotationSubtype::Strikeout => "StrikeOut",
            PdfAnnotationSubtype::Stamp => "Stamp",
        }
    }
}

/// The shared lifecycle implemented by every markup annotation builder.
pub trait PdfAnnotation {
    /// Returns the subtype this builder binds as.
    fn subtype(&self) -> PdfAnnotationSubtype;

    /// Returns the shared base attributes of this builder.
    fn attributes(&self) -> &PdfAnnotationAttributes;

    /// Returns the shared base attributes of this builder, mutably.
    fn attributes_mut(&mut self) -> &mut PdfAnnotationAttributes;

    /// Synthesizes this annotation's appearance stream from its current
    /// fields and stores it on the base attributes, replacing any prior
    /// value. Pure: repeated calls with unchanged fields yield byte-identical
    /// output.
    fn generate_appearance(&mut self);

    /// Fills in subtype defaults for fields the caller left unset. Runs
    /// before validation so that defaults can satisfy it.
    fn apply_defaults(&mut self) {}

    /// Validates this builder ahead of binding. The default requires a set
    /// rectangle and at least one of stroke or fill color.
    fn pre_check(&self) -> Result<(), PdfMarkupError> {
        self.attributes().pre_check(true)
    }

    /// Pushes subtype-specific state (attachment points, ink strokes,
    /// embedded objects, dictionary entries) to the bound native annotation.
    /// Runs after the shared attributes are written and before the handle is
    /// closed.
    fn finalize(
        &self,
        engine: &dyn PdfAnnotationEngine,
        annotation: PdfAnnotationHandle,
    ) -> Result<(), PdfMarkupError> {
        let _ = (engine, annotation);

        Ok(())
    }

    /// Binds this annotation to the given page through the engine.
    ///
    /// Applies defaults, validates, requests a native handle, writes the
    /// shared attributes, runs the subtype finalizer, and closes the handle.
    /// Each step's failure aborts the sequence and is surfaced unchanged;
    /// nothing is rolled back. Consumes the builder: a bound annotation
    /// cannot be bound a second time.
    fn add_to_page(
        mut self,
        engine: &dyn PdfAnnotationEngine,
        page: PdfPageHandle,
    ) -> Result<PdfAnnotationHandle, PdfMarkupError>
    where
        Self: Sized,
    {
        self.apply_defaults();
        self.pre_check()?;

        let annotation = engine.create_annotation(page, self.subtype())?;
        trace!(
            "created {} annotation {} on page {}",
            self.subtype().name(),
            annotation,
            page
        );

        self.attributes().write_to_engine(engine, annotation)?;
        self.finalize(engine, annotation)?;
        engine.close_annotation(annotation)?;

        Ok(annotation)
    }
}

/// Generates the chainable configuration methods shared by every shape
/// builder, mirroring the fields of [PdfAnnotationAttributes].
macro_rules! annotation_builder_methods {
    () => {
        /// Replaces the generated unique name ("NM" entry) of this annotation.
        pub fn with_name(mut self, name: impl Into<String>) -> Self {
            self.attributes.name = name.into();
            self
        }

        /// Sets the title ("T" entry) of this annotation.
        pub fn with_title(mut self, title: impl Into<String>) -> Self {
            self.attributes.title = title.into();
            self
        }

        /// Sets the bounding rectangle of this annotation.
        pub fn with_rect(mut self, rect: $crate::pdf::rect::PdfRect) -> Self {
            self.attributes.rect = rect;
            self
        }

        /// Sets the stroke width of this annotation.
        pub fn with_stroke_width(mut self, width: f32) -> Self {
            self.attributes.stroke_width = width;
            self
        }

        /// Sets the opacity of this annotation, shared by its stroke and
        /// fill colors. `255` is fully opaque.
        pub fn with_opacity(mut self, opacity: u8) -> Self {
            self.attributes.opacity = opacity;
            self
        }

        /// Sets the stroke color of this annotation.
        pub fn with_stroke_color(mut self, color: $crate::pdf::color::PdfColor) -> Self {
            self.attributes.stroke_color = Some(color);
            self
        }

        /// Sets the fill color of this annotation.
        pub fn with_fill_color(mut self, color: $crate::pdf::color::PdfColor) -> Self {
            self.attributes.fill_color = Some(color);
            self
        }

        /// Returns the unique name of this annotation.
        #[inline]
        pub fn name(&self) -> &str {
            &self.attributes.name
        }

        /// Returns the most recently synthesized appearance stream, if any.
        #[inline]
        pub fn appearance(&self) -> Option<&str> {
            self.attributes.appearance.as_deref()
        }
    };
}

pub(crate) use annotation_builder_methods;
