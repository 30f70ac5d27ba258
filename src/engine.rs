//! Defines the [PdfAnnotationEngine] trait, the narrow boundary through which
//! this crate drives the host document engine, along with the opaque handle
//! types the engine hands back.
//!
//! Every native object — documents, pages, annotations, page objects — is
//! owned and mutated by the engine; this crate only holds opaque references
//! to them. All calls are synchronous and fallible. No call is ever retried,
//! and no partially configured native state is rolled back on failure.

use std::fmt;
use std::path::Path;

use thiserror::Error;

use crate::pdf::annotation::PdfAnnotationSubtype;
use crate::pdf::color::PdfColor;
use crate::pdf::matrix::PdfMatrix;
use crate::pdf::object::path::PdfPathObjectParams;
use crate::pdf::point::PdfPoint;
use crate::pdf::quad_points::PdfQuadPoints;
use crate::pdf::rect::PdfRect;

/// An opaque reference to a document owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PdfDocumentHandle(u64);

/// An opaque reference to a page owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PdfPageHandle(u64);

/// An opaque reference to a native annotation owned by the engine.
///
/// A handle is exclusively used by the annotation builder that requested it
/// for the duration of the bind sequence; it remains valid for the caller
/// afterwards, but the engine retains ownership of the underlying object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PdfAnnotationHandle(u64);

/// An opaque reference to a drawable page object owned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PdfPageObjectHandle(u64);

macro_rules! handle_impl {
    ($handle:ident) => {
        impl $handle {
            /// Wraps a raw engine identifier.
            #[inline]
            pub fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the raw engine identifier backing this handle.
            #[inline]
            pub fn raw(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $handle {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

handle_impl!(PdfDocumentHandle);
handle_impl!(PdfPageHandle);
handle_impl!(PdfAnnotationHandle);
handle_impl!(PdfPageObjectHandle);

/// The annotation appearance slot targeted by [PdfAnnotationEngine::set_appearance].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfAppearanceMode {
    /// The appearance used for normal display, stored under the `/N` key.
    Normal,
    /// The appearance used while the pointer hovers, stored under `/R`.
    RollOver,
    /// The appearance used while the pointer is pressed, stored under `/D`.
    Down,
}

/// Selects which color slot of a native annotation a
/// [PdfAnnotationEngine::set_color] call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfColorChannel {
    /// The stroke (outline) color, stored under the annotation's `/C` entry.
    Stroke,
    /// The fill (interior) color, stored under the annotation's `/IC` entry.
    Fill,
}

/// An error returned by a call across the engine boundary.
///
/// Carries a short description of the failing operation and, where the
/// engine supplied one, the underlying cause.
#[derive(Debug, Error)]
#[error("{context}")]
pub struct PdfEngineError {
    context: String,

    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl PdfEngineError {
    /// Creates a new [PdfEngineError] with the given description.
    pub fn new(context: impl Into<String>) -> Self {
        PdfEngineError {
            context: context.into(),
            source: None,
        }
    }

    /// Creates a new [PdfEngineError] wrapping an underlying cause.
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PdfEngineError {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// The capability set this crate consumes from the host document engine.
///
/// Implementations bridge to whatever native library actually creates
/// annotation objects, sets dictionary entries, and persists the file.
/// Appearance synthesis itself never touches this trait; only the bind
/// step ([crate::pdf::annotation::PdfAnnotation::add_to_page]) and the
/// batch-deletion helpers do.
pub trait PdfAnnotationEngine {
    /// Creates a new native annotation of the given subtype on the given page.
    fn create_annotation(
        &self,
        page: PdfPageHandle,
        subtype: PdfAnnotationSubtype,
    ) -> Result<PdfAnnotationHandle, PdfEngineError>;

    /// Sets the bounding rectangle of the given annotation.
    fn set_rect(
        &self,
        annotation: PdfAnnotationHandle,
        rect: PdfRect,
    ) -> Result<(), PdfEngineError>;

    /// Sets the border width of the given annotation. Corner radii are
    /// always zero; rounded borders are not modelled.
    fn set_border_width(
        &self,
        annotation: PdfAnnotationHandle,
        width: f32,
    ) -> Result<(), PdfEngineError>;

    /// Sets one color channel of the given annotation. The opacity applies
    /// to both channels and is expected to drive the engine's allocation of
    /// the graphics-state resource referenced by the appearance stream.
    fn set_color(
        &self,
        annotation: PdfAnnotationHandle,
        channel: PdfColorChannel,
        color: PdfColor,
        opacity: u8,
    ) -> Result<(), PdfEngineError>;

    /// Sets a string entry in the annotation dictionary. Used for the
    /// title ("T"), unique name ("NM"), contents ("Contents") and
    /// default-appearance ("DA") entries.
    fn set_string_value(
        &self,
        annotation: PdfAnnotationHandle,
        key: &str,
        value: &str,
    ) -> Result<(), PdfEngineError>;

    /// Stores an appearance content stream for the given annotation.
    fn set_appearance(
        &self,
        annotation: PdfAnnotationHandle,
        mode: PdfAppearanceMode,
        value: &str,
    ) -> Result<(), PdfEngineError>;

    /// Appends one quadrilateral to the annotation's attachment points, the
    /// engine-side selection geometry of text-markup annotations.
    fn append_attachment_points(
        &self,
        annotation: PdfAnnotationHandle,
        quad: PdfQuadPoints,
    ) -> Result<(), PdfEngineError>;

    /// Appends one stroke to the annotation's ink list.
    fn add_ink_stroke(
        &self,
        annotation: PdfAnnotationHandle,
        points: &[PdfPoint],
    ) -> Result<(), PdfEngineError>;

    /// Appends a previously created drawable page object to the annotation.
    fn append_object(
        &self,
        annotation: PdfAnnotationHandle,
        object: PdfPageObjectHandle,
    ) -> Result<(), PdfEngineError>;

    /// Creates a standalone stroked path object from the given parameters.
    fn create_path_object(
        &self,
        params: &PdfPathObjectParams,
    ) -> Result<PdfPageObjectHandle, PdfEngineError>;

    /// Creates an image object from a JPEG file on disk.
    fn create_image_object(
        &self,
        document: PdfDocumentHandle,
        path: &Path,
    ) -> Result<PdfPageObjectHandle, PdfEngineError>;

    /// Sets the placement matrix of a drawable page object.
    fn set_object_matrix(
        &self,
        object: PdfPageObjectHandle,
        matrix: PdfMatrix,
    ) -> Result<(), PdfEngineError>;

    /// Creates an empty text object with the given font size. Reserved;
    /// no stamp variant currently reaches this call.
    fn create_text_object(&self, font_size: f32) -> Result<PdfPageObjectHandle, PdfEngineError>;

    /// Releases the working state the engine holds for an annotation opened
    /// by [PdfAnnotationEngine::create_annotation].
    fn close_annotation(&self, annotation: PdfAnnotationHandle) -> Result<(), PdfEngineError>;

    /// Returns a handle to the zero-based `index`th page of the document.
    fn load_page(
        &self,
        document: PdfDocumentHandle,
        index: usize,
    ) -> Result<PdfPageHandle, PdfEngineError>;

    /// Returns the number of pages in the document.
    fn page_count(&self, document: PdfDocumentHandle) -> Result<usize, PdfEngineError>;

    /// Returns the number of annotations on the page.
    fn annotation_count(&self, page: PdfPageHandle) -> Result<usize, PdfEngineError>;

    /// Returns the unique name ("NM" entry) of the zero-based `index`th
    /// annotation on the page. Annotations without a name return an empty
    /// string.
    fn annotation_name(
        &self,
        page: PdfPageHandle,
        index: usize,
    ) -> Result<String, PdfEngineError>;

    /// Removes the zero-based `index`th annotation from the page.
    fn remove_annotation(&self, page: PdfPageHandle, index: usize) -> Result<(), PdfEngineError>;
}
