//! Defines the [PdfMarkupError] enum, used to wrap and surface validation
//! failures and engine errors throughout the crate.

use thiserror::Error;

use crate::engine::PdfEngineError;

/// The crate-wide error type.
///
/// Validation errors ([PdfMarkupError::InvalidGeometry], [PdfMarkupError::MissingStyle],
/// [PdfMarkupError::UnsupportedObjectType]) are always raised before any native
/// annotation handle is requested from the engine. Once a handle exists, any
/// failing engine call is propagated as [PdfMarkupError::Engine] without retry
/// or rollback; cleanup of a partially configured native annotation is the
/// caller's responsibility.
#[derive(Debug, Error)]
pub enum PdfMarkupError {
    /// The annotation rectangle was left unset, or is degenerate.
    #[error("annotation rectangle must be set")]
    InvalidGeometry,

    /// Neither a stroke color nor a fill color was set on a shape that
    /// requires at least one to be visible.
    #[error("either a stroke color or a fill color must be set")]
    MissingStyle,

    /// A stamp annotation was bound without an embedded object, or with an
    /// object kind the engine boundary does not (yet) support.
    #[error("embedded object type is not supported")]
    UnsupportedObjectType,

    /// A call across the external engine boundary failed.
    #[error("engine call failed")]
    Engine(#[from] PdfEngineError),

    /// An image file could not be read or decoded.
    #[error("image decoding failed")]
    Image(#[from] image::ImageError),

    /// A deletion request was issued against a document with no pages.
    #[error("document has no pages")]
    EmptyDocument,
}
