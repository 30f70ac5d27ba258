//! Defines the [PdfImageObjectParams] struct and the builder that places a
//! raster image object scaled to exactly fill an annotation rectangle.

use std::path::{Path, PathBuf};

use log::debug;

use crate::engine::{PdfAnnotationEngine, PdfDocumentHandle, PdfPageObjectHandle};
use crate::error::PdfMarkupError;
use crate::pdf::matrix::PdfMatrix;
use crate::pdf::rect::PdfRect;

/// The encoding of an image file supplied to a stamp annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfImageFormat {
    Jpeg,
    /// Accepted by the params, but placement is not yet implemented.
    Png,
}

/// The parameters of a raster image object: the source file, its encoding,
/// and the document the image data is registered with.
#[derive(Debug, Clone)]
pub struct PdfImageObjectParams {
    pub format: PdfImageFormat,
    pub document: PdfDocumentHandle,
    pub path: PathBuf,
}

impl PdfImageObjectParams {
    /// Creates parameters for an image file of the given format.
    pub fn new(format: PdfImageFormat, document: PdfDocumentHandle, path: impl Into<PathBuf>) -> Self {
        PdfImageObjectParams {
            format,
            document,
            path: path.into(),
        }
    }
}

/// Returns the pixel width and height of the image file at the given path,
/// decoding only as much of the file as needed.
pub fn image_dimensions(path: &Path) -> Result<(u32, u32), PdfMarkupError> {
    Ok(image::image_dimensions(path)?)
}

/// Creates the image object through the engine and applies the placement
/// matrix that scales it to exactly fill `rect`. Aspect ratio is not
/// preserved; the caller chooses the rectangle.
pub(crate) fn build_image_object(
    engine: &dyn PdfAnnotationEngine,
    rect: PdfRect,
    params: &PdfImageObjectParams,
) -> Result<PdfPageObjectHandle, PdfMarkupError> {
    match params.format {
        PdfImageFormat::Jpeg => {
            let (width, height) = image_dimensions(&params.path)?;
            debug!(
                "placing {}x{} image {} into {}x{} rect",
                width,
                height,
                params.path.display(),
                rect.width(),
                rect.height()
            );

            let object = engine.create_image_object(params.document, &params.path)?;
            engine.set_object_matrix(object, PdfMatrix::fill_rect(rect))?;

            Ok(object)
        }

        PdfImageFormat::Png => Err(PdfMarkupError::UnsupportedObjectType),
    }
}
