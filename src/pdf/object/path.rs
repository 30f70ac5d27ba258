//! Defines the [PdfPathObjectParams] struct and the builder that turns it
//! into a standalone stroked path object through the engine.

use log::trace;

use crate::engine::{PdfAnnotationEngine, PdfPageObjectHandle};
use crate::error::PdfMarkupError;
use crate::pdf::color::PdfColor;
use crate::pdf::line_style::PdfLineStyle;
use crate::pdf::point::PdfPoint;

/// The parameters of a standalone multi-path stroked shape.
///
/// Each point list becomes one open sub-path, the same path model ink
/// annotations use, but drawn as an independent page object with its own
/// color, width, and line style. Unlike annotation colors, the stroke alpha
/// here is carried per object.
#[derive(Debug, Clone)]
pub struct PdfPathObjectParams {
    pub strokes: Vec<Vec<PdfPoint>>,
    pub stroke_width: f32,
    pub stroke_color: PdfColor,
    pub stroke_alpha: u8,
    pub line_style: PdfLineStyle,
}

impl PdfPathObjectParams {
    /// Creates parameters for the given strokes with round caps and joins,
    /// the default for freehand shapes.
    pub fn new(
        strokes: Vec<Vec<PdfPoint>>,
        stroke_width: f32,
        stroke_color: PdfColor,
        stroke_alpha: u8,
    ) -> Self {
        PdfPathObjectParams {
            strokes,
            stroke_width,
            stroke_color,
            stroke_alpha,
            line_style: PdfLineStyle::ROUND,
        }
    }
}

/// Creates the path object through the engine, dropping empty point lists
/// first so the engine never sees a sub-path without a starting point.
pub(crate) fn build_path_object(
    engine: &dyn PdfAnnotationEngine,
    params: &PdfPathObjectParams,
) -> Result<PdfPageObjectHandle, PdfMarkupError> {
    let drawable: Vec<Vec<PdfPoint>> = params
        .strokes
        .iter()
        .filter(|stroke| !stroke.is_empty())
        .cloned()
        .collect();

    trace!(
        "building path object: {} sub-path(s), width {}",
        drawable.len(),
        params.stroke_width
    );

    let params = PdfPathObjectParams {
        strokes: drawable,
        ..params.clone()
    };

    Ok(engine.create_path_object(&params)?)
}
