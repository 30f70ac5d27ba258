//! `pdf-markup` builds page-level markup annotations — squares, circles,
//! ink, lines, highlights, underlines, strikeouts, free text, and stamps —
//! and synthesizes the appearance content stream that represents each
//! annotation independently of the host rendering engine.
//!
//! The host engine itself stays behind the narrow
//! [PdfAnnotationEngine](crate::engine::PdfAnnotationEngine) trait: this
//! crate never parses or writes documents, decodes page content, or touches
//! files beyond probing image dimensions for stamp placement.
//!
//! Typical use configures a shape builder, synthesizes its appearance, and
//! binds it to a page:
//!
//! ```ignore
//! use pdf_markup::prelude::*;
//!
//! let mut square = PdfSquareAnnotation::new()
//!     .with_rect(PdfRect::new(100.0, 100.0, 200.0, 200.0))
//!     .with_stroke_width(10.0)
//!     .with_stroke_color(PdfColor::RED)
//!     .with_fill_color(PdfColor::GREEN);
//!
//! square.generate_appearance();
//! square.add_to_page(&engine, page)?;
//! ```
//!
//! Appearance synthesis is pure and deterministic; every numeric token is
//! formatted with exactly three fractional digits so regenerated streams
//! compare byte for byte.

pub mod engine;
pub mod error;
pub mod pdf;

/// A convenient module importing the commonly used types of this crate.
pub mod prelude {
    pub use crate::engine::{
        PdfAnnotationEngine, PdfAnnotationHandle, PdfAppearanceMode, PdfColorChannel,
        PdfDocumentHandle, PdfEngineError, PdfPageHandle, PdfPageObjectHandle,
    };
    pub use crate::error::PdfMarkupError;
    pub use crate::pdf::annotation::circle::PdfCircleAnnotation;
    pub use crate::pdf::annotation::delete::{
        delete_annotations, PdfAnnotationDeletion, PdfIndexedSelection, PdfNamedSelection,
    };
    pub use crate::pdf::annotation::free_text::PdfFreeTextAnnotation;
    pub use crate::pdf::annotation::highlight::PdfHighlightAnnotation;
    pub use crate::pdf::annotation::ink::PdfInkAnnotation;
    pub use crate::pdf::annotation::line::PdfLineAnnotation;
    pub use crate::pdf::annotation::square::PdfSquareAnnotation;
    pub use crate::pdf::annotation::stamp::{PdfStampAnnotation, PdfStampObject};
    pub use crate::pdf::annotation::strikeout::PdfStrikeoutAnnotation;
    pub use crate::pdf::annotation::underline::PdfUnderlineAnnotation;
    pub use crate::pdf::annotation::{PdfAnnotation, PdfAnnotationSubtype};
    pub use crate::pdf::color::PdfColor;
    pub use crate::pdf::line_style::{PdfLineCap, PdfLineJoin, PdfLineStyle};
    pub use crate::pdf::matrix::PdfMatrix;
    pub use crate::pdf::object::image::{PdfImageFormat, PdfImageObjectParams};
    pub use crate::pdf::object::path::PdfPathObjectParams;
    pub use crate::pdf::object::text::PdfTextObjectParams;
    pub use crate::pdf::point::PdfPoint;
    pub use crate::pdf::quad_points::PdfQuadPoints;
    pub use crate::pdf::rect::PdfRect;
}
