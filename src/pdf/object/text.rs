//! Defines the [PdfTextObjectParams] struct, the reserved parameters of an
//! inline text object.

/// The parameters of an inline text object.
///
/// Reserved: a stamp annotation accepts these parameters but rejects them
/// at validation with `UnsupportedObjectType` until the engine boundary
/// grows font support.
#[derive(Debug, Clone)]
pub struct PdfTextObjectParams {
    pub font_size: f32,
    pub text: String,
}

impl PdfTextObjectParams {
    /// Creates parameters for the given text at the given font size.
    pub fn new(font_size: f32, text: impl Into<String>) -> Self {
        PdfTextObjectParams {
            font_size,
            text: text.into(),
        }
    }
}
