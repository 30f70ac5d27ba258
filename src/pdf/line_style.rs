//! Defines the [PdfLineCap] and [PdfLineJoin] enums and the [PdfLineStyle]
//! pair that annotations and path objects use to shape stroked lines.

/// The shape applied to the open ends of a stroked path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfLineCap {
    /// The stroke is squared off exactly at the endpoint.
    Butt,
    /// A semicircle with the stroke's half-width radius caps the endpoint.
    Round,
    /// The stroke continues half its width beyond the endpoint, squared off.
    ProjectingSquare,
}

impl PdfLineCap {
    /// Returns the numeric operand this cap style uses in content streams.
    #[inline]
    pub fn operand(&self) -> u8 {
        match self {
            PdfLineCap::Butt => 0,
            PdfLineCap::Round => 1,
            PdfLineCap::ProjectingSquare => 2,
        }
    }
}

/// The shape applied where two stroked path segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfLineJoin {
    /// Outer edges extended until they meet in a sharp corner.
    Miter,
    /// A circular arc rounds the corner.
    Round,
    /// The corner is cut off with a straight edge.
    Bevel,
}

impl PdfLineJoin {
    /// Returns the numeric operand this join style uses in content streams.
    #[inline]
    pub fn operand(&self) -> u8 {
        match self {
            PdfLineJoin::Miter => 0,
            PdfLineJoin::Round => 1,
            PdfLineJoin::Bevel => 2,
        }
    }
}

/// A line cap and join pair. Each shape kind supplies its own default:
/// ink strokes default to round/round, line annotations to butt/miter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfLineStyle {
    pub cap: PdfLineCap,
    pub join: PdfLineJoin,
}

impl PdfLineStyle {
    pub const ROUND: PdfLineStyle = PdfLineStyle {
        cap: PdfLineCap::Round,
        join: PdfLineJoin::Round,
    };

    pub const BUTT_MITER: PdfLineStyle = PdfLineStyle {
        cap: PdfLineCap::Butt,
        join: PdfLineJoin::Miter,
    };

    /// Creates a new [PdfLineStyle] from the given cap and join.
    #[inline]
    pub const fn new(cap: PdfLineCap, join: PdfLineJoin) -> Self {
        PdfLineStyle { cap, join }
    }
}
