//! Stateless helpers that translate style fields into page content-stream
//! operators.
//!
//! Every numeric token is formatted with exactly three fractional digits.
//! This is a hard contract, not a stylistic choice: appearance streams are
//! compared byte for byte in tests, and stable output keeps regenerated
//! documents diff-friendly.

use itertools::Itertools;

use crate::pdf::color::PdfColor;
use crate::pdf::line_style::PdfLineStyle;
use crate::pdf::point::PdfPoint;

/// The fixed reference to the externally managed graphics-state resource
/// that encodes an annotation's opacity. This crate only emits the token;
/// allocating the resource is the engine's responsibility, driven by the
/// opacity value supplied at bind time.
pub const OPACITY_REFERENCE: &str = "/GS gs";

/// Returns the line width operator for the given stroke width.
pub fn width_operator(width: f32) -> String {
    format!("{width:.3} w")
}

/// Returns the color selection operator for the given color.
///
/// Colors with equal channels use the single-value gray operators (`g` for
/// fill, `G` for stroke); all other colors use the three-value RGB operators
/// (`rg` / `RG`). Channels are emitted as `channel / 255` ratios.
pub fn color_operator(color: PdfColor, is_fill: bool) -> String {
    if color.is_gray() {
        let op = if is_fill { "g" } else { "G" };
        return format!("{:.3} {}", f32::from(color.red()) / 255.0, op);
    }

    let op = if is_fill { "rg" } else { "RG" };
    format!(
        "{:.3} {:.3} {:.3} {}",
        f32::from(color.red()) / 255.0,
        f32::from(color.green()) / 255.0,
        f32::from(color.blue()) / 255.0,
        op
    )
}

/// Returns the color selection operators for an annotation's fill and
/// stroke colors. The fill operator, when present, always precedes the
/// stroke operator; absent colors contribute nothing.
pub fn paint_operators(fill: Option<PdfColor>, stroke: Option<PdfColor>) -> String {
    let fill = fill.map(|color| color_operator(color, true));
    let stroke = stroke.map(|color| color_operator(color, false));

    [fill, stroke].into_iter().flatten().join("\n")
}

/// Returns the path-painting operator matching which of the two colors are
/// set: fill and stroke (`B`), stroke only (`S`), fill only (`f`), or the
/// no-op `n` when neither is set.
pub fn paint_mode_operator(fill: Option<PdfColor>, stroke: Option<PdfColor>) -> &'static str {
    match (fill, stroke) {
        (Some(_), Some(_)) => "B",
        (None, Some(_)) => "S",
        (Some(_), None) => "f",
        (None, None) => "n",
    }
}

/// Returns the line cap and join operators for the given style.
pub fn line_style_operator(style: PdfLineStyle) -> String {
    format!("{} j {} J", style.cap.operand(), style.join.operand())
}

/// Assembles one stroked sub-path per supplied point list: the first point
/// of each list emits a moveto, subsequent points emit linetos, and each
/// sub-path is terminated with a stroke operator. Empty lists are skipped.
pub fn stroke_path_operators(strokes: &[Vec<PdfPoint>]) -> String {
    let mut tokens = Vec::new();

    for stroke in strokes {
        for (index, point) in stroke.iter().enumerate() {
            let op = if index == 0 { "m" } else { "l" };
            tokens.push(format!("{:.3} {:.3} {}", point.x, point.y, op));
        }

        if !stroke.is_empty() {
            tokens.push("S".to_string());
        }
    }

    tokens.join(" ")
}

/// Joins non-empty operator sections with newlines, preserving order.
pub(crate) fn join_sections<I>(sections: I) -> String
where
    I: IntoIterator<Item = String>,
{
    sections
        .into_iter()
        .filter(|section| !section.is_empty())
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::line_style::{PdfLineCap, PdfLineJoin};

    #[test]
    fn width_operator_rounds_to_three_decimals() {
        assert_eq!(width_operator(2.0), "2.000 w");
        assert_eq!(width_operator(0.5714285), "0.571 w");
    }

    #[test]
    fn gray_color_uses_single_value_form() {
        assert_eq!(color_operator(PdfColor::BLACK, false), "0.000 G");
        assert_eq!(color_operator(PdfColor::WHITE, true), "1.000 g");
        assert_eq!(
            color_operator(PdfColor::new(128, 128, 128), true),
            "0.502 g"
        );
    }

    #[test]
    fn rgb_color_uses_three_value_form() {
        assert_eq!(
            color_operator(PdfColor::RED, false),
            "1.000 0.000 0.000 RG"
        );
        assert_eq!(
            color_operator(PdfColor::new(255, 128, 0), true),
            "1.000 0.502 0.000 rg"
        );
    }

    #[test]
    fn fill_operator_precedes_stroke_operator() {
        let operators = paint_operators(Some(PdfColor::GREEN), Some(PdfColor::RED));

        assert_eq!(operators, "0.000 1.000 0.000 rg\n1.000 0.000 0.000 RG");
    }

    #[test]
    fn absent_colors_emit_nothing() {
        assert_eq!(paint_operators(None, None), "");
        assert_eq!(paint_operators(None, Some(PdfColor::BLACK)), "0.000 G");
        assert_eq!(paint_operators(Some(PdfColor::BLACK), None), "0.000 g");
    }

    #[test]
    fn paint_mode_matches_color_presence() {
        assert_eq!(
            paint_mode_operator(Some(PdfColor::RED), Some(PdfColor::RED)),
            "B"
        );
        assert_eq!(paint_mode_operator(None, Some(PdfColor::RED)), "S");
        assert_eq!(paint_mode_operator(Some(PdfColor::RED), None), "f");
        assert_eq!(paint_mode_operator(None, None), "n");
    }

    #[test]
    fn line_style_operator_emits_cap_then_join() {
        assert_eq!(line_style_operator(PdfLineStyle::ROUND), "1 j 1 J");
        assert_eq!(line_style_operator(PdfLineStyle::BUTT_MITER), "0 j 0 J");
        assert_eq!(
            line_style_operator(PdfLineStyle::new(
                PdfLineCap::ProjectingSquare,
                PdfLineJoin::Bevel
            )),
            "2 j 2 J"
        );
    }

    #[test]
    fn stroke_paths_emit_one_sub_path_per_list() {
        let strokes = vec![
            vec![PdfPoint::new(0.0, 0.0), PdfPoint::new(10.0, 10.0)],
            vec![],
            vec![
                PdfPoint::new(20.0, 20.0),
                PdfPoint::new(30.0, 20.0),
                PdfPoint::new(40.0, 30.0),
            ],
        ];

        assert_eq!(
            stroke_path_operators(&strokes),
            "0.000 0.000 m 10.000 10.000 l S \
             20.000 20.000 m 30.000 20.000 l 40.000 30.000 l S"
        );
    }
}
