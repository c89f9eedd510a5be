//! Glyph row layout
//!
//! Centers a short label on a canvas by measuring each character's tight
//! width and inserting a uniform extra gap between characters. This is a
//! deliberate manual arrangement for fixed ASCII monograms, not text
//! shaping: characters are split one by one, order preserved, no kerning,
//! no ligatures, no bidi.

use crate::canvas::Canvas;
use crate::font::BrandFont;
use image::Rgba;

/// One positioned glyph in a laid-out row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphSlot {
    pub ch: char,
    /// Measured tight bounding-box width.
    pub width: f32,
    /// Left edge of the glyph on the canvas.
    pub x: f32,
}

/// A horizontally centered arrangement of a label's glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub slots: Vec<GlyphSlot>,
    /// Sum of glyph widths plus inter-glyph gaps.
    pub total_width: f32,
    /// Fixed gap inserted between adjacent glyphs.
    pub spacing: f32,
    /// Left edge of the whole row; negative when the label does not fit
    /// (oversized labels render partially off-canvas by design).
    pub start_x: f32,
}

/// How glyphs are placed vertically when a row is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalAlign {
    /// All glyphs share one top line (favicons: a common cap line with an
    /// optical bias keeps the monogram visually centered).
    Topline(f32),
    /// Each glyph is centered on a midline independently (logos).
    Midline(f32),
}

impl RowLayout {
    /// Lay out pre-measured glyph widths: offsets increase monotonically by
    /// `width(i) + spacing`, and the row is centered in `canvas_width`.
    pub fn from_widths(glyphs: &[(char, f32)], spacing: f32, canvas_width: f32) -> Self {
        let widths_sum: f32 = glyphs.iter().map(|(_, w)| w).sum();
        let gaps = glyphs.len().saturating_sub(1) as f32;
        let total_width = widths_sum + spacing * gaps;
        let start_x = (canvas_width - total_width) / 2.0;

        let mut slots = Vec::with_capacity(glyphs.len());
        let mut x = start_x;
        for &(ch, width) in glyphs {
            slots.push(GlyphSlot { ch, width, x });
            x += width + spacing;
        }

        Self {
            slots,
            total_width,
            spacing,
            start_x,
        }
    }
}

/// Measure `text` glyph by glyph and center it within `canvas_width`.
///
/// `spacing_frac` is the extra gap between characters as a fraction of the
/// font size (gap = `spacing_frac * px`).
pub fn layout_row(
    text: &str,
    font: &BrandFont,
    px: f32,
    spacing_frac: f32,
    canvas_width: u32,
) -> RowLayout {
    let spacing = spacing_frac * px;
    let measured: Vec<(char, f32)> = text
        .chars()
        .map(|ch| (ch, font.measure(ch, px).width as f32))
        .collect();
    RowLayout::from_widths(&measured, spacing, canvas_width as f32)
}

/// Walk a laid-out row left to right and draw each glyph onto the canvas.
pub fn render_row(
    canvas: &mut Canvas,
    font: &BrandFont,
    px: f32,
    layout: &RowLayout,
    color: Rgba<u8>,
    valign: VerticalAlign,
) {
    for slot in &layout.slots {
        let (metrics, mask) = font.rasterize(slot.ch, px);
        let y = match valign {
            VerticalAlign::Topline(y) => y,
            VerticalAlign::Midline(mid) => mid - metrics.height as f32 / 2.0,
        };
        canvas.draw_mask(slot.x, y, metrics, &mask, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hoc_widths() -> Vec<(char, f32)> {
        vec![('H', 30.0), ('O', 25.0), ('C', 28.0)]
    }

    #[test]
    fn worked_example_total_and_start() {
        // Widths 30/25/28 with spacing 5 on a 100-wide canvas.
        let row = RowLayout::from_widths(&hoc_widths(), 5.0, 100.0);
        assert_eq!(row.total_width, 93.0);
        assert_eq!(row.start_x, 3.5);
    }

    #[test]
    fn offsets_increase_by_width_plus_spacing() {
        let row = RowLayout::from_widths(&hoc_widths(), 5.0, 100.0);
        for pair in row.slots.windows(2) {
            assert_eq!(pair[1].x, pair[0].x + pair[0].width + row.spacing);
        }
    }

    #[test]
    fn total_width_is_last_edge_minus_start() {
        let row = RowLayout::from_widths(&hoc_widths(), 5.0, 100.0);
        let last = row.slots.last().unwrap();
        assert_eq!(last.x + last.width - row.start_x, row.total_width);
    }

    #[test]
    fn centering_leaves_symmetric_margins() {
        let row = RowLayout::from_widths(&hoc_widths(), 5.0, 100.0);
        let left = row.start_x;
        let right = 100.0 - (row.start_x + row.total_width);
        assert!((left - right).abs() < 1.0);
    }

    #[test]
    fn single_glyph_has_no_gap() {
        let row = RowLayout::from_widths(&[('H', 40.0)], 5.0, 100.0);
        assert_eq!(row.total_width, 40.0);
        assert_eq!(row.start_x, 30.0);
    }

    #[test]
    fn oversized_label_starts_at_negative_x() {
        let row = RowLayout::from_widths(&hoc_widths(), 5.0, 50.0);
        assert!(row.start_x < 0.0);
    }

    #[test]
    fn layout_is_deterministic() {
        let font = BrandFont::builtin();
        let a = layout_row("HOC", &font, 96.0, 0.08, 256);
        let b = layout_row("HOC", &font, 96.0, 0.08, 256);
        assert_eq!(a, b);
    }

    #[test]
    fn layout_preserves_label_order() {
        let font = BrandFont::builtin();
        let row = layout_row("HOC", &font, 96.0, 0.08, 256);
        let chars: Vec<char> = row.slots.iter().map(|s| s.ch).collect();
        assert_eq!(chars, vec!['H', 'O', 'C']);
    }

    #[test]
    fn render_row_marks_canvas() {
        use crate::canvas::{Canvas, TRANSPARENT, WHITE};

        let font = BrandFont::builtin();
        let mut canvas = Canvas::new(128, 64, TRANSPARENT);
        let row = layout_row("HOC", &font, 40.0, 0.1, 128);
        render_row(&mut canvas, &font, 40.0, &row, WHITE, VerticalAlign::Midline(32.0));

        let mut lit = 0usize;
        for y in 0..64 {
            for x in 0..128 {
                if canvas.pixel(x, y)[3] > 0 {
                    lit += 1;
                }
            }
        }
        assert!(lit > 0, "expected rendered glyph pixels");
    }
}
