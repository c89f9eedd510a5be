//! Built-in 5x7 bitmap fallback face
//!
//! Used when neither the candidate font paths nor the system font database
//! yield a loadable face. Monospace-cell approximations are acceptable here:
//! generated assets are hand-reviewed, and the fixed metrics make this face
//! the deterministic choice for tests.

/// Columns in one glyph cell.
pub const GLYPH_COLS: u32 = 5;
/// Rows in one glyph cell.
pub const GLYPH_ROWS: u32 = 7;

/// Rows for one glyph, low 5 bits used, bit 4 = leftmost column.
fn glyph_rows(ch: char) -> [u8; 7] {
    match ch.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0E],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        // Unknown glyphs keep the monospace cell so layout stays stable.
        _ => [0; 7],
    }
}

/// Integer upscale factor for a nominal pixel size.
pub fn scale_for(px: f32) -> u32 {
    ((px * 0.1).round() as u32).max(1)
}

/// Cell dimensions (width, height) at a nominal pixel size.
pub fn cell_size(px: f32) -> (u32, u32) {
    let s = scale_for(px);
    (GLYPH_COLS * s, GLYPH_ROWS * s)
}

/// Rasterize one glyph to a coverage mask (0 or 255 per pixel, row-major).
pub fn rasterize(ch: char, px: f32) -> (u32, u32, Vec<u8>) {
    let s = scale_for(px);
    let (w, h) = cell_size(px);
    let rows = glyph_rows(ch);
    let mut mask = vec![0u8; (w * h) as usize];
    for (row_idx, row) in rows.iter().enumerate() {
        for col in 0..GLYPH_COLS {
            if row & (1 << (GLYPH_COLS - 1 - col)) != 0 {
                for dy in 0..s {
                    let y = row_idx as u32 * s + dy;
                    for dx in 0..s {
                        let x = col * s + dx;
                        mask[(y * w + x) as usize] = 255;
                    }
                }
            }
        }
    }
    (w, h, mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_monospace() {
        let (wh, hh) = cell_size(96.0);
        let (wo, ho) = cell_size(96.0);
        assert_eq!((wh, hh), (wo, ho));
        assert_eq!(wh, GLYPH_COLS * scale_for(96.0));
    }

    #[test]
    fn scale_never_zero() {
        assert_eq!(scale_for(0.5), 1);
        assert_eq!(scale_for(96.0), 10);
    }

    #[test]
    fn h_glyph_has_solid_verticals() {
        let (w, h, mask) = rasterize('H', 7.0); // scale 1, 5x7 cell
        assert_eq!((w, h), (5, 7));
        for row in 0..7 {
            assert_eq!(mask[(row * 5) as usize], 255, "left stem row {}", row);
            assert_eq!(mask[(row * 5 + 4) as usize], 255, "right stem row {}", row);
        }
    }

    #[test]
    fn unknown_glyph_is_blank() {
        let (_, _, mask) = rasterize('~', 7.0);
        assert!(mask.iter().all(|&c| c == 0));
    }
}
