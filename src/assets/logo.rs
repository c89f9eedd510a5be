//! Logo batch
//!
//! Wordmark renders of the monogram at five sizes, in black and white, on
//! transparency. Logos are drawn at 2x the nominal canvas and saved at that
//! resolution; downstream consumers scale them in CSS, so no downsample
//! pass happens here.

use std::fs;
use std::path::{Path, PathBuf};

use image::Rgba;
use log::info;

use crate::canvas::{Canvas, INK, TRANSPARENT, WHITE};
use crate::config::BrandConfig;
use crate::error::Result;
use crate::font::BrandFont;
use crate::layout::{layout_row, render_row, VerticalAlign};

/// (font_size, canvas_width, canvas_height) tiers, largest first.
pub const TIERS: [(u32, u32, u32); 5] = [
    (200, 600, 280),
    (120, 400, 180),
    (72, 260, 120),
    (36, 140, 70),
    (24, 100, 50),
];

/// Render scale for quality.
const SCALE: u32 = 2;
/// Wide letter spacing as a fraction of the font size.
const SPACING_FRACTION: f32 = 0.15;

/// Generate all logo variants; returns the written paths.
pub fn generate(font: &BrandFont, brand: &BrandConfig, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let label = brand.monogram.as_str();
    let mut written = Vec::new();

    for &(font_size, width, height) in &TIERS {
        let black = out_dir.join(format!("{}-black-{}px.png", label, font_size));
        render_logo(font, label, font_size, width, height, INK, &black)?;
        written.push(black);

        let white = out_dir.join(format!("{}-white-{}px.png", label, font_size));
        render_logo(font, label, font_size, width, height, WHITE, &white)?;
        written.push(white);
    }

    info!("Logo set written to {}", out_dir.display());
    Ok(written)
}

fn render_logo(
    font: &BrandFont,
    label: &str,
    font_size: u32,
    width: u32,
    height: u32,
    color: Rgba<u8>,
    path: &Path,
) -> Result<()> {
    let (w, h) = (width * SCALE, height * SCALE);
    let mut canvas = Canvas::new(w, h, TRANSPARENT);

    let font_px = (font_size * SCALE) as f32;
    let layout = layout_row(label, font, font_px, SPACING_FRACTION, w);

    // Each glyph centers on the canvas midline independently.
    render_row(
        &mut canvas,
        font,
        font_px,
        &layout,
        color,
        VerticalAlign::Midline(h as f32 / 2.0),
    );

    canvas.save(path)?;
    info!("Created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_sorted_descending() {
        for pair in TIERS.windows(2) {
            assert!(pair[0].0 > pair[1].0);
        }
    }
}
