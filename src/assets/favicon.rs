//! Favicon and Apple touch icon batch
//!
//! Icons are drawn at 4x the target size and downsampled with Lanczos3 for
//! clean edges at small sizes. Two transparent variants (white and ink
//! text) cover dark and light browser chrome; the Apple touch icons get
//! solid backgrounds since iOS does not composite transparency.

use std::fs;
use std::path::{Path, PathBuf};

use image::Rgba;
use log::info;

use crate::canvas::{Canvas, INK, PAPER, TRANSPARENT, WHITE};
use crate::config::BrandConfig;
use crate::error::Result;
use crate::font::BrandFont;
use crate::layout::{layout_row, render_row, VerticalAlign};

/// Favicon edge sizes; 180 doubles as the Apple touch icon size.
pub const SIZES: [u32; 4] = [16, 32, 48, 180];

/// Supersampling factor for raster quality.
const SUPERSAMPLE: u32 = 4;
/// Font size as a fraction of the supersampled edge; 38% fits all three
/// monogram letters.
const FONT_FRACTION: f32 = 0.38;
/// Tight letter spacing as a fraction of the font size.
const SPACING_FRACTION: f32 = 0.08;
/// Downward shift of the cap line as a fraction of its height, for optical
/// balance.
const OPTICAL_BIAS: f32 = 0.1;

/// Generate the full favicon set; returns the written paths.
pub fn generate(font: &BrandFont, brand: &BrandConfig, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;
    let label = brand.monogram.as_str();
    let mut written = Vec::new();

    // Dark mode: white text on transparency
    for &size in &SIZES {
        let path = out_dir.join(format!("favicon-white-{}.png", size));
        render_icon(font, label, size, WHITE, TRANSPARENT, &path)?;
        written.push(path);
    }

    // Light mode: ink text on transparency
    for &size in &SIZES {
        let path = out_dir.join(format!("favicon-black-{}.png", size));
        render_icon(font, label, size, INK, TRANSPARENT, &path)?;
        written.push(path);
    }

    // Apple touch icons need solid backgrounds
    let dark = out_dir.join("apple-touch-icon-dark.png");
    render_icon(font, label, 180, WHITE, INK, &dark)?;
    written.push(dark);

    let light = out_dir.join("apple-touch-icon-light.png");
    render_icon(font, label, 180, INK, PAPER, &light)?;
    written.push(light);

    info!("Favicon set written to {}", out_dir.display());
    Ok(written)
}

fn render_icon(
    font: &BrandFont,
    label: &str,
    size: u32,
    text_color: Rgba<u8>,
    background: Rgba<u8>,
    path: &Path,
) -> Result<()> {
    let edge = size * SUPERSAMPLE;
    let mut canvas = Canvas::new(edge, edge, background);

    let font_px = (edge as f32 * FONT_FRACTION).floor();
    let layout = layout_row(label, font, font_px, SPACING_FRACTION, edge);

    // Vertical centering uses the first glyph's cap height as the reference,
    // nudged slightly upward for optical balance.
    let reference = label.chars().next().unwrap_or('H');
    let cap_height = font.measure(reference, font_px).height as f32;
    let top = (edge as f32 - cap_height) / 2.0 - cap_height * OPTICAL_BIAS;

    render_row(
        &mut canvas,
        font,
        font_px,
        &layout,
        text_color,
        VerticalAlign::Topline(top),
    );

    canvas.resized(size, size).save(path)?;
    info!("Created {} ({}x{})", path.display(), size, size);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expected_file_count() {
        // 4 sizes x 2 variants + 2 touch icons
        assert_eq!(SIZES.len() * 2 + 2, 10);
    }
}
