//! RGBA canvas: the imaging surface for raster assets
//!
//! A canvas is owned by one generation call: fill, draw glyph masks,
//! optionally downsample, save, discard.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::error::Result;
use crate::font::GlyphMetrics;

/// Fully transparent background fill.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
/// Near-black brand ink (#0a0a0a).
pub const INK: Rgba<u8> = Rgba([10, 10, 10, 255]);
/// Pure white.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Warm off-white paper tone (#f8f7f5).
pub const PAPER: Rgba<u8> = Rgba([248, 247, 245, 255]);

/// A width x height RGBA pixel buffer.
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    /// Create a canvas filled with a background color.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            img: RgbaImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Composite a coverage mask at (x, y) with the given fill color.
    ///
    /// (x, y) is the mask's top-left corner; fractional positions round to
    /// the nearest pixel. Pixels falling outside the canvas are clipped, so
    /// oversized labels render partially off-canvas rather than failing.
    pub fn draw_mask(&mut self, x: f32, y: f32, metrics: GlyphMetrics, mask: &[u8], color: Rgba<u8>) {
        let x0 = x.round() as i64;
        let y0 = y.round() as i64;
        let (cw, ch) = (self.img.width() as i64, self.img.height() as i64);

        for my in 0..metrics.height as i64 {
            let py = y0 + my;
            if py < 0 || py >= ch {
                continue;
            }
            for mx in 0..metrics.width as i64 {
                let px = x0 + mx;
                if px < 0 || px >= cw {
                    continue;
                }
                let cov = mask[(my as u32 * metrics.width + mx as u32) as usize];
                if cov == 0 {
                    continue;
                }
                let src_a = cov as f32 / 255.0 * color[3] as f32 / 255.0;
                let dst = self.img.get_pixel_mut(px as u32, py as u32);
                let dst_a = dst[3] as f32 / 255.0;
                let out_a = src_a + dst_a * (1.0 - src_a);
                if out_a <= 0.0 {
                    continue;
                }
                for c in 0..3 {
                    let src_c = color[c] as f32;
                    let dst_c = dst[c] as f32;
                    let blended = (src_c * src_a + dst_c * dst_a * (1.0 - src_a)) / out_a;
                    dst[c] = (blended + 0.5) as u8;
                }
                dst[3] = (out_a * 255.0 + 0.5) as u8;
            }
        }
    }

    /// Downsample to the target size with Lanczos3 resampling.
    pub fn resized(&self, width: u32, height: u32) -> Canvas {
        Canvas {
            img: imageops::resize(&self.img, width, height, FilterType::Lanczos3),
        }
    }

    /// Write the canvas as a PNG file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.img.save(path)?;
        Ok(())
    }

    /// Raw pixel access for tests.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.img.get_pixel(x, y)
    }
}
