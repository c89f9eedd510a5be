//! Font resolution and per-glyph measurement
//!
//! Resolution walks an ordered candidate list of font files, then queries
//! the system font database, and finally degrades to a built-in bitmap
//! face. Failures along the chain are logged and never surfaced: asset
//! generation always gets *some* usable font.

pub mod builtin;

use std::fs;
use std::path::PathBuf;

use log::{debug, warn};

use crate::error::Result;

/// Tight bounding-box dimensions of a rasterized glyph, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphMetrics {
    pub width: u32,
    pub height: u32,
}

/// A resolved font handle: either a real outline face or the bitmap fallback.
pub enum BrandFont {
    Truetype(fontdue::Font),
    Builtin,
}

impl BrandFont {
    /// Load an outline face from raw font bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| crate::error::Error::RenderError(e.to_string()))?;
        Ok(Self::Truetype(font))
    }

    /// The built-in monospace-like fallback face.
    pub fn builtin() -> Self {
        Self::Builtin
    }

    /// Measure one glyph's tight bounding box at the given pixel size.
    pub fn measure(&self, ch: char, px: f32) -> GlyphMetrics {
        match self {
            Self::Truetype(font) => {
                let m = font.metrics(ch, px);
                GlyphMetrics {
                    width: m.width as u32,
                    height: m.height as u32,
                }
            }
            Self::Builtin => {
                let (width, height) = builtin::cell_size(px);
                GlyphMetrics { width, height }
            }
        }
    }

    /// Rasterize one glyph to an 8-bit coverage mask (row-major, tight bbox).
    pub fn rasterize(&self, ch: char, px: f32) -> (GlyphMetrics, Vec<u8>) {
        match self {
            Self::Truetype(font) => {
                let (m, mask) = font.rasterize(ch, px);
                (
                    GlyphMetrics {
                        width: m.width as u32,
                        height: m.height as u32,
                    },
                    mask,
                )
            }
            Self::Builtin => {
                let (width, height, mask) = builtin::rasterize(ch, px);
                (GlyphMetrics { width, height }, mask)
            }
        }
    }
}

/// Default candidate font files, probed in order.
pub fn default_candidates() -> Vec<PathBuf> {
    [
        "/System/Library/Fonts/Supplemental/Arial.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// Resolve a font from the candidate list, falling back to the system font
/// database and finally the built-in face. Never fails.
pub fn resolve(candidates: &[PathBuf]) -> BrandFont {
    for path in candidates {
        let bytes = match fs::read(path) {
            Ok(b) => b,
            Err(_) => continue,
        };
        match fontdue::Font::from_bytes(bytes.as_slice(), fontdue::FontSettings::default()) {
            Ok(font) => {
                debug!("Using font {}", path.display());
                return BrandFont::Truetype(font);
            }
            Err(e) => {
                warn!("Skipping font {}: {}", path.display(), e);
            }
        }
    }

    match system_font() {
        Some(font) => font,
        None => {
            warn!("No usable system font found; falling back to built-in bitmap face");
            BrandFont::builtin()
        }
    }
}

/// Query the system font database for a reasonable sans-serif face.
fn system_font() -> Option<BrandFont> {
    use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};

    let mut db = Database::new();
    db.load_system_fonts();

    let id = db.query(&Query {
        families: &[
            Family::Name("Arial"),
            Family::Name("Helvetica"),
            Family::Name("Segoe UI"),
            Family::SansSerif,
        ],
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
        ..Query::default()
    })?;

    let face = db.face(id)?;
    let bytes: Vec<u8> = match &face.source {
        Source::File(path) => fs::read(path).ok()?,
        Source::Binary(data) => data.as_ref().as_ref().to_vec(),
        Source::SharedFile(_, data) => data.as_ref().as_ref().to_vec(),
    };

    match fontdue::Font::from_bytes(bytes.as_slice(), fontdue::FontSettings::default()) {
        Ok(font) => {
            debug!("Using system font {}", face.post_script_name);
            Some(BrandFont::Truetype(font))
        }
        Err(e) => {
            warn!("System font {} not loadable: {}", face.post_script_name, e);
            None
        }
    }
}
