//! brandgen
//!
//! An offline generator for a company's static branding assets. Raster
//! assets (favicons, logos) draw a short monogram glyph by glyph onto an
//! RGBA canvas with manual letter spacing; document assets (letterhead,
//! email signatures) render an HTML template in headless Chrome and
//! capture one element as a PNG.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use brandgen::config::BrandConfig;
//! use brandgen::{assets, font};
//!
//! # fn main() -> brandgen::Result<()> {
//! let brand = BrandConfig::default();
//! let face = font::resolve(&font::default_candidates());
//! let files = assets::favicon::generate(&face, &brand, Path::new("out/public"))?;
//! println!("wrote {} favicons", files.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;

// Raster surface: canvas, fonts, and the glyph-row layout core
pub mod canvas;
pub mod font;
pub mod layout;

// Browser-backed capture surface for document assets
pub mod capture;

// Asset batches
pub mod assets;
