//! Asset batches
//!
//! Each submodule generates one fixed set of output files: raster batches
//! (favicons, logos) draw the monogram through the glyph-row layout onto a
//! canvas; document batches (letterhead, signatures) render an HTML
//! template in headless Chrome and capture one element.

pub mod favicon;
pub mod letterhead;
pub mod logo;
pub mod signature;
