//! Letterhead batch
//!
//! One A4-proportioned page (595x842 CSS px) rendered by the browser and
//! captured at 3x for print-quality output.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::capture::{Capture, CaptureConfig, Viewport};
use crate::config::BrandConfig;
use crate::error::Result;

/// Element captured from the rendered page.
const SELECTOR: &str = ".letterhead";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Helvetica Neue', 'Segoe UI', sans-serif;
      background: transparent;
      padding: 0;
      -webkit-font-smoothing: antialiased;
      -moz-osx-font-smoothing: grayscale;
    }
    .letterhead {
      width: 595px; /* A4 width at 72dpi, captured at 3x */
      height: 842px; /* A4 height at 72dpi */
      background: #fff;
      display: flex;
      flex-direction: column;
    }
    .top-bar {
      height: 8px;
      background: #0a0a0a;
    }
    .header {
      background: #f8f7f5;
      padding: 30px 40px 25px;
    }
    .header-content {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      margin-bottom: 20px;
    }
    .brand {
      display: flex;
      align-items: center;
      gap: 18px;
    }
    .hoc {
      font-weight: 200;
      font-size: 42px;
      letter-spacing: 0.08em;
      color: #0a0a0a;
    }
    .divider {
      width: 2px;
      height: 50px;
      background: #2d2d2d;
    }
    .brand-text {
      display: flex;
      flex-direction: column;
      gap: 4px;
    }
    .company {
      font-size: 14px;
      letter-spacing: 0.2em;
      text-transform: uppercase;
      color: #0a0a0a;
      font-weight: 400;
    }
    .tagline {
      font-size: 10px;
      letter-spacing: 0.15em;
      text-transform: uppercase;
      color: #888;
      font-weight: 300;
    }
    .contact-info {
      text-align: right;
      display: flex;
      flex-direction: column;
      gap: 4px;
    }
    .contact-line {
      font-size: 10px;
      color: #555;
      font-weight: 400;
    }
    .header-line {
      height: 3px;
      background: #0a0a0a;
    }
    .content-area {
      flex: 1;
      padding: 40px;
      background: #fff;
    }
    .content-placeholder {
      font-size: 11px;
      color: #ccc;
    }
    .footer {
      background: #f5f4f2;
      padding: 18px 40px;
      display: flex;
      justify-content: space-between;
      align-items: center;
      border-top: 1px solid #e8e8e8;
    }
    .footer-brand {
      font-size: 11px;
      letter-spacing: 0.2em;
      text-transform: uppercase;
      color: #0a0a0a;
      font-weight: 400;
    }
    .footer-right {
      display: flex;
      gap: 30px;
    }
    .footer-item {
      font-size: 10px;
      color: #888;
    }
    .bottom-bar {
      height: 8px;
      background: #0a0a0a;
    }
  </style>
</head>
<body>
<div class="letterhead">
  <div class="top-bar"></div>
  <div class="header">
    <div class="header-content">
      <div class="brand">
        <div class="hoc">{{MONOGRAM}}</div>
        <div class="divider"></div>
        <div class="brand-text">
          <div class="company">{{COMPANY}}</div>
          <div class="tagline">{{TAGLINE}}</div>
        </div>
      </div>
      <div class="contact-info">
        <div class="contact-line">{{PHONE}}</div>
        <div class="contact-line">{{EMAIL}}</div>
        <div class="contact-line">{{WEBSITE}}</div>
      </div>
    </div>
    <div class="header-line"></div>
  </div>
  <div class="content-area">
    <div class="content-placeholder">Content area</div>
  </div>
  <div class="footer">
    <div class="footer-brand">{{COMPANY}}</div>
    <div class="footer-right">
      <div class="footer-item">{{CITY}}</div>
      <div class="footer-item">{{WEBSITE}}</div>
    </div>
  </div>
  <div class="bottom-bar"></div>
</div>
</body>
</html>"#;

/// Build the letterhead document for a brand.
pub fn build_html(brand: &BrandConfig) -> String {
    TEMPLATE
        .replace("{{MONOGRAM}}", &brand.monogram)
        .replace("{{COMPANY}}", &brand.company)
        .replace("{{TAGLINE}}", &brand.tagline)
        .replace("{{PHONE}}", &brand.phone)
        .replace("{{EMAIL}}", &brand.enquiries_email)
        .replace("{{WEBSITE}}", &brand.website)
        .replace("{{CITY}}", &brand.city)
}

/// Render and capture the letterhead; returns the written path.
pub fn generate(brand: &BrandConfig, out_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;

    let capture = Capture::new(CaptureConfig {
        viewport: Viewport {
            width: 650,
            height: 900,
        },
        ..Default::default()
    })?;

    let html = build_html(brand);
    let png = capture.capture_element(&html, SELECTOR)?;

    let path = out_dir.join(format!("{}_Letterhead.png", brand.monogram));
    fs::write(&path, &png)?;
    info!("Created {}", path.display());

    capture.close()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_carries_brand_fields() {
        let brand = BrandConfig::default();
        let html = build_html(&brand);
        assert!(html.contains(">HOC</div>"));
        assert!(html.contains("House of Clarence"));
        assert!(html.contains("020 3370 4057"));
        assert!(html.contains("enquiries@houseofclarence.com"));
        assert!(!html.contains("{{"), "unreplaced template token");
    }

    #[test]
    fn html_has_capture_target() {
        let html = build_html(&BrandConfig::default());
        assert!(html.contains("class=\"letterhead\""));
    }
}
