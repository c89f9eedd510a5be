//! Headless Chrome element capture
//!
//! Document assets (letterhead, signatures) are rendered by a real browser:
//! the generator hands a full HTML document to a fresh tab via a base64
//! `data:` URL, waits briefly for layout/paint to settle, then screenshots
//! one element located by a CSS selector. One browser process serves a
//! whole batch; each capture opens and closes its own tab.

use std::ffi::{OsStr, OsString};
use std::time::Duration;

use base64::Engine as Base64Engine;
use headless_chrome::protocol::cdp::Page;
use headless_chrome::{Browser, LaunchOptions};
use log::debug;

use crate::error::{Error, Result};

/// Browser viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Configuration for a capture batch.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    pub viewport: Viewport,
    /// Device pixel density multiplier; 3 produces retina-quality output.
    pub device_scale_factor: u32,
    /// Fixed delay after navigation for layout/paint to settle.
    pub settle_ms: u64,
    /// Per-capture deadline for element lookup and screenshotting.
    pub timeout_ms: u64,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport {
                width: 700,
                height: 500,
            },
            device_scale_factor: 3,
            settle_ms: 100,
            timeout_ms: 5000,
        }
    }
}

/// A headless browser scoped to one capture batch.
pub struct Capture {
    browser: Browser,
    config: CaptureConfig,
}

impl Capture {
    /// Launch a headless Chrome instance for this batch.
    pub fn new(config: CaptureConfig) -> Result<Self> {
        let scale_arg = OsString::from(format!(
            "--force-device-scale-factor={}",
            config.device_scale_factor
        ));

        let launch_options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((config.viewport.width, config.viewport.height)))
            .args(vec![OsStr::new("--hide-scrollbars"), scale_arg.as_os_str()])
            .build()
            .map_err(|e| Error::InitializationError(format!("Failed to build launch options: {}", e)))?;

        let browser = Browser::new(launch_options)
            .map_err(|e| Error::InitializationError(format!("Failed to launch browser: {}", e)))?;

        Ok(Self { browser, config })
    }

    /// Render an HTML document and capture the element matching `selector`
    /// as a cropped PNG.
    pub fn capture_element(&self, html: &str, selector: &str) -> Result<Vec<u8>> {
        let tab = self
            .browser
            .new_tab()
            .map_err(|e| Error::CaptureError(format!("Failed to create tab: {}", e)))?;
        tab.set_default_timeout(Duration::from_millis(self.config.timeout_ms));

        // Inject the document by navigating to it directly; base64 keeps the
        // markup safe inside the URL.
        let b64 = base64::engine::general_purpose::STANDARD.encode(html);
        let url = format!("data:text/html;base64,{}", b64);

        tab.navigate_to(&url)
            .map_err(|e| Error::CaptureError(format!("Navigation failed: {}", e)))?;
        tab.wait_until_navigated()
            .map_err(|e| Error::CaptureError(format!("Wait for navigation failed: {}", e)))?;

        // Give layout and font rasterization a moment to settle.
        std::thread::sleep(Duration::from_millis(self.config.settle_ms));

        let element = tab
            .wait_for_element(selector)
            .map_err(|e| Error::CaptureError(format!("Element '{}' not found: {}", selector, e)))?;

        let png = element
            .capture_screenshot(Page::CaptureScreenshotFormatOption::Png)
            .map_err(|e| Error::CaptureError(format!("Screenshot of '{}' failed: {}", selector, e)))?;

        debug!("Captured '{}' ({} bytes)", selector, png.len());

        let _ = tab.close(true);
        Ok(png)
    }

    /// Shut the browser process down.
    pub fn close(self) -> Result<()> {
        drop(self.browser);
        Ok(())
    }
}
