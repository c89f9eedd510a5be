//! Error types for asset generation

use thiserror::Error;

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating assets
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to launch or talk to the headless browser
    #[error("Browser initialization failed: {0}")]
    InitializationError(String),

    /// Failed to capture a rendered element
    #[error("Capture failed: {0}")]
    CaptureError(String),

    /// Failed to rasterize or encode an image
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Invalid configuration (bad roster file, empty label, ...)
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Filesystem error while writing outputs
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG encode/decode error from the imaging surface
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::CaptureError(err.to_string())
    }
}
