//! Error types for drawspace-canvas2d.

use thiserror::Error;

/// Result type alias using Canvas2dError.
pub type Canvas2dResult<T> = Result<T, Canvas2dError>;

/// Errors that can occur in canvas operations.
#[derive(Debug, Error)]
pub enum Canvas2dError {
    /// Invalid canvas dimensions (must be positive and within limits).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Failed to parse CSS font string.
    #[error("Failed to parse font string: {0}")]
    FontParseError(String),

    /// Failed to parse color value.
    #[error("Failed to parse color: {0}")]
    ColorParseError(String),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngError(String),

    /// A font file could not be read or contained no usable faces.
    #[error("Failed to load font from {path}: {reason}")]
    FontLoadError { path: String, reason: String },

    /// Pixel data does not match the declared image dimensions.
    #[error("Invalid image data: {0}")]
    ImageDataError(String),
}

impl From<png::EncodingError> for Canvas2dError {
    fn from(err: png::EncodingError) -> Self {
        Canvas2dError::PngError(err.to_string())
    }
}
