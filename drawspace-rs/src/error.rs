use drawspace_canvas2d::Canvas2dError;
use thiserror::Error;

pub type DrawSpaceResult<T> = Result<T, DrawSpaceError>;

#[derive(Debug, Error)]
pub enum DrawSpaceError {
    #[error("Failed to load remote image from {location}\n{error}")]
    RemoteImage {
        location: String,
        #[source]
        error: reqwest::Error,
    },

    #[error("Unable to register font {name}")]
    FontRegistration {
        name: String,
        #[source]
        error: Canvas2dError,
    },

    #[error("Text cannot fit in {max_width}px at the minimum size of {min_size}px: {text}")]
    TextCannotFit {
        text: String,
        max_width: f32,
        min_size: f32,
    },

    #[error("Text size must be positive and at most 4096px, got {0}")]
    InvalidTextSize(f32),

    #[error("Colour must start with '#': {0}")]
    InvalidColour(String),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Canvas(#[from] Canvas2dError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Decode(#[from] image::ImageError),

    #[error("Invalid draw script: {0}")]
    Script(#[from] serde_json::Error),
}
