//! Loading images from local files or remote URLs.

use crate::error::{DrawSpaceError, DrawSpaceResult};
use drawspace_canvas2d::CanvasImageRef;
use image::RgbaImage;
use log::{error, info};
use reqwest::Client;
use std::path::Path;

static DRAWSPACE_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

lazy_static! {
    static ref REQWEST_CLIENT: Client = reqwest::ClientBuilder::new()
        .user_agent(DRAWSPACE_USER_AGENT)
        .pool_max_idle_per_host(0)
        .build()
        .expect("Failed to construct reqwest client");
}

/// A decoded image and the size it should be drawn at.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pixels: RgbaImage,
    pub width: f32,
    pub height: f32,
}

impl LoadedImage {
    pub fn new(pixels: RgbaImage, width: f32, height: f32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Decode an encoded image held in memory.
    pub fn from_bytes(bytes: &[u8], width: f32, height: f32) -> DrawSpaceResult<Self> {
        let pixels = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self::new(pixels, width, height))
    }

    pub fn natural_width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn natural_height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub(crate) fn as_canvas_image(&self) -> CanvasImageRef<'_> {
        CanvasImageRef {
            data: self.pixels.as_raw(),
            width: self.pixels.width(),
            height: self.pixels.height(),
        }
    }
}

/// What to draw: an image loaded earlier, or a path or URL to load now.
#[derive(Debug, Clone, Copy)]
pub enum ImageSource<'a> {
    Loaded(&'a LoadedImage),
    Location(&'a str),
}

impl<'a> From<&'a LoadedImage> for ImageSource<'a> {
    fn from(image: &'a LoadedImage) -> Self {
        ImageSource::Loaded(image)
    }
}

impl<'a> From<&'a str> for ImageSource<'a> {
    fn from(location: &'a str) -> Self {
        ImageSource::Location(location)
    }
}

impl<'a> From<&'a String> for ImageSource<'a> {
    fn from(location: &'a String) -> Self {
        ImageSource::Location(location)
    }
}

/// Load and decode an image.
///
/// `location` is read from disk when it names an existing file and fetched
/// over HTTP otherwise. Nothing is cached between calls.
pub async fn load_image(location: &str, width: f32, height: f32) -> DrawSpaceResult<LoadedImage> {
    let bytes = if Path::new(location).exists() {
        info!("Loading image from file {}", location);
        std::fs::read(location)?
    } else {
        info!("Fetching image from {}", location);
        fetch_remote(location).await?
    };
    LoadedImage::from_bytes(&bytes, width, height)
}

async fn fetch_remote(location: &str) -> DrawSpaceResult<Vec<u8>> {
    let fetch = async {
        let response = REQWEST_CLIENT
            .get(location)
            .send()
            .await?
            .error_for_status()?;
        Ok::<_, reqwest::Error>(response.bytes().await?.to_vec())
    };
    fetch.await.map_err(|err| {
        error!("Failed to load remote image from {}: {}", location, err);
        DrawSpaceError::RemoteImage {
            location: location.to_string(),
            error: err,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, image::Rgba(rgba));
        let mut buf = std::io::Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    #[tokio::test]
    async fn test_load_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        std::fs::write(&path, png_bytes(3, 2, [10, 20, 30, 255])).unwrap();

        let image = load_image(path.to_str().unwrap(), 30.0, 20.0).await.unwrap();
        assert_eq!((image.natural_width(), image.natural_height()), (3, 2));
        assert_eq!((image.width, image.height), (30.0, 20.0));
        assert_eq!(image.pixels().get_pixel(2, 1).0, [10, 20, 30, 255]);
    }

    #[tokio::test]
    async fn test_local_file_that_is_not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = load_image(path.to_str().unwrap(), 1.0, 1.0).await.unwrap_err();
        assert!(matches!(err, DrawSpaceError::Decode(_)));
    }

    #[tokio::test]
    async fn test_missing_path_is_treated_as_url() {
        let err = load_image("no/such/image.png", 1.0, 1.0).await.unwrap_err();
        match err {
            DrawSpaceError::RemoteImage { location, .. } => {
                assert_eq!(location, "no/such/image.png")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_canvas_image_view() {
        let image = LoadedImage::from_bytes(&png_bytes(2, 2, [1, 2, 3, 4]), 2.0, 2.0).unwrap();
        let view = image.as_canvas_image();
        assert_eq!(view.data.len(), 16);
        assert_eq!(&view.data[..4], &[1, 2, 3, 4]);
    }
}
