//! Image drawing, pixel readback, and PNG output for Canvas2dContext.

use super::Canvas2dContext;
use crate::error::{Canvas2dError, Canvas2dResult};
use crate::geometry::{CanvasImageRef, ImageDrawParams};
use tiny_skia::Transform;

impl Canvas2dContext {
    /// Draw non-premultiplied RGBA pixels scaled into the destination rectangle.
    pub fn draw_image_scaled(
        &mut self,
        image: CanvasImageRef<'_>,
        params: &ImageDrawParams,
    ) -> Canvas2dResult<()> {
        log::debug!(
            target: "canvas",
            "drawImage {}x{} -> {} {} {} {}",
            image.width, image.height, params.dx, params.dy, params.dw, params.dh
        );
        let source = pixmap_from_rgba(image)?;
        if params.dw == 0.0 || params.dh == 0.0 {
            return Ok(());
        }

        let scale_x = params.dw / image.width as f32;
        let scale_y = params.dh / image.height as f32;
        let transform = Transform::from_row(scale_x, 0.0, 0.0, scale_y, params.dx, params.dy);

        let paint = tiny_skia::PixmapPaint {
            quality: tiny_skia::FilterQuality::Bilinear,
            ..Default::default()
        };
        self.pixmap
            .draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);
        Ok(())
    }

    /// Read the whole canvas as non-premultiplied RGBA8.
    pub fn get_image_data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        data
    }

    /// Read one pixel as non-premultiplied RGBA8.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Export the canvas as PNG data.
    ///
    /// # Arguments
    /// * `ppi` - Optional pixels per inch for PNG metadata. Defaults to 72 if not specified.
    pub fn to_png(&self, ppi: Option<f32>) -> Canvas2dResult<Vec<u8>> {
        let ppi = ppi.unwrap_or(72.0);

        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            // Pixel density is stored per meter
            let ppm = (ppi.max(0.0) / 0.0254).round() as u32;
            encoder.set_pixel_dims(Some(png::PixelDimensions {
                xppu: ppm,
                yppu: ppm,
                unit: png::Unit::Meter,
            }));

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.get_image_data())?;
        }
        Ok(buf)
    }
}

/// Premultiply straight-alpha RGBA into a new pixmap.
fn pixmap_from_rgba(image: CanvasImageRef<'_>) -> Canvas2dResult<tiny_skia::Pixmap> {
    let expected = image.width as usize * image.height as usize * 4;
    if image.data.len() != expected {
        return Err(Canvas2dError::ImageDataError(format!(
            "expected {} bytes for {}x{} image, got {}",
            expected,
            image.width,
            image.height,
            image.data.len()
        )));
    }
    let mut pixmap = tiny_skia::Pixmap::new(image.width, image.height).ok_or_else(|| {
        Canvas2dError::ImageDataError(format!(
            "cannot create {}x{} pixmap",
            image.width, image.height
        ))
    })?;
    for (dst, src) in pixmap
        .pixels_mut()
        .iter_mut()
        .zip(image.data.chunks_exact(4))
    {
        *dst = tiny_skia::ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
    }
    Ok(pixmap)
}

#[cfg(test)]
mod tests {
    use crate::context::Canvas2dContext;
    use crate::error::Canvas2dError;
    use crate::font_config::FontConfig;
    use crate::geometry::{CanvasImageRef, ImageDrawParams};

    fn blank() -> Canvas2dContext {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        };
        Canvas2dContext::with_config(40, 40, &config).unwrap()
    }

    #[test]
    fn test_draw_image_scaled_fills_destination() {
        let mut ctx = blank();
        let red = [255u8, 0, 0, 255].repeat(4);
        ctx.draw_image_scaled(
            CanvasImageRef {
                data: &red,
                width: 2,
                height: 2,
            },
            &ImageDrawParams {
                dx: 10.0,
                dy: 10.0,
                dw: 20.0,
                dh: 20.0,
            },
        )
        .unwrap();

        let inside = ctx.pixel(20, 20).unwrap();
        assert!(inside[0] > 250 && inside[1] < 5 && inside[3] > 250);
        assert_eq!(ctx.pixel(5, 5).unwrap()[3], 0);
        assert_eq!(ctx.pixel(35, 35).unwrap()[3], 0);
    }

    #[test]
    fn test_draw_image_rejects_short_buffer() {
        let mut ctx = blank();
        let err = ctx
            .draw_image_scaled(
                CanvasImageRef {
                    data: &[0, 0, 0],
                    width: 1,
                    height: 1,
                },
                &ImageDrawParams {
                    dx: 0.0,
                    dy: 0.0,
                    dw: 1.0,
                    dh: 1.0,
                },
            )
            .unwrap_err();
        assert!(matches!(err, Canvas2dError::ImageDataError(_)));
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let ctx = blank();
        assert!(ctx.pixel(40, 0).is_none());
        assert_eq!(ctx.pixel(39, 39), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_to_png_signature() {
        let ctx = blank();
        let png = ctx.to_png(Some(144.0)).unwrap();
        assert_eq!(&png[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }
}
