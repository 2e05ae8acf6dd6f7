use crate::config::DrawSpaceConfig;
use crate::error::{DrawSpaceError, DrawSpaceResult};
use crate::export::ExportFormat;
use crate::image_loading::{load_image, ImageSource};
use crate::markup::DEFAULT_COLOUR;
use crate::paint::PaintGuard;
use crate::text::{self, validate_text_size, FitBounds, TextLayout, TextOptions};
use drawspace_canvas2d::{
    ArcParams, Canvas2dContext, ImageDrawParams, RectParams, TextAlign as CanvasTextAlign,
    TextBaseline,
};
use std::path::Path;

/// A fixed-size drawing surface with chainable drawing operations.
///
/// Every operation that paints sets its colours on a [`PaintGuard`], so the
/// fill and stroke colours are back to white once it returns, whether it
/// succeeded or not. Drawing errors do not undo earlier operations.
pub struct DrawSpace {
    ctx: Canvas2dContext,
    vertices: Vec<(f32, f32)>,
    config: DrawSpaceConfig,
}

impl DrawSpace {
    pub fn new(width: u32, height: u32) -> DrawSpaceResult<Self> {
        Self::with_config(width, height, DrawSpaceConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: DrawSpaceConfig) -> DrawSpaceResult<Self> {
        validate_text_size(config.default_text_size)?;
        validate_text_size(config.min_text_size)?;
        let mut ctx = Canvas2dContext::with_config(width, height, &config.font_config)?;
        ctx.set_fill_style(DEFAULT_COLOUR)?;
        ctx.set_stroke_style(DEFAULT_COLOUR)?;
        log::info!("Created {}x{} draw space", width, height);
        Ok(Self {
            ctx,
            vertices: Vec::new(),
            config,
        })
    }

    pub fn width(&self) -> u32 {
        self.ctx.width()
    }

    pub fn height(&self) -> u32 {
        self.ctx.height()
    }

    pub fn config(&self) -> &DrawSpaceConfig {
        &self.config
    }

    /// The underlying canvas context.
    pub fn raw(&self) -> &Canvas2dContext {
        &self.ctx
    }

    pub fn raw_mut(&mut self) -> &mut Canvas2dContext {
        &mut self.ctx
    }

    /// Pending polygon vertices in insertion order.
    pub fn vertices(&self) -> &[(f32, f32)] {
        &self.vertices
    }

    pub fn draw_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        colour: &str,
    ) -> DrawSpaceResult<&mut Self> {
        check_colour(colour)?;
        {
            let mut ctx = PaintGuard::new(&mut self.ctx);
            ctx.set_fill_style(colour)?;
            ctx.fill_rect(&RectParams {
                x,
                y,
                width,
                height,
            });
        }
        Ok(self)
    }

    /// Draw a circular arc. Angles are in radians, measured clockwise from
    /// the positive x axis.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_arc(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        start: f32,
        end: f32,
        colour: &str,
        fill: bool,
    ) -> DrawSpaceResult<&mut Self> {
        check_colour(colour)?;
        {
            let mut ctx = PaintGuard::new(&mut self.ctx);
            if fill {
                ctx.set_fill_style(colour)?;
            } else {
                ctx.set_stroke_style(colour)?;
            }
            ctx.begin_path();
            ctx.arc(&ArcParams {
                x,
                y,
                radius,
                start_angle: start,
                end_angle: end,
                anticlockwise: false,
            });
            if fill {
                ctx.fill();
            } else {
                ctx.stroke();
            }
        }
        Ok(self)
    }

    pub fn draw_line(
        &mut self,
        x: f32,
        y: f32,
        x1: f32,
        y1: f32,
        colour: &str,
    ) -> DrawSpaceResult<&mut Self> {
        check_colour(colour)?;
        {
            let mut ctx = PaintGuard::new(&mut self.ctx);
            ctx.set_stroke_style(colour)?;
            ctx.begin_path();
            ctx.move_to(x, y);
            ctx.line_to(x1, y1);
            ctx.stroke();
        }
        Ok(self)
    }

    /// Draw colour-marked text with its alphabetic baseline at `y`.
    ///
    /// The text shrinks from the default size until it fits the maximum
    /// width. If it still does not fit at the configured minimum size, the
    /// call fails and nothing is painted.
    pub fn draw_text(
        &mut self,
        text: &str,
        font: &str,
        x: f32,
        y: f32,
        options: &TextOptions,
    ) -> DrawSpaceResult<&mut Self> {
        let layout = self.layout_text(text, font, x, options)?;
        {
            let mut ctx = PaintGuard::new(&mut self.ctx);
            ctx.set_font(&layout.font)?;
            ctx.set_text_align(CanvasTextAlign::Left);
            ctx.set_text_baseline(TextBaseline::Alphabetic);
            // Reject a bad tag colour before any run is painted
            for segment in &layout.segments {
                ctx.set_fill_style(&segment.colour)?;
            }
            for segment in &layout.segments {
                ctx.set_fill_style(&segment.colour)?;
                ctx.fill_text(&segment.text, segment.x, y);
            }
        }
        Ok(self)
    }

    /// Fit and place text the way [`draw_text`](Self::draw_text) would,
    /// without painting.
    pub fn layout_text(
        &mut self,
        text: &str,
        font: &str,
        x: f32,
        options: &TextOptions,
    ) -> DrawSpaceResult<TextLayout> {
        let bounds = FitBounds {
            max_width: options.max_width.unwrap_or(self.width() as f32),
            start_size: options.size.unwrap_or(self.config.default_text_size),
            min_size: self.config.min_text_size,
        };
        let mut ctx = PaintGuard::new(&mut self.ctx);
        let layout = text::layout_text(&mut *ctx, text, font, x, options.align, &bounds)?;
        Ok(layout)
    }

    /// Draw an image scaled into the given rectangle.
    ///
    /// A path or URL is loaded for this call only.
    pub async fn draw_image<'a>(
        &mut self,
        source: impl Into<ImageSource<'a>>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    ) -> DrawSpaceResult<&mut Self> {
        let fetched;
        let image = match source.into() {
            ImageSource::Loaded(image) => image,
            ImageSource::Location(location) => {
                fetched = load_image(location, width, height).await?;
                &fetched
            }
        };
        self.ctx.draw_image_scaled(
            image.as_canvas_image(),
            &ImageDrawParams {
                dx: x,
                dy: y,
                dw: width,
                dh: height,
            },
        )?;
        Ok(self)
    }

    pub fn vert(&mut self, x: f32, y: f32) -> &mut Self {
        self.vertices.push((x, y));
        self
    }

    pub fn vert_clear(&mut self) -> &mut Self {
        self.vertices.clear();
        self
    }

    /// Outline the polygon through the pending vertices, then clear them.
    pub fn vert_stroke(&mut self, colour: &str) -> DrawSpaceResult<&mut Self> {
        check_colour(colour)?;
        {
            let mut ctx = PaintGuard::new(&mut self.ctx);
            ctx.set_stroke_style(colour)?;
            trace_polygon(&mut ctx, &self.vertices);
            ctx.stroke();
        }
        self.vertices.clear();
        Ok(self)
    }

    /// Fill the polygon through the pending vertices. The vertices are kept.
    pub fn vert_fill(&mut self, colour: &str) -> DrawSpaceResult<&mut Self> {
        check_colour(colour)?;
        {
            let mut ctx = PaintGuard::new(&mut self.ctx);
            ctx.set_fill_style(colour)?;
            trace_polygon(&mut ctx, &self.vertices);
            ctx.fill();
        }
        Ok(self)
    }

    /// Register a font file so text can refer to it by `name`.
    pub fn register_font(
        &mut self,
        name: &str,
        path: impl AsRef<Path>,
    ) -> DrawSpaceResult<&mut Self> {
        self.ctx
            .register_font(name, path)
            .map_err(|error| DrawSpaceError::FontRegistration {
                name: name.to_string(),
                error,
            })?;
        Ok(self)
    }

    /// Stroke width for later strokes.
    pub fn set_thickness(&mut self, width: f32) -> &mut Self {
        self.ctx.set_line_width(width);
        self
    }

    pub async fn to_buffer(&self, format: ExportFormat) -> DrawSpaceResult<Vec<u8>> {
        let bytes = match format {
            ExportFormat::Png => self.ctx.to_png(Some(self.config.ppi))?,
        };
        log::debug!("Encoded {} bytes of {}", bytes.len(), format);
        Ok(bytes)
    }

    /// Encode and write to `path`, replacing any existing file.
    pub async fn to_file(&self, format: ExportFormat, path: impl AsRef<Path>) -> DrawSpaceResult<()> {
        let path = path.as_ref();
        let bytes = self.to_buffer(format).await?;
        tokio::fs::write(path, bytes).await?;
        log::info!("Wrote {}", path.display());
        Ok(())
    }
}

fn check_colour(colour: &str) -> DrawSpaceResult<()> {
    if colour.starts_with('#') {
        Ok(())
    } else {
        Err(DrawSpaceError::InvalidColour(colour.to_string()))
    }
}

fn trace_polygon(ctx: &mut Canvas2dContext, vertices: &[(f32, f32)]) {
    ctx.begin_path();
    let mut points = vertices.iter();
    if let Some(&(x, y)) = points.next() {
        ctx.move_to(x, y);
        for &(x, y) in points {
            ctx.line_to(x, y);
        }
        ctx.close_path();
    }
}
