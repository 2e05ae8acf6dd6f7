//! The drawing context: a pixmap plus the state used to paint into it.

mod drawing;
mod image_ops;
mod path_ops;
mod text_rendering;

use crate::drawing_state::DrawingState;
use crate::error::{Canvas2dError, Canvas2dResult};
use crate::font_config::{font_config_to_fontdb, load_font_file, FontAliases, FontConfig};
use cosmic_text::{FontSystem, SwashCache};
use std::path::Path;
use tiny_skia::Pixmap;

/// Largest width or height a canvas may have.
const MAX_DIMENSION: u32 = 32767;

/// A raster surface with Canvas 2D style paint state.
pub struct Canvas2dContext {
    pub(crate) width: u32,
    pub(crate) height: u32,
    /// Premultiplied RGBA pixels.
    pub(crate) pixmap: Pixmap,
    pub(crate) font_system: FontSystem,
    pub(crate) swash_cache: SwashCache,
    /// Logical font names registered on this context.
    pub(crate) font_aliases: FontAliases,
    pub(crate) state: DrawingState,
    state_stack: Vec<DrawingState>,
    pub(crate) path_builder: tiny_skia::PathBuilder,
    /// False until the current subpath has a point to continue from.
    pub(crate) has_current_point: bool,
}

impl Canvas2dContext {
    /// A transparent canvas using the system fonts.
    pub fn new(width: u32, height: u32) -> Canvas2dResult<Self> {
        Self::with_config(width, height, &FontConfig::default())
    }

    /// A transparent canvas with fonts taken from `config`.
    pub fn with_config(width: u32, height: u32, config: &FontConfig) -> Canvas2dResult<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(Canvas2dError::InvalidDimensions { width, height });
        }

        let pixmap =
            Pixmap::new(width, height).ok_or(Canvas2dError::InvalidDimensions { width, height })?;

        let (font_db, font_aliases) = font_config_to_fontdb(config);
        let font_system = FontSystem::new_with_locale_and_db("en".to_string(), font_db);

        log::debug!(target: "canvas", "new canvas {}x{}", width, height);
        Ok(Self {
            width,
            height,
            pixmap,
            font_system,
            swash_cache: SwashCache::new(),
            font_aliases,
            state: DrawingState::default(),
            state_stack: Vec::new(),
            path_builder: tiny_skia::PathBuilder::new(),
            has_current_point: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    /// Push a copy of the paint state.
    pub fn save(&mut self) {
        log::debug!(target: "canvas", "save");
        self.state_stack.push(self.state.clone());
    }

    /// Pop the last saved paint state. Does nothing if none is saved.
    pub fn restore(&mut self) {
        log::debug!(target: "canvas", "restore");
        if let Some(state) = self.state_stack.pop() {
            self.state = state;
        }
    }

    /// Number of saved states not yet restored.
    pub fn saved_state_depth(&self) -> usize {
        self.state_stack.len()
    }

    /// Set the fill colour from any CSS colour string.
    pub fn set_fill_style(&mut self, style: &str) -> Canvas2dResult<()> {
        self.state.fill_color = parse_color(style)?;
        Ok(())
    }

    pub fn set_stroke_style(&mut self, style: &str) -> Canvas2dResult<()> {
        self.state.stroke_color = parse_color(style)?;
        Ok(())
    }

    /// Fill colour as straight RGBA8.
    pub fn fill_color_rgba(&self) -> [u8; 4] {
        color_to_rgba(self.state.fill_color)
    }

    pub fn stroke_color_rgba(&self) -> [u8; 4] {
        color_to_rgba(self.state.stroke_color)
    }

    /// Non-finite and non-positive widths are ignored.
    pub fn set_line_width(&mut self, width: f32) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }

    /// Register a font file under a logical name.
    ///
    /// Returns the family name read from the font file. Later font strings may
    /// use either the logical name or the family name.
    pub fn register_font(&mut self, alias: &str, path: impl AsRef<Path>) -> Canvas2dResult<String> {
        let path = path.as_ref();
        let family = load_font_file(self.font_system.db_mut(), path)?;
        log::debug!(target: "canvas", "registered font {} ({}) from {}", alias, family, path.display());
        self.font_aliases.insert(alias, family.clone());
        Ok(family)
    }
}

pub(crate) fn parse_color(s: &str) -> Canvas2dResult<tiny_skia::Color> {
    let parsed = csscolorparser::parse(s)
        .map_err(|e| Canvas2dError::ColorParseError(format!("{}: {}", s, e)))?;

    let [r, g, b, a] = parsed.to_array();
    Ok(tiny_skia::Color::from_rgba(r, g, b, a).unwrap_or(tiny_skia::Color::BLACK))
}

fn color_to_rgba(color: tiny_skia::Color) -> [u8; 4] {
    let c = color.to_color_u8();
    [c.red(), c.green(), c.blue(), c.alpha()]
}
