//! Canvas 2D drawing surface for drawspace.
//!
//! A small subset of the Canvas 2D API implemented on top of:
//! - `tiny-skia` for rasterization
//! - `cosmic-text` for text shaping, measurement and glyph outlines
//! - `fontdb` for the font database and font file registration
//!
//! # Example
//!
//! ```rust,ignore
//! use drawspace_canvas2d::{Canvas2dContext, RectParams};
//!
//! let mut ctx = Canvas2dContext::new(400, 300)?;
//! ctx.set_fill_style("#ff0000")?;
//! ctx.fill_rect(&RectParams { x: 10.0, y: 10.0, width: 100.0, height: 50.0 });
//! let png_data = ctx.to_png(None)?;
//! ```

mod arc;
mod context;
mod drawing_state;
mod error;
mod font_config;
mod font_parser;
mod geometry;
mod style;
mod text;

pub use context::Canvas2dContext;
pub use drawing_state::DrawingState;
pub use error::{Canvas2dError, Canvas2dResult};
pub use font_config::{CustomFont, FontAliases, FontConfig, GenericFamilyMap};
pub use font_parser::{parse_font, ParsedFont};
pub use geometry::{ArcParams, CanvasImageRef, ImageDrawParams, RectParams};
pub use style::{TextAlign, TextBaseline};
pub use text::TextMetrics;
