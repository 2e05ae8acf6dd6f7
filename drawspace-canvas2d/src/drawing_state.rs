//! Paint state captured by `save` and brought back by `restore`.

use crate::font_parser::ParsedFont;
use crate::style::{TextAlign, TextBaseline};

#[derive(Debug, Clone)]
pub struct DrawingState {
    pub fill_color: tiny_skia::Color,
    pub stroke_color: tiny_skia::Color,
    /// Stroke width in pixels.
    pub line_width: f32,
    pub font: ParsedFont,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
}

impl Default for DrawingState {
    fn default() -> Self {
        Self {
            fill_color: tiny_skia::Color::BLACK,
            stroke_color: tiny_skia::Color::BLACK,
            line_width: 1.0,
            font: ParsedFont::default(),
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
        }
    }
}
