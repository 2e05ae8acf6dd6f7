//! Text operations for Canvas2dContext.

use super::drawing::solid_paint;
use super::Canvas2dContext;
use crate::error::Canvas2dResult;
use crate::font_parser::parse_font;
use crate::style::{TextAlign, TextBaseline};
use crate::text::{
    buffer_metrics, calculate_text_x_offset, calculate_text_y_offset, shape_text, TextMetrics,
};
use cosmic_text::Command;
use tiny_skia::Transform;

impl Canvas2dContext {
    /// Set the font from a CSS font string.
    pub fn set_font(&mut self, font: &str) -> Canvas2dResult<()> {
        self.state.font = parse_font(font)?;
        Ok(())
    }

    /// Set the text alignment.
    pub fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    /// Set the text baseline.
    pub fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
    }

    /// Measure text with the current font.
    pub fn measure_text(&mut self, text: &str) -> TextMetrics {
        crate::text::measure_text(
            &mut self.font_system,
            text,
            &self.state.font,
            &self.font_aliases,
        )
    }

    /// Fill text at the specified position with the current fill color.
    ///
    /// Glyphs are rendered as vector outlines.
    pub fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        log::debug!(target: "canvas", "fillText \"{}\" {} {}", text, x, y);
        let font = self.state.font.clone();
        let buffer = shape_text(&mut self.font_system, text, &font, &self.font_aliases);
        let metrics = buffer_metrics(&buffer, &font);

        let base_x = x + calculate_text_x_offset(metrics.width, self.state.text_align);
        let base_y = y + calculate_text_y_offset(
            metrics.ascent,
            metrics.descent,
            self.state.text_baseline,
        );
        let paint = solid_paint(self.state.fill_color);

        for run in buffer.layout_runs() {
            for glyph in run.glyphs.iter() {
                let physical_glyph = glyph.physical((0.0, 0.0), 1.0);
                let glyph_x = base_x + glyph.x + glyph.font_size * glyph.x_offset;
                let glyph_y = base_y + glyph.y - glyph.font_size * glyph.y_offset;

                let Some(commands) = self
                    .swash_cache
                    .get_outline_commands(&mut self.font_system, physical_glyph.cache_key)
                else {
                    continue;
                };

                // Font outlines are y-up, the canvas is y-down
                let mut path_builder = tiny_skia::PathBuilder::new();
                for cmd in commands {
                    match cmd {
                        Command::MoveTo(p) => path_builder.move_to(p.x, -p.y),
                        Command::LineTo(p) => path_builder.line_to(p.x, -p.y),
                        Command::QuadTo(ctrl, end) => {
                            path_builder.quad_to(ctrl.x, -ctrl.y, end.x, -end.y)
                        }
                        Command::CurveTo(c1, c2, end) => {
                            path_builder.cubic_to(c1.x, -c1.y, c2.x, -c2.y, end.x, -end.y)
                        }
                        Command::Close => path_builder.close(),
                    }
                }

                if let Some(path) = path_builder.finish() {
                    self.pixmap.fill_path(
                        &path,
                        &paint,
                        tiny_skia::FillRule::Winding,
                        Transform::from_translate(glyph_x, glyph_y),
                        None,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::context::Canvas2dContext;
    use crate::font_config::FontConfig;

    fn blank() -> Canvas2dContext {
        let config = FontConfig {
            load_system_fonts: false,
            ..FontConfig::default()
        };
        Canvas2dContext::with_config(100, 40, &config).unwrap()
    }

    #[test]
    fn test_set_font_updates_state() {
        let mut ctx = blank();
        ctx.set_font("bold 24px Title").unwrap();
        assert_eq!(ctx.state().font.size_px, 24.0);
        assert_eq!(ctx.state().font.families, vec!["Title"]);
    }

    #[test]
    fn test_bad_font_keeps_previous() {
        let mut ctx = blank();
        ctx.set_font("18px serif").unwrap();
        assert!(ctx.set_font("0px serif").is_err());
        assert_eq!(ctx.state().font.size_px, 18.0);
    }
}
