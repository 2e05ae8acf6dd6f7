//! Text shaping and measurement using cosmic-text.

use crate::font_config::FontAliases;
use crate::font_parser::ParsedFont;
use crate::style::{TextAlign, TextBaseline};
use cosmic_text::{Attrs, Buffer, CacheKeyFlags, Family, FontSystem, Metrics, Shaping};

/// Text metrics returned by `measure_text`.
#[derive(Debug, Clone, Default)]
pub struct TextMetrics {
    /// Advance width of the text in pixels.
    pub width: f32,
    /// Distance from the baseline to the top of the line box.
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the line box.
    pub descent: f32,
}

/// Map a family name onto cosmic-text's generic families where it names one.
fn family_for(name: &str) -> Family<'_> {
    match name {
        "sans-serif" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        other => Family::Name(other),
    }
}

/// Shape `text` as a single unwrapped line.
pub(crate) fn shape_text(
    font_system: &mut FontSystem,
    text: &str,
    font: &ParsedFont,
    aliases: &FontAliases,
) -> Buffer {
    let metrics = Metrics::new(font.size_px, font.size_px * 1.2);
    let mut buffer = Buffer::new(font_system, metrics);

    let family = font
        .families
        .first()
        .map(|f| family_for(aliases.resolve(f)))
        .unwrap_or(Family::SansSerif);

    // Hinting off so measured advances match the rendered outlines
    let attrs = Attrs::new()
        .family(family)
        .weight(font.weight)
        .style(font.style)
        .cache_key_flags(CacheKeyFlags::DISABLE_HINTING);

    buffer.set_text(font_system, text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);
    buffer
}

/// Collect width, ascent and descent from a shaped buffer.
pub(crate) fn buffer_metrics(buffer: &Buffer, font: &ParsedFont) -> TextMetrics {
    let mut metrics = TextMetrics::default();
    for run in buffer.layout_runs() {
        metrics.width = metrics.width.max(run.line_w);
        metrics.ascent = metrics.ascent.max(run.line_y - run.line_top);
        metrics.descent = metrics
            .descent
            .max((run.line_top + run.line_height) - run.line_y);
    }
    if metrics.ascent == 0.0 && metrics.descent == 0.0 {
        metrics.ascent = font.size_px * 0.8;
        metrics.descent = font.size_px * 0.2;
    }
    metrics
}

/// Measure text using cosmic-text.
pub fn measure_text(
    font_system: &mut FontSystem,
    text: &str,
    font: &ParsedFont,
    aliases: &FontAliases,
) -> TextMetrics {
    let buffer = shape_text(font_system, text, font, aliases);
    buffer_metrics(&buffer, font)
}

/// Calculate X offset for text alignment.
pub fn calculate_text_x_offset(width: f32, align: TextAlign) -> f32 {
    match align {
        TextAlign::Left | TextAlign::Start => 0.0,
        TextAlign::Right | TextAlign::End => -width,
        TextAlign::Center => -width / 2.0,
    }
}

/// Calculate Y offset for the text baseline.
pub fn calculate_text_y_offset(ascent: f32, descent: f32, baseline: TextBaseline) -> f32 {
    match baseline {
        TextBaseline::Top => ascent,
        TextBaseline::Middle => (ascent - descent) / 2.0,
        TextBaseline::Alphabetic => 0.0,
        TextBaseline::Bottom => -descent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_offset() {
        assert_eq!(calculate_text_x_offset(100.0, TextAlign::Start), 0.0);
        assert_eq!(calculate_text_x_offset(100.0, TextAlign::Left), 0.0);
        assert_eq!(calculate_text_x_offset(100.0, TextAlign::Center), -50.0);
        assert_eq!(calculate_text_x_offset(100.0, TextAlign::Right), -100.0);
        assert_eq!(calculate_text_x_offset(100.0, TextAlign::End), -100.0);
    }

    #[test]
    fn test_y_offset() {
        assert_eq!(calculate_text_y_offset(16.0, 4.0, TextBaseline::Alphabetic), 0.0);
        assert_eq!(calculate_text_y_offset(16.0, 4.0, TextBaseline::Top), 16.0);
        assert_eq!(calculate_text_y_offset(16.0, 4.0, TextBaseline::Middle), 6.0);
        assert_eq!(calculate_text_y_offset(16.0, 4.0, TextBaseline::Bottom), -4.0);
    }

    #[test]
    fn test_family_for_generic_names() {
        assert_eq!(family_for("sans-serif"), Family::SansSerif);
        assert_eq!(family_for("monospace"), Family::Monospace);
        assert_eq!(family_for("Noto Sans"), Family::Name("Noto Sans"));
    }
}
