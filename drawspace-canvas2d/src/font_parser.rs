//! CSS font shorthand parsing.
//!
//! Accepts strings like "20px Arial", "bold 14px sans-serif" or
//! "italic 600 12pt 'Noto Sans', serif".

use crate::error::{Canvas2dError, Canvas2dResult};
use cosmic_text::{Style, Weight};

/// Parsed font specification from a CSS font string.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFont {
    /// Font style (normal, italic, oblique).
    pub style: Style,
    /// Font weight (100-900).
    pub weight: Weight,
    /// Font size in pixels.
    pub size_px: f32,
    /// Font families in order of preference.
    pub families: Vec<String>,
}

impl Default for ParsedFont {
    fn default() -> Self {
        Self {
            style: Style::Normal,
            weight: Weight::NORMAL,
            size_px: 10.0,
            families: vec!["sans-serif".to_string()],
        }
    }
}

/// Parse a CSS font string into components.
///
/// Format: `[style] [weight] size[unit] family[, family]*`. The size must be
/// a positive number; `px` is assumed when no unit is given.
pub fn parse_font(font_str: &str) -> Canvas2dResult<ParsedFont> {
    let mut result = ParsedFont::default();
    let mut remaining = font_str.trim();
    if remaining.is_empty() {
        return Err(Canvas2dError::FontParseError("empty font string".to_string()));
    }

    // Style and weight keywords may appear in any order before the size
    while let Some((word, rest)) = next_word(remaining) {
        match word {
            "normal" => {}
            "italic" => result.style = Style::Italic,
            "oblique" => result.style = Style::Oblique,
            "bold" => result.weight = Weight::BOLD,
            "bolder" => result.weight = Weight::EXTRA_BOLD,
            "lighter" => result.weight = Weight::LIGHT,
            w => match w.parse::<u16>() {
                Ok(n) if (100..=900).contains(&n) && n % 100 == 0 => result.weight = Weight(n),
                _ => break,
            },
        }
        remaining = rest;
    }

    let (size, rest) = parse_font_size(remaining)?;
    result.size_px = size;

    let families = parse_font_families(rest);
    if !families.is_empty() {
        result.families = families;
    }
    Ok(result)
}

fn next_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    Some((&s[..end], &s[end..]))
}

fn parse_font_size(s: &str) -> Canvas2dResult<(f32, &str)> {
    let s = s.trim_start();
    let num_end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit() && *c != '.' && *c != '-')
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    if num_end == 0 {
        return Err(Canvas2dError::FontParseError(format!(
            "Expected font size, got: {}",
            s
        )));
    }

    let size: f32 = s[..num_end].parse().map_err(|_| {
        Canvas2dError::FontParseError(format!("Invalid font size number: {}", &s[..num_end]))
    })?;

    let rest = &s[num_end..];
    let (multiplier, unit_len) = if rest.starts_with("px") {
        (1.0, 2)
    } else if rest.starts_with("pt") {
        (4.0 / 3.0, 2)
    } else {
        (1.0, 0)
    };

    let size = size * multiplier;
    // cosmic-text cannot lay out a zero line height
    if !size.is_finite() || size <= 0.0 {
        return Err(Canvas2dError::FontParseError(format!(
            "Font size must be positive, got: {}",
            size
        )));
    }

    Ok((size, &rest[unit_len..]))
}

fn parse_font_families(s: &str) -> Vec<String> {
    s.split(',')
        .map(|family| {
            family
                .trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .to_string()
        })
        .filter(|family| !family.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_font() {
        let font = parse_font("12px Arial").unwrap();
        assert_eq!(font.size_px, 12.0);
        assert_eq!(font.families, vec!["Arial"]);
        assert_eq!(font.weight, Weight::NORMAL);
        assert_eq!(font.style, Style::Normal);
    }

    #[test]
    fn test_family_with_spaces() {
        let font = parse_font("20px Noto Sans").unwrap();
        assert_eq!(font.families, vec!["Noto Sans"]);
    }

    #[test]
    fn test_style_and_weight() {
        let font = parse_font("italic bold 16pt 'Times New Roman', serif").unwrap();
        assert!((font.size_px - 16.0 * 4.0 / 3.0).abs() < 0.01);
        assert_eq!(font.style, Style::Italic);
        assert_eq!(font.weight, Weight::BOLD);
        assert_eq!(font.families, vec!["Times New Roman", "serif"]);
    }

    #[test]
    fn test_numeric_weight() {
        let font = parse_font("600 12px Helvetica").unwrap();
        assert_eq!(font.weight, Weight(600));
    }

    #[test]
    fn test_fractional_size_without_family() {
        let font = parse_font("19.5px").unwrap();
        assert_eq!(font.size_px, 19.5);
        assert_eq!(font.families, vec!["sans-serif"]);
    }

    #[test]
    fn test_rejects_non_positive_size() {
        assert!(matches!(
            parse_font("0px Arial"),
            Err(Canvas2dError::FontParseError(_))
        ));
        assert!(matches!(
            parse_font("-3px Arial"),
            Err(Canvas2dError::FontParseError(_))
        ));
    }

    #[test]
    fn test_rejects_missing_size() {
        assert!(parse_font("Arial").is_err());
        assert!(parse_font("").is_err());
    }
}
