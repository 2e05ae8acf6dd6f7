//! Fitting and laying out colour-marked text.

use crate::error::{DrawSpaceError, DrawSpaceResult};
use crate::markup;
use drawspace_canvas2d::Canvas2dContext;
use serde::{Deserialize, Serialize};

/// Horizontal placement of text relative to its x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    /// Distance to shift the whole line left of its x coordinate.
    pub fn offset(self, total_width: f32) -> f32 {
        match self {
            TextAlign::Left => 0.0,
            TextAlign::Center => total_width / 2.0,
            TextAlign::Right => total_width,
        }
    }
}

/// Optional settings for [`DrawSpace::draw_text`](crate::DrawSpace::draw_text).
///
/// Unset limits fall back to the canvas width and the configured default
/// text size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextOptions {
    pub align: TextAlign,
    pub max_width: Option<f32>,
    pub size: Option<f32>,
}

impl TextOptions {
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }
}

/// Something that can report the rendered width of a string in a CSS font.
pub trait MeasureText {
    fn text_width(&mut self, font: &str, text: &str) -> DrawSpaceResult<f32>;
}

impl MeasureText for Canvas2dContext {
    fn text_width(&mut self, font: &str, text: &str) -> DrawSpaceResult<f32> {
        self.set_font(font)?;
        Ok(self.measure_text(text).width)
    }
}

/// Size limits for fitting a line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitBounds {
    pub max_width: f32,
    pub start_size: f32,
    pub min_size: f32,
}

/// One coloured run placed on the line.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSegment {
    pub text: String,
    pub colour: String,
    /// Left edge of the run.
    pub x: f32,
    pub width: f32,
}

/// A fitted, aligned line of text ready to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    /// Font size in pixels the line was fitted to.
    pub size: f32,
    /// CSS font string to paint with.
    pub font: String,
    pub total_width: f32,
    pub segments: Vec<PlacedSegment>,
}

pub fn font_string(size: f32, font: &str) -> String {
    format!("{size}px {font}")
}

/// Largest font size text may start fitting from.
pub const MAX_TEXT_SIZE: f32 = 4096.0;

impl FitBounds {
    /// Both sizes must be finite, positive and no larger than [`MAX_TEXT_SIZE`].
    pub fn validate(&self) -> DrawSpaceResult<()> {
        validate_text_size(self.start_size)?;
        validate_text_size(self.min_size)
    }
}

pub fn validate_text_size(size: f32) -> DrawSpaceResult<()> {
    if size.is_finite() && size > 0.0 && size <= MAX_TEXT_SIZE {
        Ok(())
    } else {
        Err(DrawSpaceError::InvalidTextSize(size))
    }
}

/// Shrink from `start_size` one pixel at a time until `text` fits.
///
/// Returns the size and the width measured at that size.
pub fn fit_font_size<M: MeasureText + ?Sized>(
    measurer: &mut M,
    text: &str,
    font: &str,
    bounds: &FitBounds,
) -> DrawSpaceResult<(f32, f32)> {
    bounds.validate()?;
    let steps = (bounds.start_size - bounds.min_size).max(0.0).floor() as u32;
    for step in 0..=steps {
        let size = bounds.start_size - step as f32;
        let width = measurer.text_width(&font_string(size, font), text)?;
        if width <= bounds.max_width {
            return Ok((size, width));
        }
    }
    Err(DrawSpaceError::TextCannotFit {
        text: text.to_string(),
        max_width: bounds.max_width,
        min_size: bounds.min_size,
    })
}

/// Fit marked-up `text` and place each coloured run along the line at `x`.
///
/// Alignment is computed once against the whole visible line, then runs are
/// placed left to right, each advancing by its own measured width.
pub fn layout_text<M: MeasureText + ?Sized>(
    measurer: &mut M,
    text: &str,
    font: &str,
    x: f32,
    align: TextAlign,
    bounds: &FitBounds,
) -> DrawSpaceResult<TextLayout> {
    bounds.validate()?;
    let instructions = markup::parse(text);
    let visible: String = instructions.iter().map(|i| i.text.as_str()).collect();
    if visible.is_empty() {
        return Ok(TextLayout {
            size: bounds.start_size,
            font: font_string(bounds.start_size, font),
            total_width: 0.0,
            segments: Vec::new(),
        });
    }

    let (size, total_width) = fit_font_size(measurer, &visible, font, bounds)?;
    let font = font_string(size, font);
    let offset = align.offset(total_width);

    let mut cursor = x;
    let mut segments = Vec::with_capacity(instructions.len());
    for instruction in instructions {
        if instruction.text.is_empty() {
            continue;
        }
        let width = measurer.text_width(&font, &instruction.text)?;
        segments.push(PlacedSegment {
            text: instruction.text,
            colour: instruction.colour,
            x: cursor - offset,
            width,
        });
        cursor += width;
    }

    log::debug!("laid out {:?} at {}px across {}px", visible, size, total_width);
    Ok(TextLayout {
        size,
        font,
        total_width,
        segments,
    })
}
