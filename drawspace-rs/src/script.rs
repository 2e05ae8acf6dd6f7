//! JSON drawing scripts.
//!
//! A script names the canvas size, fonts to register and a list of drawing
//! operations that are replayed in order:
//!
//! ```json
//! {
//!   "width": 720,
//!   "height": 720,
//!   "fonts": [{"name": "Title", "path": "fonts/Title.ttf"}],
//!   "ops": [
//!     {"op": "rect", "x": 0, "y": 0, "width": 720, "height": 720, "colour": "#252525"},
//!     {"op": "text", "text": "Hi %#ff0000%there", "font": "Title", "x": 360, "y": 360}
//!   ]
//! }
//! ```

use crate::config::DrawSpaceConfig;
use crate::draw_space::DrawSpace;
use crate::error::DrawSpaceResult;
use crate::text::{TextAlign, TextOptions};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawScript {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub fonts: Vec<FontEntry>,
    #[serde(default)]
    pub ops: Vec<DrawOp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontEntry {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        #[serde(alias = "color")]
        colour: String,
    },
    Arc {
        x: f32,
        y: f32,
        radius: f32,
        start: f32,
        end: f32,
        #[serde(alias = "color")]
        colour: String,
        #[serde(default = "default_fill")]
        fill: bool,
    },
    Line {
        x: f32,
        y: f32,
        x1: f32,
        y1: f32,
        #[serde(alias = "color")]
        colour: String,
    },
    Text {
        text: String,
        font: String,
        x: f32,
        y: f32,
        #[serde(default)]
        align: TextAlign,
        max_width: Option<f32>,
        size: Option<f32>,
    },
    Image {
        source: String,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Vert {
        x: f32,
        y: f32,
    },
    VertClear,
    VertStroke {
        #[serde(alias = "color")]
        colour: String,
    },
    VertFill {
        #[serde(alias = "color")]
        colour: String,
    },
    Thickness {
        width: f32,
    },
}

fn default_fill() -> bool {
    true
}

impl DrawScript {
    pub fn from_json(json: &str) -> DrawSpaceResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create a draw space and replay every operation on it.
    ///
    /// Stops at the first failing operation.
    pub async fn render(&self, config: DrawSpaceConfig) -> DrawSpaceResult<DrawSpace> {
        let mut space = DrawSpace::with_config(self.width, self.height, config)?;
        for font in &self.fonts {
            space.register_font(&font.name, &font.path)?;
        }
        for op in &self.ops {
            log::debug!("{:?}", op);
            op.apply(&mut space).await?;
        }
        Ok(space)
    }
}

impl DrawOp {
    pub async fn apply(&self, space: &mut DrawSpace) -> DrawSpaceResult<()> {
        match self {
            DrawOp::Rect {
                x,
                y,
                width,
                height,
                colour,
            } => {
                space.draw_rect(*x, *y, *width, *height, colour)?;
            }
            DrawOp::Arc {
                x,
                y,
                radius,
                start,
                end,
                colour,
                fill,
            } => {
                space.draw_arc(*x, *y, *radius, *start, *end, colour, *fill)?;
            }
            DrawOp::Line {
                x,
                y,
                x1,
                y1,
                colour,
            } => {
                space.draw_line(*x, *y, *x1, *y1, colour)?;
            }
            DrawOp::Text {
                text,
                font,
                x,
                y,
                align,
                max_width,
                size,
            } => {
                let options = TextOptions {
                    align: *align,
                    max_width: *max_width,
                    size: *size,
                };
                space.draw_text(text, font, *x, *y, &options)?;
            }
            DrawOp::Image {
                source,
                x,
                y,
                width,
                height,
            } => {
                space.draw_image(source, *x, *y, *width, *height).await?;
            }
            DrawOp::Vert { x, y } => {
                space.vert(*x, *y);
            }
            DrawOp::VertClear => {
                space.vert_clear();
            }
            DrawOp::VertStroke { colour } => {
                space.vert_stroke(colour)?;
            }
            DrawOp::VertFill { colour } => {
                space.vert_fill(colour)?;
            }
            DrawOp::Thickness { width } => {
                space.set_thickness(*width);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DrawSpaceError;

    #[test]
    fn test_parse_script() {
        let script = DrawScript::from_json(
            r##"{
                "width": 40,
                "height": 30,
                "ops": [
                    {"op": "rect", "x": 0, "y": 0, "width": 40, "height": 30, "color": "#252525"},
                    {"op": "text", "text": "hi", "font": "serif", "x": 20, "y": 20, "align": "left"},
                    {"op": "vert_clear"},
                    {"op": "thickness", "width": 3}
                ]
            }"##,
        )
        .unwrap();

        assert!(script.fonts.is_empty());
        assert_eq!(script.ops.len(), 4);
        assert_eq!(
            script.ops[0],
            DrawOp::Rect {
                x: 0.0,
                y: 0.0,
                width: 40.0,
                height: 30.0,
                colour: "#252525".to_string()
            }
        );
        assert!(matches!(
            script.ops[1],
            DrawOp::Text {
                align: TextAlign::Left,
                max_width: None,
                ..
            }
        ));
        assert_eq!(script.ops[2], DrawOp::VertClear);
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let err = DrawScript::from_json(r#"{"width": 1, "height": 1, "ops": [{"op": "blur"}]}"#)
            .unwrap_err();
        assert!(matches!(err, DrawSpaceError::Script(_)));
    }

    #[test]
    fn test_arc_fills_unless_told_otherwise() {
        let op: DrawOp = serde_json::from_str(
            r##"{"op": "arc", "x": 1, "y": 2, "radius": 3, "start": 0, "end": 1, "colour": "#fff"}"##,
        )
        .unwrap();
        assert!(matches!(op, DrawOp::Arc { fill: true, .. }));

        let op: DrawOp = serde_json::from_str(
            r##"{"op": "arc", "x": 1, "y": 2, "radius": 3, "start": 0, "end": 1, "colour": "#fff", "fill": false}"##,
        )
        .unwrap();
        assert!(matches!(op, DrawOp::Arc { fill: false, .. }));
    }
}
