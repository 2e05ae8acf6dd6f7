//! Fill and stroke operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::geometry::RectParams;
use tiny_skia::Transform;

impl Canvas2dContext {
    /// Fill the current path using the non-zero winding rule.
    pub fn fill(&mut self) {
        log::debug!(target: "canvas", "fill");
        // Clone the builder so the same path can still be stroked
        let Some(path) = self.path_builder.clone().finish() else {
            return;
        };
        let paint = solid_paint(self.state.fill_color);
        self.pixmap.fill_path(
            &path,
            &paint,
            tiny_skia::FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Stroke the current path with the current line width.
    pub fn stroke(&mut self) {
        log::debug!(target: "canvas", "stroke");
        let Some(path) = self.path_builder.clone().finish() else {
            return;
        };
        let paint = solid_paint(self.state.stroke_color);
        let stroke = tiny_skia::Stroke {
            width: self.state.line_width,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Fill a rectangle.
    pub fn fill_rect(&mut self, params: &RectParams) {
        log::debug!(target: "canvas", "fillRect {} {} {} {}", params.x, params.y, params.width, params.height);
        self.begin_path();
        self.rect(params);
        self.fill();
    }
}

pub(crate) fn solid_paint<'a>(color: tiny_skia::Color) -> tiny_skia::Paint<'a> {
    let mut paint = tiny_skia::Paint {
        anti_alias: true,
        ..Default::default()
    };
    paint.set_color(color);
    paint
}
