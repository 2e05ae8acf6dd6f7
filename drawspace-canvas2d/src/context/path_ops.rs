//! Path building operations for Canvas2dContext.

use super::Canvas2dContext;
use crate::arc::{arc_segments, point_at};
use crate::geometry::{ArcParams, RectParams};

impl Canvas2dContext {
    /// Begin a new path.
    pub fn begin_path(&mut self) {
        log::debug!(target: "canvas", "beginPath");
        self.path_builder = tiny_skia::PathBuilder::new();
        self.has_current_point = false;
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, x: f32, y: f32) {
        log::debug!(target: "canvas", "moveTo {} {}", x, y);
        self.path_builder.move_to(x, y);
        self.has_current_point = true;
    }

    /// Draw a line to a point.
    ///
    /// With no current point this behaves like `move_to`.
    pub fn line_to(&mut self, x: f32, y: f32) {
        log::debug!(target: "canvas", "lineTo {} {}", x, y);
        if self.has_current_point {
            self.path_builder.line_to(x, y);
        } else {
            self.move_to(x, y);
        }
    }

    /// Close the current subpath.
    pub fn close_path(&mut self) {
        log::debug!(target: "canvas", "closePath");
        self.path_builder.close();
    }

    /// Add a closed rectangle subpath.
    pub fn rect(&mut self, params: &RectParams) {
        log::debug!(target: "canvas", "rect {} {} {} {}", params.x, params.y, params.width, params.height);
        let (x0, y0) = (params.x, params.y);
        let (x1, y1) = (params.x + params.width, params.y + params.height);
        self.path_builder.move_to(x0, y0);
        self.path_builder.line_to(x1, y0);
        self.path_builder.line_to(x1, y1);
        self.path_builder.line_to(x0, y1);
        self.path_builder.close();
        self.has_current_point = true;
    }

    /// Add a circular arc.
    ///
    /// Connects to the arc start with a line when the path has a current point.
    pub fn arc(&mut self, params: &ArcParams) {
        log::debug!(
            target: "canvas",
            "arc {} {} r={} {}..{}",
            params.x, params.y, params.radius, params.start_angle, params.end_angle
        );
        if params.radius < 0.0 || !params.radius.is_finite() {
            return;
        }
        let (sx, sy) = point_at(params, params.start_angle);
        self.line_to(sx, sy);
        for [c1, c2, end] in arc_segments(params) {
            self.path_builder
                .cubic_to(c1.0, c1.1, c2.0, c2.1, end.0, end.1);
        }
    }
}
