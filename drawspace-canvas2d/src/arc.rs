//! Circular arcs approximated with cubic bezier segments.
//!
//! tiny-skia has no arc primitive, so each arc is split into segments of at
//! most a quarter turn.

use crate::geometry::ArcParams;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Signed sweep of an arc following Canvas 2D angle normalization.
///
/// Clockwise arcs sweep in `[0, TAU]`, anticlockwise arcs in `[-TAU, 0]`.
pub(crate) fn sweep_angle(start: f32, end: f32, anticlockwise: bool) -> f32 {
    let delta = end - start;
    if !anticlockwise {
        if delta >= TAU {
            TAU
        } else {
            delta.rem_euclid(TAU)
        }
    } else if -delta >= TAU {
        -TAU
    } else {
        -(-delta).rem_euclid(TAU)
    }
}

/// Point on the arc circle at `angle`.
pub(crate) fn point_at(params: &ArcParams, angle: f32) -> (f32, f32) {
    (
        params.x + params.radius * angle.cos(),
        params.y + params.radius * angle.sin(),
    )
}

/// Cubic segments `(ctrl1, ctrl2, end)` covering the arc after its start point.
pub(crate) fn arc_segments(params: &ArcParams) -> Vec<[(f32, f32); 3]> {
    let sweep = sweep_angle(params.start_angle, params.end_angle, params.anticlockwise);
    if sweep == 0.0 || params.radius <= 0.0 {
        return Vec::new();
    }

    let count = ((sweep.abs() / FRAC_PI_2).ceil() as usize).max(1);
    let step = sweep / count as f32;
    let k = 4.0 / 3.0 * (step / 4.0).tan();
    let r = params.radius;

    (0..count)
        .map(|i| {
            let a1 = params.start_angle + i as f32 * step;
            let a2 = a1 + step;
            let (c1, s1) = (a1.cos(), a1.sin());
            let (c2, s2) = (a2.cos(), a2.sin());
            [
                (params.x + r * (c1 - k * s1), params.y + r * (s1 + k * c1)),
                (params.x + r * (c2 + k * s2), params.y + r * (s2 - k * c2)),
                (params.x + r * c2, params.y + r * s2),
            ]
        })
        .collect()
}
