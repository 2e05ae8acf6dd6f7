//! Parameter structs for canvas drawing operations.
//!
//! These group related values so the drawing methods do not take long
//! positional argument lists.

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectParams {
    /// X coordinate of the top-left corner.
    pub x: f32,
    /// Y coordinate of the top-left corner.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Parameters for a circular arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    /// X coordinate of the arc center.
    pub x: f32,
    /// Y coordinate of the arc center.
    pub y: f32,
    /// Radius of the arc.
    pub radius: f32,
    /// Starting angle in radians.
    pub start_angle: f32,
    /// Ending angle in radians.
    pub end_angle: f32,
    /// If true, draw arc counterclockwise.
    pub anticlockwise: bool,
}

/// Destination rectangle for a scaled image draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDrawParams {
    pub dx: f32,
    pub dy: f32,
    pub dw: f32,
    pub dh: f32,
}

/// Borrowed non-premultiplied RGBA8 pixel data.
#[derive(Debug, Clone, Copy)]
pub struct CanvasImageRef<'a> {
    /// Pixel bytes, 4 per pixel, row-major.
    pub data: &'a [u8],
    pub width: u32,
    pub height: u32,
}
