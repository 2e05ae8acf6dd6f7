//! Text layout enums for canvas text operations.

/// Horizontal text alignment relative to the x coordinate passed to `fill_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Align to the start edge (left for LTR text).
    #[default]
    Start,
    /// Align to the end edge (right for LTR text).
    End,
    Left,
    Right,
    Center,
}

/// Vertical anchor of the y coordinate passed to `fill_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    Middle,
    /// The y coordinate is the alphabetic baseline.
    #[default]
    Alphabetic,
    Bottom,
}
