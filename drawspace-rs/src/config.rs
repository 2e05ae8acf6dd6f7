use drawspace_canvas2d::FontConfig;

/// Options for a [`DrawSpace`](crate::DrawSpace).
#[derive(Debug, Clone)]
pub struct DrawSpaceConfig {
    /// Fonts available to text drawing.
    pub font_config: FontConfig,
    /// Starting font size in pixels when fitting text.
    pub default_text_size: f32,
    /// Smallest font size text may shrink to before it is rejected.
    pub min_text_size: f32,
    /// Pixel density written into exported PNG files.
    pub ppi: f32,
}

impl Default for DrawSpaceConfig {
    fn default() -> Self {
        Self {
            font_config: FontConfig::default(),
            default_text_size: 20.0,
            min_text_size: 1.0,
            ppi: 72.0,
        }
    }
}
