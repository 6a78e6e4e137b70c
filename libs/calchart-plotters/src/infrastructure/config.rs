//! Figure configuration

/// Figure geometry, encoding quality and labels
///
/// Sizes are expressed the way print figures are: inches times dots per inch.
/// The default 10x6 inch figure at 100 DPI gives a 1000x600 pixel image.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Figure width in inches (default: 10)
    pub width_in: f64,
    /// Figure height in inches (default: 6)
    pub height_in: f64,
    /// Dots per inch (default: 100)
    pub dpi: u32,
    /// JPEG quality, 1-100 (default: 90)
    pub jpeg_quality: u8,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width_in: 10.0,
            height_in: 6.0,
            dpi: 100,
            jpeg_quality: 90,
            title: "Calorie Burn Tracking".to_string(),
            x_label: "DATE RANGE".to_string(),
            y_label: "CALORIES BURNED".to_string(),
        }
    }
}

impl RenderConfig {
    /// Output size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.width_in * dpi).round() as u32,
            (self.height_in * dpi).round() as u32,
        )
    }
}
