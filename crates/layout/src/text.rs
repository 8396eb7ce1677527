/// Layout can depend on this without knowing about fonts or a paint backend.
pub trait TextMeasurer {
    /// Return the width of `text` in px.
    fn measure(&self, text: &str) -> f32;

    /// Return the line height in px.
    fn line_height(&self) -> f32;
}

/// Monospace metrics: every character advances by the same amount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvance {
    pub advance: f32,
    pub line_height: f32,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self {
            advance: 8.0,
            line_height: 16.0,
        }
    }
}

impl TextMeasurer for FixedAdvance {
    fn measure(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
