//! Layout options for the wordmark

use crate::color::Color;

/// Placement of the icon and text on the wordmark canvas
#[derive(Debug, Clone, PartialEq)]
pub struct WordmarkLayout {
    /// Canvas width before cropping
    pub width: u32,

    /// Canvas height before cropping
    pub height: u32,

    /// Space left of the icon
    pub padding: f64,

    /// Edge length of the icon
    pub icon_size: f64,

    /// Space between icon and text
    pub gap: f64,

    /// Transparent border kept around the content when cropping
    pub margin: u32,

    pub text: String,

    pub text_color: Color,

    /// Font size in pixels
    pub font_size: f32,
}

impl Default for WordmarkLayout {
    fn default() -> Self {
        Self {
            width: 2000,
            height: 512,
            padding: 64.0,
            icon_size: 384.0,
            gap: 56.0,
            margin: 32,
            text: "SheetSage".to_string(),
            text_color: Color::rgb(0x1e, 0x29, 0x3b),
            // 220pt at 100 dpi
            font_size: 305.0,
        }
    }
}

impl WordmarkLayout {
    /// Create a new layout with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas width
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set the canvas height
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the crop margin
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Set the wordmark text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the text color
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the font size in pixels
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Position of the icon's top-left corner
    pub fn icon_origin(&self) -> (f64, f64) {
        (self.padding, (self.height as f64 - self.icon_size) / 2.0)
    }

    /// Pen x position where the text starts
    pub fn text_x(&self) -> f64 {
        self.padding + self.icon_size + self.gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = WordmarkLayout::default();
        assert_eq!((layout.width, layout.height), (2000, 512));
        assert_eq!(layout.margin, 32);
        assert_eq!(layout.icon_origin(), (64.0, 64.0));
        assert_eq!(layout.text_x(), 504.0);
    }

    #[test]
    fn test_builder_pattern() {
        let layout = WordmarkLayout::new()
            .with_width(3200)
            .with_height(600)
            .with_margin(8)
            .with_text("Acme")
            .with_text_color(Color::BLACK)
            .with_font_size(100.0);

        assert_eq!(layout.width, 3200);
        assert_eq!(layout.icon_origin(), (64.0, 108.0));
        assert_eq!(layout.margin, 8);
        assert_eq!(layout.text, "Acme");
        assert_eq!(layout.text_color, Color::BLACK);
        assert_eq!(layout.font_size, 100.0);
    }
}
