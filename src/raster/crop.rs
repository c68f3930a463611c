//! Cropping to visible content

use image::{imageops, RgbaImage};

/// Pixel rectangle with exclusive right/bottom edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl PixelRect {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Grow by `margin` on every side, clamped to a `width` x `height` image
    pub fn expand(&self, margin: u32, width: u32, height: u32) -> PixelRect {
        PixelRect {
            left: self.left.saturating_sub(margin),
            top: self.top.saturating_sub(margin),
            right: self.right.saturating_add(margin).min(width),
            bottom: self.bottom.saturating_add(margin).min(height),
        }
    }
}

/// Bounding box of all pixels with nonzero alpha
pub fn alpha_bounds(image: &RgbaImage) -> Option<PixelRect> {
    let mut bounds: Option<PixelRect> = None;

    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel[3] == 0 {
            continue;
        }
        bounds = Some(match bounds {
            None => PixelRect {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            },
            Some(b) => PixelRect {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x + 1),
                bottom: b.bottom.max(y + 1),
            },
        });
    }

    bounds
}

/// Crop to the visible content plus `margin`, clamped to the image
///
/// An image without visible pixels is returned unchanged.
pub fn crop_to_content(image: &RgbaImage, margin: u32) -> RgbaImage {
    let Some(bounds) = alpha_bounds(image) else {
        return image.clone();
    };
    let rect = bounds.expand(margin, image.width(), image.height());
    imageops::crop_imm(image, rect.left, rect.top, rect.width(), rect.height()).to_image()
}
