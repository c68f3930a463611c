//! Rasterization of paths onto an RGBA canvas
//!
//! [`Canvas`] wraps a transparent `tiny_skia::Pixmap`. Filled paths are
//! anti-aliased and composited source-over; [`Canvas::into_image`] hands the
//! straight-alpha result over to `image` for cropping and encoding.

mod crop;

pub use crop::{alpha_bounds, crop_to_content, PixelRect};
pub use tiny_skia::FillRule;

use image::{Rgba, RgbaImage};
use kurbo::{Affine, BezPath, PathEl};
use tiny_skia::{Paint, PathBuilder, Pixmap, Transform};

use crate::color::Color;
use crate::path::Path;

/// A transparent RGBA drawing surface
#[derive(Debug, Clone)]
pub struct Canvas {
    pixmap: Pixmap,
}

/// Rebuild a kurbo path for tiny-skia; `None` when nothing fillable remains
fn skia_path(bez: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in bez.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => pb.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c1, c2, p) => pb.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

impl Canvas {
    /// `None` when either dimension is zero
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill `path` after mapping it into pixel space with `transform`
    pub fn fill_path(&mut self, path: &Path, transform: Affine, color: Color, rule: FillRule) {
        if color.is_transparent() {
            return;
        }
        let Some(shape) = skia_path(&path.transform(transform).to_bez_path()) else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = true;

        self.pixmap
            .fill_path(&shape, &paint, rule, Transform::identity(), None);
    }

    /// Straight-alpha copy of the pixels
    pub fn to_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.width(), self.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        image
    }

    pub fn into_image(self) -> RgbaImage {
        self.to_image()
    }
}
