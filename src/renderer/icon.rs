//! Logo drawing and the square icon

use image::RgbaImage;
use kurbo::Affine;

use super::shapes::rounded_rect;
use crate::markup::Logo;
use crate::path::Path;
use crate::raster::{Canvas, FillRule};
use crate::RenderError;

/// Draw the logo with its top-left corner at (x, y), `size` pixels wide
///
/// `outline` is the parsed path of `logo`, in markup coordinates.
pub fn draw_logo(canvas: &mut Canvas, logo: &Logo, outline: &Path, x: f64, y: f64, size: f64) {
    let scale = size / logo.rect.width;

    let background = rounded_rect(x, y, size, size, logo.rect.rx * scale);
    canvas.fill_path(&background, Affine::IDENTITY, logo.rect.fill, FillRule::Winding);

    let transform = Affine::translate((x, y))
        * Affine::scale(scale)
        * Affine::translate((-logo.rect.x, -logo.rect.y));
    canvas.fill_path(outline, transform, logo.path_fill, FillRule::Winding);
}

/// Render the logo filling a `size` x `size` transparent image
pub fn render_icon(logo: &Logo, outline: &Path, size: u32) -> Result<RgbaImage, RenderError> {
    let mut canvas = Canvas::new(size, size).ok_or(RenderError::InvalidSize {
        what: "icon",
        width: size,
        height: size,
    })?;
    draw_logo(&mut canvas, logo, outline, 0.0, 0.0, size as f64);
    Ok(canvas.into_image())
}
