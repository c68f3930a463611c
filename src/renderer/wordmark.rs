//! Wordmark: the logo followed by text, cropped to its content

use image::RgbaImage;
use kurbo::{Affine, Shape};
use log::{debug, warn};
use rusttype::Font;

use super::config::WordmarkLayout;
use super::icon::draw_logo;
use super::text::text_outline;
use crate::markup::Logo;
use crate::path::Path;
use crate::raster::{crop_to_content, Canvas, FillRule};
use crate::RenderError;

/// Render the wordmark canvas without cropping
///
/// Text is vertically centered on its ink bounds. Without a font the text is
/// left out; [`crate::render`] always passes one, falling back to the bundled
/// font.
pub fn draw_wordmark(
    logo: &Logo,
    outline: &Path,
    layout: &WordmarkLayout,
    font: Option<&Font<'_>>,
) -> Result<Canvas, RenderError> {
    let mut canvas =
        Canvas::new(layout.width, layout.height).ok_or(RenderError::InvalidSize {
            what: "wordmark",
            width: layout.width,
            height: layout.height,
        })?;
    let (icon_x, icon_y) = layout.icon_origin();
    draw_logo(&mut canvas, logo, outline, icon_x, icon_y, layout.icon_size);

    match font {
        Some(font) if !layout.text.is_empty() => {
            let text = text_outline(font, &layout.text, layout.font_size);
            if text.is_empty() {
                warn!("font has no outlines for wordmark text {:?}", layout.text);
                return Ok(canvas);
            }
            let ink = text.to_bez_path().bounding_box();
            let dy = layout.height as f64 / 2.0 - ink.center().y;
            debug!(
                "wordmark text {:?} in {}: {:.1}x{:.1} px at x={:.1}",
                layout.text,
                layout.text_color,
                ink.width(),
                ink.height(),
                layout.text_x()
            );
            canvas.fill_path(
                &text,
                Affine::translate((layout.text_x(), dy)),
                layout.text_color,
                FillRule::Winding,
            );
        }
        Some(_) => {}
        None if layout.text.is_empty() => {}
        None => warn!(
            "no font given, wordmark text {:?} left out",
            layout.text
        ),
    }

    Ok(canvas)
}

/// Render the wordmark and crop it to its visible content plus the margin
pub fn render_wordmark(
    logo: &Logo,
    outline: &Path,
    layout: &WordmarkLayout,
    font: Option<&Font<'_>>,
) -> Result<RgbaImage, RenderError> {
    let canvas = draw_wordmark(logo, outline, layout, font)?;
    let cropped = crop_to_content(&canvas.to_image(), layout.margin);
    debug!(
        "wordmark cropped from {}x{} to {}x{}",
        canvas.width(),
        canvas.height(),
        cropped.width(),
        cropped.height()
    );
    Ok(cropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::markup::LogoRect;
    use crate::path::parse_path;
    use crate::raster::alpha_bounds;
    use crate::renderer::text::bundled_font;
    use image::imageops;

    fn logo() -> Logo {
        Logo {
            rect: LogoRect {
                x: 0.0,
                y: 0.0,
                width: 100.0,
                height: 100.0,
                rx: 20.0,
                fill: Color::BLACK,
            },
            path_data: "M10 10 L90 10 L90 90 Z".to_string(),
            path_fill: Color::WHITE,
        }
    }

    #[test]
    fn test_icon_only_wordmark_is_cropped_around_icon() {
        let logo = logo();
        let outline = logo.parse_path().unwrap();
        let layout = WordmarkLayout::default();

        let image = render_wordmark(&logo, &outline, &layout, None).unwrap();
        // icon spans 64..448 both ways; margin 32 reaches the canvas edge at the top
        assert_eq!(image.dimensions(), (384 + 64, 384 + 64));
        assert_eq!(image.get_pixel(0, 0)[3], 0);
        assert_eq!(image.get_pixel(224, 224)[3], 255);
    }

    #[test]
    fn test_uncropped_canvas_keeps_layout_size() {
        let logo = logo();
        let outline = parse_path("M0 0 Z").unwrap();
        let layout = WordmarkLayout::default().with_width(1000).with_height(400);
        let canvas = draw_wordmark(&logo, &outline, &layout, None).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (1000, 400));
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let logo = logo();
        let outline = parse_path("M0 0 Z").unwrap();
        let layout = WordmarkLayout::default().with_height(0);
        assert!(matches!(
            render_wordmark(&logo, &outline, &layout, None),
            Err(RenderError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_text_is_centered_right_of_icon() {
        let logo = logo();
        let outline = logo.parse_path().unwrap();
        let font = bundled_font().unwrap();
        let layout = WordmarkLayout::default().with_width(3200);

        let image = draw_wordmark(&logo, &outline, &layout, Some(&font))
            .unwrap()
            .into_image();
        let text_x = layout.text_x() as u32;

        // nothing between the icon's right edge (x = 448) and the pen start
        let gap = imageops::crop_imm(&image, 450, 0, text_x - 450, 512).to_image();
        assert_eq!(alpha_bounds(&gap), None);

        let text = imageops::crop_imm(&image, text_x, 0, 3200 - text_x, 512).to_image();
        let ink = alpha_bounds(&text).expect("text should be drawn");
        let center = (ink.top + ink.bottom) as f64 / 2.0;
        assert!((center - 256.0).abs() <= 1.5, "ink centered at {}", center);
        assert!(ink.height() > 150, "ink height {}", ink.height());
        assert!(ink.right < 3200 - text_x, "text clipped at the canvas edge");
    }

    #[test]
    fn test_wordmark_with_text_is_wider_than_tall() {
        let logo = logo();
        let outline = logo.parse_path().unwrap();
        let font = bundled_font().unwrap();
        let layout = WordmarkLayout::default().with_width(3200);

        let image = render_wordmark(&logo, &outline, &layout, Some(&font)).unwrap();
        assert_eq!(image.height(), 448);
        assert!(image.width() > 2 * image.height(), "width {}", image.width());
    }

    #[test]
    fn test_empty_text_is_icon_only() {
        let logo = logo();
        let outline = logo.parse_path().unwrap();
        let font = bundled_font().unwrap();
        let layout = WordmarkLayout::default().with_text("");

        let image = render_wordmark(&logo, &outline, &layout, Some(&font)).unwrap();
        assert_eq!(image.dimensions(), (448, 448));
    }
}
