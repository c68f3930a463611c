//! Primitive shapes built as paths

use crate::path::Path;

/// Control point distance for a quarter circle drawn as one cubic
const KAPPA: f64 = 0.552_284_749_830_793_4;

/// Rectangle with circular corners of radius `r`
///
/// The radius is clamped to half the shorter side; a non-positive radius
/// gives a plain rectangle.
pub fn rounded_rect(x: f64, y: f64, width: f64, height: f64, r: f64) -> Path {
    let mut path = Path::new();
    let r = r.min(width / 2.0).min(height / 2.0);
    let (x1, y1) = (x + width, y + height);

    if r <= 0.0 {
        path.move_to((x, y));
        path.line_to((x1, y));
        path.line_to((x1, y1));
        path.line_to((x, y1));
        path.close();
        return path;
    }

    let k = r * KAPPA;
    path.move_to((x + r, y));
    path.line_to((x1 - r, y));
    path.cubic_to((x1 - r + k, y), (x1, y + r - k), (x1, y + r));
    path.line_to((x1, y1 - r));
    path.cubic_to((x1, y1 - r + k), (x1 - r + k, y1), (x1 - r, y1));
    path.line_to((x + r, y1));
    path.cubic_to((x + r - k, y1), (x, y1 - r + k), (x, y1 - r));
    path.line_to((x, y + r));
    path.cubic_to((x, y + r - k), (x + r - k, y), (x + r, y));
    path.close();
    path
}
