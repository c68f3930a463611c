//! Text outlines from TrueType/OpenType fonts

use std::path::{Path as FsPath, PathBuf};

use rusttype::{point, Font, OutlineBuilder, Scale};
use thiserror::Error;

use crate::path::Path;

#[derive(Error, Debug)]
pub enum TextError {
    #[error("failed to read font file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path} is not a usable TrueType/OpenType font")]
    InvalidFont { path: PathBuf },

    #[error("bundled font {0} could not be parsed")]
    InvalidBundledFont(&'static str),
}

/// DejaVu Sans Bold, shipped so the wordmark has text without configuration
const BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");

/// The font used when none is configured
pub fn bundled_font() -> Result<Font<'static>, TextError> {
    Font::try_from_bytes(BUNDLED_FONT).ok_or(TextError::InvalidBundledFont("DejaVuSans-Bold.ttf"))
}

pub fn load_font(path: &FsPath) -> Result<Font<'static>, TextError> {
    let bytes = std::fs::read(path).map_err(|source| TextError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Font::try_from_vec(bytes).ok_or_else(|| TextError::InvalidFont {
        path: path.to_path_buf(),
    })
}

/// Collects glyph contours into a [`Path`]
struct PathOutline<'a> {
    path: &'a mut Path,
}

impl OutlineBuilder for PathOutline<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((x as f64, y as f64));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.path.quad_to((x1 as f64, y1 as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.path.cubic_to(
            (x1 as f64, y1 as f64),
            (x2 as f64, y2 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.path.close();
    }
}

/// Outline of `text` set at `size_px`, pen starting at the origin on the baseline
///
/// Coordinates grow downward, so ascenders have negative y.
pub fn text_outline(font: &Font<'_>, text: &str, size_px: f32) -> Path {
    let mut path = Path::new();
    let mut builder = PathOutline { path: &mut path };
    for glyph in font.layout(text, Scale::uniform(size_px), point(0.0, 0.0)) {
        glyph.build_outline(&mut builder);
    }
    path
}
