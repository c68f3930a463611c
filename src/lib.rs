//! logo-render - rasterize a vector logo into PNG assets
//!
//! This library reads a small SVG-like markup holding one rounded rectangle and
//! one filled outline path, interprets the path data, and renders a square
//! icon and a cropped wordmark.
//!
//! # Example
//!
//! ```rust
//! use logo_render::{render, Config, Logo};
//!
//! let logo = Logo::from_str(r##"
//!     <svg>
//!         <rect width="100" height="100" rx="20" fill="#000000"/>
//!         <path d="M10 10 L90 10 L90 90 Z" fill="#ffffff"/>
//!     </svg>
//! "##).unwrap();
//!
//! let assets = render(&logo, &Config::new().with_icon_size(64)).unwrap();
//! assert_eq!(assets.icon.dimensions(), (64, 64));
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod markup;
pub mod path;
pub mod raster;
pub mod renderer;

pub use color::Color;
pub use config::{Config, ConfigError};
pub use error::PathError;
pub use markup::{Logo, MarkupError};
pub use path::{parse_path, Path, Point, Segment, Verb};
pub use renderer::{render_icon, render_wordmark, TextError, WordmarkLayout};

use std::io::Cursor;
use std::path::{Path as FsPath, PathBuf};

use image::RgbaImage;
use log::{debug, info};
use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Markup could not be loaded or is structurally invalid
    #[error("markup error: {0}")]
    Markup(#[from] MarkupError),

    /// The outline's path data is malformed
    #[error("invalid path data: {error}")]
    Path { error: PathError, data: String },

    /// The wordmark font could not be loaded
    #[error("font error: {0}")]
    Text(#[from] TextError),

    #[error("invalid {what} size {width}x{height}")]
    InvalidSize {
        what: &'static str,
        width: u32,
        height: u32,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl RenderError {
    /// Human-readable report; path errors are shown against their source
    pub fn report(&self, filename: &str) -> String {
        match self {
            RenderError::Path { error, data } => error.format(data, filename),
            other => format!("Error: {}", other),
        }
    }
}

/// Both rendered images, held in memory until written
#[derive(Debug, Clone)]
pub struct LogoAssets {
    pub icon: RgbaImage,
    pub wordmark: RgbaImage,
}

impl LogoAssets {
    /// Write both images as PNG, creating parent directories
    ///
    /// Both files are encoded and both directories created before either file
    /// is written. If the second write fails the first file is removed again.
    pub fn save(&self, icon_path: &FsPath, wordmark_path: &FsPath) -> Result<(), RenderError> {
        let icon = encode_png(&self.icon, icon_path)?;
        let wordmark = encode_png(&self.wordmark, wordmark_path)?;
        create_parent(icon_path)?;
        create_parent(wordmark_path)?;

        write_file(icon_path, &icon)?;
        if let Err(e) = write_file(wordmark_path, &wordmark) {
            let _ = std::fs::remove_file(icon_path);
            return Err(e);
        }

        for (path, image) in [(icon_path, &self.icon), (wordmark_path, &self.wordmark)] {
            info!(
                "wrote {} ({}x{})",
                path.display(),
                image.width(),
                image.height()
            );
        }
        Ok(())
    }
}

fn encode_png(image: &RgbaImage, path: &FsPath) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, image::ImageFormat::Png)
        .map_err(|source| RenderError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(bytes.into_inner())
}

fn create_parent(path: &FsPath) -> Result<(), RenderError> {
    match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => std::fs::create_dir_all(parent).map_err(|source| RenderError::CreateDir {
            path: parent.to_path_buf(),
            source,
        }),
        None => Ok(()),
    }
}

fn write_file(path: &FsPath, bytes: &[u8]) -> Result<(), RenderError> {
    std::fs::write(path, bytes).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Render the icon and the wordmark for a loaded logo
///
/// Nothing is written; any failure leaves no partial result.
pub fn render(logo: &Logo, config: &Config) -> Result<LogoAssets, RenderError> {
    logo.validate()?;

    let outline = logo.parse_path().map_err(|error| RenderError::Path {
        error,
        data: logo.path_data.clone(),
    })?;
    debug!("outline has {} segments", outline.len());

    let font = match config.wordmark.font.as_deref() {
        Some(path) => renderer::load_font(path)?,
        None => renderer::bundled_font()?,
    };

    let icon = render_icon(logo, &outline, config.icon.size)?;
    let wordmark = render_wordmark(logo, &outline, &config.wordmark.layout, Some(&font))?;

    Ok(LogoAssets { icon, wordmark })
}

/// Load markup from `input`, render both assets and write them
///
/// Relative output paths are resolved against the directory of `input`.
/// Returns the icon and wordmark paths that were written.
pub fn render_file(input: &FsPath, config: &Config) -> Result<(PathBuf, PathBuf), RenderError> {
    let logo = Logo::from_file(input)?;
    info!("loaded logo markup from {}", input.display());

    let assets = render(&logo, config)?;

    let base = input.parent().unwrap_or_else(|| FsPath::new(""));
    let (icon_path, wordmark_path) = config.output_paths(base);
    assets.save(&icon_path, &wordmark_path)?;

    Ok((icon_path, wordmark_path))
}
