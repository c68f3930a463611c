//! Loader for the icon markup
//!
//! The markup is a small SVG document whose root holds one `<rect>` (the
//! rounded background) and one `<path>` (the outline drawn on top of it).

use std::path::{Path as FsPath, PathBuf};

use thiserror::Error;

use crate::color::Color;
use crate::error::PathError;
use crate::path::{parse_path, Path};

#[derive(Error, Debug)]
pub enum MarkupError {
    #[error("failed to read markup file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid markup: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("expected <rect> and <path> in markup, missing <{0}>")]
    MissingElement(&'static str),

    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("attribute '{attribute}' has invalid number '{value}'")]
    InvalidNumber { attribute: String, value: String },

    #[error("attribute '{attribute}' has invalid color '{value}'")]
    InvalidColor { attribute: String, value: String },

    #[error("expected square logo rect, got {width}x{height}")]
    NonSquareRect { width: f64, height: f64 },

    #[error("logo rect must have a positive size, got {0}")]
    EmptyRect(f64),
}

/// The rounded background rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct LogoRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Corner radius
    pub rx: f64,
    pub fill: Color,
}

/// Everything needed to draw the logo
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    pub rect: LogoRect,
    /// Raw path data of the outline
    pub path_data: String,
    pub path_fill: Color,
}

fn number(
    node: roxmltree::Node,
    attribute: &str,
    default: Option<f64>,
) -> Result<Option<f64>, MarkupError> {
    let Some(raw) = node.attribute(attribute) else {
        return Ok(default);
    };
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_suffix("px").unwrap_or(trimmed);
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| MarkupError::InvalidNumber {
            attribute: attribute.to_string(),
            value: raw.to_string(),
        })
}

fn required(
    node: roxmltree::Node,
    element: &'static str,
    attribute: &'static str,
) -> Result<f64, MarkupError> {
    number(node, attribute, None)?.ok_or(MarkupError::MissingAttribute { element, attribute })
}

fn color(node: roxmltree::Node, attribute: &str, default: Color) -> Result<Color, MarkupError> {
    match node.attribute(attribute) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| MarkupError::InvalidColor {
            attribute: attribute.to_string(),
            value: raw.to_string(),
        }),
    }
}

impl Logo {
    /// Load markup from a file
    pub fn from_file(path: &FsPath) -> Result<Self, MarkupError> {
        let content = std::fs::read_to_string(path).map_err(|source| MarkupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&content)
    }

    /// Load markup from a string
    ///
    /// Only direct children of the root element are considered. When several
    /// rects or paths are present the last one wins.
    pub fn from_str(content: &str) -> Result<Self, MarkupError> {
        let doc = roxmltree::Document::parse(content)?;
        let root = doc.root_element();

        let mut rect_node = None;
        let mut path_node = None;
        for child in root.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "rect" => rect_node = Some(child),
                "path" => path_node = Some(child),
                _ => {}
            }
        }

        let rect_node = rect_node.ok_or(MarkupError::MissingElement("rect"))?;
        let path_node = path_node.ok_or(MarkupError::MissingElement("path"))?;

        let rect = LogoRect {
            x: number(rect_node, "x", Some(0.0))?.unwrap_or_default(),
            y: number(rect_node, "y", Some(0.0))?.unwrap_or_default(),
            width: required(rect_node, "rect", "width")?,
            height: required(rect_node, "rect", "height")?,
            rx: number(rect_node, "rx", Some(0.0))?.unwrap_or_default(),
            fill: color(rect_node, "fill", Color::BLACK)?,
        };

        let path_data = path_node
            .attribute("d")
            .ok_or(MarkupError::MissingAttribute {
                element: "path",
                attribute: "d",
            })?
            .to_string();

        Ok(Logo {
            rect,
            path_data,
            path_fill: color(path_node, "fill", Color::WHITE)?,
        })
    }

    /// Check the rect is a non-empty square
    pub fn validate(&self) -> Result<(), MarkupError> {
        let LogoRect { width, height, .. } = self.rect;
        if width != height {
            return Err(MarkupError::NonSquareRect { width, height });
        }
        if width <= 0.0 || !width.is_finite() {
            return Err(MarkupError::EmptyRect(width));
        }
        Ok(())
    }

    /// Interpret the outline's path data
    pub fn parse_path(&self) -> Result<Path, PathError> {
        parse_path(&self.path_data)
    }
}
