//! Tool configuration loaded from TOML
//!
//! Every key is optional; missing keys keep their defaults. Relative output
//! paths are resolved against the directory of the markup file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::color::Color;
use crate::renderer::WordmarkLayout;

/// Errors that can occur when loading or parsing configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Square icon settings
#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    /// Edge length in pixels
    pub size: u32,
    pub output: PathBuf,
}

/// Wordmark settings
#[derive(Debug, Clone, PartialEq)]
pub struct WordmarkConfig {
    pub layout: WordmarkLayout,
    /// Font used for the text; the bundled DejaVu Sans Bold when unset
    pub font: Option<PathBuf>,
    pub output: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub icon: IconConfig,
    pub wordmark: WordmarkConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon: IconConfig {
                size: 1024,
                output: PathBuf::from("logo.png"),
            },
            wordmark: WordmarkConfig {
                layout: WordmarkLayout::default().with_width(3200),
                font: None,
                output: PathBuf::from("logo-wordmark.png"),
            },
        }
    }
}

/// TOML structure for deserializing configuration
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    icon: Option<TomlIcon>,
    wordmark: Option<TomlWordmark>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlIcon {
    size: Option<u32>,
    output: Option<PathBuf>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlWordmark {
    width: Option<u32>,
    height: Option<u32>,
    padding: Option<f64>,
    icon_size: Option<f64>,
    gap: Option<f64>,
    margin: Option<u32>,
    text: Option<String>,
    text_color: Option<Color>,
    font_size: Option<f32>,
    font: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl Config {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Config::default();

        if let Some(icon) = parsed.icon {
            if let Some(size) = icon.size {
                config.icon.size = size;
            }
            if let Some(output) = icon.output {
                config.icon.output = output;
            }
        }

        if let Some(w) = parsed.wordmark {
            let layout = &mut config.wordmark.layout;
            layout.width = w.width.unwrap_or(layout.width);
            layout.height = w.height.unwrap_or(layout.height);
            layout.padding = w.padding.unwrap_or(layout.padding);
            layout.icon_size = w.icon_size.unwrap_or(layout.icon_size);
            layout.gap = w.gap.unwrap_or(layout.gap);
            layout.margin = w.margin.unwrap_or(layout.margin);
            layout.font_size = w.font_size.unwrap_or(layout.font_size);
            layout.text_color = w.text_color.unwrap_or(layout.text_color);
            if let Some(text) = w.text {
                layout.text = text;
            }
            if w.font.is_some() {
                config.wordmark.font = w.font;
            }
            if let Some(output) = w.output {
                config.wordmark.output = output;
            }
        }

        Ok(config)
    }

    /// Set the icon size
    pub fn with_icon_size(mut self, size: u32) -> Self {
        self.icon.size = size;
        self
    }

    /// Set the wordmark canvas width
    pub fn with_wordmark_width(mut self, width: u32) -> Self {
        self.wordmark.layout.width = width;
        self
    }

    /// Set the wordmark font
    pub fn with_font(mut self, font: impl Into<PathBuf>) -> Self {
        self.wordmark.font = Some(font.into());
        self
    }

    /// Set the wordmark text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.wordmark.layout.text = text.into();
        self
    }

    /// Set the icon output path
    pub fn with_icon_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.icon.output = path.into();
        self
    }

    /// Set the wordmark output path
    pub fn with_wordmark_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.wordmark.output = path.into();
        self
    }

    /// Output paths with relative ones resolved against `base`
    pub fn output_paths(&self, base: &Path) -> (PathBuf, PathBuf) {
        (
            base.join(&self.icon.output),
            base.join(&self.wordmark.output),
        )
    }
}
