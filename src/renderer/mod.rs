//! Raster renderers for the logo assets
//!
//! This module draws the parsed logo onto canvases: the square icon and the
//! wordmark with text set from a font file.

pub mod config;
pub mod icon;
pub mod shapes;
pub mod text;
pub mod wordmark;

pub use config::WordmarkLayout;
pub use icon::{draw_logo, render_icon};
pub use text::{bundled_font, load_font, text_outline, TextError};
pub use wordmark::{draw_wordmark, render_wordmark};
