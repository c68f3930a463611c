//! logo-render CLI
//!
//! Usage:
//!   logo-render [OPTIONS] <FILE>
//!
//! Renders `<FILE>` (an SVG with one rect and one path) into a square icon
//! and a wordmark PNG next to it.

use std::path::PathBuf;

use clap::Parser;

use logo_render::{render_file, Config, RenderError};

#[derive(Parser)]
#[command(name = "logo-render")]
#[command(about = "Render a vector logo into icon and wordmark PNGs")]
struct Cli {
    /// Logo markup file
    input: PathBuf,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Icon output path (relative to the input's directory)
    #[arg(long)]
    icon_out: Option<PathBuf>,

    /// Wordmark output path (relative to the input's directory)
    #[arg(long)]
    wordmark_out: Option<PathBuf>,

    /// Icon edge length in pixels
    #[arg(short, long)]
    size: Option<u32>,

    /// Wordmark canvas width in pixels
    #[arg(short, long)]
    width: Option<u32>,

    /// TrueType font for the wordmark text (bundled DejaVu Sans Bold if unset)
    #[arg(short, long)]
    font: Option<PathBuf>,

    /// Wordmark text
    #[arg(short, long)]
    text: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    if let Some(size) = cli.size {
        config = config.with_icon_size(size);
    }
    if let Some(width) = cli.width {
        config = config.with_wordmark_width(width);
    }
    if let Some(font) = cli.font {
        config = config.with_font(font);
    }
    if let Some(text) = cli.text {
        config = config.with_text(text);
    }
    if let Some(path) = cli.icon_out {
        config = config.with_icon_output(path);
    }
    if let Some(path) = cli.wordmark_out {
        config = config.with_wordmark_output(path);
    }

    match render_file(&cli.input, &config) {
        Ok((icon, wordmark)) => {
            println!("{}", icon.display());
            println!("{}", wordmark.display());
        }
        Err(e) => {
            let filename = cli.input.display().to_string();
            match e {
                RenderError::Path { .. } => eprint!("{}", e.report(&filename)),
                _ => eprintln!("Error: {}", e),
            }
            std::process::exit(1);
        }
    }
}
