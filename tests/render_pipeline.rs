//! End-to-end tests: markup in, PNG files out

use std::fs;
use std::path::{Path, PathBuf};

use logo_render::{render, render_file, Config, Logo, MarkupError, PathError, RenderError};
use pretty_assertions::assert_eq;

const FAVICON: &str = include_str!("fixtures/favicon.svg");
const SHEET: &str = include_str!("fixtures/sheet.svg");

/// Fresh scratch directory holding a copy of `fixture`
fn scratch(name: &str, fixture: &str) -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("logo-render-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("Should create scratch dir");
    let input = dir.join("favicon.svg");
    fs::write(&input, fixture).expect("Should write fixture");
    (dir, input)
}

fn rgba(path: &Path) -> image::RgbaImage {
    image::open(path).expect("Should decode PNG").to_rgba8()
}

#[test]
fn test_icon_pixels() {
    let logo = Logo::from_str(FAVICON).expect("Should load");
    let assets = render(&logo, &Config::new().with_icon_size(256)).expect("Should render");
    let icon = &assets.icon;

    assert_eq!(icon.dimensions(), (256, 256));
    // rounded corners stay transparent
    assert_eq!(icon.get_pixel(0, 0)[3], 0);
    assert_eq!(icon.get_pixel(255, 255)[3], 0);
    assert_eq!(icon.get_pixel(128, 128)[3], 255);
    // inside the triangle
    assert_eq!(icon.get_pixel(200, 60).0, [255, 255, 255, 255]);
    // background only
    assert_eq!(icon.get_pixel(50, 200).0, [0, 0, 0, 255]);
}

#[test]
fn test_curved_multi_subpath_outline() {
    let logo = Logo::from_str(SHEET).expect("Should load");
    let assets = render(&logo, &Config::new().with_icon_size(64)).expect("Should render");
    let icon = &assets.icon;

    // sheet body at (30, 45) in a 64px icon maps 1:1
    assert_eq!(icon.get_pixel(30, 45).0, [0xf8, 0xfa, 0xfc, 255]);
    // outside the sheet, on the background
    assert_eq!(icon.get_pixel(8, 32).0, [0x0f, 0x17, 0x2a, 255]);
}

#[test]
fn test_render_file_writes_next_to_input() {
    let (dir, input) = scratch("write", FAVICON);
    let config = Config::new()
        .with_icon_size(128)
        .with_wordmark_output("out/wordmark.png");

    let (icon_path, wordmark_path) = render_file(&input, &config).expect("Should render");

    assert_eq!(icon_path, dir.join("logo.png"));
    assert_eq!(wordmark_path, dir.join("out/wordmark.png"));
    assert_eq!(rgba(&icon_path).dimensions(), (128, 128));

    // the 384px icon plus a 32px margin sets the height; the text adds width
    let wordmark = rgba(&wordmark_path);
    assert_eq!(wordmark.height(), 448);
    assert!(wordmark.width() > 1000, "width {}", wordmark.width());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_non_square_writes_nothing() {
    let (dir, input) = scratch("non-square", include_str!("fixtures/non-square.svg"));

    let err = render_file(&input, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Markup(MarkupError::NonSquareRect { .. })
    ));
    assert!(!dir.join("logo.png").exists());
    assert!(!dir.join("logo-wordmark.png").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_bad_path_writes_nothing() {
    let (dir, input) = scratch("bad-path", include_str!("fixtures/bad-path.svg"));

    let err = render_file(&input, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        RenderError::Path {
            error: PathError::UnsupportedCommand { command: 'A', .. },
            ..
        }
    ));
    assert!(err.report("favicon.svg").contains("favicon.svg"));
    assert!(!dir.join("logo.png").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_unwritable_wordmark_leaves_no_icon() {
    let (dir, input) = scratch("blocked", FAVICON);
    // a plain file where the wordmark's directory should go
    fs::write(dir.join("blocker"), b"").expect("Should write blocker");
    let config = Config::new()
        .with_icon_size(16)
        .with_wordmark_output("blocker/wm.png");

    let err = render_file(&input, &config).unwrap_err();
    assert!(matches!(err, RenderError::CreateDir { .. }));
    assert!(!dir.join("logo.png").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_failed_wordmark_write_removes_icon() {
    let (dir, input) = scratch("rollback", FAVICON);
    // the wordmark target is an existing directory, so only its write fails
    fs::create_dir_all(dir.join("taken")).expect("Should create dir");
    let config = Config::new()
        .with_icon_size(16)
        .with_wordmark_output("taken");

    let err = render_file(&input, &config).unwrap_err();
    assert!(matches!(err, RenderError::Write { .. }));
    assert!(!dir.join("logo.png").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_custom_font_overrides_bundled() {
    let (dir, input) = scratch("font", FAVICON);
    let config = Config::new().with_font(dir.join("missing.ttf"));

    let err = render_file(&input, &config).unwrap_err();
    assert!(matches!(err, RenderError::Text(_)));
    assert!(!dir.join("logo.png").exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_input_file() {
    let err = render_file(Path::new("/nonexistent/logo.svg"), &Config::default()).unwrap_err();
    assert!(matches!(err, RenderError::Markup(MarkupError::Io { .. })));
}

#[test]
fn test_config_file_drives_output() {
    let (dir, input) = scratch("config", FAVICON);
    let config_path = dir.join("logo.toml");
    fs::write(
        &config_path,
        "[icon]\nsize = 48\noutput = \"icons/app.png\"\n\n[wordmark]\nmargin = 0\n",
    )
    .expect("Should write config");

    let config = Config::from_file(&config_path).expect("Should load config");
    let (icon_path, wordmark_path) = render_file(&input, &config).expect("Should render");

    assert_eq!(rgba(&icon_path).dimensions(), (48, 48));
    let wordmark = rgba(&wordmark_path);
    assert_eq!(wordmark.height(), 384);
    assert!(wordmark.width() > 384);

    let _ = fs::remove_dir_all(&dir);
}
