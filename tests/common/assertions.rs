//! Assertion helpers for tests.

use std::path::Path;

use piet_cleaner::imaging::read_image;
use piet_palette::Rgb;
use pretty_assertions::assert_eq;

use super::app::CliOutput;

/// Assert the process exited with `expected`
pub fn assert_exit_code(output: &CliOutput, expected: i32) {
    assert_eq!(
        output.code,
        Some(expected),
        "Unexpected exit code. stdout: {} stderr: {}",
        output.stdout,
        output.stderr
    );
}

/// Assert `path` is a PNG decoding to exactly `expected`
pub fn assert_png_pixels(path: &Path, width: usize, height: usize, expected: &[Rgb]) {
    let image = read_image(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    assert_eq!((image.width, image.height), (width, height));
    assert_eq!(image.pixels, expected);
}

/// Assert `path` is an 8-bit indexed PNG
pub fn assert_indexed_png(path: &Path) {
    let data = std::fs::read(path).unwrap();
    let decoder = png::Decoder::new(std::io::Cursor::new(data));
    let reader = decoder.read_info().unwrap();
    assert_eq!(reader.info().color_type, png::ColorType::Indexed);
    assert_eq!(reader.info().bit_depth, png::BitDepth::Eight);
}

/// Assert no file exists at `path`
pub fn assert_missing(path: &Path) {
    assert!(!path.exists(), "{} should not exist", path.display());
}
