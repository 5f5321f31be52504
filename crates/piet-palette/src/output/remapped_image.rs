//! RemappedImage: the pixel grid produced by the remapper.

use crate::color::Rgb;
use crate::palette::PietPalette;

/// Output of a successful mapping run.
///
/// Holds one canonical [`Rgb`] per pixel in row-major order, with the
/// dimensions of the source image.
///
/// # Example
///
/// ```
/// use piet_palette::{RemappedImage, Rgb, PIET_PALETTE};
///
/// let image = RemappedImage::new(vec![Rgb::new(0, 0, 0), Rgb::new(255, 0, 0)], 2, 1);
/// assert_eq!(image.to_rgb_bytes(), vec![0, 0, 0, 255, 0, 0]);
/// assert_eq!(image.palette_indices(&PIET_PALETTE), Some(vec![0, 11]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemappedImage {
    pixels: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl RemappedImage {
    /// Wrap a row-major pixel buffer.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn new(pixels: Vec<Rgb>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Flat `[R, G, B, R, G, B, ...]` buffer of length `width * height * 3`.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_bytes()).collect()
    }

    /// Index of every pixel in [`PietPalette::entries`] order.
    ///
    /// Returns `None` if any pixel is not a palette color.
    pub fn palette_indices(&self, palette: &PietPalette) -> Option<Vec<u8>> {
        self.pixels
            .iter()
            .map(|&p| palette.index_of(p).map(|i| i as u8))
            .collect()
    }

    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }
}
