//! Test images built from the canonical palette.

use piet_palette::{Rgb, PIET_PALETTE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// An image as a row-major pixel buffer
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Rgb>,
}

/// The 20 canonical colors in palette order
pub fn canonical_colors() -> Vec<Rgb> {
    PIET_PALETTE.entries().map(|e| e.color).collect()
}

/// A 20x1 strip holding each canonical color once
pub fn canonical_strip() -> Image {
    Image {
        width: 20,
        height: 1,
        pixels: canonical_colors(),
    }
}

/// Lay `colors` out as `block`x`block` squares, `columns` squares per row.
pub fn block_grid(colors: &[Rgb], block: usize, columns: usize) -> Image {
    let rows = colors.len().div_ceil(columns);
    let (width, height) = (columns * block, rows * block);
    let mut pixels = vec![Rgb::new(255, 255, 255); width * height];
    for (i, &color) in colors.iter().enumerate() {
        let (bx, by) = ((i % columns) * block, (i / columns) * block);
        for y in by..by + block {
            for x in bx..bx + block {
                pixels[y * width + x] = color;
            }
        }
    }
    Image {
        width,
        height,
        pixels,
    }
}

/// Shift every channel below 255 by up to `amount`, leaving saturated
/// channels alone so the normal and light grades keep their levels.
pub fn jittered(image: &Image, amount: i32, seed: u64) -> Image {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut shift = |v: u8| {
        if v == u8::MAX {
            v
        } else {
            (i32::from(v) + rng.gen_range(-amount..=amount)).clamp(0, 254) as u8
        }
    };
    let pixels = image
        .pixels
        .iter()
        .map(|p| {
            let r = shift(p.r);
            let g = shift(p.g);
            let b = shift(p.b);
            Rgb::new(r, g, b)
        })
        .collect();
    Image {
        width: image.width,
        height: image.height,
        pixels,
    }
}

/// A 2x2 image holding only black and white
pub fn two_colors() -> Image {
    let (black, white) = (Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
    Image {
        width: 2,
        height: 2,
        pixels: vec![black, white, black, white],
    }
}

/// Canonical strip with light green replaced by a fourth cyan
pub fn four_cyans() -> Image {
    let mut image = canonical_strip();
    image.pixels[6] = Rgb::new(0x60, 0xff, 0xff);
    image
}
