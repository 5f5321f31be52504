//! Input decoding into RGB samples and PNG encoding of remapped images.

use crate::error::ImageError;
use piet_palette::{RemappedImage, Rgb, PIET_PALETTE};
use std::io::Cursor;
use std::path::Path;

/// An input image flattened to one RGB sample per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Rgb>,
}

/// Read and decode an image file.
///
/// The format is sniffed from the content, not the extension.
pub fn read_image(path: &Path) -> Result<DecodedImage, ImageError> {
    let data = std::fs::read(path).map_err(|source| ImageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let image = decode_image(&data)?;
    tracing::debug!(
        path = %path.display(),
        width = image.width,
        height = image.height,
        "Decoded input image"
    );
    Ok(image)
}

/// Decode PNG, BMP, GIF, PNM or JPEG bytes to 8-bit RGB.
///
/// Palette images are expanded, 16-bit samples are reduced to 8 bits,
/// grayscale is replicated to all three channels and alpha is dropped.
/// Only the first frame of an animated GIF is read.
pub fn decode_image(data: &[u8]) -> Result<DecodedImage, ImageError> {
    let rgb = image::load_from_memory(data)
        .map_err(|e| ImageError::Decode(e.to_string()))?
        .to_rgb8();

    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let pixels = rgb
        .into_raw()
        .chunks_exact(3)
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .collect();

    Ok(DecodedImage {
        width,
        height,
        pixels,
    })
}

/// Encode a remapped image as 8-bit RGB, or as 8-bit indexed with the
/// canonical palette in PLTE when `indexed` is set.
pub fn encode_png(image: &RemappedImage, indexed: bool) -> Result<Vec<u8>, ImageError> {
    let width = u32::try_from(image.width())
        .map_err(|_| ImageError::PngEncode(format!("width {} too large", image.width())))?;
    let height = u32::try_from(image.height())
        .map_err(|_| ImageError::PngEncode(format!("height {} too large", image.height())))?;

    let (color_type, plte, data) = if indexed {
        let indices = image
            .palette_indices(&PIET_PALETTE)
            .ok_or(ImageError::NonCanonicalPixels)?;
        let plte: Vec<u8> = PIET_PALETTE
            .entries()
            .flat_map(|e| e.color.to_bytes())
            .collect();
        (png::ColorType::Indexed, Some(plte), indices)
    } else {
        (png::ColorType::Rgb, None, image.to_rgb_bytes())
    };

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&data)
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Encode and write a remapped image to `path`.
pub fn write_png(path: &Path, image: &RemappedImage, indexed: bool) -> Result<(), ImageError> {
    let data = encode_png(image, indexed)?;
    std::fs::write(path, &data).map_err(|source| ImageError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = data.len(), indexed, "Wrote output image");
    Ok(())
}
