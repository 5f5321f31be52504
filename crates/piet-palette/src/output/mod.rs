//! Output types for the mapping pipeline.
//!
//! [`RemappedImage`] owns the canonical pixel grid and offers it as samples,
//! as a flat RGB byte buffer, or as palette indices for indexed encoders.

mod remapped_image;

pub use remapped_image::RemappedImage;
