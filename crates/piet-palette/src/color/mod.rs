//! Color primitives
//!
//! - [`Rgb`]: a raw 8-bit sample, the unit every stage works on
//! - [`Hue`]: the eight Piet hue families, encoded as a channel bit mask
//! - [`Lightness`]: the three grades inside a chromatic hue

mod hue;
mod rgb;

pub use hue::{Hue, Lightness};
pub use rgb::{Rgb, CHANNELS};
