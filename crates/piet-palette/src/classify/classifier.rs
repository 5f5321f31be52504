//! Dominant-channel hue classification.

use crate::color::{Hue, Rgb};

/// Half of the channel range; achromatic colors with a red channel below it
/// are black, the rest white.
const ACHROMATIC_SPLIT: u8 = u8::MAX / 2 + 1;

/// Result of classifying one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub family: Hue,
    /// Mean of the dominant channels, used to order colors within a hue.
    pub level: u32,
}

/// Classify a color into a hue family.
///
/// A channel is dominant when it lies strictly within `level_tolerance` of
/// the reference maximum. Each dominant channel sets its family bit (red
/// bit 2, green bit 1, blue bit 0) and contributes to the level, which is
/// the floored mean of the dominant channels.
///
/// The reference maximum is found with a margin: a channel replaces the
/// running maximum whenever `channel + level_tolerance` exceeds it, and the
/// stored value is the raw channel. A later channel slightly below an
/// earlier one therefore still becomes the reference, so the maximum is not
/// necessarily the largest channel. Lightness levels depend on this.
///
/// Colors where all three channels dominate are achromatic: red below 128
/// makes them black, otherwise white.
///
/// `level_tolerance` must be at least 1; with 0 no channel can dominate,
/// the level falls back to 0 and the family to black.
///
/// ```
/// use piet_palette::{classify_color, Hue, Rgb};
///
/// let c = classify_color(Rgb::new(0xff, 0xc0, 0xc0), 10);
/// assert_eq!(c.family, Hue::Red);
/// assert_eq!(c.level, 255);
///
/// assert_eq!(classify_color(Rgb::new(10, 10, 10), 10).family, Hue::Black);
/// assert_eq!(classify_color(Rgb::new(245, 245, 245), 10).family, Hue::White);
/// ```
pub fn classify_color(color: Rgb, level_tolerance: u32) -> Classification {
    let channels = color.to_bytes();

    let mut max_level = 0u32;
    for &channel in &channels {
        let channel = u32::from(channel);
        if channel.saturating_add(level_tolerance) > max_level {
            max_level = channel;
        }
    }

    let mut bits = 0u8;
    let mut level_sum = 0u32;
    let mut dominant = 0u32;
    for (&channel, bit) in channels.iter().zip(Hue::CHANNEL_BITS) {
        let channel = u32::from(channel);
        if channel.abs_diff(max_level) < level_tolerance {
            bits |= bit;
            level_sum += channel;
            dominant += 1;
        }
    }
    let level = level_sum.checked_div(dominant).unwrap_or(0);

    let mut family = Hue::from_bits(bits);
    if family == Hue::White && color.r < ACHROMATIC_SPLIT {
        family = Hue::Black;
    }

    Classification { family, level }
}
