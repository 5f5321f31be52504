//! 8-bit RGB sample type
//!
//! Every pixel read from a source image, every cluster average and every
//! canonical palette entry is an [`Rgb`]. No color-space conversion happens
//! anywhere in the crate: distances are raw per-channel differences.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// Number of color channels carried by a sample.
pub const CHANNELS: usize = 3;

/// An 8-bit RGB sample.
///
/// Channel order is always red, green, blue. The type is `Copy` and
/// comparisons are exact, which is what the remapping fixed-point checks
/// rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new sample.
    ///
    /// # Example
    /// ```
    /// use piet_palette::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a sample from a byte array `[R, G, B]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; CHANNELS]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; CHANNELS] {
        [self.r, self.g, self.b]
    }

    /// Returns `true` when every channel of `other` is within `tolerance`
    /// of the matching channel of `self`.
    ///
    /// This is the single matching rule shared by clustering and remapping.
    ///
    /// ```
    /// use piet_palette::Rgb;
    /// let a = Rgb::new(100, 100, 100);
    /// assert!(a.within(Rgb::new(110, 90, 100), 10));
    /// assert!(!a.within(Rgb::new(111, 100, 100), 10));
    /// ```
    #[inline]
    pub fn within(self, other: Rgb, tolerance: u32) -> bool {
        self.to_bytes()
            .iter()
            .zip(other.to_bytes())
            .all(|(&a, b)| u32::from(a.abs_diff(b)) <= tolerance)
    }
}

impl From<[u8; CHANNELS]> for Rgb {
    fn from(bytes: [u8; CHANNELS]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Rgb> for [u8; CHANNELS] {
    fn from(color: Rgb) -> Self {
        color.to_bytes()
    }
}

impl fmt::Display for Rgb {
    /// Formats as lowercase `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a sample from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive,
    /// with surrounding whitespace trimmed.
    ///
    /// ```
    /// use piet_palette::Rgb;
    ///
    /// let yellow: Rgb = "#FFFF00".parse().unwrap();
    /// assert_eq!(yellow, Rgb::new(255, 255, 0));
    ///
    /// let light_red: Rgb = "fcc".parse().unwrap();
    /// assert_eq!(light_red, Rgb::new(255, 204, 204));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }
        // from_str_radix alone would let a leading '+' through
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(s.to_string()));
        }
        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| ParseColorError::InvalidHex(s.to_string()))
        };

        match s.len() {
            3 => {
                // Shorthand digits expand by 17 (0xF -> 0xFF)
                let r = channel(&s[0..1])? * 17;
                let g = channel(&s[1..2])? * 17;
                let b = channel(&s[2..3])? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = channel(&s[0..2])?;
                let g = channel(&s[2..4])?;
                let b = channel(&s[4..6])?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
