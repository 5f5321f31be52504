//! The canonical 20-color Piet palette.
//!
//! The table is generated from the hue bit rules at compile time and
//! exposed as the [`PIET_PALETTE`] constant.

use crate::color::{Hue, Lightness, Rgb, CHANNELS};

/// Number of colors in a well-formed Piet image.
pub const PIET_COLORS_COUNT: usize = 6 * Lightness::COUNT + 2;

/// Channel value of an "on" channel, per lightness grade.
const ON_LEVELS: [u8; Lightness::COUNT] = [0xc0, 0xff, 0xff];

/// Channel value of an "off" channel, per lightness grade.
const OFF_LEVELS: [u8; Lightness::COUNT] = [0x00, 0x00, 0xc0];

/// The canonical Piet palette, built once at compile time.
pub const PIET_PALETTE: PietPalette = PietPalette::generate();

/// One canonical palette color with its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub hue: Hue,
    /// `None` for black and white, which have a single grade.
    pub lightness: Option<Lightness>,
    pub color: Rgb,
}

/// The fixed Piet palette table, indexed by (hue, lightness grade).
///
/// Black and white hold a single entry at grade 0; each chromatic hue holds
/// three, ordered dark, normal, light.
///
/// # Example
///
/// ```
/// use piet_palette::{Hue, Rgb, PIET_PALETTE};
///
/// assert_eq!(PIET_PALETTE.get(Hue::Red, 0), Some(Rgb::new(0xc0, 0, 0)));
/// assert_eq!(PIET_PALETTE.get(Hue::Red, 2), Some(Rgb::new(0xff, 0xc0, 0xc0)));
/// assert_eq!(PIET_PALETTE.get(Hue::White, 1), None);
/// assert_eq!(PIET_PALETTE.entries().count(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PietPalette {
    black: Rgb,
    white: Rgb,
    chromatic: [[Rgb; Lightness::COUNT]; 6],
}

impl PietPalette {
    /// Build the table from the hue bit rules.
    ///
    /// For chromatic hue `h`, a channel whose bit is set in `h` takes
    /// `ON_LEVELS[grade]`, any other channel `OFF_LEVELS[grade]`.
    pub const fn generate() -> Self {
        let mut chromatic = [[Rgb::new(0, 0, 0); Lightness::COUNT]; 6];
        let mut slot = 0;
        while slot < 6 {
            let bits = Hue::CHROMATIC[slot].bits();
            let mut grade = 0;
            while grade < Lightness::COUNT {
                let mut bytes = [0u8; CHANNELS];
                let mut channel = 0;
                while channel < CHANNELS {
                    bytes[channel] = if bits & Hue::CHANNEL_BITS[channel] != 0 {
                        ON_LEVELS[grade]
                    } else {
                        OFF_LEVELS[grade]
                    };
                    channel += 1;
                }
                chromatic[slot][grade] = Rgb::from_bytes(bytes);
                grade += 1;
            }
            slot += 1;
        }

        Self {
            black: Rgb::new(0x00, 0x00, 0x00),
            white: Rgb::new(0xff, 0xff, 0xff),
            chromatic,
        }
    }

    /// Canonical color for `hue` at lightness `grade`.
    ///
    /// Returns `None` when the grade does not exist for that hue (anything
    /// but 0 for black/white, anything above 2 for a chromatic hue).
    pub fn get(&self, hue: Hue, grade: usize) -> Option<Rgb> {
        match hue {
            Hue::Black => (grade == 0).then_some(self.black),
            Hue::White => (grade == 0).then_some(self.white),
            _ => self.chromatic[hue.index() - 1].get(grade).copied(),
        }
    }

    /// Canonical color for a chromatic hue at the given grade.
    ///
    /// Black and white ignore `lightness`.
    pub fn color(&self, hue: Hue, lightness: Lightness) -> Rgb {
        match hue {
            Hue::Black => self.black,
            Hue::White => self.white,
            _ => self.chromatic[hue.index() - 1][lightness.index()],
        }
    }

    #[inline]
    pub const fn black(&self) -> Rgb {
        self.black
    }

    #[inline]
    pub const fn white(&self) -> Rgb {
        self.white
    }

    /// Number of palette entries (always 20).
    #[inline]
    pub const fn len(&self) -> usize {
        PIET_COLORS_COUNT
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// All entries in table order: black, the chromatic hues by id with
    /// their grades darkest first, then white.
    pub fn entries(&self) -> impl Iterator<Item = PaletteEntry> + '_ {
        let black = std::iter::once(PaletteEntry {
            hue: Hue::Black,
            lightness: None,
            color: self.black,
        });
        let chromatic = Hue::CHROMATIC.into_iter().flat_map(move |hue| {
            Lightness::ALL.into_iter().map(move |lightness| PaletteEntry {
                hue,
                lightness: Some(lightness),
                color: self.color(hue, lightness),
            })
        });
        let white = std::iter::once(PaletteEntry {
            hue: Hue::White,
            lightness: None,
            color: self.white,
        });
        black.chain(chromatic).chain(white)
    }

    /// Position of `color` in [`entries()`](Self::entries) order.
    pub fn index_of(&self, color: Rgb) -> Option<usize> {
        self.entries().position(|entry| entry.color == color)
    }
}

impl Default for PietPalette {
    fn default() -> Self {
        PIET_PALETTE
    }
}
