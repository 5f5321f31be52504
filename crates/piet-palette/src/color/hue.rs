//! Hue families and lightness grades of the Piet palette.

use std::fmt;

/// One of the eight Piet hue families.
///
/// The discriminant doubles as a channel bit mask: red is bit 2, green is
/// bit 1 and blue is bit 0. Black (`0b000`) and white (`0b111`) are the two
/// achromatic families; the six in between are the chromatic hues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Hue {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Yellow = 6,
    White = 7,
}

impl Hue {
    /// Number of hue families.
    pub const COUNT: usize = 8;

    /// All families in id order.
    pub const ALL: [Hue; Self::COUNT] = [
        Hue::Black,
        Hue::Blue,
        Hue::Green,
        Hue::Cyan,
        Hue::Red,
        Hue::Magenta,
        Hue::Yellow,
        Hue::White,
    ];

    /// The six chromatic families in id order.
    pub const CHROMATIC: [Hue; 6] = [
        Hue::Blue,
        Hue::Green,
        Hue::Cyan,
        Hue::Red,
        Hue::Magenta,
        Hue::Yellow,
    ];

    /// Red channel bit.
    pub const RED_BIT: u8 = 0b100;
    /// Green channel bit.
    pub const GREEN_BIT: u8 = 0b010;
    /// Blue channel bit.
    pub const BLUE_BIT: u8 = 0b001;

    /// Channel bits in `[R, G, B]` order.
    pub const CHANNEL_BITS: [u8; 3] = [Self::RED_BIT, Self::GREEN_BIT, Self::BLUE_BIT];

    /// Family for a 3-bit channel mask. Higher bits are ignored.
    #[inline]
    pub const fn from_bits(bits: u8) -> Hue {
        Self::ALL[(bits & 0b111) as usize]
    }

    /// The 3-bit channel mask (also the family id).
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Family id as an index (0..8).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase English name.
    pub const fn name(self) -> &'static str {
        match self {
            Hue::Black => "black",
            Hue::Blue => "blue",
            Hue::Green => "green",
            Hue::Cyan => "cyan",
            Hue::Red => "red",
            Hue::Magenta => "magenta",
            Hue::Yellow => "yellow",
            Hue::White => "white",
        }
    }

    /// `false` for black and white.
    #[inline]
    pub const fn is_chromatic(self) -> bool {
        !matches!(self, Hue::Black | Hue::White)
    }

    /// How many distinct colors of this family a well-formed Piet image has.
    #[inline]
    pub const fn expected_members(self) -> usize {
        if self.is_chromatic() {
            Lightness::COUNT
        } else {
            1
        }
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lightness grade within a chromatic hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Lightness {
    Dark = 0,
    Normal = 1,
    Light = 2,
}

impl Lightness {
    /// Number of grades per chromatic hue.
    pub const COUNT: usize = 3;

    /// All grades, darkest first.
    pub const ALL: [Lightness; Self::COUNT] = [Lightness::Dark, Lightness::Normal, Lightness::Light];

    /// Grade index (0..3).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Lightness::Dark => "dark",
            Lightness::Normal => "normal",
            Lightness::Light => "light",
        }
    }
}

impl fmt::Display for Lightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
