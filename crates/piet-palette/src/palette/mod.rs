//! The canonical Piet palette table and color parsing errors.

mod error;
mod palette;

pub use error::ParseColorError;
pub use palette::{PaletteEntry, PietPalette, PIET_COLORS_COUNT, PIET_PALETTE};
