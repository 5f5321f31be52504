#![allow(clippy::module_inception)]

//! piet-palette: snap the colors of a Piet image onto the canonical palette
//!
//! Hand-drawn or re-encoded Piet programs rarely use the exact 20 palette
//! colors: anti-aliasing, compression and imprecise drawing leave
//! near-palette colors behind. This crate discovers the colors actually
//! present, decides which palette slot each one stands for and rewrites
//! every pixel to the exact canonical value.
//!
//! # Quick Start
//!
//! ```
//! use piet_palette::{NullReporter, PietMapper, Rgb, PIET_PALETTE};
//!
//! // One pixel of every canonical color, slightly off
//! let pixels: Vec<Rgb> = PIET_PALETTE
//!     .entries()
//!     .map(|e| {
//!         let [r, g, b] = e.color.to_bytes();
//!         Rgb::new(r.saturating_sub(3), g, b.saturating_add(2))
//!     })
//!     .collect();
//!
//! let image = PietMapper::new()
//!     .map(&pixels, 20, 1, &mut NullReporter)
//!     .unwrap();
//!
//! assert_eq!(image.pixels()[0], Rgb::new(0, 0, 0));
//! assert_eq!(image.pixels()[11], Rgb::new(255, 0, 0));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! pixels (row-major Rgb)
//!     |
//!     v
//! ClusterSet::from_samples   first-match online clustering, diff threshold
//!     |                      -> exactly 20 clusters or ColorCountMismatch
//!     v
//! HueBuckets::classify       dominant channels -> family bits, level
//!     |                      -> 3 per chromatic hue, 1 black, 1 white
//!     |                         or HueSorting
//!     v
//! sort_by_lightness          stable, ascending level
//!     |
//!     v
//! associate                  bucket position -> PIET_PALETTE slot
//!     |
//!     v
//! ColorMapping::remap        same first-match lookup, writes references
//! ```
//!
//! # Thresholds
//!
//! - **diff threshold**: a pixel joins a color when every channel is within
//!   this distance of the color's running average.
//! - **level threshold**: a channel defines the hue when it is strictly
//!   within this distance of the reference maximum.
//!
//! Neither is tuned automatically. A [`MapError`] says which way to move
//! them, and progress is surfaced through a [`Reporter`].
//!
//! # Lightness ties
//!
//! Normal and light grades both peak at 255 in their dominant channels, so
//! their levels usually tie. Ties keep discovery order: whichever of the two
//! appears first in scan order takes the normal slot.

pub mod api;
pub mod classify;
pub mod cluster;
pub mod color;
pub mod output;
pub mod palette;
pub mod remap;
pub mod report;

#[cfg(test)]
mod domain_tests;

pub use api::{MapError, PietMapper, DEFAULT_DIFF_THRESHOLD, DEFAULT_LEVEL_THRESHOLD};
pub use classify::{classify_color, Classification, FamilyListing, HueBuckets, HueMismatch};
pub use cluster::{Cluster, ClusterSet};
pub use color::{Hue, Lightness, Rgb};
pub use output::RemappedImage;
pub use palette::{PaletteEntry, ParseColorError, PietPalette, PIET_COLORS_COUNT, PIET_PALETTE};
pub use remap::ColorMapping;
pub use report::{NullReporter, Reporter, Stage, ThresholdHint};
