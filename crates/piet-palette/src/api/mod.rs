//! Public API for the piet-palette crate.
//!
//! This module provides the high-level API: the [`PietMapper`] builder and
//! the [`MapError`] error type.

mod builder;
mod error;

pub use builder::{PietMapper, DEFAULT_DIFF_THRESHOLD, DEFAULT_LEVEL_THRESHOLD};
pub use error::MapError;
