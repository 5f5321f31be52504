//! Piet cleaner
//!
//! Snaps hand-drawn or resampled Piet programs onto the canonical 20-color
//! palette. The color pipeline lives in the `piet-palette` crate; this
//! library adds configuration, PNG I/O and reporting, and is exposed for
//! integration testing.

pub mod error;
pub mod imaging;
pub mod models;
pub mod services;
