//! Unified error type for the piet-palette pipeline.

use thiserror::Error;

use crate::classify::HueMismatch;
use crate::report::ThresholdHint;

/// Every way a mapping run can fail.
///
/// None of these is recoverable within a run: the expected remedy for the
/// first two is a rerun with different thresholds.
///
/// # Example
///
/// ```
/// use piet_palette::{MapError, NullReporter, PietMapper, Rgb};
///
/// let pixels = [Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)];
/// let err = PietMapper::new()
///     .map(&pixels, 2, 1, &mut NullReporter)
///     .unwrap_err();
/// assert!(matches!(err, MapError::ColorCountMismatch { found: 2, expected: 20, .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// Color discovery did not find exactly 20 colors.
    #[error("found {found} colors, expected {expected}; try {hint} the diff threshold")]
    ColorCountMismatch {
        found: usize,
        expected: usize,
        hint: ThresholdHint,
    },

    /// One or more hue families have the wrong number of colors.
    #[error(
        "bad hue sorting ({}); try acting on the level threshold",
        join_mismatches(.mismatches)
    )]
    HueSorting { mismatches: Vec<HueMismatch> },

    /// Pixel buffer length disagrees with the stated dimensions.
    #[error("pixel buffer holds {actual} samples but a {width}x{height} image needs {expected}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// A level threshold of 0 leaves no channel dominant.
    #[error("level threshold must be at least 1")]
    InvalidLevelThreshold,

    /// A pixel matched no cluster while remapping.
    ///
    /// Only possible when a mapping is applied to an image other than the
    /// one it was built from.
    #[error("pixel {index} matches no discovered color")]
    UnmatchedPixel { index: usize },
}

fn join_mismatches(mismatches: &[HueMismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
