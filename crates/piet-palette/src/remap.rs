//! Remapping pixels onto the canonical palette.

use crate::api::MapError;
use crate::classify::{FamilyListing, HueBuckets};
use crate::cluster::{Cluster, ClusterSet};
use crate::color::Rgb;
use crate::output::RemappedImage;

/// Frozen result of analysis: classified, ordered and associated clusters.
///
/// Nothing mutates a `ColorMapping` after it is built, so remapping only
/// reads it.
#[derive(Debug, Clone)]
pub struct ColorMapping {
    clusters: ClusterSet,
    buckets: HueBuckets,
}

impl ColorMapping {
    pub(crate) fn new(clusters: ClusterSet, buckets: HueBuckets) -> Self {
        Self { clusters, buckets }
    }

    /// Discovered clusters, in discovery order.
    #[inline]
    pub fn clusters(&self) -> &ClusterSet {
        &self.clusters
    }

    /// Validated, lightness-ordered hue buckets.
    #[inline]
    pub fn buckets(&self) -> &HueBuckets {
        &self.buckets
    }

    /// Per-family listing of the clusters.
    pub fn families(&self) -> Vec<FamilyListing<'_>> {
        self.buckets.families(&self.clusters)
    }

    /// Canonical color for `sample`, using the same first-match rule and
    /// tolerance as discovery.
    pub fn reference_for(&self, sample: Rgb) -> Option<Rgb> {
        self.clusters.lookup(sample).and_then(Cluster::reference)
    }

    /// Replace every pixel by the canonical color of its cluster.
    ///
    /// The input is left untouched; a new grid is returned.
    pub fn remap(
        &self,
        pixels: &[Rgb],
        width: usize,
        height: usize,
    ) -> Result<RemappedImage, MapError> {
        check_dimensions(pixels, width, height)?;
        let remapped = pixels
            .iter()
            .enumerate()
            .map(|(index, &sample)| {
                self.reference_for(sample)
                    .ok_or(MapError::UnmatchedPixel { index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RemappedImage::new(remapped, width, height))
    }
}

pub(crate) fn check_dimensions(pixels: &[Rgb], width: usize, height: usize) -> Result<(), MapError> {
    let expected = width.checked_mul(height);
    if expected == Some(pixels.len()) {
        return Ok(());
    }
    Err(MapError::DimensionMismatch {
        width,
        height,
        expected: expected.unwrap_or(usize::MAX),
        actual: pixels.len(),
    })
}
