//! Hue buckets: grouping, validation, lightness ordering and palette
//! association.

use std::fmt;

use super::classifier::classify_color;
use crate::cluster::{Cluster, ClusterSet};
use crate::color::Hue;
use crate::palette::PietPalette;

/// A hue family whose member count differs from what a Piet image needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueMismatch {
    pub hue: Hue,
    pub found: usize,
    pub expected: usize,
}

impl fmt::Display for HueMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: found {} colors, expected {}",
            self.hue, self.found, self.expected
        )
    }
}

/// Clusters of one hue family, in bucket order.
#[derive(Debug, Clone)]
pub struct FamilyListing<'a> {
    pub hue: Hue,
    pub clusters: Vec<&'a Cluster>,
}

/// Cluster indices grouped by hue family.
///
/// Buckets hold indices into the [`ClusterSet`] they were built from; the
/// clusters themselves stay in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HueBuckets {
    members: [Vec<usize>; Hue::COUNT],
}

impl HueBuckets {
    /// Classify every cluster and group it under its family.
    ///
    /// Each cluster's family and level are recorded on the cluster itself.
    /// Within a bucket, clusters keep discovery order.
    pub fn classify(clusters: &mut ClusterSet, level_tolerance: u32) -> Self {
        let mut buckets = Self::default();
        for (index, cluster) in clusters.iter_mut().enumerate() {
            let classification = classify_color(cluster.average(), level_tolerance);
            cluster.set_classification(classification.family, classification.level);
            buckets.members[classification.family.index()].push(index);
        }
        buckets
    }

    /// Cluster indices for `hue`, in bucket order.
    #[inline]
    pub fn get(&self, hue: Hue) -> &[usize] {
        &self.members[hue.index()]
    }

    /// Every family whose member count is wrong, in hue id order.
    pub fn mismatches(&self) -> Vec<HueMismatch> {
        Hue::ALL
            .iter()
            .filter_map(|&hue| {
                let found = self.get(hue).len();
                let expected = hue.expected_members();
                (found != expected).then_some(HueMismatch {
                    hue,
                    found,
                    expected,
                })
            })
            .collect()
    }

    /// `Ok` when every chromatic family has 3 members and black and white
    /// have 1 each; otherwise all offending families.
    pub fn validate(&self) -> Result<(), Vec<HueMismatch>> {
        let mismatches = self.mismatches();
        if mismatches.is_empty() {
            Ok(())
        } else {
            Err(mismatches)
        }
    }

    /// Order each chromatic bucket by ascending level.
    ///
    /// The sort is stable: clusters with equal levels keep discovery order.
    pub fn sort_by_lightness(&mut self, clusters: &ClusterSet) {
        for hue in Hue::CHROMATIC {
            self.members[hue.index()]
                .sort_by_key(|&index| clusters.get(index).map_or(0, Cluster::level));
        }
    }

    /// Bind each bucketed cluster to the palette entry at its position.
    ///
    /// Position `n` of a chromatic bucket receives lightness grade `n`;
    /// black and white receive their single entry. This is purely
    /// positional: buckets are expected to be validated and sorted.
    pub fn associate(&self, clusters: &mut ClusterSet, palette: &PietPalette) {
        for hue in Hue::ALL {
            for (grade, &index) in self.get(hue).iter().enumerate() {
                let Some(color) = palette.get(hue, grade) else {
                    continue;
                };
                if let Some(cluster) = clusters.get_mut(index) {
                    cluster.set_reference(color);
                }
            }
        }
    }

    /// Resolve buckets into cluster listings, for reporting.
    pub fn families<'a>(&self, clusters: &'a ClusterSet) -> Vec<FamilyListing<'a>> {
        Hue::ALL
            .iter()
            .map(|&hue| FamilyListing {
                hue,
                clusters: self
                    .get(hue)
                    .iter()
                    .filter_map(|&index| clusters.get(index))
                    .collect(),
            })
            .collect()
    }
}
