//! Online first-match clustering of samples.

use super::cluster::Cluster;
use crate::color::Rgb;

/// Ordered, append-only list of clusters discovered under one tolerance.
///
/// Lookup is a linear scan in creation order that stops at the first
/// cluster within tolerance. This is first-match, not nearest-match: a
/// sample can land in an earlier, worse-fitting cluster when a later one
/// would be closer. Cluster membership and the final count depend on it,
/// so it must stay that way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterSet {
    clusters: Vec<Cluster>,
    tolerance: u32,
}

impl ClusterSet {
    /// Create an empty set using `tolerance` as the per-channel match limit.
    pub fn new(tolerance: u32) -> Self {
        Self {
            clusters: Vec::new(),
            tolerance,
        }
    }

    /// Cluster every sample in scan order.
    ///
    /// ```
    /// use piet_palette::{ClusterSet, Rgb};
    ///
    /// let pixels = [
    ///     Rgb::new(0, 0, 0),
    ///     Rgb::new(255, 255, 255),
    ///     Rgb::new(4, 2, 0),
    /// ];
    /// let set = ClusterSet::from_samples(pixels.iter().copied(), 10);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.get(0).unwrap().weight(), 2);
    /// ```
    pub fn from_samples<I>(samples: I, tolerance: u32) -> Self
    where
        I: IntoIterator<Item = Rgb>,
    {
        let mut set = Self::new(tolerance);
        for sample in samples {
            set.insert(sample);
        }
        set
    }

    /// Merge `sample` into its first matching cluster, or append a new one.
    ///
    /// Returns the index of the cluster that received the sample.
    pub fn insert(&mut self, sample: Rgb) -> usize {
        match self.find(sample) {
            Some(index) => {
                self.clusters[index].merge(sample);
                index
            }
            None => {
                self.clusters.push(Cluster::new(sample));
                self.clusters.len() - 1
            }
        }
    }

    /// Index of the first cluster (in creation order) matching `sample`.
    pub fn find(&self, sample: Rgb) -> Option<usize> {
        self.clusters
            .iter()
            .position(|cluster| cluster.matches(sample, self.tolerance))
    }

    /// First matching cluster.
    pub fn lookup(&self, sample: Rgb) -> Option<&Cluster> {
        self.find(sample).map(|index| &self.clusters[index])
    }

    #[inline]
    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Cluster> {
        self.clusters.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cluster> {
        self.clusters.iter()
    }

    pub fn as_slice(&self) -> &[Cluster] {
        &self.clusters
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Cluster> {
        self.clusters.get_mut(index)
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Cluster> {
        self.clusters.iter_mut()
    }
}

impl<'a> IntoIterator for &'a ClusterSet {
    type Item = &'a Cluster;
    type IntoIter = std::slice::Iter<'a, Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
