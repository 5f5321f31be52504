//! A single discovered color.

use crate::color::{Hue, Rgb, CHANNELS};

/// An accumulated color discovered from one or more similar pixels.
///
/// The average is maintained incrementally: merging a sample computes
/// `floor((average * weight + sample) / (weight + 1))` per channel, so the
/// result depends on merge order. Classification fields start unset and are
/// filled exactly once by the hue classifier and the palette associator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    average: Rgb,
    weight: u64,
    family: Option<Hue>,
    level: u32,
    reference: Option<Rgb>,
}

impl Cluster {
    /// Start a cluster from its first sample.
    pub fn new(sample: Rgb) -> Self {
        Self {
            average: sample,
            weight: 1,
            family: None,
            level: 0,
            reference: None,
        }
    }

    /// Merge a sample into the running average.
    ///
    /// ```
    /// use piet_palette::{Cluster, Rgb};
    ///
    /// let mut cluster = Cluster::new(Rgb::new(100, 100, 100));
    /// cluster.merge(Rgb::new(102, 100, 100));
    /// assert_eq!(cluster.average(), Rgb::new(101, 100, 100));
    /// assert_eq!(cluster.weight(), 2);
    /// ```
    pub fn merge(&mut self, sample: Rgb) {
        let weight = self.weight;
        let current = self.average.to_bytes();
        let incoming = sample.to_bytes();
        let mut merged = [0u8; CHANNELS];
        for channel in 0..CHANNELS {
            let total = u64::from(current[channel]) * weight + u64::from(incoming[channel]);
            // The mean of u8 values never exceeds u8::MAX
            merged[channel] = (total / (weight + 1)) as u8;
        }
        self.average = Rgb::from_bytes(merged);
        self.weight += 1;
    }

    /// Whether `sample` belongs to this cluster under `tolerance`.
    #[inline]
    pub fn matches(&self, sample: Rgb, tolerance: u32) -> bool {
        self.average.within(sample, tolerance)
    }

    /// Running mean of all merged samples.
    #[inline]
    pub fn average(&self) -> Rgb {
        self.average
    }

    /// Number of merged samples (at least 1).
    #[inline]
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Hue family, once classified.
    #[inline]
    pub fn family(&self) -> Option<Hue> {
        self.family
    }

    /// Brightness level used to order clusters within a hue.
    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Canonical palette color, once associated.
    #[inline]
    pub fn reference(&self) -> Option<Rgb> {
        self.reference
    }

    pub(crate) fn set_classification(&mut self, family: Hue, level: u32) {
        self.family = Some(family);
        self.level = level;
    }

    pub(crate) fn set_reference(&mut self, reference: Rgb) {
        self.reference = Some(reference);
    }
}
