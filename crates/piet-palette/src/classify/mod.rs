//! Hue classification and palette association
//!
//! [`classify_color`] assigns a family and a brightness level to one color.
//! [`HueBuckets`] applies it to a whole [`ClusterSet`](crate::ClusterSet),
//! validates the family sizes, orders each chromatic family by level and
//! binds every cluster to its canonical palette slot.

mod buckets;
mod classifier;

pub use buckets::{FamilyListing, HueBuckets, HueMismatch};
pub use classifier::{classify_color, Classification};
