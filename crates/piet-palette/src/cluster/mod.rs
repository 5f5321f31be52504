//! Color discovery
//!
//! A single scan over the pixels builds a [`ClusterSet`]: each pixel either
//! merges into the first existing [`Cluster`] within tolerance or starts a
//! new one.

mod cluster;
mod cluster_set;

pub use cluster::Cluster;
pub use cluster_set::ClusterSet;
