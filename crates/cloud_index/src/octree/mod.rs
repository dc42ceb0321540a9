//! Octree module for adaptive spatial subdivision of a point cloud.
//!
//! A node splits into eight octants at the midpoint of each axis when it holds
//! more than `max_points` points and its largest extent exceeds `min_size`.
//! Splitting halves the largest extent, so leaf depth is bounded by
//! `ceil(log2(root extent / min_size))`.
//!
//! # Octant order
//!
//! ```text
//! octant = x * 4 + y * 2 + z      (0 = low half, 1 = high half)
//! ```
//!
//! # Module Structure
//!
//! - [`config`]: `OctreeConfig` - subdivision thresholds
//! - [`node`]: `OctreeNode` - per-node bounds, depth and point range
//! - [`tree`]: `Octree` - arena storage and construction
//! - [`leaves`]: `Leaves` - depth-first leaf iterator
//! - [`stats`]: `OctreeStats` - aggregate counts

pub mod config;
pub mod leaves;
pub mod node;
pub mod stats;
pub mod tree;

// Re-exports
pub use config::OctreeConfig;
pub use leaves::Leaves;
pub use node::{octant_halves, octant_index, NodeId, OctreeNode, OCTANTS};
pub use stats::OctreeStats;
pub use tree::Octree;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
