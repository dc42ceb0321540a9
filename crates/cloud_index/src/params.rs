//! Parameter configurations: explicit sets for comparison runs and
//! auto-derived sets for visualization.

use crate::octree::OctreeConfig;
use crate::{Aabb, LeafSampler};

/// One comparison configuration: a grid cell size plus octree thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterSet {
  /// Occupancy-grid cell edge.
  pub cell_size: f64,
  /// Octree minimum node size.
  pub min_size: f64,
  /// Octree maximum points per leaf before splitting.
  pub max_points: usize,
}

impl ParameterSet {
  pub fn new(cell_size: f64, min_size: f64, max_points: usize) -> Self {
    Self {
      cell_size,
      min_size,
      max_points,
    }
  }

  /// Octree half of the configuration.
  pub fn octree_config(&self) -> OctreeConfig {
    OctreeConfig::new(self.min_size, self.max_points)
  }

  /// The three configurations the comparison runs when none are given.
  pub fn defaults() -> Vec<Self> {
    vec![
      Self::new(1.0, 1.0, 100),
      Self::new(0.5, 0.5, 100),
      Self::new(3.0, 1.0, 300),
    ]
  }
}

/// Fraction of the largest extent used as `min_size`.
pub const MIN_SIZE_DIVISOR: f64 = 50.0;
/// Points per `max_points` unit.
pub const POINTS_PER_LEAF_UNIT: usize = 1000;
/// Floor for `max_points`.
pub const MIN_MAX_POINTS: usize = 10;
/// Points per displayed leaf.
pub const POINTS_PER_DISPLAYED_LEAF: usize = 10;
/// Ceiling for displayed leaves.
pub const MAX_DISPLAYED_LEAVES: usize = 10_000;
/// `min_size` for clouds with zero extent; such a root never splits.
pub const DEGENERATE_MIN_SIZE: f64 = 1.0;

/// Parameters derived from cloud size and extent for visualization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoParams {
  /// `max_dim / 50`.
  pub min_size: f64,
  /// `max(N / 1000, 10)`.
  pub max_points: usize,
  /// `min(N / 10, 10000)`.
  pub max_leaves: usize,
}

impl AutoParams {
  /// Derive parameters for `point_count` points spanning `bounds`.
  pub fn derive(point_count: usize, bounds: &Aabb) -> Self {
    // Tiny extents can underflow to zero after the division.
    let min_size = bounds.max_extent() / MIN_SIZE_DIVISOR;
    let min_size = if min_size > 0.0 {
      min_size
    } else {
      DEGENERATE_MIN_SIZE
    };
    Self {
      min_size,
      max_points: (point_count / POINTS_PER_LEAF_UNIT).max(MIN_MAX_POINTS),
      max_leaves: (point_count / POINTS_PER_DISPLAYED_LEAF).min(MAX_DISPLAYED_LEAVES),
    }
  }

  pub fn octree_config(&self) -> OctreeConfig {
    OctreeConfig::new(self.min_size, self.max_points)
  }

  pub fn sampler(&self) -> LeafSampler {
    LeafSampler::new(self.max_leaves)
  }
}

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;
