//! OctreeConfig - subdivision thresholds shared by every node of a tree.

use crate::IndexError;

/// Subdivision thresholds.
///
/// A node splits into eight children iff it holds more than `max_points`
/// points AND its largest extent is greater than `min_size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctreeConfig {
  /// Nodes whose largest extent is at or below this size are never split.
  pub min_size: f64,

  /// Nodes holding at most this many points are never split.
  pub max_points: usize,
}

impl OctreeConfig {
  /// Create a config without validating it; `validate` runs at build time.
  pub fn new(min_size: f64, max_points: usize) -> Self {
    Self {
      min_size,
      max_points,
    }
  }

  /// Check `min_size > 0` (and finite) and `max_points >= 1`.
  pub fn validate(&self) -> Result<(), IndexError> {
    if !(self.min_size.is_finite() && self.min_size > 0.0) {
      return Err(IndexError::invalid("min_size", "must be finite and > 0"));
    }
    if self.max_points < 1 {
      return Err(IndexError::invalid("max_points", "must be >= 1"));
    }
    Ok(())
  }

  /// Termination policy for a node with `point_count` points and largest
  /// extent `max_extent`.
  #[inline]
  pub fn should_subdivide(&self, point_count: usize, max_extent: f64) -> bool {
    point_count > self.max_points && max_extent > self.min_size
  }

  /// Upper bound on leaf depth for a root of extent `max_extent`:
  /// `ceil(log2(max_extent / min_size))`, or 0 when the root never splits.
  ///
  /// Counts halvings the way the builder does, so the bound is exact even
  /// where `max_extent / min_size` would round onto a power of two.
  pub fn depth_bound(&self, max_extent: f64) -> u32 {
    if max_extent.is_infinite() {
      return u32::MAX;
    }
    let mut extent = max_extent;
    let mut depth = 0;
    while extent > self.min_size {
      extent *= 0.5;
      depth += 1;
    }
    depth
  }
}

impl Default for OctreeConfig {
  fn default() -> Self {
    Self {
      min_size: 1.0,
      max_points: 100,
    }
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
