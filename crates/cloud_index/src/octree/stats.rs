//! Aggregate statistics over an octree.

use super::OctreeNode;

/// Statistics gathered from every node of a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OctreeStats {
  /// All nodes (`leaves + internal`).
  pub total_nodes: usize,
  /// Nodes without children.
  pub leaves: usize,
  /// Nodes with eight children.
  pub internal: usize,
  /// Leaves holding at least one point.
  pub occupied_leaves: usize,
  /// Leaves holding no point.
  pub empty_leaves: usize,
  /// Mean point count over occupied leaves; 0 when there are none.
  pub average_points_per_occupied_leaf: f64,
  /// Deepest leaf (root = 0).
  pub max_depth: u32,
}

impl OctreeStats {
  pub(crate) fn collect<'a>(nodes: impl IntoIterator<Item = &'a OctreeNode>) -> Self {
    let mut stats = Self::default();
    let mut occupied_points = 0usize;

    for node in nodes {
      stats.total_nodes += 1;
      stats.max_depth = stats.max_depth.max(node.depth);
      if !node.is_leaf() {
        stats.internal += 1;
        continue;
      }
      stats.leaves += 1;
      match node.point_count() {
        0 => stats.empty_leaves += 1,
        count => {
          stats.occupied_leaves += 1;
          occupied_points += count;
        }
      }
    }

    if stats.occupied_leaves > 0 {
      stats.average_points_per_occupied_leaf =
        occupied_points as f64 / stats.occupied_leaves as f64;
    }
    stats
  }
}
