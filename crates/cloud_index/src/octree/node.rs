//! OctreeNode - one cell of the arena-backed octree.
//!
//! Nodes never own points directly. Each node covers a contiguous range of
//! the tree's point buffer; children cover disjoint sub-ranges of it.

use std::ops::Range;

use glam::{BVec3, DVec3};

use crate::Aabb;

/// Number of children of an internal node.
pub const OCTANTS: usize = 8;

/// Index of a node inside its tree's arena.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
  /// The root is always the first node in the arena.
  pub const ROOT: Self = Self(0);

  /// Arena position.
  #[inline]
  pub fn index(self) -> usize {
    self.0 as usize
  }

  #[inline]
  pub(crate) fn offset(self, by: usize) -> Self {
    Self(self.0 + by as u32)
  }
}

/// Which half of each axis an octant occupies.
///
/// Octants are numbered axis-major: `octant = x * 4 + y * 2 + z`, so X is the
/// outermost split and Z the innermost. Leaf enumeration order depends on it.
#[inline]
pub fn octant_halves(octant: u8) -> BVec3 {
  debug_assert!((octant as usize) < OCTANTS, "octant must be in 0..8");
  BVec3::new(octant & 0b100 != 0, octant & 0b010 != 0, octant & 0b001 != 0)
}

/// Inverse of [`octant_halves`].
#[inline]
pub fn octant_index(high: BVec3) -> u8 {
  (u8::from(high.x) << 2) | (u8::from(high.y) << 1) | u8::from(high.z)
}

/// A node of the octree.
#[derive(Clone, Debug, PartialEq)]
pub struct OctreeNode {
  /// Region covered by this node.
  pub bounds: Aabb,

  /// Distance from the root (root = 0).
  pub depth: u32,

  /// Root extent halved once per level. Exact in binary floating point, unlike
  /// `bounds.max_extent()`, which is recomputed from rounded midpoints.
  pub(crate) extent: f64,

  /// Slice of the tree's point buffer owned by this node.
  pub(crate) points: Range<usize>,

  /// First of the eight contiguous children, if subdivided.
  pub(crate) first_child: Option<NodeId>,

  /// Per axis: the upper face lies on the root's max face and is inclusive.
  pub(crate) closed_max: BVec3,
}

impl OctreeNode {
  pub(crate) fn root(bounds: Aabb, point_count: usize) -> Self {
    Self {
      bounds,
      depth: 0,
      extent: bounds.max_extent(),
      points: 0..point_count,
      first_child: None,
      closed_max: BVec3::TRUE,
    }
  }

  /// Number of points that fall inside this node.
  #[inline]
  pub fn point_count(&self) -> usize {
    self.points.len()
  }

  /// Largest edge length this node is split against.
  #[inline]
  pub fn extent(&self) -> f64 {
    self.extent
  }

  /// Leaf = no children.
  #[inline]
  pub fn is_leaf(&self) -> bool {
    self.first_child.is_none()
  }

  /// Leaf holding at least one point.
  #[inline]
  pub fn is_occupied_leaf(&self) -> bool {
    self.is_leaf() && !self.points.is_empty()
  }

  /// Ids of the eight children in octant order, or `None` for a leaf.
  pub fn children(&self) -> Option<[NodeId; OCTANTS]> {
    self
      .first_child
      .map(|first| std::array::from_fn(|octant| first.offset(octant)))
  }

  /// Octant of `point` relative to the split at `mid`, or `None` when the
  /// point lies outside this node.
  ///
  /// Intervals are half-open `[low, high)` except on faces that coincide with
  /// the root's maximum face, which are closed so that points sitting exactly
  /// on the cloud's max corner are still assigned.
  pub(crate) fn octant_of(&self, point: DVec3, mid: DVec3) -> Option<u8> {
    let high = point.cmpge(mid);
    let cell = self.bounds.octant(mid, high);
    let above_low = point.cmpge(cell.min);
    let below_high = point.cmplt(cell.max) | (point.cmple(cell.max) & self.closed_max & high);
    (above_low & below_high).all().then(|| octant_index(high))
  }

  /// Child node for `octant` after splitting at `mid`.
  pub(crate) fn child(&self, octant: u8, mid: DVec3, points: Range<usize>) -> Self {
    let high = octant_halves(octant);
    Self {
      bounds: self.bounds.octant(mid, high),
      depth: self.depth + 1,
      extent: self.extent * 0.5,
      points,
      first_child: None,
      closed_max: self.closed_max & high,
    }
  }

  /// Split point, if halving still makes progress on the longest axis.
  ///
  /// Once floating-point precision is exhausted the midpoint collapses onto a
  /// face and the node must stay a leaf.
  pub(crate) fn split_point(&self) -> Option<DVec3> {
    let mid = self.bounds.center();
    let size = self.bounds.size();
    let axis = if size.x >= size.y && size.x >= size.z {
      0
    } else if size.y >= size.z {
      1
    } else {
      2
    };
    (self.bounds.min[axis] < mid[axis] && mid[axis] < self.bounds.max[axis]).then_some(mid)
  }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
