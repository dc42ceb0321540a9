//! Octree - arena storage and top-down construction.

use glam::DVec3;

use super::node::{NodeId, OctreeNode, OCTANTS};
use super::{Leaves, OctreeConfig, OctreeStats};
use crate::{Aabb, IndexError};

/// Bucket for points that fall in no octant (outside caller-supplied bounds).
const OUTSIDE: u8 = OCTANTS as u8;

/// Adaptive octree over a point set.
///
/// Nodes live in a flat arena; the eight children of a node are stored
/// contiguously. Points are copied once into a buffer that construction
/// reorders so every node owns a contiguous range of it.
#[derive(Clone, Debug)]
pub struct Octree {
  config: OctreeConfig,
  points: Vec<DVec3>,
  nodes: Vec<OctreeNode>,
}

impl Octree {
  /// Build a tree over `points` with root region `bounds`.
  ///
  /// The root owns every input point. Points outside `bounds` are never
  /// handed to a child.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "octree::build"))]
  pub fn build(points: &[DVec3], bounds: Aabb, config: OctreeConfig) -> Result<Self, IndexError> {
    config.validate()?;
    bounds.validate()?;
    if points.is_empty() {
      return Err(IndexError::EmptyInput);
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
      return Err(IndexError::NonFinitePoint { index });
    }

    let mut tree = Self {
      config,
      points: points.to_vec(),
      nodes: vec![OctreeNode::root(bounds, points.len())],
    };
    tree.subdivide_all();

    #[cfg(feature = "tracing")]
    tracing::debug!(
      points = tree.points.len(),
      nodes = tree.nodes.len(),
      min_size = config.min_size,
      max_points = config.max_points,
      "octree built"
    );

    Ok(tree)
  }

  /// Build a tree whose root is the bounding box of `points`.
  pub fn from_points(points: &[DVec3], config: OctreeConfig) -> Result<Self, IndexError> {
    let bounds = Aabb::from_points(points)?;
    Self::build(points, bounds, config)
  }

  /// Iterative top-down subdivision driven by an explicit work stack.
  fn subdivide_all(&mut self) {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("subdivide").entered();

    let mut stack = vec![NodeId::ROOT];
    let mut codes: Vec<u8> = Vec::new();
    let mut scratch: Vec<DVec3> = Vec::new();

    while let Some(id) = stack.pop() {
      let node = &self.nodes[id.index()];
      if !self.config.should_subdivide(node.point_count(), node.extent) {
        continue;
      }
      let Some(mid) = node.split_point() else {
        continue;
      };

      let range = node.points.clone();
      let slice = &mut self.points[range.clone()];

      codes.clear();
      codes.extend(slice.iter().map(|&p| node.octant_of(p, mid).unwrap_or(OUTSIDE)));

      // Counting sort by octant; OUTSIDE points end up after the children.
      let mut starts = [0usize; OCTANTS + 1];
      for &code in &codes {
        if code != OUTSIDE {
          starts[code as usize + 1] += 1;
        }
      }
      for octant in 1..=OCTANTS {
        starts[octant] += starts[octant - 1];
      }
      let mut cursor = starts;
      let mut outside = starts[OCTANTS];

      scratch.clear();
      scratch.resize(slice.len(), DVec3::ZERO);
      for (&point, &code) in slice.iter().zip(&codes) {
        let slot = if code == OUTSIDE {
          &mut outside
        } else {
          &mut cursor[code as usize]
        };
        scratch[*slot] = point;
        *slot += 1;
      }
      slice.copy_from_slice(&scratch);

      let children: [OctreeNode; OCTANTS] = std::array::from_fn(|octant| {
        let start = range.start + starts[octant];
        let end = range.start + starts[octant + 1];
        node.child(octant as u8, mid, start..end)
      });

      let first = NodeId(self.nodes.len() as u32);
      self.nodes[id.index()].first_child = Some(first);
      self.nodes.extend(children);
      stack.extend((0..OCTANTS).rev().map(|octant| first.offset(octant)));
    }
  }

  /// Subdivision thresholds shared by all nodes.
  pub fn config(&self) -> OctreeConfig {
    self.config
  }

  /// Root region.
  pub fn bounds(&self) -> Aabb {
    self.root().bounds
  }

  /// The root node.
  pub fn root(&self) -> &OctreeNode {
    &self.nodes[NodeId::ROOT.index()]
  }

  /// Node by id.
  ///
  /// # Panics
  /// If `id` does not belong to this tree.
  pub fn node(&self, id: NodeId) -> &OctreeNode {
    &self.nodes[id.index()]
  }

  /// All nodes in arena order (root first).
  pub fn nodes(&self) -> &[OctreeNode] {
    &self.nodes
  }

  /// Total number of nodes.
  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  /// Always false: a tree has at least its root.
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Points that fall inside `node`.
  pub fn points_of(&self, node: &OctreeNode) -> &[DVec3] {
    &self.points[node.points.clone()]
  }

  /// All points in tree order.
  pub fn points(&self) -> &[DVec3] {
    &self.points
  }

  /// Children of `node` in octant order, or `None` for a leaf.
  pub fn children_of(&self, node: &OctreeNode) -> Option<&[OctreeNode]> {
    node
      .first_child
      .map(|first| &self.nodes[first.index()..first.index() + OCTANTS])
  }

  /// Depth-first leaf enumeration in octant order.
  pub fn leaves(&self) -> Leaves<'_> {
    Leaves::new(self)
  }

  /// Occupied leaves, in the same order as [`Octree::leaves`].
  pub fn occupied_leaves(&self) -> impl Iterator<Item = &OctreeNode> + '_ {
    self.leaves().filter(|leaf| leaf.point_count() > 0)
  }

  /// Aggregate statistics (one pass over the arena).
  pub fn stats(&self) -> OctreeStats {
    OctreeStats::collect(self.nodes.iter())
  }
}
