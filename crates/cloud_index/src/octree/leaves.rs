//! Leaves - depth-first leaf enumeration.
//!
//! Order is fixed by the octant numbering, so two traversals of the same tree
//! (or of two trees built from the same input) yield leaves in the same order.

use super::node::{NodeId, OctreeNode};
use super::Octree;

/// Depth-first iterator over the leaves of an [`Octree`].
///
/// Single pass; call [`Octree::leaves`] again to restart.
#[derive(Clone, Debug)]
pub struct Leaves<'a> {
  tree: &'a Octree,
  stack: Vec<NodeId>,
}

impl<'a> Leaves<'a> {
  pub(crate) fn new(tree: &'a Octree) -> Self {
    Self {
      tree,
      stack: vec![NodeId::ROOT],
    }
  }
}

impl<'a> Iterator for Leaves<'a> {
  type Item = &'a OctreeNode;

  fn next(&mut self) -> Option<Self::Item> {
    while let Some(id) = self.stack.pop() {
      let node = self.tree.node(id);
      match node.children() {
        None => return Some(node),
        // Reversed so octant 0 is popped first.
        Some(children) => self.stack.extend(children.into_iter().rev()),
      }
    }
    None
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    // Every pending subtree holds at least one leaf.
    (self.stack.len(), Some(self.tree.len()))
  }
}

#[cfg(test)]
#[path = "leaves_test.rs"]
mod leaves_test;
