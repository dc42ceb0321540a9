//! Hand-off to an external renderer.
//!
//! The core draws nothing. It hands a backend the full point set for a scatter
//! display and one [`LeafBox`] per selected leaf for a wireframe overlay.

use glam::DVec3;

use crate::octree::OctreeNode;
use crate::Aabb;

/// Wireframe box for one leaf: center plus per-axis edge lengths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafBox {
  pub center: DVec3,
  pub lengths: DVec3,
}

impl LeafBox {
  pub fn from_bounds(bounds: &Aabb) -> Self {
    Self {
      center: bounds.center(),
      lengths: bounds.size(),
    }
  }

  /// Corners in octant order (`x * 4 + y * 2 + z`).
  pub fn corners(&self) -> [DVec3; 8] {
    let half = self.lengths * 0.5;
    std::array::from_fn(|i| {
      let sign = DVec3::new(
        if i & 0b100 != 0 { 1.0 } else { -1.0 },
        if i & 0b010 != 0 { 1.0 } else { -1.0 },
        if i & 0b001 != 0 { 1.0 } else { -1.0 },
      );
      self.center + half * sign
    })
  }
}

impl From<&OctreeNode> for LeafBox {
  fn from(node: &OctreeNode) -> Self {
    Self::from_bounds(&node.bounds)
  }
}

/// Something that can display a cloud and its leaf boxes.
pub trait RenderBackend {
  type Error;

  /// Scatter display of every point.
  fn draw_points(&mut self, points: &[DVec3]) -> Result<(), Self::Error>;

  /// Wireframe overlay for one leaf.
  fn draw_leaf_box(&mut self, leaf: &LeafBox) -> Result<(), Self::Error>;
}

/// Send `points` and the boxes of `leaves` to `backend`, in order.
pub fn render_selection<'a, B: RenderBackend>(
  backend: &mut B,
  points: &[DVec3],
  leaves: impl IntoIterator<Item = &'a OctreeNode>,
) -> Result<(), B::Error> {
  backend.draw_points(points)?;
  for leaf in leaves {
    backend.draw_leaf_box(&LeafBox::from(leaf))?;
  }
  Ok(())
}
