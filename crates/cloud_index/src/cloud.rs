//! Point-cloud preparation applied before indexing.

use std::cmp::Ordering;

use glam::DVec3;

/// Collapse exact duplicate coordinates.
///
/// Output is sorted lexicographically by (x, y, z), so it does not depend on
/// input order. `-0.0` and `0.0` count as the same coordinate.
pub fn dedup_points(mut points: Vec<DVec3>) -> Vec<DVec3> {
  for point in &mut points {
    // Adding +0.0 maps -0.0 to +0.0 and leaves everything else unchanged.
    *point += DVec3::ZERO;
  }
  points.sort_unstable_by(lexicographic);
  points.dedup();
  points
}

fn lexicographic(a: &DVec3, b: &DVec3) -> Ordering {
  a.x
    .total_cmp(&b.x)
    .then_with(|| a.y.total_cmp(&b.y))
    .then_with(|| a.z.total_cmp(&b.z))
}
