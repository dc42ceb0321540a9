//! Test utilities: point-cloud fixtures shared by the unit tests.

use glam::DVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// Fixtures
// =============================================================================

/// The eight corners of the unit cube, `{0,1}^3`, in octant order.
pub fn unit_cube_corners() -> Vec<DVec3> {
  (0u8..8)
    .map(|i| {
      DVec3::new(
        f64::from((i >> 2) & 1),
        f64::from((i >> 1) & 1),
        f64::from(i & 1),
      )
    })
    .collect()
}

/// `n` points drawn uniformly from `[0, extent)^3` with a fixed seed.
pub fn random_cloud(seed: u64, n: usize, extent: f64) -> Vec<DVec3> {
  let mut rng = StdRng::seed_from_u64(seed);
  (0..n)
    .map(|_| {
      DVec3::new(
        rng.random_range(0.0..extent),
        rng.random_range(0.0..extent),
        rng.random_range(0.0..extent),
      )
    })
    .collect()
}

/// Dense blob near the origin plus a sparse shell, for adaptive trees.
pub fn clustered_cloud(seed: u64, dense: usize, sparse: usize) -> Vec<DVec3> {
  let mut points = random_cloud(seed, dense, 1.0);
  points.extend(
    random_cloud(seed.wrapping_add(1), sparse, 16.0)
      .into_iter()
      .map(|p| p + DVec3::splat(2.0)),
  );
  points
}

/// Regular lattice of `side^3` points with the given spacing, origin at zero.
pub fn lattice(side: u32, spacing: f64) -> Vec<DVec3> {
  let mut points = Vec::with_capacity((side * side * side) as usize);
  for x in 0..side {
    for y in 0..side {
      for z in 0..side {
        points.push(DVec3::new(x as f64, y as f64, z as f64) * spacing);
      }
    }
  }
  points
}
