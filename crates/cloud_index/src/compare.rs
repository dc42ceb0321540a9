//! ComparisonEngine - grid vs. octree statistics over several configurations.
//!
//! Each configuration builds its own grid and tree. They share nothing but the
//! read-only point slice, so configurations run on the rayon pool; results come
//! back in configuration order.

use glam::DVec3;
use rayon::prelude::*;

use crate::grid::{GridStats, OccupancyGrid};
use crate::octree::{Octree, OctreeStats};
use crate::params::ParameterSet;
use crate::{Aabb, IndexError};

/// Statistics of one configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonRow {
  /// The configuration that produced this row.
  pub params: ParameterSet,
  /// Occupancy-grid summary.
  pub grid: GridStats,
  /// Octree summary.
  pub octree: OctreeStats,
}

/// Evaluates parameter configurations against one point cloud.
#[derive(Clone, Copy, Debug)]
pub struct ComparisonEngine<'a> {
  points: &'a [DVec3],
  bounds: Aabb,
}

impl<'a> ComparisonEngine<'a> {
  /// Validate the cloud once; every configuration reuses its bounds.
  pub fn new(points: &'a [DVec3]) -> Result<Self, IndexError> {
    let bounds = Aabb::from_points(points)?;
    Ok(Self { points, bounds })
  }

  /// Bounding box shared by all octrees of this run.
  pub fn bounds(&self) -> Aabb {
    self.bounds
  }

  /// Build and measure one grid and one octree.
  #[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, name = "compare::evaluate", fields(cell_size = params.cell_size))
  )]
  pub fn evaluate(&self, params: &ParameterSet) -> Result<ComparisonRow, IndexError> {
    let grid = OccupancyGrid::build(self.points, params.cell_size)?.stats();
    let octree = Octree::build(self.points, self.bounds, params.octree_config())?.stats();
    Ok(ComparisonRow {
      params: *params,
      grid,
      octree,
    })
  }

  /// Evaluate every configuration; any failure aborts the run.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "compare::run"))]
  pub fn run(&self, configurations: &[ParameterSet]) -> Result<Vec<ComparisonRow>, IndexError> {
    configurations
      .par_iter()
      .map(|params| self.evaluate(params))
      .collect()
  }
}

#[cfg(test)]
#[path = "compare_test.rs"]
mod compare_test;
