//! OccupancyGrid - uniform bucketing of a point cloud into cubic cells.
//!
//! The grid spans the cloud's bounding box. Dimensions per axis are
//!
//! ```text
//! n_i = floor((max_i - min_i) / cell_size) + 1
//! ```
//!
//! and a point lands in cell `floor((p - min) / cell_size)`. Because a point
//! on the max face computes exactly `n_i - 1`, the outer boundary is
//! inclusive and every point is counted once.
//!
//! Buckets are sparse: only non-empty cells are stored.

use std::collections::HashMap;

use glam::{DVec3, U64Vec3};

use crate::{Aabb, IndexError};

/// Summary of a built grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStats {
  /// Cells per axis.
  pub dimensions: U64Vec3,
  /// `nx * ny * nz`.
  pub total_cells: u64,
  /// Cells holding at least one point.
  pub occupied: u64,
  /// `total_cells - occupied`.
  pub empty: u64,
  /// Mean points per occupied cell; 0 when nothing is occupied.
  pub average_points: f64,
}

/// Uniform occupancy grid over a borrowed point set.
#[derive(Clone, Debug)]
pub struct OccupancyGrid<'a> {
  points: &'a [DVec3],
  cell_size: f64,
  bounds: Aabb,
  dimensions: U64Vec3,
  total_cells: u64,
  cells: HashMap<U64Vec3, usize>,
}

/// Cell coordinate of `point` for a grid anchored at `origin`.
///
/// Only valid for points inside the grid: the offset from `origin` is never
/// negative and stays below the `u64` range checked at build time.
#[inline]
fn cell_coord(point: DVec3, origin: DVec3, cell_size: f64) -> U64Vec3 {
  ((point - origin) / cell_size).floor().as_u64vec3()
}

impl<'a> OccupancyGrid<'a> {
  /// Bucket `points` into cells of edge `cell_size`.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "grid::build"))]
  pub fn build(points: &'a [DVec3], cell_size: f64) -> Result<Self, IndexError> {
    if !(cell_size.is_finite() && cell_size > 0.0) {
      return Err(IndexError::invalid("cell_size", "must be finite and > 0"));
    }
    let bounds = Aabb::from_points(points)?;

    let span = (bounds.size() / cell_size).floor();
    // `u64::MAX as f64` rounds up to 2^64, so `>=` rejects everything that
    // would saturate.
    if !span.is_finite() || span.max_element() >= u64::MAX as f64 {
      return Err(IndexError::GridTooLarge { cell_size });
    }
    let dimensions = span.as_u64vec3() + U64Vec3::ONE;
    let total_cells = dimensions
      .x
      .checked_mul(dimensions.y)
      .and_then(|xy| xy.checked_mul(dimensions.z))
      .ok_or(IndexError::GridTooLarge { cell_size })?;

    let mut cells: HashMap<U64Vec3, usize> = HashMap::new();
    {
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("bucket_points").entered();
      for &point in points {
        *cells.entry(cell_coord(point, bounds.min, cell_size)).or_insert(0) += 1;
      }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
      cell_size,
      total_cells,
      occupied = cells.len(),
      "occupancy grid built"
    );

    Ok(Self {
      points,
      cell_size,
      bounds,
      dimensions,
      total_cells,
      cells,
    })
  }

  /// Edge length of a cell.
  pub fn cell_size(&self) -> f64 {
    self.cell_size
  }

  /// Bounding box of the source points (grid origin = `bounds.min`).
  pub fn bounds(&self) -> Aabb {
    self.bounds
  }

  /// Cells per axis.
  pub fn dimensions(&self) -> U64Vec3 {
    self.dimensions
  }

  /// `nx * ny * nz`.
  pub fn total_cells(&self) -> u64 {
    self.total_cells
  }

  /// The source points.
  pub fn points(&self) -> &'a [DVec3] {
    self.points
  }

  /// Cell containing `point`, or `None` outside the grid.
  pub fn cell_of(&self, point: DVec3) -> Option<U64Vec3> {
    let cell = ((point - self.bounds.min) / self.cell_size).floor();
    let inside = cell.cmpge(DVec3::ZERO).all() && cell.cmplt(self.dimensions.as_dvec3()).all();
    inside.then(|| cell.as_u64vec3())
  }

  /// Point count of a cell (0 for empty or out-of-range cells).
  pub fn count_at(&self, cell: U64Vec3) -> usize {
    self.cells.get(&cell).copied().unwrap_or(0)
  }

  /// Non-empty cells with their counts, in no particular order.
  pub fn cells(&self) -> impl Iterator<Item = (U64Vec3, usize)> + '_ {
    self.cells.iter().map(|(&cell, &count)| (cell, count))
  }

  /// Occupancy summary.
  pub fn stats(&self) -> GridStats {
    let occupied = self.cells.len() as u64;
    let average_points = if occupied > 0 {
      self.cells.values().sum::<usize>() as f64 / occupied as f64
    } else {
      0.0
    };
    GridStats {
      dimensions: self.dimensions,
      total_cells: self.total_cells,
      occupied,
      empty: self.total_cells - occupied,
      average_points,
    }
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
