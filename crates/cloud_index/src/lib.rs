//! cloud_index - spatial indexing statistics for 3D point clouds
//!
//! Two structures are built over the same cloud and measured side by side:
//!
//! - **Occupancy grid**: uniform cubic cells anchored at the cloud's minimum
//!   corner, storing a point count per occupied cell
//! - **Octree**: adaptive subdivision that splits a node while it holds more
//!   than `max_points` points and its longest edge exceeds `min_size`
//!
//! [`ComparisonEngine`] evaluates several [`ParameterSet`]s in parallel and
//! [`report`] lays the results out as text columns. For display, [`AutoParams`]
//! derives thresholds from the cloud itself and [`LeafSampler`] caps how many
//! occupied leaves reach a [`RenderBackend`].
//!
//! # Example
//!
//! ```
//! use cloud_index::{dedup_points, ComparisonEngine, ParameterSet};
//! use glam::DVec3;
//!
//! let points = dedup_points(vec![DVec3::ZERO, DVec3::ONE, DVec3::ONE]);
//! let rows = ComparisonEngine::new(&points)?.run(&ParameterSet::defaults())?;
//!
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows[0].grid.occupied, 2);
//! # Ok::<(), cloud_index::IndexError>(())
//! ```

pub mod bounds;
pub mod cloud;
pub mod compare;
pub mod error;
pub mod grid;
pub mod octree;
pub mod params;
pub mod render;
pub mod report;
pub mod sampler;

pub use bounds::Aabb;
pub use cloud::dedup_points;
pub use compare::{ComparisonEngine, ComparisonRow};
pub use error::IndexError;
pub use grid::{GridStats, OccupancyGrid};
pub use octree::{Octree, OctreeConfig, OctreeNode, OctreeStats};
pub use params::{AutoParams, ParameterSet};
pub use render::{render_selection, LeafBox, RenderBackend};
pub use report::render_report;
pub use sampler::LeafSampler;

#[cfg(test)]
mod test_utils;
