//! Parameter-set configuration for comparison runs.
//!
//! ```toml
//! [[parameters]]
//! cell_size = 1.0
//! min_size = 1.0
//! max_points = 100
//! ```

use anyhow::{Context, Result};
use cloud_index::ParameterSet;
use serde::Deserialize;
use std::path::Path;

/// Root configuration: the ordered list of parameter sets to compare.
#[derive(Debug, Deserialize)]
pub struct Config {
	pub parameters: Vec<ParameterConfig>,
}

/// One grid/octree configuration.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ParameterConfig {
	/// Occupancy-grid cell edge.
	pub cell_size: f64,
	/// Octree minimum node size.
	pub min_size: f64,
	/// Octree leaf capacity.
	pub max_points: usize,
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate TOML text.
	pub fn parse(content: &str) -> Result<Self> {
		let config: Config =
			toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		if config.parameters.is_empty() {
			anyhow::bail!("Config must have at least one [[parameters]] entry");
		}
		for (index, set) in config.parameters.iter().enumerate() {
			if !(set.cell_size.is_finite() && set.cell_size > 0.0) {
				anyhow::bail!("parameters[{index}]: cell_size must be > 0, got {}", set.cell_size);
			}
			if !(set.min_size.is_finite() && set.min_size > 0.0) {
				anyhow::bail!("parameters[{index}]: min_size must be > 0, got {}", set.min_size);
			}
			if set.max_points == 0 {
				anyhow::bail!("parameters[{index}]: max_points must be at least 1");
			}
		}

		Ok(config)
	}

	pub fn parameter_sets(&self) -> Vec<ParameterSet> {
		self
			.parameters
			.iter()
			.map(|p| ParameterSet::new(p.cell_size, p.min_size, p.max_points))
			.collect()
	}
}
