//! Point-cloud occupancy analysis.
//!
//! `compare` prints side-by-side occupancy grid and octree statistics for each
//! parameter set. `view` builds an octree with parameters derived from the
//! cloud and writes the points plus a sample of occupied leaf boxes as an OBJ
//! wireframe.
//!
//! Progress goes to stderr through `tracing`; set `RUST_LOG` to adjust.

mod config;
mod obj;
mod pcd;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cloud_index::{
	dedup_points, render_report, render_selection, Aabb, AutoParams, ComparisonEngine,
	LeafSampler, Octree, OctreeNode, ParameterSet,
};
use glam::DVec3;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use web_time::Instant;

use config::Config;
use obj::ObjWriter;

/// Occupancy grid vs. octree analysis for PCD point clouds.
#[derive(Parser, Debug)]
#[command(name = "cloud_compare")]
#[command(about = "Compares occupancy grids and octrees over PCD point clouds")]
struct Args {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print grid and octree statistics for each parameter set.
	Compare {
		/// PCD files, or directories whose `.pcd` files are all analyzed.
		#[arg(required = true)]
		paths: Vec<PathBuf>,

		/// TOML file with `[[parameters]]` entries (default: built-in sets).
		#[arg(short, long)]
		config: Option<PathBuf>,
	},
	/// Build an auto-tuned octree and export a wireframe of its leaves.
	View {
		/// PCD file to load.
		path: PathBuf,

		/// Cap on exported leaf boxes (default: points / 10, at most 10000;
		/// clouds under 10 points export every leaf).
		#[arg(long)]
		max_leaves: Option<usize>,

		/// OBJ file to write.
		#[arg(short, long, default_value = "leaves.obj")]
		output: PathBuf,
	},
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.with_writer(std::io::stderr)
		.init();

	match Args::parse().command {
		Command::Compare { paths, config } => compare(&paths, config.as_deref()),
		Command::View {
			path,
			max_leaves,
			output,
		} => view(&path, max_leaves, &output),
	}
}

fn compare(paths: &[PathBuf], config: Option<&Path>) -> Result<()> {
	let parameters = match config {
		Some(path) => {
			info!("Loading config from: {}", path.display());
			Config::load(path)?.parameter_sets()
		}
		None => ParameterSet::defaults(),
	};

	let files = collect_pcd_files(paths)?;
	if files.is_empty() {
		anyhow::bail!("No .pcd files found");
	}
	info!(
		files = files.len(),
		configurations = parameters.len(),
		"starting comparison"
	);

	for file in &files {
		let points = load_cloud(file)?;
		let rows = ComparisonEngine::new(&points)
			.and_then(|engine| engine.run(&parameters))
			.with_context(|| format!("Failed to index: {}", file.display()))?;
		print!("{}", render_report(&display_name(file), &rows));
	}

	Ok(())
}

fn view(path: &Path, max_leaves: Option<usize>, output: &Path) -> Result<()> {
	let points = load_cloud(path)?;
	let bounds = Aabb::from_points(&points)
		.with_context(|| format!("Failed to index: {}", path.display()))?;

	let auto = AutoParams::derive(points.len(), &bounds);
	// A derived cap of 0 only means the cloud is tiny; show everything then.
	let sampler = match max_leaves {
		Some(cap) => Some(LeafSampler::new(cap)),
		None if auto.max_leaves == 0 => None,
		None => Some(auto.sampler()),
	};
	info!(
		min_size = auto.min_size,
		max_points = auto.max_points,
		max_leaves = ?sampler.map(|s| s.cap),
		"auto parameters"
	);

	let start = Instant::now();
	let tree = Octree::build(&points, bounds, auto.octree_config())
		.with_context(|| format!("Failed to build octree: {}", path.display()))?;
	info!(
		nodes = tree.len(),
		elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
		"octree built"
	);

	let occupied: Vec<&OctreeNode> = tree.occupied_leaves().collect();
	let shown = match sampler {
		Some(sampler) => sampler.select(&occupied),
		None => occupied.clone(),
	};
	info!(occupied = occupied.len(), shown = shown.len(), "leaves selected");

	let file = File::create(output)
		.with_context(|| format!("Failed to create: {}", output.display()))?;
	let mut writer = ObjWriter::new(BufWriter::new(file));
	render_selection(&mut writer, &points, shown.iter().copied())
		.and_then(|()| writer.finish().map(drop))
		.with_context(|| format!("Failed to write: {}", output.display()))?;

	info!("Wireframe written to: {}", output.display());
	Ok(())
}

/// Read and deduplicate one cloud.
fn load_cloud(path: &Path) -> Result<Vec<DVec3>> {
	let raw = pcd::read_path(path).with_context(|| format!("Failed to read: {}", path.display()))?;
	let read = raw.len();
	let points = dedup_points(raw);
	info!(
		file = %path.display(),
		read,
		unique = points.len(),
		"points loaded"
	);
	Ok(points)
}

/// Expand directories into their `.pcd` files, sorted by name.
fn collect_pcd_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
	let mut files = Vec::new();
	for path in paths {
		if !path.is_dir() {
			files.push(path.clone());
			continue;
		}
		let entries = std::fs::read_dir(path)
			.with_context(|| format!("Failed to list: {}", path.display()))?;
		let mut found = Vec::new();
		for entry in entries {
			let entry_path = entry?.path();
			let is_pcd = entry_path
				.extension()
				.is_some_and(|ext| ext.eq_ignore_ascii_case("pcd"));
			if is_pcd && entry_path.is_file() {
				found.push(entry_path);
			}
		}
		found.sort();
		files.extend(found);
	}
	Ok(files)
}

fn display_name(path: &Path) -> String {
	path
		.file_name()
		.map(|name| name.to_string_lossy().into_owned())
		.unwrap_or_else(|| path.display().to_string())
}
