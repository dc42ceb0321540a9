//! Wavefront OBJ output for the view command.
//!
//! Points become bare `v` records. Each leaf box adds its eight corners and
//! twelve `l` edge records, so any OBJ viewer shows the cloud with a wireframe
//! overlay.

use cloud_index::{LeafBox, RenderBackend};
use glam::DVec3;
use std::io::{self, Write};

/// Corner pairs forming the edges of a box, corners in octant order.
const BOX_EDGES: [(usize, usize); 12] = [
	// along z
	(0, 1),
	(2, 3),
	(4, 5),
	(6, 7),
	// along y
	(0, 2),
	(1, 3),
	(4, 6),
	(5, 7),
	// along x
	(0, 4),
	(1, 5),
	(2, 6),
	(3, 7),
];

/// [`RenderBackend`] streaming OBJ records to a writer.
pub struct ObjWriter<W: Write> {
	out: W,
	/// Vertices written so far; OBJ indices are 1-based.
	vertices: usize,
}

impl<W: Write> ObjWriter<W> {
	pub fn new(out: W) -> Self {
		Self { out, vertices: 0 }
	}

	/// Flush and hand back the writer.
	pub fn finish(mut self) -> io::Result<W> {
		self.out.flush()?;
		Ok(self.out)
	}

	fn vertex(&mut self, p: DVec3) -> io::Result<()> {
		self.vertices += 1;
		writeln!(self.out, "v {} {} {}", p.x, p.y, p.z)
	}
}

impl<W: Write> RenderBackend for ObjWriter<W> {
	type Error = io::Error;

	fn draw_points(&mut self, points: &[DVec3]) -> io::Result<()> {
		writeln!(self.out, "o points")?;
		for &p in points {
			self.vertex(p)?;
		}
		Ok(())
	}

	fn draw_leaf_box(&mut self, leaf: &LeafBox) -> io::Result<()> {
		let base = self.vertices + 1;
		for corner in leaf.corners() {
			self.vertex(corner)?;
		}
		for (a, b) in BOX_EDGES {
			writeln!(self.out, "l {} {}", base + a, base + b)?;
		}
		Ok(())
	}
}
