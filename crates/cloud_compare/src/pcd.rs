//! ASCII PCD reader.
//!
//! Everything up to and including the `DATA ascii` line is header and is
//! skipped. Each following line contributes the first three fields as a point;
//! lines with fewer than three fields are ignored.

use glam::DVec3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PcdError {
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),

	#[error("no `DATA ascii` line found")]
	MissingData,

	#[error("line {line}: expected three numbers, found {content:?}")]
	BadPoint { line: usize, content: String },
}

fn is_data_marker(line: &str) -> bool {
	let mut fields = line.split_whitespace();
	matches!(
		(fields.next(), fields.next(), fields.next()),
		(Some(key), Some(kind), None)
			if key.eq_ignore_ascii_case("data") && kind.eq_ignore_ascii_case("ascii")
	)
}

/// Read every point from an ASCII PCD stream.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<DVec3>, PcdError> {
	let mut lines = reader.lines().enumerate();

	let mut found = false;
	for (_, line) in lines.by_ref() {
		if is_data_marker(&line?) {
			found = true;
			break;
		}
	}
	if !found {
		return Err(PcdError::MissingData);
	}

	let mut points = Vec::new();
	for (index, line) in lines {
		let line = line?;
		let fields: Vec<&str> = line.split_whitespace().take(3).collect();
		if fields.len() < 3 {
			continue;
		}
		let parse = |field: &str| field.parse::<f64>();
		match (parse(fields[0]), parse(fields[1]), parse(fields[2])) {
			(Ok(x), Ok(y), Ok(z)) => points.push(DVec3::new(x, y, z)),
			_ => {
				return Err(PcdError::BadPoint {
					line: index + 1,
					content: line.trim().to_string(),
				})
			}
		}
	}

	Ok(points)
}

/// Open and read a PCD file.
pub fn read_path(path: &Path) -> Result<Vec<DVec3>, PcdError> {
	read_points(BufReader::new(File::open(path)?))
}
