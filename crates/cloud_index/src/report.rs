//! Side-by-side text report, one column per configuration.
//!
//! ```text
//! ----------------------------------------
//! Analyzing: a.pcd      | Analyzing: a.pcd
//! ...                   | ...
//! ----------------------------------------
//! ```
//!
//! Each column is as wide as its longest line plus [`COLUMN_PADDING`].

use std::fmt::Write;

use crate::compare::ComparisonRow;

/// Blank characters appended after a column's longest line.
pub const COLUMN_PADDING: usize = 2;
/// Delimiter between adjacent columns.
pub const SEPARATOR: &str = " | ";

/// Rendered lines for one configuration.
///
/// Sizes print with `Debug` so whole numbers keep their `.0`.
pub fn column_lines(name: &str, row: &ComparisonRow) -> Vec<String> {
  let ComparisonRow {
    params,
    grid,
    octree,
  } = row;
  vec![
    format!("Analyzing: {name}"),
    "Comparative Analysis".to_string(),
    format!("File: {name}"),
    "Grid:".to_string(),
    format!("  cell_size: {:?}", params.cell_size),
    format!("  total_cells: {}", grid.total_cells),
    format!("  occupied: {}", grid.occupied),
    format!("  empty: {}", grid.empty),
    format!("  avg_points: {:.2}", grid.average_points),
    "Octree:".to_string(),
    format!(
      "  min_size: {:?}, max_points: {}",
      params.min_size, params.max_points
    ),
    format!("  total_nodes: {}", octree.total_nodes),
    format!("  leaves: {}", octree.leaves),
    format!("  internal: {}", octree.internal),
    format!("  occupied_leaves: {}", octree.occupied_leaves),
    format!("  empty_leaves: {}", octree.empty_leaves),
    format!("  avg_points: {:.2}", octree.average_points_per_occupied_leaf),
  ]
}

/// Lay out columns side by side between two dashed borders.
///
/// Shorter columns are padded with blank rows. Returns an empty string when
/// there are no columns.
pub fn render_columns(columns: &[Vec<String>]) -> String {
  if columns.is_empty() {
    return String::new();
  }

  let widths: Vec<usize> = columns
    .iter()
    .map(|lines| {
      lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        + COLUMN_PADDING
    })
    .collect();
  let rows = columns.iter().map(Vec::len).max().unwrap_or(0);
  let total_width =
    widths.iter().sum::<usize>() + SEPARATOR.len() * (columns.len() - 1);
  let border = "-".repeat(total_width);

  let mut out = String::new();
  out.push_str(&border);
  out.push('\n');
  for row in 0..rows {
    for (index, (lines, &width)) in columns.iter().zip(&widths).enumerate() {
      if index > 0 {
        out.push_str(SEPARATOR);
      }
      let cell = lines.get(row).map(String::as_str).unwrap_or("");
      // Writing to a String cannot fail.
      let _ = write!(out, "{cell:<width$}");
    }
    out.push('\n');
  }
  out.push_str(&border);
  out.push('\n');
  out
}

/// Full report for one file.
pub fn render_report(name: &str, rows: &[ComparisonRow]) -> String {
  let columns: Vec<Vec<String>> = rows.iter().map(|row| column_lines(name, row)).collect();
  render_columns(&columns)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
