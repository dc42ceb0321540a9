//! Axis-aligned bounding box in double precision.

use glam::{BVec3, DVec3};

use crate::IndexError;

/// Double-precision axis-aligned bounding box.
///
/// Zero-volume boxes are legal: a single point, or planar data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
	/// Minimum corner (inclusive).
	pub min: DVec3,
	/// Maximum corner (inclusive).
	pub max: DVec3,
}

impl Aabb {
	/// Create a new AABB from min and max corners.
	///
	/// # Panics
	/// Debug-asserts that min <= max on all axes.
	pub fn new(min: DVec3, max: DVec3) -> Self {
		debug_assert!(
			min.cmple(max).all(),
			"AABB min must be <= max on all axes"
		);
		Self { min, max }
	}

	/// Tightest box around `points`.
	///
	/// Fails on an empty slice or on any NaN/infinite coordinate.
	pub fn from_points(points: &[DVec3]) -> Result<Self, IndexError> {
		let first = *points.first().ok_or(IndexError::EmptyInput)?;
		let mut aabb = Self {
			min: first,
			max: first,
		};
		for (index, &point) in points.iter().enumerate() {
			if !point.is_finite() {
				return Err(IndexError::NonFinitePoint { index });
			}
			aabb.min = aabb.min.min(point);
			aabb.max = aabb.max.max(point);
		}
		Ok(aabb)
	}

	/// Reject boxes that are inverted or not finite.
	pub(crate) fn validate(&self) -> Result<(), IndexError> {
		if !self.min.is_finite() || !self.max.is_finite() {
			return Err(IndexError::invalid("bounds", "corners must be finite"));
		}
		if !self.min.cmple(self.max).all() {
			return Err(IndexError::invalid("bounds", "min must be <= max on all axes"));
		}
		Ok(())
	}

	/// Check if this AABB contains a point (both faces inclusive).
	#[inline]
	pub fn contains_point(&self, point: DVec3) -> bool {
		point.cmpge(self.min).all() && point.cmple(self.max).all()
	}

	/// Get the size of the AABB (max - min).
	#[inline]
	pub fn size(&self) -> DVec3 {
		self.max - self.min
	}

	/// Largest extent over the three axes.
	#[inline]
	pub fn max_extent(&self) -> f64 {
		self.size().max_element()
	}

	/// Get the center of the AABB.
	#[inline]
	pub fn center(&self) -> DVec3 {
		(self.min + self.max) * 0.5
	}

	/// Box of one octant after splitting at `mid`.
	///
	/// `high` selects the upper half per axis.
	#[inline]
	pub fn octant(&self, mid: DVec3, high: BVec3) -> Self {
		Self {
			min: DVec3::select(high, mid, self.min),
			max: DVec3::select(high, self.max, mid),
		}
	}

	/// Volume (zero for degenerate boxes).
	#[inline]
	pub fn volume(&self) -> f64 {
		self.size().element_product()
	}
}
