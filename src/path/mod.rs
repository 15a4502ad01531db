mod core;
mod lookup;
mod manipulators;
mod smoothing;

use crate::bezier::CubicBezier;
use crate::point::PathPoint;
use glam::{DVec2, DVec3};
use std::ops::Index;

/// A piecewise cubic Bézier path stored as a flat, ordered control-point buffer.
///
/// Points at indices divisible by 3 are anchors (on-curve waypoints); the two indices between a
/// pair of anchors are the control points shaping the curve on either side. The buffer length is
/// `≡ 1 (mod 3)` while the path is open and a multiple of 3 once it is closed. Every mutation
/// entry point leaves the buffer in a fully valid state; there is no separate commit step.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezierPath<P: PathPoint> {
	points: Vec<P>,
	closed: bool,
	auto_smoothing: bool,
}

/// A planar path over [`DVec2`] points.
pub type BezierPath2D = BezierPath<DVec2>;
/// A spatial path over [`DVec3`] points.
pub type BezierPath3D = BezierPath<DVec3>;

/// Iteration structure for iterating across each segment of a [`BezierPath`], using an intermediate
/// [`CubicBezier`] representation.
pub struct SegmentIter<'a, P: PathPoint> {
	index: usize,
	path: &'a BezierPath<P>,
}

impl<P: PathPoint> Index<usize> for BezierPath<P> {
	type Output = P;

	fn index(&self, index: usize) -> &Self::Output {
		assert!(index < self.len(), "Index out of bounds in trait Index of BezierPath.");
		&self.points[index]
	}
}

impl<P: PathPoint> Iterator for SegmentIter<'_, P> {
	type Item = CubicBezier<P>;

	// Returns the cubic representation of each segment, defined between a pair of consecutive anchors.
	fn next(&mut self) -> Option<Self::Item> {
		if self.index >= self.path.len_segments() {
			return None;
		}
		let segment_index = self.index;
		self.index += 1;

		Some(self.path.segment(segment_index))
	}
}
