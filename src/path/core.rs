use super::*;

/// Functionality relating to core `BezierPath` operations, such as constructors and read-only queries.
impl<P: PathPoint> BezierPath<P> {
	/// Create the default two-anchor open path around `center`: one anchor a unit to either side,
	/// with the two control points offset diagonally between them to give the initial curve shape.
	pub fn new(center: P) -> Self {
		let points = vec![center + -P::X, center + (-P::X + P::Y) * 0.5, center + (P::X + -P::Y) * 0.5, center + P::X];
		Self {
			points,
			closed: false,
			auto_smoothing: false,
		}
	}

	/// Returns the number of points in the buffer, counting anchors and control points alike.
	pub fn len(&self) -> usize {
		self.points.len()
	}

	/// Returns true if the buffer contains no points.
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// Returns the number of cubic segments: one per consecutive anchor pair, plus the wrapping
	/// segment back to the first anchor when the path is closed.
	pub fn len_segments(&self) -> usize {
		if self.closed {
			self.points.len() / 3
		} else {
			(self.points.len() - 1) / 3
		}
	}

	/// Get whether the last anchor wraps back to the first, forming a loop.
	pub fn closed(&self) -> bool {
		self.closed
	}

	/// Get whether control points are derived automatically from neighboring anchors.
	pub fn auto_smoothing(&self) -> bool {
		self.auto_smoothing
	}

	/// Returns a slice of the whole control-point buffer in path order.
	pub fn points(&self) -> &[P] {
		&self.points
	}

	/// Returns the positions of every anchor in path order.
	pub fn anchors(&self) -> Vec<P> {
		self.points.iter().copied().step_by(3).collect()
	}

	/// Returns the `(anchor, control, control, anchor)` tuple of the segment at `segment_index`,
	/// wrapping the final anchor around to the start for the last segment of a closed path.
	/// The index must reference a valid segment.
	pub fn points_in_segment(&self, segment_index: usize) -> [P; 4] {
		assert!(segment_index < self.len_segments(), "Segment index out of bounds in points_in_segment.");
		[
			self.points[segment_index * 3],
			self.points[segment_index * 3 + 1],
			self.points[segment_index * 3 + 2],
			self.points[self.loop_index(segment_index as isize * 3 + 3)],
		]
	}

	/// Returns the segment at `segment_index` as a [`CubicBezier`].
	pub fn segment(&self, segment_index: usize) -> CubicBezier<P> {
		CubicBezier::from_points(self.points_in_segment(segment_index))
	}

	/// Returns an iterator of the [`CubicBezier`] segments along the path.
	pub fn iter(&self) -> SegmentIter<'_, P> {
		SegmentIter { index: 0, path: self }
	}

	/// Maps a (possibly out-of-range) neighbor index into the buffer by wrapping modularly.
	/// Neighbor arithmetic routes through here so closed paths need no special-casing at the seam.
	pub(crate) fn loop_index(&self, index: isize) -> usize {
		index.rem_euclid(self.points.len() as isize) as usize
	}
}
