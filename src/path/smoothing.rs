use super::*;

/// Functionality relating to automatic control-point placement from neighboring anchors.
impl<P: PathPoint> BezierPath<P> {
	/// Recompute the controls of every anchor whose curve shape depends on the anchor at
	/// `updated_anchor_index`: the anchor itself and its two anchor neighbors.
	pub(crate) fn auto_set_affected_control_points(&mut self, updated_anchor_index: usize) {
		let updated = updated_anchor_index as isize;
		for anchor_index in [updated - 3, updated, updated + 3] {
			if (0..self.points.len() as isize).contains(&anchor_index) || self.closed {
				let anchor_index = self.loop_index(anchor_index);
				self.auto_set_anchor_control_points(anchor_index);
			}
		}
		self.auto_set_start_and_end_controls();
	}

	/// Recompute the controls of every anchor in the path.
	pub(crate) fn auto_set_all_control_points(&mut self) {
		for anchor_index in (0..self.points.len()).step_by(3) {
			self.auto_set_anchor_control_points(anchor_index);
		}
		self.auto_set_start_and_end_controls();
	}

	/// Place both controls of the anchor at `anchor_index` along the direction averaged from its
	/// two neighbor anchors, at half the distance to the corresponding neighbor on each side.
	/// A missing neighbor on an open path contributes nothing to the averaged direction.
	pub(crate) fn auto_set_anchor_control_points(&mut self, anchor_index: usize) {
		let anchor = self.points[anchor_index];
		let mut direction = P::ZERO;
		let mut neighbor_distances = [0., 0.];

		if anchor_index >= 3 || self.closed {
			let offset = self.points[self.loop_index(anchor_index as isize - 3)] - anchor;
			direction += offset.normalize_or_zero();
			neighbor_distances[0] = offset.length();
		}
		if anchor_index + 3 < self.points.len() || self.closed {
			let offset = self.points[self.loop_index(anchor_index as isize + 3)] - anchor;
			direction -= offset.normalize_or_zero();
			neighbor_distances[1] = -offset.length();
		}

		let direction = direction.normalize_or_zero();
		for (i, neighbor_distance) in neighbor_distances.into_iter().enumerate() {
			let control_index = anchor_index as isize + i as isize * 2 - 1;
			if (0..self.points.len() as isize).contains(&control_index) || self.closed {
				let control_index = self.loop_index(control_index);
				self.points[control_index] = anchor + direction * (neighbor_distance * 0.5);
			}
		}
	}

	/// Pull the two endpoint controls of an open path onto the midpoint between their anchor and
	/// its single adjacent control, so the path runs out of its endpoints without a cusp.
	pub(crate) fn auto_set_start_and_end_controls(&mut self) {
		if self.closed {
			return;
		}
		let len = self.points.len();
		self.points[1] = (self.points[0] + self.points[2]) * 0.5;
		self.points[len - 2] = (self.points[len - 1] + self.points[len - 3]) * 0.5;
	}
}
