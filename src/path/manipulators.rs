use super::*;

/// Functionality relating to the invariant-preserving mutation entry points of a `BezierPath`.
impl<P: PathPoint> BezierPath<P> {
	/// Append a new cubic segment ending at `anchor`.
	/// The outgoing control continues the tangent of the previous segment (the reflection of the
	/// last in-control about the last anchor) and the incoming control sits at the midpoint
	/// between the two anchors. Affected anchors are re-smoothed while auto smoothing is active.
	pub fn add_segment(&mut self, anchor: P) {
		let last = self.points[self.points.len() - 1];
		let second_from_last = self.points[self.points.len() - 2];

		self.points.push(last * 2. - second_from_last);
		self.points.push((last + anchor) * 0.5);
		self.points.push(anchor);

		if self.auto_smoothing {
			self.auto_set_affected_control_points(self.points.len() - 1);
		}
	}

	/// Insert a new anchor at `anchor` inside the segment at `segment_index`, splitting it in two.
	/// The two flanking control points are filled in by smoothing: every affected anchor when auto
	/// smoothing is active, only the inserted anchor otherwise. The index must reference a valid segment.
	pub fn split_segment(&mut self, anchor: P, segment_index: usize) {
		assert!(segment_index < self.len_segments(), "Segment index out of bounds in split_segment.");

		let insert_at = segment_index * 3 + 2;
		self.points.splice(insert_at..insert_at, [P::ZERO, anchor, P::ZERO]);

		if self.auto_smoothing {
			self.auto_set_affected_control_points(segment_index * 3 + 3);
		} else {
			self.auto_set_anchor_control_points(segment_index * 3 + 3);
		}
	}

	/// Remove the anchor at `anchor_index` together with its two adjacent control points.
	/// Refused as a no-op when the path would drop below 2 segments while closed, or below 1 while open.
	pub fn delete_segment(&mut self, anchor_index: usize) {
		if self.len_segments() <= 2 && (self.closed || self.len_segments() <= 1) {
			log::debug!("Refused to delete anchor {anchor_index}: the path is at its minimum segment count");
			return;
		}

		if anchor_index == 0 {
			if self.closed {
				// The wrapping segment now ends at the new first anchor; reuse the old out-control.
				let replacement = self.points[2];
				let last_index = self.points.len() - 1;
				self.points[last_index] = replacement;
			}
			self.points.drain(0..3);
		} else if anchor_index == self.points.len() - 1 && !self.closed {
			self.points.drain(anchor_index - 2..=anchor_index);
		} else {
			self.points.drain(anchor_index - 1..anchor_index + 2);
		}
	}

	/// Move the point at `point_index` to `target`.
	///
	/// Anchor moves carry both adjacent control points along by the anchor's delta, preserving the
	/// local curve shape. Manual-mode control moves reposition the mirror control on the far side
	/// of the shared anchor to stay colinear at its existing distance, preserving tangent
	/// continuity. Control moves are ignored entirely while auto smoothing is active.
	pub fn move_point(&mut self, point_index: usize, target: P) {
		assert!(point_index < self.points.len(), "Point index out of bounds in move_point.");

		let delta = target - self.points[point_index];
		let is_anchor = point_index % 3 == 0;

		if !is_anchor && self.auto_smoothing {
			log::debug!("Ignored move of control point {point_index}: control points are derived while auto smoothing is active");
			return;
		}
		self.points[point_index] = target;

		if is_anchor {
			if point_index + 1 < self.points.len() || self.closed {
				let neighbor = self.loop_index(point_index as isize + 1);
				self.points[neighbor] += delta;
			}
			if point_index >= 1 || self.closed {
				let neighbor = self.loop_index(point_index as isize - 1);
				self.points[neighbor] += delta;
			}

			if self.auto_smoothing {
				self.auto_set_affected_control_points(point_index);
			}
		} else {
			let next_point_is_anchor = (point_index + 1) % 3 == 0;
			let (mirror_index, anchor_index) = if next_point_is_anchor {
				(point_index as isize + 2, point_index as isize + 1)
			} else {
				(point_index as isize - 2, point_index as isize - 1)
			};

			// An endpoint control of an open path has no mirror partner.
			if (mirror_index < 0 || mirror_index >= self.points.len() as isize) && !self.closed {
				return;
			}
			let mirror_index = self.loop_index(mirror_index);
			let anchor = self.points[self.loop_index(anchor_index)];

			let distance = anchor.distance(self.points[mirror_index]);
			let direction = (anchor - target).normalize_or_zero();
			self.points[mirror_index] = anchor + direction * distance;
		}
	}

	/// Set whether the last anchor connects back to the first.
	///
	/// Closing appends two control points, each the reflection of the neighboring endpoint control
	/// about its anchor; opening removes exactly those two points, so an immediate close/open pair
	/// restores the buffer bit-for-bit. Affected anchors are re-smoothed while auto smoothing is
	/// active. Setting the current value is a no-op.
	pub fn set_closed(&mut self, closed: bool) {
		if self.closed == closed {
			return;
		}
		self.closed = closed;

		if closed {
			let last = self.points[self.points.len() - 1];
			let second_from_last = self.points[self.points.len() - 2];
			let first = self.points[0];
			let second = self.points[1];

			self.points.push(last * 2. - second_from_last);
			self.points.push(first * 2. - second);

			if self.auto_smoothing {
				self.auto_set_anchor_control_points(0);
				self.auto_set_anchor_control_points(self.points.len() - 3);
			}
		} else {
			self.points.truncate(self.points.len() - 2);

			if self.auto_smoothing {
				self.auto_set_start_and_end_controls();
			}
		}
	}

	/// Set whether control points are placed automatically from neighboring anchors.
	/// Entering the mode recomputes every anchor's pair of controls; leaving it freezes the
	/// current positions. Setting the current value is a no-op.
	pub fn set_auto_smoothing(&mut self, auto_smoothing: bool) {
		if self.auto_smoothing == auto_smoothing {
			return;
		}
		self.auto_smoothing = auto_smoothing;

		if auto_smoothing {
			self.auto_set_all_control_points();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::compare::{compare_points, f64_compare};

	fn set_up_open_path() -> BezierPath2D {
		// Anchors at (-1, 0), (1, 0), (3, 0) and (3, 3).
		let mut path = BezierPath2D::new(DVec2::ZERO);
		path.add_segment(DVec2::new(3., 0.));
		path.add_segment(DVec2::new(3., 3.));
		path
	}

	fn set_up_closed_path() -> BezierPath2D {
		let mut path = set_up_open_path();
		path.set_closed(true);
		path
	}

	#[test]
	fn add_segment_appends_three_points_and_one_segment() {
		let mut path = BezierPath2D::new(DVec2::ZERO);

		for i in 1..4 {
			let anchor = DVec2::new(1. + 2. * i as f64, 0.);
			path.add_segment(anchor);

			assert_eq!(path.len(), 4 + 3 * i);
			assert_eq!(path.len_segments(), 1 + i);
			assert_eq!(path[path.len() - 1], anchor);
		}
	}

	#[test]
	fn add_segment_continues_the_previous_tangent() {
		let mut path = BezierPath2D::new(DVec2::ZERO);
		path.add_segment(DVec2::new(3., 0.));

		// Reflection of the old in-control (0.5, -0.5) about the old last anchor (1, 0).
		assert_eq!(path[4], DVec2::new(1.5, 0.5));
		// Midpoint between the old last anchor and the new one.
		assert_eq!(path[5], DVec2::new(2., 0.));
	}

	#[test]
	fn split_segment_inserts_the_anchor_mid_buffer() {
		let mut path = set_up_open_path();
		let anchors_before = path.anchors();

		path.split_segment(DVec2::new(2., 1.), 1);

		assert_eq!(path.len(), 13);
		assert_eq!(path.len_segments(), 4);
		assert_eq!(path[6], DVec2::new(2., 1.));
		// The surrounding anchors are untouched.
		assert_eq!(path.anchors(), vec![anchors_before[0], anchors_before[1], DVec2::new(2., 1.), anchors_before[2], anchors_before[3]]);
	}

	#[test]
	fn split_segment_places_the_new_anchor_controls_colinearly() {
		let mut path = set_up_open_path();
		path.split_segment(DVec2::new(2., 1.), 1);

		let anchor = path[6];
		let to_in_control = path[5] - anchor;
		let to_out_control = path[7] - anchor;

		// One-shot smoothing leaves the two fresh controls mirrored about the anchor's tangent direction.
		assert!(compare_points(to_in_control.normalize_or_zero(), -to_out_control.normalize_or_zero()));
	}

	#[test]
	fn delete_segment_removes_a_middle_anchor() {
		let mut path = set_up_open_path();
		path.delete_segment(3);

		assert_eq!(path.len(), 7);
		assert_eq!(path.len_segments(), 2);
		assert_eq!(path.anchors(), vec![DVec2::new(-1., 0.), DVec2::new(3., 0.), DVec2::new(3., 3.)]);
	}

	#[test]
	fn delete_segment_at_the_ends_of_an_open_path() {
		let mut path = set_up_open_path();
		path.delete_segment(0);
		assert_eq!(path.anchors(), vec![DVec2::new(1., 0.), DVec2::new(3., 0.), DVec2::new(3., 3.)]);

		let last = path.len() - 1;
		path.delete_segment(last);
		assert_eq!(path.anchors(), vec![DVec2::new(1., 0.), DVec2::new(3., 0.)]);
	}

	#[test]
	fn delete_first_anchor_of_a_closed_path_repairs_the_wrapping_segment() {
		let mut path = set_up_closed_path();
		let old_out_control = path[2];

		path.delete_segment(0);

		assert_eq!(path.len(), 9);
		assert!(path.closed());
		assert_eq!(path[path.len() - 1], old_out_control);
	}

	#[test]
	fn delete_segment_refuses_to_shrink_below_the_minimum() {
		let mut open_path = BezierPath2D::new(DVec2::ZERO);
		let before = open_path.clone();
		open_path.delete_segment(0);
		assert_eq!(open_path, before);

		let mut closed_path = BezierPath2D::new(DVec2::ZERO);
		closed_path.set_closed(true);
		let before = closed_path.clone();
		closed_path.delete_segment(3);
		assert_eq!(closed_path, before);
	}

	#[test]
	fn move_anchor_carries_both_adjacent_controls() {
		let mut path = set_up_open_path();
		let before = path.points().to_vec();
		let delta = DVec2::new(0.25, -0.75);

		path.move_point(3, before[3] + delta);

		for (index, &point) in path.points().iter().enumerate() {
			let expected = if (2..=4).contains(&index) { before[index] + delta } else { before[index] };
			assert_eq!(point, expected, "point {index} moved unexpectedly");
		}
	}

	#[test]
	fn move_first_anchor_of_a_closed_path_wraps_to_the_last_control() {
		let mut path = set_up_closed_path();
		let before = path.points().to_vec();
		let delta = DVec2::new(-1., 0.5);

		path.move_point(0, before[0] + delta);

		assert_eq!(path[0], before[0] + delta);
		assert_eq!(path[1], before[1] + delta);
		assert_eq!(path[path.len() - 1], before[path.len() - 1] + delta);
	}

	#[test]
	fn move_control_repositions_its_mirror_partner() {
		let mut path = set_up_open_path();
		let anchor = path[3];
		let mirror_distance = anchor.distance(path[4]);

		let target = DVec2::new(1.5, 2.);
		path.move_point(2, target);

		// Mirror stays colinear with the anchor at its original distance, on the opposite side.
		let expected = anchor + (anchor - target).normalize_or_zero() * mirror_distance;
		assert!(compare_points(path[4], expected));
		assert!(f64_compare(anchor.distance(path[4]), mirror_distance, 1e-9));
	}

	#[test]
	fn move_endpoint_control_of_an_open_path_has_no_mirror() {
		let mut path = set_up_open_path();
		let before = path.points().to_vec();
		let target = DVec2::new(-2., 2.);

		path.move_point(1, target);

		assert_eq!(path[1], target);
		for (index, &point) in path.points().iter().enumerate() {
			if index != 1 {
				assert_eq!(point, before[index]);
			}
		}
	}

	#[test]
	fn move_control_is_rejected_while_auto_smoothing() {
		let mut path = set_up_open_path();
		path.set_auto_smoothing(true);
		let before = path.clone();

		path.move_point(2, DVec2::new(10., 10.));

		assert_eq!(path, before);
	}

	#[test]
	fn closing_appends_the_reflected_controls() {
		let mut path = set_up_open_path();
		let last_anchor = path[9];
		let last_in_control = path[8];
		let first_anchor = path[0];
		let first_out_control = path[1];

		path.set_closed(true);

		assert_eq!(path.len(), 12);
		assert_eq!(path[10], last_anchor * 2. - last_in_control);
		assert_eq!(path[11], first_anchor * 2. - first_out_control);
	}

	#[test]
	fn close_then_open_restores_the_buffer_exactly() {
		let mut path = set_up_open_path();
		let before = path.clone();

		path.set_closed(true);
		path.set_closed(false);

		assert_eq!(path, before);
	}

	#[test]
	fn setting_a_flag_to_its_current_value_is_a_no_op() {
		let mut path = set_up_open_path();
		let before = path.clone();

		path.set_closed(false);
		assert_eq!(path, before);

		path.set_auto_smoothing(false);
		assert_eq!(path, before);
	}
}
