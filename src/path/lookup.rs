use super::*;
use crate::consts::{DEFAULT_RESOLUTION, SAMPLES_PER_UNIT_LENGTH};

/// Functionality relating to looking up derived geometry along the whole path.
impl<P: PathPoint> BezierPath<P> {
	/// Resample the path into points approximately `spacing` apart by arc length, in path order,
	/// starting at the first anchor. `spacing` must be positive.
	/// If no value is provided for `resolution`, then the function will default `resolution` to be `1.`;
	/// larger values walk each segment with proportionally more subdivisions.
	///
	/// Each segment is walked in `ceil(estimated_length · resolution · 10)` parameter increments,
	/// accumulating chord distance between consecutive samples. Every time the accumulator crosses
	/// `spacing`, a point is emitted by interpolating backward along the last increment by the
	/// overshoot amount, and the accumulator restarts from that overshoot.
	pub fn evenly_spaced_points(&self, spacing: f64, resolution: Option<f64>) -> Vec<P> {
		let resolution = resolution.unwrap_or(DEFAULT_RESOLUTION);
		assert!(spacing > 0., "Resampling spacing must be positive.");
		assert!(resolution > 0., "Resampling resolution must be positive.");

		let mut evenly_spaced_points = vec![self.points[0]];
		let mut previous_point = self.points[0];
		let mut distance_since_last_point = 0.;

		for segment in self.iter() {
			let divisions = (segment.estimated_length() * resolution * SAMPLES_PER_UNIT_LENGTH).ceil().max(1.) as usize;

			for step in 1..=divisions {
				let t = step as f64 / divisions as f64;
				let point_on_curve = segment.evaluate(t);
				distance_since_last_point += previous_point.distance(point_on_curve);

				// A single increment can cross the spacing threshold more than once.
				while distance_since_last_point >= spacing {
					let overshoot = distance_since_last_point - spacing;
					let new_point = point_on_curve + (previous_point - point_on_curve).normalize_or_zero() * overshoot;
					evenly_spaced_points.push(new_point);
					distance_since_last_point = overshoot;
					previous_point = new_point;
				}

				previous_point = point_on_curve;
			}
		}

		evenly_spaced_points
	}
}
