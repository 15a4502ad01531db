use crate::point::PathPoint;

/// Evaluate a quadratic Bézier segment at parameter `t` using De Casteljau reduction:
/// the lerps of `(a, b)` and `(b, c)` are lerped together at the same parameter.
/// `t` is not clamped; values outside `[0, 1]` extrapolate the segment.
pub fn evaluate_quadratic<P: PathPoint>(a: P, b: P, c: P, t: f64) -> P {
	let p0 = a.lerp(b, t);
	let p1 = b.lerp(c, t);
	p0.lerp(p1, t)
}

/// Evaluate a cubic Bézier segment at parameter `t` as the interpolation of the two quadratic
/// reductions over `(a, b, c)` and `(b, c, d)`. Agrees with the closed-form Bernstein polynomial.
pub fn evaluate_cubic<P: PathPoint>(a: P, b: P, c: P, d: P, t: f64) -> P {
	let p0 = evaluate_quadratic(a, b, c, t);
	let p1 = evaluate_quadratic(b, c, d, t);
	p0.lerp(p1, t)
}

/// A single cubic Bézier arc between two consecutive anchors of a path, carrying the two control
/// points that shape it.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier<P> {
	/// The anchor the arc starts from.
	pub start: P,
	/// The control point associated with the start anchor.
	pub handle_start: P,
	/// The control point associated with the end anchor.
	pub handle_end: P,
	/// The anchor the arc ends at.
	pub end: P,
}

impl<P: PathPoint> CubicBezier<P> {
	/// Construct from the `(anchor, control, control, anchor)` tuple of a path segment.
	pub fn from_points(points: [P; 4]) -> Self {
		let [start, handle_start, handle_end, end] = points;
		Self { start, handle_start, handle_end, end }
	}

	/// The point on the arc at parameter `t`. `t` is not clamped.
	pub fn evaluate(&self, t: f64) -> P {
		evaluate_cubic(self.start, self.handle_start, self.handle_end, self.end, t)
	}

	/// The straight-line distance between the two anchors.
	pub fn chord_length(&self) -> f64 {
		self.start.distance(self.end)
	}

	/// The total length of the control polygon `start → handle_start → handle_end → end`.
	pub fn control_net_length(&self) -> f64 {
		self.start.distance(self.handle_start) + self.handle_start.distance(self.handle_end) + self.handle_end.distance(self.end)
	}

	/// A cheap arc-length approximation: the chord length plus half the control net length.
	/// Overestimates the true length, which makes it a safe driver for subdivision counts.
	pub fn estimated_length(&self) -> f64 {
		self.chord_length() + self.control_net_length() * 0.5
	}
}
