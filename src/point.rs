use glam::{DVec2, DVec3};
use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Trait unifying the vector types a [`BezierPath`](crate::BezierPath) can be built over.
/// The path model and the curve evaluator are written once against this interface and instantiated
/// for planar ([`DVec2`]) and spatial ([`DVec3`]) points rather than duplicated per dimensionality.
pub trait PathPoint:
	Copy + Debug + PartialEq + Add<Output = Self> + Sub<Output = Self> + Neg<Output = Self> + Mul<f64, Output = Self> + AddAssign + SubAssign
{
	/// The zero vector.
	const ZERO: Self;
	/// The unit vector along the positive X axis.
	const X: Self;
	/// The unit vector along the positive Y axis.
	const Y: Self;

	/// Linearly interpolate from `self` towards `rhs` at parameter `t`.
	fn lerp(self, rhs: Self, t: f64) -> Self;

	/// The Euclidean length of the vector.
	fn length(self) -> f64;

	/// The vector scaled to unit length, or the zero vector if its length is (nearly) zero.
	fn normalize_or_zero(self) -> Self;

	/// Returns true if every component is finite.
	fn is_finite(self) -> bool;

	/// Returns true if the corresponding components of the two points are within `max_abs_diff` of each other.
	fn abs_diff_eq(self, rhs: Self, max_abs_diff: f64) -> bool;

	/// The Euclidean distance between two points.
	fn distance(self, other: Self) -> f64 {
		(self - other).length()
	}
}

impl PathPoint for DVec2 {
	const ZERO: Self = DVec2::ZERO;
	const X: Self = DVec2::X;
	const Y: Self = DVec2::Y;

	fn lerp(self, rhs: Self, t: f64) -> Self {
		DVec2::lerp(self, rhs, t)
	}

	fn length(self) -> f64 {
		DVec2::length(self)
	}

	fn normalize_or_zero(self) -> Self {
		DVec2::normalize_or_zero(self)
	}

	fn is_finite(self) -> bool {
		DVec2::is_finite(self)
	}

	fn abs_diff_eq(self, rhs: Self, max_abs_diff: f64) -> bool {
		DVec2::abs_diff_eq(self, rhs, max_abs_diff)
	}
}

impl PathPoint for DVec3 {
	const ZERO: Self = DVec3::ZERO;
	const X: Self = DVec3::X;
	const Y: Self = DVec3::Y;

	fn lerp(self, rhs: Self, t: f64) -> Self {
		DVec3::lerp(self, rhs, t)
	}

	fn length(self) -> f64 {
		DVec3::length(self)
	}

	fn normalize_or_zero(self) -> Self {
		DVec3::normalize_or_zero(self)
	}

	fn is_finite(self) -> bool {
		DVec3::is_finite(self)
	}

	fn abs_diff_eq(self, rhs: Self, max_abs_diff: f64) -> bool {
		DVec3::abs_diff_eq(self, rhs, max_abs_diff)
	}
}
