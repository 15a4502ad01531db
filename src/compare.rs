//! Helpers for comparing floats and points within a tolerance in tests.

#[cfg(test)]
use crate::consts::MAX_ABSOLUTE_DIFFERENCE;
#[cfg(test)]
use crate::point::PathPoint;

/// Compare two `f64`s with a provided max absolute value difference.
#[cfg(test)]
pub fn f64_compare(f1: f64, f2: f64, max_abs_diff: f64) -> bool {
	(f1 - f2).abs() < max_abs_diff
}

/// Compare the corresponding components of two points within `MAX_ABSOLUTE_DIFFERENCE`.
#[cfg(test)]
pub fn compare_points<P: PathPoint>(p1: P, p2: P) -> bool {
	p1.abs_diff_eq(p2, MAX_ABSOLUTE_DIFFERENCE)
}
