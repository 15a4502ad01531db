// Implementation constants:

/// Constant used to determine if `f64`s are equivalent.
#[cfg(test)]
pub const MAX_ABSOLUTE_DIFFERENCE: f64 = 1e-3;

/// Number of subdivisions per unit of estimated segment length used while walking a segment during resampling, at `resolution = 1.`.
pub const SAMPLES_PER_UNIT_LENGTH: f64 = 10.;

// Method argument defaults:

/// Default `resolution` argument for [`BezierPath::evenly_spaced_points`](crate::BezierPath::evenly_spaced_points).
pub const DEFAULT_RESOLUTION: f64 = 1.;
