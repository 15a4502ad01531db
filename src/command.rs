use crate::path::BezierPath;
use crate::point::PathPoint;

use thiserror::Error;

/// The error type returned when a [`PathCommand`] fails validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathError {
	#[error("Segment index {index} is out of bounds for a path with {segments} segments")]
	SegmentIndexOutOfBounds { index: usize, segments: usize },

	#[error("Point index {index} is out of bounds for a path with {points} points")]
	PointIndexOutOfBounds { index: usize, points: usize },

	#[error("Point index {0} does not reference an anchor")]
	NotAnAnchor(usize),

	#[error("The provided point is not finite")]
	NonFinitePoint,
}

/// A single mutation of a [`BezierPath`], validated and applied through [`BezierPath::apply`].
/// Editing surfaces construct these from user gestures (click to add, shift-click to split,
/// right-click to delete, drag to move) and wrap each application in whatever undo transaction
/// system they use; the path itself has no frame or event loop.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathCommand<P> {
	AddSegment { anchor: P },
	SplitSegment { anchor: P, segment_index: usize },
	DeleteSegment { anchor_index: usize },
	MovePoint { point_index: usize, target: P },
	SetClosed(bool),
	SetAutoSmoothing(bool),
}

impl<P: PathPoint> BezierPath<P> {
	/// Validate and apply `command`.
	///
	/// Precondition violations that the direct methods treat as caller bugs are reported as
	/// [`PathError`]s here. Guarded no-ops (a refused deletion, a control move while auto
	/// smoothing is active, setting a flag to its current value) are normal control flow and
	/// still succeed.
	pub fn apply(&mut self, command: PathCommand<P>) -> Result<(), PathError> {
		match command {
			PathCommand::AddSegment { anchor } => {
				if !anchor.is_finite() {
					return Err(PathError::NonFinitePoint);
				}
				self.add_segment(anchor);
			}
			PathCommand::SplitSegment { anchor, segment_index } => {
				if !anchor.is_finite() {
					return Err(PathError::NonFinitePoint);
				}
				if segment_index >= self.len_segments() {
					return Err(PathError::SegmentIndexOutOfBounds {
						index: segment_index,
						segments: self.len_segments(),
					});
				}
				self.split_segment(anchor, segment_index);
			}
			PathCommand::DeleteSegment { anchor_index } => {
				if anchor_index >= self.len() {
					return Err(PathError::PointIndexOutOfBounds {
						index: anchor_index,
						points: self.len(),
					});
				}
				if anchor_index % 3 != 0 {
					return Err(PathError::NotAnAnchor(anchor_index));
				}
				self.delete_segment(anchor_index);
			}
			PathCommand::MovePoint { point_index, target } => {
				if !target.is_finite() {
					return Err(PathError::NonFinitePoint);
				}
				if point_index >= self.len() {
					return Err(PathError::PointIndexOutOfBounds { index: point_index, points: self.len() });
				}
				self.move_point(point_index, target);
			}
			PathCommand::SetClosed(closed) => self.set_closed(closed),
			PathCommand::SetAutoSmoothing(auto_smoothing) => self.set_auto_smoothing(auto_smoothing),
		}
		Ok(())
	}
}
