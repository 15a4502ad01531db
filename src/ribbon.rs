use glam::DVec2;

/// How the `v` texture coordinate progresses with completion percentage along a ribbon strip.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UvMode {
	/// `v` runs linearly from 0 at the start of the strip to 1 at its end.
	#[default]
	Linear,
	/// `v` rises from 0 to 1 at the strip's midpoint and falls back to 0, so a clamped texture is
	/// mirrored instead of stretched across the full run.
	Tent,
}

/// Struct to represent optional parameters that can be passed to the `ribbon_strip` function.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct RibbonOptions {
	/// The full width of the strip. The default value is `1.`.
	pub width: f64,
	/// How the `v` texture coordinate is derived. The default value is [`UvMode::Linear`].
	pub uv_mode: UvMode,
}

impl Default for RibbonOptions {
	fn default() -> Self {
		Self {
			width: 1.,
			uv_mode: UvMode::Linear,
		}
	}
}

/// Geometry buffers for a quad strip that follows a resampled path: one vertex pair per input
/// point and two triangles per consecutive pair, listed as indexed triangles.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RibbonStrip {
	pub positions: Vec<DVec2>,
	pub uvs: Vec<DVec2>,
	pub indices: Vec<u32>,
}

/// Build a ribbon strip following `points`, emitting a vertex to each side of every point along
/// the perpendicular of its neighbor-averaged tangent.
///
/// The caller obtains `points` from
/// [`BezierPath::evenly_spaced_points`](crate::BezierPath::evenly_spaced_points) and passes the
/// path's closed flag so the tangents and the final quad wrap around the seam. Fewer than 2
/// points produce an empty strip.
pub fn ribbon_strip(points: &[DVec2], closed: bool, options: RibbonOptions) -> RibbonStrip {
	if points.len() < 2 {
		return RibbonStrip::default();
	}

	let point_count = points.len();
	let vertex_count = point_count * 2;
	let triangle_count = 2 * (point_count - 1) + if closed { 2 } else { 0 };

	let mut positions = Vec::with_capacity(vertex_count);
	let mut uvs = Vec::with_capacity(vertex_count);
	let mut indices = Vec::with_capacity(triangle_count * 3);

	for (i, &point) in points.iter().enumerate() {
		let mut forward = DVec2::ZERO;
		if i + 1 < point_count || closed {
			forward += points[(i + 1) % point_count] - point;
		}
		if i > 0 || closed {
			forward += point - points[(i + point_count - 1) % point_count];
		}
		let left = forward.normalize_or_zero().perp();

		positions.push(point + left * (options.width * 0.5));
		positions.push(point - left * (options.width * 0.5));

		let completion = i as f64 / (point_count - 1) as f64;
		let v = match options.uv_mode {
			UvMode::Linear => completion,
			UvMode::Tent => 1. - (2. * completion - 1.).abs(),
		};
		uvs.push(DVec2::new(0., v));
		uvs.push(DVec2::new(1., v));

		if i + 1 < point_count || closed {
			let vertex_index = (i * 2) as u32;
			let wrap = vertex_count as u32;
			indices.extend_from_slice(&[
				vertex_index,
				(vertex_index + 2) % wrap,
				vertex_index + 1,
				vertex_index + 1,
				(vertex_index + 2) % wrap,
				(vertex_index + 3) % wrap,
			]);
		}
	}

	RibbonStrip { positions, uvs, indices }
}
