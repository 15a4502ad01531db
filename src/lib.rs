//! Bezier-path: authoring of piecewise cubic Bézier paths as an ordered anchor/control-point buffer,
//! with open/closed topology, automatic control-point smoothing, and arc-length resampling.

pub(crate) mod compare;

mod bezier;
mod command;
mod consts;
mod path;
mod point;
mod ribbon;

pub use bezier::*;
pub use command::*;
pub use path::*;
pub use point::*;
pub use ribbon::*;
