use crate::api::ActivityId;

/// A point in scene space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
	/// Right.
	pub x: f64,
	/// Up.
	pub y: f64,
	/// Toward the viewer at zero yaw.
	pub z: f64,
}

impl Vec3 {
	/// Point at `(x, y, z)`.
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}
}

/// A drawable sphere standing for one activity.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Same as the activity it was built from.
	pub id: ActivityId,
	/// Shown on hover.
	pub label: String,
	/// Sphere center.
	pub position: Vec3,
	/// Any CSS color.
	pub color: String,
}

/// A straight line between two node positions.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	/// One end.
	pub start: Vec3,
	/// The other end.
	pub end: Vec3,
	/// Any CSS color.
	pub color: String,
}

/// Everything a graph canvas draws.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	/// Spheres, in input order.
	pub nodes: Vec<GraphNode>,
	/// Lines, copied from node positions at build time.
	pub edges: Vec<GraphEdge>,
}
