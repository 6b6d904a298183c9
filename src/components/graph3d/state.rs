use std::f64::consts::PI;

use crate::graph::{GraphData, Vec3};

/// Sphere radius in world units.
pub const NODE_RADIUS: f64 = 0.5;
/// Minimum pick radius in pixels, so distant nodes stay clickable.
pub const MIN_HIT_RADIUS: f64 = 6.0;
/// Pointer travel (px) below which a press/release counts as a click.
pub const CLICK_SLOP: f64 = 4.0;

const FOV_Y: f64 = PI / 3.0;
const NEAR_PLANE: f64 = 0.1;
const MIN_DISTANCE: f64 = 2.0;
const MAX_DISTANCE: f64 = 2000.0;
const MAX_PITCH: f64 = 1.5;
const ORBIT_SPEED: f64 = 0.005;
const AUTO_ROTATE_SPEED: f64 = 0.08;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
	pub yaw: f64,
	pub pitch: f64,
	pub distance: f64,
}

impl OrbitCamera {
	pub fn new(distance: f64) -> Self {
		Self {
			yaw: 0.0,
			pitch: 0.0,
			distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
		}
	}

	/// World point in camera space; `z` is depth in front of the camera.
	fn to_view(&self, p: Vec3) -> Vec3 {
		let (sy, cy) = self.yaw.sin_cos();
		let (sp, cp) = self.pitch.sin_cos();
		let x = p.x * cy + p.z * sy;
		let z = -p.x * sy + p.z * cy;
		let y = p.y * cp - z * sp;
		let z = p.y * sp + z * cp;
		Vec3::new(x, y, self.distance - z)
	}
}

/// A world point placed on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
	pub x: f64,
	pub y: f64,
	/// Pixels per world unit at this depth.
	pub scale: f64,
	pub depth: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub last_x: f64,
	pub last_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub highlight_t: f64,
}

pub struct SceneState {
	pub data: GraphData,
	pub stars: Vec<Vec3>,
	pub camera: OrbitCamera,
	pub drag: DragState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub auto_rotate: bool,
}

impl SceneState {
	pub fn new(data: GraphData, stars: Vec<Vec3>, distance: f64, width: f64, height: f64) -> Self {
		Self {
			data,
			stars,
			camera: OrbitCamera::new(distance),
			drag: DragState::default(),
			hover: HoverState::default(),
			width,
			height,
			auto_rotate: true,
		}
	}

	/// Swap in new graph data, keeping the camera where the user left it.
	pub fn set_data(&mut self, data: GraphData) {
		if self.hover.node.is_some_and(|i| i >= data.nodes.len()) {
			self.hover = HoverState::default();
		}
		self.data = data;
	}

	pub fn focal_length(&self) -> f64 {
		(self.height / 2.0) / (FOV_Y / 2.0).tan()
	}

	pub fn project(&self, p: Vec3) -> Option<Projected> {
		let v = self.camera.to_view(p);
		if v.z < NEAR_PLANE {
			return None;
		}
		let scale = self.focal_length() / v.z;
		Some(Projected {
			x: self.width / 2.0 + v.x * scale,
			y: self.height / 2.0 - v.y * scale,
			scale,
			depth: v.z,
		})
	}

	/// Node indices ordered farthest first, skipping those behind the camera.
	pub fn depth_order(&self) -> Vec<(usize, Projected)> {
		let mut visible: Vec<(usize, Projected)> = self
			.data
			.nodes
			.iter()
			.enumerate()
			.filter_map(|(i, node)| self.project(node.position).map(|p| (i, p)))
			.collect();
		visible.sort_by(|a, b| b.1.depth.total_cmp(&a.1.depth));
		visible
	}

	/// Closest node whose projected disc contains the point.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		self.depth_order()
			.into_iter()
			.rev()
			.find(|(_, p)| {
				let r = (NODE_RADIUS * p.scale).max(MIN_HIT_RADIUS);
				let (dx, dy) = (p.x - sx, p.y - sy);
				dx * dx + dy * dy <= r * r
			})
			.map(|(i, _)| i)
	}

	pub fn begin_drag(&mut self, x: f64, y: f64) {
		self.drag = DragState {
			active: true,
			moved: false,
			start_x: x,
			start_y: y,
			last_x: x,
			last_y: y,
		};
	}

	/// Orbit the camera by pointer movement while a drag is active.
	pub fn drag_to(&mut self, x: f64, y: f64) {
		if !self.drag.active {
			return;
		}
		let (tx, ty) = (x - self.drag.start_x, y - self.drag.start_y);
		if tx * tx + ty * ty > CLICK_SLOP * CLICK_SLOP {
			self.drag.moved = true;
		}
		if self.drag.moved {
			self.camera.yaw += (x - self.drag.last_x) * ORBIT_SPEED;
			self.camera.pitch = (self.camera.pitch + (y - self.drag.last_y) * ORBIT_SPEED)
				.clamp(-MAX_PITCH, MAX_PITCH);
			self.auto_rotate = false;
		}
		self.drag.last_x = x;
		self.drag.last_y = y;
	}

	/// Finish a drag; returns the clicked node if the pointer barely moved.
	pub fn end_drag(&mut self, x: f64, y: f64) -> Option<usize> {
		let clicked = self.drag.active && !self.drag.moved;
		self.drag = DragState::default();
		if clicked { self.node_at_position(x, y) } else { None }
	}

	pub fn zoom(&mut self, delta_y: f64) {
		let factor = if delta_y > 0.0 { 1.1 } else { 0.9 };
		self.camera.distance = (self.camera.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node != node {
			self.hover.node = node;
			self.hover.highlight_t = 0.0;
		}
	}

	pub fn tick(&mut self, dt: f64) {
		if self.auto_rotate && !self.drag.active {
			self.camera.yaw += AUTO_ROTATE_SPEED * dt;
		}
		let target = if self.hover.node.is_some() { 1.0 } else { 0.0 };
		self.hover.highlight_t += (target - self.hover.highlight_t) * (6.0 * dt).min(1.0);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::api::ActivityId;
	use crate::graph::GraphNode;

	fn node(id: i64, position: Vec3) -> GraphNode {
		GraphNode {
			id: ActivityId(id),
			label: format!("n{id}"),
			position,
			color: "#ffffff".into(),
		}
	}

	fn scene(nodes: Vec<GraphNode>) -> SceneState {
		let data = GraphData {
			nodes,
			edges: Vec::new(),
		};
		SceneState::new(data, Vec::new(), 10.0, 800.0, 600.0)
	}

	#[test]
	fn origin_projects_to_center() {
		let s = scene(Vec::new());
		let p = s.project(Vec3::default()).unwrap();
		assert!((p.x - 400.0).abs() < 1e-9);
		assert!((p.y - 300.0).abs() < 1e-9);
		assert!((p.depth - 10.0).abs() < 1e-9);
	}

	#[test]
	fn up_is_up_on_screen() {
		let s = scene(Vec::new());
		let p = s.project(Vec3::new(1.0, 1.0, 0.0)).unwrap();
		assert!(p.x > 400.0);
		assert!(p.y < 300.0);
	}

	#[test]
	fn behind_camera_is_culled() {
		let s = scene(Vec::new());
		assert!(s.project(Vec3::new(0.0, 0.0, 10.0)).is_none());
		assert!(s.project(Vec3::new(0.0, 0.0, 50.0)).is_none());
	}

	#[test]
	fn nearer_points_are_larger() {
		let s = scene(Vec::new());
		let near = s.project(Vec3::new(0.0, 0.0, 5.0)).unwrap();
		let far = s.project(Vec3::new(0.0, 0.0, -5.0)).unwrap();
		assert!(near.scale > far.scale);
	}

	#[test]
	fn hit_test_prefers_front_node() {
		let s = scene(vec![
			node(1, Vec3::new(0.0, 0.0, -3.0)),
			node(2, Vec3::new(0.0, 0.0, 3.0)),
			node(3, Vec3::new(4.0, 0.0, 0.0)),
		]);
		assert_eq!(s.node_at_position(400.0, 300.0), Some(1));
		let side = s.project(Vec3::new(4.0, 0.0, 0.0)).unwrap();
		assert_eq!(s.node_at_position(side.x, side.y), Some(2));
		assert_eq!(s.node_at_position(5.0, 5.0), None);
	}

	#[test]
	fn small_movement_is_a_click() {
		let mut s = scene(vec![node(1, Vec3::default())]);
		s.begin_drag(400.0, 300.0);
		s.drag_to(401.0, 301.0);
		assert_eq!(s.end_drag(401.0, 301.0), Some(0));
		assert_eq!(s.camera.yaw, 0.0);
	}

	#[test]
	fn drag_orbits_instead_of_clicking() {
		let mut s = scene(vec![node(1, Vec3::default())]);
		s.begin_drag(400.0, 300.0);
		s.drag_to(460.0, 300.0);
		assert_eq!(s.end_drag(400.0, 300.0), None);
		assert!(s.camera.yaw > 0.0);
		assert!(!s.auto_rotate);
	}

	#[test]
	fn zoom_and_pitch_are_clamped() {
		let mut s = scene(Vec::new());
		for _ in 0..200 {
			s.zoom(-1.0);
		}
		assert_eq!(s.camera.distance, MIN_DISTANCE);
		s.begin_drag(0.0, 0.0);
		s.drag_to(0.0, 10_000.0);
		assert_eq!(s.camera.pitch, MAX_PITCH);
	}

	#[test]
	fn replacing_data_resets_dangling_hover() {
		let mut s = scene(vec![node(1, Vec3::default()), node(2, Vec3::default())]);
		s.set_hover(Some(1));
		s.set_data(GraphData::default());
		assert_eq!(s.hover.node, None);
	}
}
