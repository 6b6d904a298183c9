//! Graph data derived from activities, independent of any drawing surface.

mod builder;
pub mod landing;
mod types;

use rand::SeedableRng;
use rand::rngs::SmallRng;

pub use builder::{ACTIVITY_SPREAD, DEFAULT_COLOR, build_activity_graph, category_color};
pub use types::{GraphData, GraphEdge, GraphNode, Vec3};

/// Layout RNG seeded from the browser's `Math.random`.
pub fn layout_rng() -> SmallRng {
	SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}
