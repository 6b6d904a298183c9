//! Decorative scene behind the landing page.

use rand::Rng;

use super::builder::{EDGE_COLOR, random_position};
use super::types::{GraphData, GraphEdge, GraphNode, Vec3};
use crate::api::ActivityId;

/// Labels of the landing graph, ids `1..=34` in this order.
pub const SAMPLE_IDEAS: [&str; 34] = [
	"Farmers Market",
	"Datathon",
	"Cook Breakfast Omelette",
	"Cook Omurice",
	"Cook Quiche",
	"Make Bunny Tangyuan",
	"Build Flower Lego Set",
	"Beach and Picnic",
	"Watch a musical",
	"Make Boba Milk Tea",
	"Make Ceramics",
	"Art Museum",
	"Go to a book store and Buy a Journal",
	"Bakery",
	"Shopping for clothes",
	"Photos of flowers on Campus",
	"Make a Japanese Cheesecake",
	"Public Library",
	"Dancing",
	"Stargazing",
	"Hike and camp!",
	"Go to a comedy show",
	"Studio tour",
	"Write a Date Balancing Tree",
	"Volunteer together",
	"Butterfly grove",
	"Alpaca farm!",
	"Watch all Ghibli Movies",
	"Go to China",
	"Get a Dog and Cat!",
	"Christmas in the park",
	"Cook pasta",
	"Cook Thai curry",
	"Flower Arrange and Paint Vase",
];

/// Side of the cube sample nodes live in.
pub const SAMPLE_SPREAD: f64 = 30.0;
/// Random pairings tried; self-pairs are dropped.
pub const SAMPLE_EDGE_ATTEMPTS: usize = 15;
/// Stars behind the landing graph.
pub const STAR_COUNT: usize = 3000;
/// Side of the cube stars live in.
pub const STAR_SPREAD: f64 = 800.0;

/// Sample ideas at random positions and hues, loosely wired together.
pub fn sample_graph<R: Rng + ?Sized>(rng: &mut R) -> GraphData {
	let nodes: Vec<GraphNode> = SAMPLE_IDEAS
		.iter()
		.enumerate()
		.map(|(i, name)| GraphNode {
			id: ActivityId(i as i64 + 1),
			label: (*name).to_string(),
			position: random_position(rng, SAMPLE_SPREAD),
			color: format!("hsl({:.0}, 100%, 50%)", rng.random::<f64>() * 360.0),
		})
		.collect();

	let mut edges = Vec::new();
	for _ in 0..SAMPLE_EDGE_ATTEMPTS {
		let a = &nodes[rng.random_range(0..nodes.len())];
		let b = &nodes[rng.random_range(0..nodes.len())];
		if a.id != b.id {
			edges.push(GraphEdge {
				start: a.position,
				end: b.position,
				color: EDGE_COLOR.to_string(),
			});
		}
	}

	GraphData { nodes, edges }
}

/// `count` points scattered through the star cube.
pub fn starfield<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Vec3> {
	(0..count).map(|_| random_position(rng, STAR_SPREAD)).collect()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn sample_graph_shape() {
		for seed in 0..20 {
			let graph = sample_graph(&mut SmallRng::seed_from_u64(seed));
			assert_eq!(graph.nodes.len(), SAMPLE_IDEAS.len());
			assert!(graph.edges.len() <= SAMPLE_EDGE_ATTEMPTS);
			assert!(graph.edges.iter().all(|e| e.start != e.end));
		}
	}

	#[test]
	fn sample_ids_start_at_one() {
		let graph = sample_graph(&mut SmallRng::seed_from_u64(0));
		assert_eq!(graph.nodes[0].id, ActivityId(1));
		assert_eq!(graph.nodes[33].id, ActivityId(34));
		assert_eq!(graph.nodes[19].label, "Stargazing");
		assert!(graph.nodes[0].color.starts_with("hsl("));
	}

	#[test]
	fn stars_fill_the_box() {
		let stars = starfield(&mut SmallRng::seed_from_u64(9), STAR_COUNT);
		assert_eq!(stars.len(), STAR_COUNT);
		let half = STAR_SPREAD / 2.0;
		assert!(
			stars
				.iter()
				.all(|s| s.x.abs() <= half && s.y.abs() <= half && s.z.abs() <= half)
		);
	}
}
