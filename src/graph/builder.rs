use rand::Rng;

use super::types::{GraphData, GraphEdge, GraphNode, Vec3};
use crate::api::{Activity, Category};

/// Side length of the box activity nodes are scattered in.
pub const ACTIVITY_SPREAD: f64 = 10.0;
/// Color of every generated edge.
pub const EDGE_COLOR: &str = "#ffffff";
/// Node color for [`Category::Other`].
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Fixed category palette.
pub fn category_color(category: Category) -> &'static str {
	match category {
		Category::Indoor => "#ff5733",
		Category::Outdoor => "#33ff57",
		Category::Creative => "#3357ff",
		Category::Lively => "#f1c40f",
		Category::Other => DEFAULT_COLOR,
	}
}

/// Uniform point in an origin-centered cube of side `scale`.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, scale: f64) -> Vec3 {
	let mut axis = || (rng.random::<f64>() - 0.5) * scale;
	Vec3::new(axis(), axis(), axis())
}

/// One node per activity, chained in list order.
pub fn build_activity_graph<R: Rng + ?Sized>(activities: &[Activity], rng: &mut R) -> GraphData {
	let nodes: Vec<GraphNode> = activities
		.iter()
		.map(|activity| GraphNode {
			id: activity.id,
			label: activity.name.clone(),
			position: random_position(rng, ACTIVITY_SPREAD),
			color: category_color(activity.category).to_string(),
		})
		.collect();

	let edges = nodes
		.windows(2)
		.map(|pair| GraphEdge {
			start: pair[0].position,
			end: pair[1].position,
			color: EDGE_COLOR.to_string(),
		})
		.collect();

	GraphData { nodes, edges }
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::api::ActivityId;

	fn activities(n: usize) -> Vec<Activity> {
		(0..n)
			.map(|i| {
				let category = Category::ALL[i % Category::ALL.len()];
				Activity::new(100 + i as i64, format!("Idea {i}"), category)
			})
			.collect()
	}

	#[test]
	fn node_and_edge_counts() {
		let mut rng = SmallRng::seed_from_u64(7);
		for n in 0..12 {
			let graph = build_activity_graph(&activities(n), &mut rng);
			assert_eq!(graph.nodes.len(), n);
			assert_eq!(graph.edges.len(), n.saturating_sub(1));
		}
	}

	#[test]
	fn empty_input_gives_empty_graph() {
		let mut rng = SmallRng::seed_from_u64(1);
		assert_eq!(build_activity_graph(&[], &mut rng), GraphData::default());
	}

	#[test]
	fn node_ids_match_activity_ids() {
		let mut rng = SmallRng::seed_from_u64(3);
		let input = activities(9);
		let graph = build_activity_graph(&input, &mut rng);

		let expected: HashSet<ActivityId> = input.iter().map(|a| a.id).collect();
		let actual: HashSet<ActivityId> = graph.nodes.iter().map(|n| n.id).collect();
		assert_eq!(actual, expected);
		assert_eq!(graph.nodes.len(), expected.len());
	}

	#[test]
	fn colors_follow_category() {
		let mut rng = SmallRng::seed_from_u64(11);
		let input = vec![
			Activity::new(1, "Bakery", Category::from("indoor")),
			Activity::new(2, "Hike", Category::from("Outdoor")),
			Activity::new(3, "Ceramics", Category::from("CREATIVE")),
			Activity::new(4, "Comedy show", Category::from("lively")),
			Activity::new(5, "Go to China", Category::from("travel")),
		];
		let colors: Vec<_> = build_activity_graph(&input, &mut rng)
			.nodes
			.into_iter()
			.map(|n| n.color)
			.collect();
		assert_eq!(colors, ["#ff5733", "#33ff57", "#3357ff", "#f1c40f", DEFAULT_COLOR]);
	}

	#[test]
	fn edges_chain_consecutive_nodes() {
		let mut rng = SmallRng::seed_from_u64(5);
		let graph = build_activity_graph(&activities(5), &mut rng);
		for (i, edge) in graph.edges.iter().enumerate() {
			assert_eq!(edge.start, graph.nodes[i].position);
			assert_eq!(edge.end, graph.nodes[i + 1].position);
			assert_eq!(edge.color, EDGE_COLOR);
		}
	}

	#[test]
	fn positions_stay_in_box_and_are_seed_stable() {
		let input = activities(50);
		let a = build_activity_graph(&input, &mut SmallRng::seed_from_u64(42));
		let b = build_activity_graph(&input, &mut SmallRng::seed_from_u64(42));
		assert_eq!(a, b);

		let half = ACTIVITY_SPREAD / 2.0;
		for node in &a.nodes {
			for c in [node.position.x, node.position.y, node.position.z] {
				assert!((-half..half).contains(&c), "{c} out of bounds");
			}
		}
	}
}
