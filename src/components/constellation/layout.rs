use std::collections::HashMap;
use std::f64::consts::PI;

use super::types::{Category, Constellation};

/// Fraction of the layout square's side used as the placement circle radius.
pub const RADIUS_FACTOR: f64 = 0.32;
/// Divisor applied to a node's `size` to derive its render radius.
pub const SIZE_DIVISOR: f64 = 4.0;
/// Smallest render radius a node may have, so degenerate sizes stay visible.
pub const MIN_NODE_RADIUS: f64 = 10.0;

/// A node with its screen position and render radius resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
	pub id: i64,
	pub label: String,
	pub category: Category,
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub completed: bool,
}

/// An edge whose both endpoints were found in the current node set. Edges
/// referencing absent ids never make it here; they are dropped during
/// resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedEdge {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	pub weight: f64,
}

/// The derived output of one layout pass: everything the renderer needs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstellationLayout {
	pub nodes: Vec<PositionedNode>,
	pub edges: Vec<ResolvedEdge>,
}

impl ConstellationLayout {
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

/// Render radius for a node of the given `size`. Zero and negative sizes
/// clamp to the minimum rather than vanishing.
pub fn node_radius(size: f64) -> f64 {
	(size / SIZE_DIVISOR).max(MIN_NODE_RADIUS)
}

/// Lay out a constellation snapshot on a `width` x `height` surface.
///
/// Nodes are placed at equal angular intervals around a circle centered in
/// the square spanned by the smaller surface dimension, in input order:
/// node `i` of `n` sits at angle `2*PI*i / n` on a circle of radius
/// `0.32 * min(width, height)`. There is no overlap avoidance; placement is
/// a pure function of input order and surface size.
///
/// Edge endpoints are resolved through an id lookup built once per pass.
/// An edge whose source or target id is missing from the snapshot is
/// silently dropped; stale backend data must degrade, not crash rendering.
/// An empty snapshot yields an empty layout.
pub fn compute(constellation: &Constellation, width: f64, height: f64) -> ConstellationLayout {
	if constellation.nodes.is_empty() {
		return ConstellationLayout::default();
	}

	let side = width.min(height);
	let radius = RADIUS_FACTOR * side;
	let (center_x, center_y) = (side / 2.0, side / 2.0);
	let count = constellation.nodes.len();

	let mut nodes = Vec::with_capacity(count);
	let mut positions: HashMap<i64, (f64, f64)> = HashMap::with_capacity(count);

	for (i, node) in constellation.nodes.iter().enumerate() {
		let angle = 2.0 * PI * (i as f64) / (count.max(1) as f64);
		let (x, y) = (center_x + radius * angle.cos(), center_y + radius * angle.sin());
		positions.insert(node.id, (x, y));
		nodes.push(PositionedNode {
			id: node.id,
			label: node.label.clone(),
			category: Category::parse(&node.category),
			x,
			y,
			radius: node_radius(node.size),
			completed: node.completed,
		});
	}

	let mut edges = Vec::with_capacity(constellation.edges.len());
	for edge in &constellation.edges {
		if let (Some(&(x1, y1)), Some(&(x2, y2))) =
			(positions.get(&edge.source), positions.get(&edge.target))
		{
			edges.push(ResolvedEdge {
				x1,
				y1,
				x2,
				y2,
				weight: edge.weight,
			});
		}
	}

	ConstellationLayout { nodes, edges }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::constellation::{ConstellationEdge, ConstellationNode};

	fn node(id: i64, size: f64) -> ConstellationNode {
		ConstellationNode {
			id,
			label: format!("habit {id}"),
			category: "health".into(),
			size,
			completed: true,
		}
	}

	fn edge(source: i64, target: i64, weight: f64) -> ConstellationEdge {
		ConstellationEdge {
			source,
			target,
			weight,
		}
	}

	fn snapshot(nodes: Vec<ConstellationNode>, edges: Vec<ConstellationEdge>) -> Constellation {
		Constellation {
			nodes,
			edges,
			date: "2026-08-30".into(),
		}
	}

	fn assert_close(actual: f64, expected: f64) {
		assert!(
			(actual - expected).abs() < 1e-9,
			"expected {expected}, got {actual}"
		);
	}

	#[test]
	fn empty_snapshot_yields_empty_layout() {
		let layout = compute(&snapshot(vec![], vec![edge(1, 2, 1.0)]), 400.0, 400.0);
		assert!(layout.is_empty());
		assert!(layout.edges.is_empty());
	}

	#[test]
	fn single_node_sits_at_angle_zero() {
		let layout = compute(&snapshot(vec![node(1, 40.0)], vec![]), 400.0, 400.0);
		assert_eq!(layout.nodes.len(), 1);
		// center (200, 200), radius 128, angle 0 -> rightmost point
		assert_close(layout.nodes[0].x, 328.0);
		assert_close(layout.nodes[0].y, 200.0);
	}

	#[test]
	fn three_nodes_on_a_400_square_land_at_thirds() {
		let layout = compute(
			&snapshot(vec![node(1, 40.0), node(2, 40.0), node(3, 40.0)], vec![]),
			400.0,
			400.0,
		);
		let (cx, cy, r) = (200.0, 200.0, 128.0);
		for (i, positioned) in layout.nodes.iter().enumerate() {
			let angle = 2.0 * PI * (i as f64) / 3.0;
			assert_close(positioned.x, cx + r * angle.cos());
			assert_close(positioned.y, cy + r * angle.sin());
		}
	}

	#[test]
	fn successive_nodes_are_spaced_by_equal_angles() {
		let n = 7;
		let nodes: Vec<_> = (0..n).map(|i| node(i, 20.0)).collect();
		let layout = compute(&snapshot(nodes, vec![]), 500.0, 500.0);
		assert_eq!(layout.nodes.len(), n as usize);

		let (cx, cy) = (250.0, 250.0);
		for (i, positioned) in layout.nodes.iter().enumerate() {
			let angle = (positioned.y - cy).atan2(positioned.x - cx);
			let expected = 2.0 * PI * (i as f64) / n as f64;
			// atan2 wraps to (-PI, PI]; compare on the unit circle instead
			assert_close((angle - expected).sin(), 0.0);
			assert_close((angle - expected).cos(), 1.0);
		}
	}

	#[test]
	fn layout_centers_on_the_smaller_dimension() {
		let layout = compute(&snapshot(vec![node(1, 40.0)], vec![]), 800.0, 400.0);
		// side = 400, so same placement as a 400x400 surface
		assert_close(layout.nodes[0].x, 328.0);
		assert_close(layout.nodes[0].y, 200.0);
	}

	#[test]
	fn dangling_edge_is_dropped_without_error() {
		let layout = compute(
			&snapshot(
				vec![node(1, 40.0), node(2, 40.0)],
				vec![edge(1, 99, 3.0), edge(1, 2, 0.5)],
			),
			400.0,
			400.0,
		);
		assert_eq!(layout.edges.len(), 1);
		assert_close(layout.edges[0].weight, 0.5);
	}

	#[test]
	fn edge_with_both_endpoints_missing_is_dropped() {
		let layout = compute(
			&snapshot(vec![node(1, 40.0)], vec![edge(98, 99, 3.0)]),
			400.0,
			400.0,
		);
		assert!(layout.edges.is_empty());
		assert_eq!(layout.nodes.len(), 1);
	}

	#[test]
	fn resolved_edge_carries_its_endpoint_positions() {
		let layout = compute(
			&snapshot(vec![node(1, 40.0), node(2, 40.0)], vec![edge(1, 2, 2.0)]),
			400.0,
			400.0,
		);
		let resolved = &layout.edges[0];
		let (a, b) = (&layout.nodes[0], &layout.nodes[1]);
		assert_close(resolved.x1, a.x);
		assert_close(resolved.y1, a.y);
		assert_close(resolved.x2, b.x);
		assert_close(resolved.y2, b.y);
	}

	#[test]
	fn reordering_nodes_moves_positions_but_keeps_edges_resolving() {
		let forward = snapshot(
			vec![node(1, 40.0), node(2, 40.0), node(3, 40.0)],
			vec![edge(1, 3, 1.0), edge(2, 99, 1.0)],
		);
		let reversed = snapshot(
			vec![node(3, 40.0), node(2, 40.0), node(1, 40.0)],
			vec![edge(1, 3, 1.0), edge(2, 99, 1.0)],
		);

		let a = compute(&forward, 400.0, 400.0);
		let b = compute(&reversed, 400.0, 400.0);
		assert_eq!(a.edges.len(), 1);
		assert_eq!(b.edges.len(), 1);

		// node 1 took node 3's slot and vice versa
		let pos = |layout: &ConstellationLayout, id| {
			layout
				.nodes
				.iter()
				.find(|n| n.id == id)
				.map(|n| (n.x, n.y))
				.unwrap()
		};
		assert_eq!(pos(&a, 1), pos(&b, 3));
		assert_eq!(pos(&a, 3), pos(&b, 1));
	}

	#[test]
	fn degenerate_sizes_clamp_to_minimum_radius() {
		assert_close(node_radius(0.0), MIN_NODE_RADIUS);
		assert_close(node_radius(-12.0), MIN_NODE_RADIUS);
		assert_close(node_radius(12.0), MIN_NODE_RADIUS);
		assert_close(node_radius(80.0), 20.0);
	}

	#[test]
	fn node_count_is_preserved() {
		let nodes: Vec<_> = (0..24).map(|i| node(i, 16.0)).collect();
		let layout = compute(&snapshot(nodes, vec![]), 390.0, 844.0);
		assert_eq!(layout.nodes.len(), 24);
	}
}
