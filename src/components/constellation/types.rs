use serde::Deserialize;

/// A habit as it appears in a constellation snapshot. `size` feeds the node
/// render radius; `completed` is informational only.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConstellationNode {
	pub id: i64,
	pub label: String,
	#[serde(default)]
	pub category: String,
	pub size: f64,
	pub completed: bool,
}

/// A derived relationship between two habits. `source`/`target` reference
/// node ids from the same snapshot and may dangle if the backend data is
/// stale; `weight` scales the rendered line thickness.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConstellationEdge {
	pub source: i64,
	pub target: i64,
	pub weight: f64,
}

/// One day's constellation snapshot. Node order is meaningful: it determines
/// angular placement around the circle.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Constellation {
	pub nodes: Vec<ConstellationNode>,
	pub edges: Vec<ConstellationEdge>,
	pub date: String,
}

/// Closed set of habit categories. Anything the backend sends outside this
/// set collapses to [`Category::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
	Health,
	Work,
	Social,
	Creative,
	Other,
}

impl Category {
	/// Parse a raw category string, case-insensitively. Unknown or empty
	/// values map to `Other`.
	pub fn parse(raw: &str) -> Self {
		match raw.to_ascii_lowercase().as_str() {
			"health" => Category::Health,
			"work" => Category::Work,
			"social" => Category::Social,
			"creative" => Category::Creative,
			_ => Category::Other,
		}
	}

	/// The fill color used for nodes and card accents of this category.
	pub const fn color(self) -> &'static str {
		match self {
			Category::Health => "#4ECDC4",
			Category::Work => "#FFE66D",
			Category::Social => "#FF6B6B",
			Category::Creative => "#95E1D3",
			Category::Other => "#C7CEEA",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn category_matching_is_case_insensitive() {
		assert_eq!(Category::parse("Health"), Category::Health);
		assert_eq!(Category::parse("health"), Category::Health);
		assert_eq!(Category::parse("CREATIVE"), Category::Creative);
		assert_eq!(Category::parse("Health").color(), Category::parse("health").color());
	}

	#[test]
	fn unknown_or_empty_category_falls_back_to_default() {
		assert_eq!(Category::parse("mindfulness"), Category::Other);
		assert_eq!(Category::parse(""), Category::Other);
		assert_eq!(Category::parse("mindfulness").color(), Category::Other.color());
	}

	#[test]
	fn decodes_backend_snapshot_shape() {
		let payload = r#"{
			"nodes": [
				{"id": 1, "label": "Meditate", "category": "health", "size": 30.0, "completed": true}
			],
			"edges": [
				{"source": 1, "target": 2, "weight": 0.5}
			],
			"date": "2026-08-30"
		}"#;
		let snapshot: Constellation = serde_json::from_str(payload).unwrap();
		assert_eq!(snapshot.nodes.len(), 1);
		assert_eq!(snapshot.nodes[0].label, "Meditate");
		assert_eq!(snapshot.edges[0].target, 2);
		assert_eq!(snapshot.date, "2026-08-30");
	}

	#[test]
	fn missing_category_decodes_to_empty_string() {
		let payload = r#"{"id": 3, "label": "Read", "size": 12.0, "completed": false}"#;
		let node: ConstellationNode = serde_json::from_str(payload).unwrap();
		assert_eq!(Category::parse(&node.category), Category::Other);
	}
}
