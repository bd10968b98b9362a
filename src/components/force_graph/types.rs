//! Graph data structures for input to the force graph component.

use serde::Deserialize;

/// Visual shape used when drawing a node.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
	/// Filled circle (the default).
	#[default]
	Dot,
	/// Five-pointed star. Used for the selected hub company.
	Star,
	/// Upward-pointing triangle. Used for risk entities.
	Triangle,
}

/// A node in the graph.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphNode {
	/// Unique identifier for this node. Used to reference nodes in links.
	pub id: String,
	/// Optional display label. Labeled nodes are rendered larger.
	#[serde(default)]
	pub label: Option<String>,
	/// Optional CSS color override (e.g., "#ff0000" or "rgb(255, 0, 0)").
	/// If not set, color is derived from the role color map or the theme palette.
	#[serde(default)]
	pub color: Option<String>,
	/// Optional role group for role-based coloring (e.g., "risk", "competitor").
	#[serde(default)]
	pub group: Option<String>,
	/// Optional size multiplier (1.0 = normal). If not set, size is derived
	/// from the node's connectivity.
	#[serde(default)]
	pub size: Option<f64>,
	/// Shape to draw the node with.
	#[serde(default)]
	pub shape: NodeShape,
}

/// A directed edge between two nodes.
#[derive(Clone, Debug, Deserialize)]
pub struct GraphLink {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
	/// Optional relation label, shown when the edge is highlighted.
	#[serde(default)]
	pub relation: Option<String>,
}

/// Complete graph data: nodes and links.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn node_shape_defaults_to_dot() {
		let node: GraphNode = serde_json::from_str(r#"{"id": "TSLA"}"#).unwrap();
		assert_eq!(node.shape, NodeShape::Dot);
		assert!(node.label.is_none());
		assert!(node.size.is_none());
	}

	#[test]
	fn deserializes_full_node() {
		let node: GraphNode = serde_json::from_str(
			r##"{"id": "Supply Chain", "label": "Supply Chain", "color": "#F04452",
				"group": "risk", "size": 1.5, "shape": "triangle"}"##,
		)
		.unwrap();
		assert_eq!(node.shape, NodeShape::Triangle);
		assert_eq!(node.group.as_deref(), Some("risk"));
		assert_eq!(node.size, Some(1.5));
	}

	#[test]
	fn deserializes_link_with_optional_relation() {
		let link: GraphLink =
			serde_json::from_str(r#"{"source": "TSLA", "target": "Rivian"}"#).unwrap();
		assert!(link.relation.is_none());

		let link: GraphLink = serde_json::from_str(
			r#"{"source": "TSLA", "target": "Rivian", "relation": "Competitor"}"#,
		)
		.unwrap();
		assert_eq!(link.relation.as_deref(), Some("Competitor"));
	}
}
