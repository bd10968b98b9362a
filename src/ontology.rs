//! The financial ontology: a flat edge list and its transform into a styled graph.
//!
//! One entity type: a directed, multi-attribute edge `(source, target,
//! relation, type)`. Node visuals (color group, size, shape) are derived per
//! node from its role relative to the selected ticker, then handed to the
//! force graph component for layout and rendering.

use serde::Deserialize;

use crate::components::force_graph::{GraphData, GraphLink, GraphNode, NodeShape};

/// How the source entity relates to the target entity.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum Relation {
	Competitor,
	Risk,
	Supplier,
	#[serde(rename = "Risk_Exposure")]
	RiskExposure,
}

impl Relation {
	/// Display label, as it appears in edge tooltips and the data table.
	pub fn label(self) -> &'static str {
		match self {
			Relation::Competitor => "Competitor",
			Relation::Risk => "Risk",
			Relation::Supplier => "Supplier",
			Relation::RiskExposure => "Risk_Exposure",
		}
	}
}

/// What kind of entity the target of an edge is.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum EntityKind {
	Company,
	Risk,
}

impl EntityKind {
	/// Display label for the data table's `type` column.
	pub fn label(self) -> &'static str {
		match self {
			EntityKind::Company => "Company",
			EntityKind::Risk => "Risk",
		}
	}
}

/// One row of the ontology: a directed edge with relation and target kind.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct EdgeRecord {
	pub source: String,
	pub target: String,
	pub relation: Relation,
	#[serde(rename = "type")]
	pub entity: EntityKind,
}

impl EdgeRecord {
	fn new(source: &str, target: &str, relation: Relation, entity: EntityKind) -> Self {
		Self {
			source: source.to_string(),
			target: target.to_string(),
			relation,
			entity,
		}
	}
}

/// Visual category of a node relative to the selected ticker.
///
/// A node can match several categories at once (Rivian is both a competitor
/// of the hub and a source of risk exposure); the strongest one wins, in
/// declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum NodeRole {
	/// The selected hub company.
	Selected,
	/// A risk entity (supply chain, regulation, ...).
	Risk,
	/// A competitor of the hub.
	Competitor,
	/// A company on a supplier relation.
	Supplier,
	/// Anything else.
	Peer,
}

impl NodeRole {
	/// Group slug resolved to a color by the theme's role color map.
	pub fn slug(self) -> &'static str {
		match self {
			NodeRole::Selected => "selected",
			NodeRole::Risk => "risk",
			NodeRole::Competitor => "competitor",
			NodeRole::Supplier => "supplier",
			NodeRole::Peer => "peer",
		}
	}

	/// Shape the node is drawn with.
	pub fn shape(self) -> NodeShape {
		match self {
			NodeRole::Selected => NodeShape::Star,
			NodeRole::Risk => NodeShape::Triangle,
			_ => NodeShape::Dot,
		}
	}

	/// Size multiplier relative to the base node radius.
	pub fn size(self) -> f64 {
		match self {
			NodeRole::Selected => 2.2,
			NodeRole::Risk => 1.5,
			NodeRole::Competitor => 1.25,
			NodeRole::Supplier => 1.0,
			NodeRole::Peer => 0.9,
		}
	}
}

/// The fixed mock ontology for a ticker: 9 edges around the selected hub.
///
/// Competitor, supplier, and risk names are fixed sample strings; the hub is
/// substituted with the selected ticker.
pub fn sample_edges(ticker: &str) -> Vec<EdgeRecord> {
	use EntityKind::{Company, Risk};

	vec![
		EdgeRecord::new(ticker, "Rivian", Relation::Competitor, Company),
		EdgeRecord::new(ticker, "Lucid", Relation::Competitor, Company),
		EdgeRecord::new(ticker, "Supply Chain", Relation::Risk, Risk),
		EdgeRecord::new(ticker, "AI Regulation", Relation::Risk, Risk),
		EdgeRecord::new(ticker, "NVIDIA", Relation::Supplier, Company),
		EdgeRecord::new("Rivian", "Supply Chain", Relation::RiskExposure, Risk),
		EdgeRecord::new("Lucid", "Supply Chain", Relation::RiskExposure, Risk),
		EdgeRecord::new("NVIDIA", ticker, Relation::Supplier, Company),
		EdgeRecord::new("Panasonic", ticker, Relation::Supplier, Company),
	]
}

/// Derive the role of a node from every edge it appears in.
pub fn node_role(id: &str, selected: &str, edges: &[EdgeRecord]) -> NodeRole {
	if id == selected {
		return NodeRole::Selected;
	}

	let mut role = NodeRole::Peer;
	for edge in edges {
		let candidate = if edge.target == id && edge.entity == EntityKind::Risk {
			NodeRole::Risk
		} else if edge.target == id && edge.relation == Relation::Competitor {
			NodeRole::Competitor
		} else if (edge.source == id || edge.target == id)
			&& edge.relation == Relation::Supplier
		{
			NodeRole::Supplier
		} else {
			continue;
		};
		role = role.min(candidate);
	}
	role
}

/// Turn the flat edge list into a deduplicated, styled graph.
///
/// Nodes keep first-appearance order (sources before targets, row by row) so
/// the initial layout ring is stable across rebuilds.
pub fn build_graph(edges: &[EdgeRecord], selected: &str) -> GraphData {
	let mut order: Vec<&str> = Vec::new();
	for edge in edges {
		for id in [edge.source.as_str(), edge.target.as_str()] {
			if !order.contains(&id) {
				order.push(id);
			}
		}
	}

	let nodes = order
		.into_iter()
		.map(|id| {
			let role = node_role(id, selected, edges);
			GraphNode {
				id: id.to_string(),
				label: Some(id.to_string()),
				color: None,
				group: Some(role.slug().to_string()),
				size: Some(role.size()),
				shape: role.shape(),
			}
		})
		.collect();

	let links = edges
		.iter()
		.map(|edge| GraphLink {
			source: edge.source.clone(),
			target: edge.target.clone(),
			relation: Some(edge.relation.label().to_string()),
		})
		.collect();

	GraphData { nodes, links }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::default_role_colors;

	#[test]
	fn sample_fixture_has_nine_edges_and_seven_nodes() {
		let edges = sample_edges("TSLA");
		assert_eq!(edges.len(), 9);

		let graph = build_graph(&edges, "TSLA");
		assert_eq!(graph.links.len(), 9);
		assert_eq!(graph.nodes.len(), 7);
	}

	#[test]
	fn hub_is_parameterized_on_the_ticker() {
		let edges = sample_edges("AAPL");
		let graph = build_graph(&edges, "AAPL");
		assert!(graph.nodes.iter().any(|n| n.id == "AAPL"));
		assert!(graph.nodes.iter().all(|n| n.id != "TSLA"));
	}

	#[test]
	fn roles_follow_membership_rules() {
		let edges = sample_edges("TSLA");
		assert_eq!(node_role("TSLA", "TSLA", &edges), NodeRole::Selected);
		assert_eq!(node_role("Supply Chain", "TSLA", &edges), NodeRole::Risk);
		assert_eq!(node_role("AI Regulation", "TSLA", &edges), NodeRole::Risk);
		assert_eq!(node_role("Rivian", "TSLA", &edges), NodeRole::Competitor);
		assert_eq!(node_role("Lucid", "TSLA", &edges), NodeRole::Competitor);
		assert_eq!(node_role("NVIDIA", "TSLA", &edges), NodeRole::Supplier);
		assert_eq!(node_role("Panasonic", "TSLA", &edges), NodeRole::Supplier);
	}

	#[test]
	fn selected_beats_supplier_target_restyle() {
		// TSLA is also the target of two supplier edges; the hub role must win.
		let edges = sample_edges("TSLA");
		let graph = build_graph(&edges, "TSLA");
		let hub = graph.nodes.iter().find(|n| n.id == "TSLA").unwrap();
		assert_eq!(hub.group.as_deref(), Some("selected"));
		assert_eq!(hub.shape, NodeShape::Star);
		assert_eq!(hub.size, Some(NodeRole::Selected.size()));
	}

	#[test]
	fn competitor_beats_supplier_and_peer() {
		// Rivian is a competitor target and a risk-exposure source; competitor wins.
		let edges = sample_edges("TSLA");
		let rivian = build_graph(&edges, "TSLA")
			.nodes
			.into_iter()
			.find(|n| n.id == "Rivian")
			.unwrap();
		assert_eq!(rivian.group.as_deref(), Some("competitor"));
		assert_eq!(rivian.shape, NodeShape::Dot);
	}

	#[test]
	fn risk_nodes_are_triangles() {
		let edges = sample_edges("TSLA");
		let graph = build_graph(&edges, "TSLA");
		for id in ["Supply Chain", "AI Regulation"] {
			let node = graph.nodes.iter().find(|n| n.id == id).unwrap();
			assert_eq!(node.shape, NodeShape::Triangle);
			assert_eq!(node.group.as_deref(), Some("risk"));
		}
	}

	#[test]
	fn every_role_slug_has_a_color() {
		let colors = default_role_colors();
		for role in [
			NodeRole::Selected,
			NodeRole::Risk,
			NodeRole::Competitor,
			NodeRole::Supplier,
			NodeRole::Peer,
		] {
			assert!(colors.contains_key(role.slug()), "missing {}", role.slug());
		}
	}

	#[test]
	fn links_carry_relation_labels() {
		let edges = sample_edges("TSLA");
		let graph = build_graph(&edges, "TSLA");
		assert_eq!(graph.links[0].relation.as_deref(), Some("Competitor"));
		assert_eq!(graph.links[5].relation.as_deref(), Some("Risk_Exposure"));
	}

	#[test]
	fn deserializes_the_override_format() {
		let edges: Vec<EdgeRecord> = serde_json::from_str(
			r#"[
				{"source": "TSLA", "target": "Rivian", "relation": "Competitor", "type": "Company"},
				{"source": "Rivian", "target": "Supply Chain", "relation": "Risk_Exposure", "type": "Risk"}
			]"#,
		)
		.unwrap();
		assert_eq!(edges.len(), 2);
		assert_eq!(edges[1].relation, Relation::RiskExposure);
		assert_eq!(edges[1].entity, EntityKind::Risk);
	}
}
