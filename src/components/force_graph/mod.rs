//! Force-directed graph visualization component.
//!
//! Renders an interactive force-directed graph on an HTML canvas with:
//! - Physics-based node positioning via force simulation
//! - Pan, zoom, and node dragging interactions
//! - Smooth highlight transitions on hover, with relation labels on edges
//! - Shape-aware nodes (dot, star, triangle) and light/dark theming
//!
//! # Example
//!
//! ```ignore
//! use market_sentinel::{ForceGraphCanvas, GraphData, GraphNode, GraphLink, Theme};
//!
//! let data = GraphData {
//!     nodes: vec![
//!         GraphNode { id: "TSLA".into(), label: Some("TSLA".into()), .. },
//!         GraphNode { id: "Rivian".into(), label: Some("Rivian".into()), .. },
//!     ],
//!     links: vec![
//!         GraphLink { source: "TSLA".into(), target: "Rivian".into(), relation: Some("Competitor".into()) },
//!     ],
//! };
//!
//! view! { <ForceGraphCanvas data=data.into() theme=Signal::derive(Theme::sentinel) /> }
//! ```

mod component;
mod particles;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod types;

pub use component::ForceGraphCanvas;
pub use state::{default_role_colors, midnight_role_colors};
pub use theme::Theme;
pub use types::{GraphData, GraphLink, GraphNode, NodeShape};
