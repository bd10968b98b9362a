//! UI components for the dashboard.

pub mod data_table;
pub mod force_graph;
pub mod insight_panel;
pub mod kpi_cards;
pub mod sidebar;
