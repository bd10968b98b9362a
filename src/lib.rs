//! market-sentinel: Interactive financial knowledge-graph dashboard.
//!
//! This crate provides a WASM-based single-page viewer for a ticker-centric
//! ontology graph: a sidebar with ticker and theme selectors, KPI cards, an
//! interactive force-directed graph of company/competitor/risk/supplier
//! relations, a risk-insight panel, and the raw edge table. All data is
//! hard-coded mock data; structured graph input can optionally be supplied
//! via a DOM script element.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod ontology;
pub mod report;

pub use components::force_graph::{
	ForceGraphCanvas, GraphData, GraphLink, GraphNode, NodeShape, Theme,
};

use components::data_table::DataTable;
use components::insight_panel::InsightPanel;
use components::kpi_cards::KpiCards;
use components::sidebar::Sidebar;
use ontology::{EdgeRecord, build_graph, sample_edges};
use report::{AnalysisReport, TICKERS};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("market-sentinel: logging initialized");
}

/// Load ontology edges from a script element with id="ontology-data".
/// Expected format: a JSON array of { source, target, relation, type }.
fn load_ontology_override() -> Option<Vec<EdgeRecord>> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("ontology-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<Vec<EdgeRecord>>(&json_text) {
		Ok(edges) => {
			info!("market-sentinel: loaded {} override edges", edges.len());
			Some(edges)
		}
		Err(e) => {
			warn!("market-sentinel: failed to parse ontology data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Wires the ticker and theme signals through the dashboard panels and the
/// force-directed graph.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	// Page-supplied structured data beats the built-in mock table
	let override_edges = load_ontology_override();
	let ticker = RwSignal::new(TICKERS[0].to_string());
	let theme_name = RwSignal::new("sentinel".to_string());

	let edges = Signal::derive(move || {
		override_edges
			.clone()
			.unwrap_or_else(|| sample_edges(&ticker.get()))
	});
	let graph = Signal::derive(move || build_graph(&edges.get(), &ticker.get()));
	let theme = Signal::derive(move || Theme::by_name(&theme_name.get()));
	let report = Signal::derive(move || AnalysisReport::for_ticker(&ticker.get()));

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Market Sentinel" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="app-shell" class:theme-midnight=move || theme_name.get() == "midnight">
			<Sidebar
				ticker=ticker
				theme_name=theme_name
				pipeline=Signal::derive(move || report.get().pipeline)
			/>

			<main class="dashboard">
				<header class="dashboard-header">
					<h1>{move || format!("{} Knowledge Graph", ticker.get())}</h1>
					<p class="dashboard-subtitle">
						{move || {
							format!(
								"Company, competitor, risk, and supplier relations extracted for {}.",
								ticker.get(),
							)
						}}
					</p>
				</header>

				<KpiCards kpis=Signal::derive(move || report.get().kpis) />

				<div class="panel-row">
					<section class="graph-panel">
						<h2>"Interactive Ontology View"</h2>
						<p class="panel-caption">
							"Drag nodes to reposition. Scroll to zoom. Drag background to pan."
						</p>
						<div class="graph-host">
							<ForceGraphCanvas data=graph theme=theme />
						</div>
					</section>

					<aside class="insight-panel">
						<InsightPanel
							insight=Signal::derive(move || report.get().insight)
							risks=Signal::derive(move || report.get().risks)
						/>
					</aside>
				</div>

				<section class="table-panel">
					<h2>"Structured Data"</h2>
					<p class="panel-caption">"The edge list behind the graph."</p>
					<DataTable edges=edges />
				</section>
			</main>
		</div>
	}
}
