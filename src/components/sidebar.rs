//! Sidebar: ticker and theme selectors plus the pipeline status rows.

use leptos::prelude::*;

use crate::report::{PipelineStage, TICKERS};

/// Control panel on the left edge of the dashboard.
#[component]
pub fn Sidebar(
	ticker: RwSignal<String>,
	theme_name: RwSignal<String>,
	#[prop(into)] pipeline: Signal<Vec<PipelineStage>>,
) -> impl IntoView {
	view! {
		<aside class="sidebar">
			<h1 class="sidebar-title">"Market Sentinel"</h1>
			<p class="sidebar-subtitle">"Financial Ontology Explorer"</p>

			<label class="sidebar-label" for="ticker-select">
				"Ticker"
			</label>
			<select
				id="ticker-select"
				class="sidebar-select"
				prop:value=move || ticker.get()
				on:change=move |ev| ticker.set(event_target_value(&ev))
			>
				{TICKERS
					.iter()
					.map(|t| view! { <option value={*t}>{*t}</option> })
					.collect_view()}
			</select>

			<label class="sidebar-label" for="theme-select">
				"Theme"
			</label>
			<select
				id="theme-select"
				class="sidebar-select"
				prop:value=move || theme_name.get()
				on:change=move |ev| theme_name.set(event_target_value(&ev))
			>
				<option value="sentinel">"Sentinel (light)"</option>
				<option value="midnight">"Midnight (dark)"</option>
			</select>

			<hr class="sidebar-divider" />

			<p class="sidebar-caption">"Pipeline Status"</p>
			<ul class="pipeline-list">
				{move || {
					pipeline
						.get()
						.into_iter()
						.map(|stage| {
							view! {
								<li class="pipeline-stage">
									<span class="pipeline-check">
										{if stage.done { "✓" } else { "…" }}
									</span>
									{stage.label}
								</li>
							}
						})
						.collect_view()
				}}
			</ul>

			<p class="sidebar-footer">"Powered by the Data Engineering Team"</p>
		</aside>
	}
}
