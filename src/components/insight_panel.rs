//! Insight box and risk list beside the graph.

use leptos::prelude::*;

use crate::report::{Insight, RiskFactor};

/// The "AI summary" insight box followed by severity-tagged risk rows.
#[component]
pub fn InsightPanel(
	#[prop(into)] insight: Signal<Insight>,
	#[prop(into)] risks: Signal<Vec<RiskFactor>>,
) -> impl IntoView {
	view! {
		<h2>"Key Insight"</h2>
		<p class="panel-caption">"Summary extracted from the latest 10-K filing."</p>

		<div class="insight-box">
			<span class="insight-headline">{move || insight.get().headline}</span>
			<p class="insight-body">{move || insight.get().body}</p>
		</div>

		<p class="risk-list-title">"Risk factors"</p>
		<ul class="risk-list">
			{move || {
				risks
					.get()
					.into_iter()
					.map(|risk| {
						view! {
							<li class="risk-row">
								<span class=format!(
									"severity-badge {}",
									risk.severity.css_class(),
								)>{risk.severity.label()}</span>
								<div>
									<span class="risk-title">{risk.title}</span>
									<p class="risk-detail">{risk.detail}</p>
								</div>
							</li>
						}
					})
					.collect_view()
			}}
		</ul>
	}
}
