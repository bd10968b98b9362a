//! The row of KPI metric cards.

use leptos::prelude::*;

use crate::report::Kpi;

/// Four metric cards across the top of the dashboard.
#[component]
pub fn KpiCards(#[prop(into)] kpis: Signal<Vec<Kpi>>) -> impl IntoView {
	view! {
		<div class="kpi-grid">
			{move || {
				kpis.get()
					.into_iter()
					.map(|kpi| {
						view! {
							<div class="kpi-card">
								<div class="metric-label">{kpi.label}</div>
								<div class="metric-value">
									{kpi.value}
									{kpi
										.suffix
										.map(|s| view! { <span class="metric-suffix">{s}</span> })}
								</div>
								<div class=kpi.trend.css_class()>{kpi.delta}</div>
							</div>
						}
					})
					.collect_view()
			}}
		</div>
	}
}
