//! The structured-data table under the graph.

use leptos::prelude::*;

use crate::ontology::EdgeRecord;

/// Renders the raw edge list as a table.
#[component]
pub fn DataTable(#[prop(into)] edges: Signal<Vec<EdgeRecord>>) -> impl IntoView {
	view! {
		<table class="ontology-table">
			<thead>
				<tr>
					<th>"source"</th>
					<th>"target"</th>
					<th>"relation"</th>
					<th>"type"</th>
				</tr>
			</thead>
			<tbody>
				{move || {
					edges
						.get()
						.into_iter()
						.map(|edge| {
							view! {
								<tr>
									<td>{edge.source}</td>
									<td>{edge.target}</td>
									<td>{edge.relation.label()}</td>
									<td>{edge.entity.label()}</td>
								</tr>
							}
						})
						.collect_view()
				}}
			</tbody>
		</table>
	}
}
