//! Mock per-ticker analysis data feeding the dashboard chrome.
//!
//! Everything here is hard-coded sample data: the KPI cards, the insight box,
//! the risk list, and the decorative pipeline status rows. A real deployment
//! would source these from upstream systems; this viewer only renders them.

/// Tickers selectable in the sidebar.
pub const TICKERS: [&str; 3] = ["TSLA", "AAPL", "NVDA"];

/// Direction a KPI delta is moving, which drives its accent color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
	Up,
	Down,
	Flat,
}

impl Trend {
	/// CSS class suffix for the delta line.
	pub fn css_class(self) -> &'static str {
		match self {
			Trend::Up => "metric-delta-up",
			Trend::Down => "metric-delta-down",
			Trend::Flat => "metric-delta-flat",
		}
	}
}

/// A single KPI card: label, headline value, optional suffix, delta line.
#[derive(Clone, Debug)]
pub struct Kpi {
	pub label: &'static str,
	pub value: String,
	pub suffix: Option<&'static str>,
	pub delta: &'static str,
	pub trend: Trend,
}

/// Severity of an extracted risk factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
	High,
	Medium,
	Low,
}

impl Severity {
	pub fn label(self) -> &'static str {
		match self {
			Severity::High => "High",
			Severity::Medium => "Med",
			Severity::Low => "Low",
		}
	}

	/// CSS class suffix for the severity badge.
	pub fn css_class(self) -> &'static str {
		match self {
			Severity::High => "severity-high",
			Severity::Medium => "severity-medium",
			Severity::Low => "severity-low",
		}
	}
}

/// One row of the risk list.
#[derive(Clone, Debug)]
pub struct RiskFactor {
	pub title: &'static str,
	pub severity: Severity,
	pub detail: &'static str,
}

/// The headline insight box.
#[derive(Clone, Debug)]
pub struct Insight {
	pub headline: &'static str,
	pub body: String,
}

/// A decorative pipeline status row. Static text only; nothing runs.
#[derive(Clone, Debug)]
pub struct PipelineStage {
	pub label: &'static str,
	pub done: bool,
}

/// Everything the dashboard shows for one ticker besides the graph.
#[derive(Clone, Debug)]
pub struct AnalysisReport {
	pub ticker: String,
	pub kpis: Vec<Kpi>,
	pub insight: Insight,
	pub risks: Vec<RiskFactor>,
	pub pipeline: Vec<PipelineStage>,
}

impl AnalysisReport {
	/// Mock report for the given ticker, with a generic fallback for tickers
	/// outside the sample set.
	pub fn for_ticker(ticker: &str) -> Self {
		let kpis = match ticker {
			"TSLA" => vec![
				kpi("Buffett Score", "8.5", Some("/10"), "Excellent", Trend::Up),
				kpi("Risk Factors", "2", Some(" found"), "High Severity", Trend::Up),
				kpi("Competitors", "5", Some(" firms"), "Identified", Trend::Down),
				kpi("NPS Holding", "1.2M", None, "▲ 2.5%", Trend::Up),
			],
			"AAPL" => vec![
				kpi("Buffett Score", "9.1", Some("/10"), "Excellent", Trend::Up),
				kpi("Risk Factors", "1", Some(" found"), "Med Severity", Trend::Down),
				kpi("Competitors", "4", Some(" firms"), "Identified", Trend::Flat),
				kpi("NPS Holding", "3.4M", None, "▲ 0.8%", Trend::Up),
			],
			"NVDA" => vec![
				kpi("Buffett Score", "7.9", Some("/10"), "Strong", Trend::Up),
				kpi("Risk Factors", "3", Some(" found"), "High Severity", Trend::Up),
				kpi("Competitors", "6", Some(" firms"), "+1 New", Trend::Up),
				kpi("NPS Holding", "0.9M", None, "▼ 1.1%", Trend::Down),
			],
			_ => vec![
				kpi("Buffett Score", "-", Some("/10"), "No Coverage", Trend::Flat),
				kpi("Risk Factors", "2", Some(" found"), "Sampled", Trend::Flat),
				kpi("Competitors", "2", Some(" firms"), "Sampled", Trend::Flat),
				kpi("NPS Holding", "-", None, "No Data", Trend::Flat),
			],
		};

		let insight = Insight {
			headline: "Supply Chain Risk",
			body: format!(
				"{ticker} is exposed to battery raw material supply issues. The same \
				 exposure affects competitors Rivian and Lucid, making this a systemic \
				 risk rather than a company-specific one."
			),
		};

		let risks = vec![
			RiskFactor {
				title: "AI Regulation",
				severity: Severity::High,
				detail: "Tightening rules on autonomous driving could delay rollouts.",
			},
			RiskFactor {
				title: "Interest Rate",
				severity: Severity::Medium,
				detail: "Elevated rates soften financed purchase demand.",
			},
		];

		let pipeline = vec![
			PipelineStage {
				label: "SEC 10-K parsed",
				done: true,
			},
			PipelineStage {
				label: "Entities extracted",
				done: true,
			},
			PipelineStage {
				label: "Graph built",
				done: true,
			},
		];

		Self {
			ticker: ticker.to_string(),
			kpis,
			insight,
			risks,
			pipeline,
		}
	}
}

fn kpi(
	label: &'static str,
	value: &str,
	suffix: Option<&'static str>,
	delta: &'static str,
	trend: Trend,
) -> Kpi {
	Kpi {
		label,
		value: value.to_string(),
		suffix,
		delta,
		trend,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_sample_ticker_has_four_kpis() {
		for ticker in TICKERS {
			let report = AnalysisReport::for_ticker(ticker);
			assert_eq!(report.ticker, ticker);
			assert_eq!(report.kpis.len(), 4);
			assert!(!report.risks.is_empty());
			assert!(!report.pipeline.is_empty());
		}
	}

	#[test]
	fn unknown_ticker_falls_back_to_generic_report() {
		let report = AnalysisReport::for_ticker("ZZZZ");
		assert_eq!(report.kpis.len(), 4);
		assert_eq!(report.kpis[0].value, "-");
	}

	#[test]
	fn insight_mentions_the_ticker() {
		let report = AnalysisReport::for_ticker("NVDA");
		assert!(report.insight.body.contains("NVDA"));
	}

	#[test]
	fn pipeline_rows_are_static_and_done() {
		let report = AnalysisReport::for_ticker("TSLA");
		assert!(report.pipeline.iter().all(|stage| stage.done));
	}

	#[test]
	fn trend_and_severity_css_classes() {
		assert_eq!(Trend::Up.css_class(), "metric-delta-up");
		assert_eq!(Trend::Down.css_class(), "metric-delta-down");
		assert_eq!(Severity::High.css_class(), "severity-high");
	}
}
