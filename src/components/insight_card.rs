use leptos::prelude::*;

use crate::api::Insight;

/// Icon and accent color for an insight type; unknown types get the
/// suggestion style.
fn type_style(kind: &str) -> (&'static str, &'static str) {
	match kind {
		"correlation" => ("🔗", "#4ECDC4"),
		"achievement" => ("🏆", "#FFE66D"),
		_ => ("💡", "#FF6B6B"),
	}
}

/// A server-generated insight with its confidence shown as a percentage.
#[component]
pub fn InsightCard(insight: Insight) -> impl IntoView {
	let (icon, color) = type_style(&insight.kind);

	view! {
		<div class="insight-card" style=format!("border: 1px solid {color};")>
			<span class="insight-card-icon">{icon}</span>
			<div class="insight-card-body">
				<p class="insight-card-text">{insight.text}</p>
				<p class="insight-card-confidence">
					{format!("Confidence: {:.0}%", insight.confidence * 100.0)}
				</p>
			</div>
		</div>
	}
}
