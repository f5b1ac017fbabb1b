use leptos::prelude::*;
use log::info;

use crate::components::flowchart::{
	Connection, Diagram, DiagramSpec, FlowchartCanvas, NodeCategory, NodeSpec, ScatterBounds,
};

/// Decision tree for the cannabis business exit analysis.
fn strategy_tree() -> DiagramSpec {
	let nodes = vec![
		NodeSpec::new(
			"start",
			"Strategic Decision Analysis",
			"Comprehensive analysis of cannabis business strategy",
			0,
			1,
			NodeCategory::Root,
		),
		NodeSpec::new(
			"fa",
			"Financial Assessment",
			"Analysis of financial impacts and considerations",
			1,
			0,
			NodeCategory::Default,
		),
		NodeSpec::new(
			"sp",
			"Strategic Positioning",
			"Evaluation of business position and opportunities",
			1,
			1,
			NodeCategory::Default,
		),
		NodeSpec::new(
			"rc",
			"Risks & Considerations",
			"Key risks and timing considerations",
			1,
			2,
			NodeCategory::Risk,
		),
		NodeSpec::new(
			"fa_pros",
			"Financial Pros",
			"• Reduction in Operating Costs\n• Improved Banking Position\n• Cash Flow Improvement\n\
			 • No Further Cash Outlay\n• Opportunity Cost Benefits\n• Limited Exit Risk Mitigation",
			2,
			0,
			NodeCategory::Pro,
		),
		NodeSpec::new(
			"fa_cons",
			"Financial Cons",
			"• Unrealized Sunk Costs\n• Debt Write-Off\n• A/R Collection Risk\n\
			 • Winding Down Costs\n• Missed Regulatory Upside",
			2,
			1,
			NodeCategory::Con,
		),
		NodeSpec::new(
			"sp_pros",
			"Strategic Pros",
			"• Resource Reallocation\n• Reduced Stress & Complexity\n• Pivot to Stronger Ventures",
			2,
			2,
			NodeCategory::Pro,
		),
		NodeSpec::new(
			"sp_cons",
			"Strategic Cons",
			"• Loss of Talented Team\n• Loss of Industry Presence\n• Market Knowledge Loss",
			2,
			3,
			NodeCategory::Con,
		),
		NodeSpec::new(
			"r1",
			"Regulatory Uncertainty",
			"Changes from new administration or descheduling could shift market dynamics",
			2,
			4,
			NodeCategory::Risk,
		),
		NodeSpec::new(
			"r2",
			"Timing Risk",
			"Potential missed opportunities if market conditions improve post-exit",
			2,
			5,
			NodeCategory::Risk,
		),
		NodeSpec::new(
			"r3",
			"Capital Access Impact",
			"Regulatory reform could open institutional capital access and boost valuations",
			2,
			6,
			NodeCategory::Risk,
		),
	];

	let connections = [
		("start", "fa"),
		("start", "sp"),
		("start", "rc"),
		("fa", "fa_pros"),
		("fa", "fa_cons"),
		("sp", "sp_pros"),
		("sp", "sp_cons"),
		("rc", "r1"),
		("rc", "r2"),
		("rc", "r3"),
	]
	.into_iter()
	.map(|(from, to)| Connection::new(from, to))
	.collect();

	DiagramSpec { nodes, connections }
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let diagram = Diagram::scattered(
		&strategy_tree(),
		ScatterBounds::default(),
		js_sys::Math::random,
	)
	.inspect(|d| info!("Loaded decision diagram with {} nodes", d.nodes().len()));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-flowchart">
				{diagram.map(|diagram| view! { <FlowchartCanvas diagram=diagram fullscreen=true /> })}
				<div class="flowchart-overlay">
					<h1>"Strategic Decision Analysis"</h1>
					<p class="subtitle">"Drag boxes to reposition. Drag background to pan. Scroll to zoom."</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
