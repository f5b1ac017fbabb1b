use log::warn;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::geometry::{
	self, BODY_LINE_HEIGHT, BOX_PADDING, HEADING_GAP, HEADING_LINE_HEIGHT, NodeBox, TextStyle,
};
use super::model::Diagram;
use super::state::FlowchartState;
use super::types::NodeCategory;

const CORNER_RADIUS: f64 = 8.0;

pub fn category_fill(category: NodeCategory) -> &'static str {
	match category {
		NodeCategory::Root => "#e9d5ff",
		NodeCategory::Pro => "#bbf7d0",
		NodeCategory::Con => "#fecaca",
		NodeCategory::Risk => "#fed7aa",
		NodeCategory::Default => "#bfdbfe",
	}
}

/// Text width through the canvas; falls back to a rough estimate when the
/// browser refuses to measure.
fn measure(ctx: &CanvasRenderingContext2d, text: &str, style: TextStyle) -> f64 {
	ctx.set_font(style.font());
	match ctx.measure_text(text) {
		Ok(metrics) => metrics.width(),
		Err(err) => {
			warn!("measureText failed: {err:?}");
			text.chars().count() as f64 * 7.0
		}
	}
}

/// Draw one frame and return the node boxes it was drawn with.
pub fn render(state: &FlowchartState, ctx: &CanvasRenderingContext2d) -> Vec<NodeBox> {
	let boxes = geometry::layout_boxes(&state.diagram, |text, style| measure(ctx, text, style));

	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_connections(&state.diagram, ctx);
	draw_nodes(&state.diagram, &boxes, ctx);
	if let Some(ghost) = state.drag_ghost() {
		draw_ghost(&ghost, ctx);
	}
	ctx.restore();

	boxes
}

fn draw_connections(diagram: &Diagram, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str("#9ca3af");
	ctx.set_line_width(2.0);
	for (from, to) in diagram.resolved_connections() {
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
		ctx.stroke();
	}
}

fn draw_nodes(diagram: &Diagram, boxes: &[NodeBox], ctx: &CanvasRenderingContext2d) {
	for (node, b) in diagram.nodes().iter().zip(boxes) {
		ctx.save();
		ctx.set_shadow_color("rgba(0, 0, 0, 0.15)");
		ctx.set_shadow_blur(6.0);
		ctx.set_shadow_offset_y(2.0);
		rounded_rect(ctx, b);
		ctx.set_fill_style_str(category_fill(node.category));
		ctx.fill();
		ctx.restore();

		ctx.set_fill_style_str("#111827");
		ctx.set_text_baseline("top");
		let x = b.left + BOX_PADDING;
		let mut y = b.top + BOX_PADDING;
		ctx.set_font(TextStyle::Heading.font());
		for line in &b.heading {
			let _ = ctx.fill_text(line, x, y);
			y += HEADING_LINE_HEIGHT;
		}
		y += HEADING_GAP;
		ctx.set_font(TextStyle::Body.font());
		for line in &b.body {
			let _ = ctx.fill_text(line, x, y);
			y += BODY_LINE_HEIGHT;
		}
	}
}

fn draw_ghost(ghost: &NodeBox, ctx: &CanvasRenderingContext2d) {
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(6.0),
		&JsValue::from_f64(4.0),
	));
	ctx.set_stroke_style_str("rgba(59, 130, 246, 0.8)");
	ctx.set_line_width(1.5);
	rounded_rect(ctx, ghost);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, b: &NodeBox) {
	let (l, t, r, btm) = (b.left, b.top, b.left + b.width, b.top + b.height);
	let rad = CORNER_RADIUS.min(b.width / 2.0).min(b.height / 2.0);
	ctx.begin_path();
	ctx.move_to(l + rad, t);
	let _ = ctx.arc_to(r, t, r, btm, rad);
	let _ = ctx.arc_to(r, btm, l, btm, rad);
	let _ = ctx.arc_to(l, btm, l, t, rad);
	let _ = ctx.arc_to(l, t, r, t, rad);
	ctx.close_path();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_category_has_a_distinct_fill() {
		let fills: std::collections::HashSet<_> = [
			NodeCategory::Root,
			NodeCategory::Pro,
			NodeCategory::Con,
			NodeCategory::Risk,
			NodeCategory::Default,
		]
		.into_iter()
		.map(category_fill)
		.collect();
		assert_eq!(fills.len(), 5);
	}
}
