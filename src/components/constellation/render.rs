use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::layout::ConstellationLayout;

const BACKGROUND: &str = "#121633";
const EDGE_STROKE: &str = "rgba(255, 255, 255, 0.4)";
const LABEL_FILL: &str = "#ffffff";
const LABEL_OFFSET_Y: f64 = 20.0;

/// Draw a computed layout onto a 2d canvas context. Edges go first so nodes
/// sit on top of their connecting lines.
pub fn render(layout: &ConstellationLayout, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, width, height);
	draw_edges(layout, ctx);
	draw_nodes(layout, ctx);
}

fn draw_edges(layout: &ConstellationLayout, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(EDGE_STROKE);
	for edge in &layout.edges {
		ctx.set_line_width(2.0 * edge.weight);
		ctx.begin_path();
		ctx.move_to(edge.x1, edge.y1);
		ctx.line_to(edge.x2, edge.y2);
		ctx.stroke();
	}
}

fn draw_nodes(layout: &ConstellationLayout, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("10px sans-serif");
	ctx.set_text_align("center");

	for node in &layout.nodes {
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, node.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.category.color());
		ctx.fill();

		ctx.set_fill_style_str(LABEL_FILL);
		let _ = ctx.fill_text(&node.label, node.x, node.y + LABEL_OFFSET_Y);
	}
}
