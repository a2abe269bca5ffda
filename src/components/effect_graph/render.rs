//! Canvas rendering of a [`RenderGraph`].
//!
//! Drawing order: background (screen space), then edges, then nodes and
//! their labels on top (world space). Opacity comes straight from the render
//! graph; nothing here knows about selections.

use std::collections::HashMap;
use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::scale::{ScaleConfig, ScaledValues};
use super::scene::{RenderEdge, RenderGraph, RenderNode};
use super::state::ViewState;
use super::theme::{ArrowStyle, Color, RenderStyle};
use super::types::EffectId;

const FALLBACK_COLOR: Color = Color::rgb(128, 128, 128);

/// Renders the complete graph to the canvas.
pub fn render(
	graph: &RenderGraph,
	ctx: &CanvasRenderingContext2d,
	view: &ViewState,
	config: &ScaleConfig,
	style: &RenderStyle,
) {
	let scale = ScaledValues::new(config, view.transform.k);

	ctx.set_global_alpha(1.0);
	ctx.set_fill_style_str(&style.background);
	ctx.fill_rect(0.0, 0.0, view.width, view.height);

	ctx.save();
	let _ = ctx.translate(view.transform.x, view.transform.y);
	let _ = ctx.scale(view.transform.k, view.transform.k);

	let positions: HashMap<EffectId, (f64, f64)> =
		graph.nodes.iter().map(|n| (n.id, (n.x, n.y))).collect();
	// Endpoints that are not effects are drawn at the centre.
	let locate = |id: EffectId| positions.get(&id).copied().unwrap_or((0.0, 0.0));

	for edge in &graph.edges {
		draw_edge(ctx, &scale, style, edge, locate(edge.source), locate(edge.target));
	}
	for node in &graph.nodes {
		draw_node(ctx, &scale, style, node);
	}

	ctx.restore();
	ctx.set_global_alpha(1.0);
}

fn draw_edge(
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	style: &RenderStyle,
	edge: &RenderEdge,
	(x1, y1): (f64, f64),
	(x2, y2): (f64, f64),
) {
	let color = Color::from_hex(&edge.color)
		.unwrap_or(FALLBACK_COLOR)
		.with_alpha(edge.opacity);
	ctx.set_stroke_style_str(&color.to_css());
	ctx.set_fill_style_str(&color.to_css());
	ctx.set_line_width(if edge.highlighted {
		scale.edge_width * 2.0
	} else {
		scale.edge_width
	});

	let (dx, dy) = (x2 - x1, y2 - y1);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		draw_self_loop(ctx, scale, x1, y1);
		return;
	}

	let (ux, uy) = (dx / dist, dy / dist);
	let (start_x, start_y) = (x1 + ux * scale.node_radius, y1 + uy * scale.node_radius);
	let (tip_x, tip_y) = (x2 - ux * scale.node_radius, y2 - uy * scale.node_radius);

	// Both control points sit on the same side, like a cubic bezier bent by
	// `edge_roundness`.
	let bend = dist * style.edge_roundness * 0.25;
	let (px, py) = (-uy * bend, ux * bend);
	let (c1x, c1y) = (x1 + dx / 3.0 + px, y1 + dy / 3.0 + py);
	let (c2x, c2y) = (x1 + dx * 2.0 / 3.0 + px, y1 + dy * 2.0 / 3.0 + py);

	// Direction the curve arrives at the tip.
	let (tx, ty) = (tip_x - c2x, tip_y - c2y);
	let tlen = (tx * tx + ty * ty).sqrt().max(0.001);
	let (ax, ay) = (tx / tlen, ty / tlen);

	let with_arrow = style.arrows == ArrowStyle::To && dist > scale.node_radius * 2.0;
	let (end_x, end_y) = if with_arrow {
		(tip_x - ax * scale.arrow_size, tip_y - ay * scale.arrow_size)
	} else {
		(tip_x, tip_y)
	};

	ctx.begin_path();
	ctx.move_to(start_x, start_y);
	if style.edge_roundness > 0.0 {
		ctx.bezier_curve_to(c1x, c1y, c2x, c2y, end_x, end_y);
	} else {
		ctx.line_to(end_x, end_y);
	}
	ctx.stroke();

	if with_arrow {
		let (back_x, back_y) = (tip_x - ax * scale.arrow_size, tip_y - ay * scale.arrow_size);
		let (wx, wy) = (-ay * scale.arrow_size * 0.5, ax * scale.arrow_size * 0.5);

		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + wx, back_y + wy);
		ctx.line_to(back_x - wx, back_y - wy);
		ctx.close_path();
		ctx.fill();
	}
}

/// A transformation from an effect to itself, drawn as a small loop on the
/// outside of the node.
fn draw_self_loop(ctx: &CanvasRenderingContext2d, scale: &ScaledValues, x: f64, y: f64) {
	let len = (x * x + y * y).sqrt();
	let (ox, oy) = if len < 0.001 {
		(0.0, -1.0)
	} else {
		(x / len, y / len)
	};
	let loop_radius = scale.node_radius * 0.8;
	let (cx, cy) = (
		x + ox * (scale.node_radius + loop_radius * 0.5),
		y + oy * (scale.node_radius + loop_radius * 0.5),
	);
	ctx.begin_path();
	let _ = ctx.arc(cx, cy, loop_radius, 0.0, 2.0 * PI);
	ctx.stroke();
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	style: &RenderStyle,
	node: &RenderNode,
) {
	ctx.set_global_alpha(node.opacity);

	ctx.begin_path();
	let _ = ctx.arc(node.x, node.y, scale.node_radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&node.color);
	ctx.fill();

	ctx.set_fill_style_str(&style.font_color);
	ctx.set_font(&scale.label_font);
	let _ = ctx.fill_text(&node.label, node.x + scale.node_radius + 4.0, node.y + 4.0);

	ctx.set_global_alpha(1.0);
}
