//! Canvas rendering for the force graph.
//!
//! Handles all drawing operations: background, edges, nodes, labels, and effects.
//! Rendering uses multiple passes for correct z-ordering:
//! 1. Background and particles (screen space)
//! 2. Edge lines, arrowheads, and relation labels (world space)
//! 3. Non-highlighted nodes, then highlighted nodes on top

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleSystem;
use super::scale::{ScaleConfig, ScaledValues};
use super::state::{ForceGraphState, NodeInfo};
use super::theme::{Color, Theme};
use super::types::NodeShape;

/// Attempt to smooth values that would otherwise cause abrupt visual changes.
fn smooth_step(t: f64) -> f64 {
	t * t * (3.0 - 2.0 * t)
}

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
	particles: Option<&ParticleSystem>,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, theme);

	if let Some(ps) = particles {
		draw_particles(state, ctx, theme, ps);
	}

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, config, &scale, theme);
	draw_nodes(state, ctx, &scale, theme);

	ctx.restore();

	if theme.background.vignette > 0.0 {
		draw_vignette(state, ctx, theme);
	}
}

fn draw_background(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	if theme.background.use_gradient {
		let gradient = ctx
			.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				(state.width.max(state.height)) * 0.8,
			)
			.unwrap();

		gradient
			.add_color_stop(0.0, &theme.background.color_secondary.to_css())
			.unwrap();
		gradient
			.add_color_stop(1.0, &theme.background.color.to_css())
			.unwrap();

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.background.color.to_css());
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_vignette(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let gradient = ctx
		.create_radial_gradient(
			state.width / 2.0,
			state.height / 2.0,
			state.width.min(state.height) * 0.3,
			state.width / 2.0,
			state.height / 2.0,
			state.width.max(state.height) * 0.7,
		)
		.unwrap();

	gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)").unwrap();
	gradient
		.add_color_stop(
			1.0,
			&format!("rgba(0, 0, 0, {})", theme.background.vignette),
		)
		.unwrap();

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_particles(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	particles: &ParticleSystem,
) {
	let color = &theme.particles.color;

	for p in &particles.particles {
		let alpha = particles.twinkle_alpha(p, state.flow_time);
		ctx.set_fill_style_str(&format!(
			"rgba({}, {}, {}, {})",
			color.r, color.g, color.b, alpha
		));

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.fill();
	}
}

fn draw_edges(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let dash_offset = scale.dash_offset(state.flow_time, config.edge.flow_speed);

	state.graph.visit_edges(|n1, n2, _| {
		draw_edge(state, ctx, scale, theme, n1, n2, dash_offset);
	});

	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_edge(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	n1: &force_graph::Node<NodeInfo>,
	n2: &force_graph::Node<NodeInfo>,
	dash_offset: f64,
) {
	let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
	let (dx, dy) = (x2 - x1, y2 - y1);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return;
	}

	let edge_t = smooth_step(state.highlight.edge_intensity(n1.index(), n2.index()));
	let max_t = smooth_step(state.highlight.max_intensity());

	let (edge_alpha, base_arrow_alpha, base_width) = if edge_t > 0.01 {
		(
			0.7 + 0.3 * edge_t,
			0.9 + 0.1 * edge_t,
			scale.edge_line_width * (1.0 + 0.4 * edge_t),
		)
	} else if max_t > 0.01 {
		(
			0.7 - 0.5 * max_t,
			0.9 - 0.6 * max_t,
			scale.edge_line_width * (1.0 - 0.3 * max_t),
		)
	} else {
		(0.7, 0.9, scale.edge_line_width)
	};

	// Compensate for dash pattern fading to solid
	let width = base_width * (1.0 + 0.3 * (1.0 - scale.dash_alpha));
	let arrow_alpha = base_arrow_alpha * scale.arrow_alpha;

	let edge_color = &theme.edge.color;
	ctx.set_stroke_style_str(&format!(
		"rgba({}, {}, {}, {})",
		edge_color.r,
		edge_color.g,
		edge_color.b,
		edge_alpha * edge_color.a
	));
	ctx.set_line_width(width);

	// Fade dash pattern to solid when zoomed out
	let effective_gap = scale.dash_pattern.1 * scale.dash_alpha;
	if effective_gap > 0.1 {
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(scale.dash_pattern.0),
			&JsValue::from_f64(effective_gap),
		));
		ctx.set_line_dash_offset(dash_offset);
	} else {
		let _ = ctx.set_line_dash(&js_sys::Array::new());
	}

	let (ux, uy) = (dx / dist, dy / dist);

	ctx.begin_path();
	ctx.move_to(x1 + ux * scale.node_radius, y1 + uy * scale.node_radius);
	ctx.line_to(
		x2 - ux * (scale.node_radius + scale.arrow_size),
		y2 - uy * (scale.node_radius + scale.arrow_size),
	);
	ctx.stroke();

	if !scale.cull_arrows && arrow_alpha > 0.0 {
		let _ = ctx.set_line_dash(&js_sys::Array::new());
		ctx.set_fill_style_str(&format!(
			"rgba({}, {}, {}, {})",
			edge_color.r,
			edge_color.g,
			edge_color.b,
			arrow_alpha * edge_color.a
		));

		let (tip_x, tip_y) = (x2 - ux * scale.node_radius, y2 - uy * scale.node_radius);
		let (back_x, back_y) = (tip_x - ux * scale.arrow_size, tip_y - uy * scale.arrow_size);
		let (px, py) = (-uy * scale.arrow_size * 0.5, ux * scale.arrow_size * 0.5);

		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}

	// Relation label at the midpoint, shown only while the edge is highlighted
	if edge_t > 0.3 {
		if let Some(relation) = state.relation(n1.index(), n2.index()) {
			let label_alpha = (edge_t - 0.3) / 0.7;
			let label_color = &theme.edge.label_color;
			let (mid_x, mid_y) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
			// Nudge the label off the line along its normal
			let (off_x, off_y) = (-uy * 6.0 / scale.k, ux * 6.0 / scale.k);

			let _ = ctx.set_line_dash(&js_sys::Array::new());
			ctx.set_fill_style_str(&format!(
				"rgba({}, {}, {}, {})",
				label_color.r,
				label_color.g,
				label_color.b,
				label_alpha * label_color.a
			));
			ctx.set_font(&scale.edge_label_font);
			let _ = ctx.fill_text(relation, mid_x + off_x, mid_y + off_y);
		}
	}
}

fn draw_nodes(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let max_t = smooth_step(state.highlight.max_intensity());
	let has_highlight = max_t > 0.01;

	// Pass 1: non-highlighted nodes
	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let node_t = state.highlight.node_intensity(idx);
		if node_t > 0.001 {
			return;
		}
		let (alpha, radius_mult) = if has_highlight {
			(1.0 - 0.7 * max_t, 1.0 - 0.15 * max_t)
		} else {
			(1.0, 1.0)
		};
		draw_node(ctx, node, scale, theme, alpha, radius_mult);
	});

	// Pass 2: highlighted/transitioning nodes on top
	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let node_t = state.highlight.node_intensity(idx);
		if node_t <= 0.001 {
			return;
		}

		let eased_t = smooth_step(node_t);
		let hover_t = smooth_step(state.highlight.hover_ring_intensity(idx));
		let (x, y) = (node.x() as f64, node.y() as f64);

		let dim_alpha = if has_highlight {
			1.0 - 0.7 * max_t
		} else {
			1.0
		};
		let dim_radius = if has_highlight {
			1.0 - 0.15 * max_t
		} else {
			1.0
		};

		let neighbor_radius = 1.0 + 0.25 * eased_t;
		let hovered_radius = 1.0 + 0.4 * eased_t;
		let highlight_radius = neighbor_radius + (hovered_radius - neighbor_radius) * hover_t;

		let alpha = dim_alpha + (1.0 - dim_alpha) * eased_t;
		let radius_mult = dim_radius + (highlight_radius - dim_radius) * eased_t;

		draw_node(ctx, node, scale, theme, alpha, radius_mult);

		let ring_t = hover_t;
		if ring_t > 0.01 {
			let ring_color = &theme.node.ring_color;
			let radius = scale.node_radius * radius_mult * node.data.user_data.size;
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + scale.ring_offset, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&ring_color.with_alpha(0.8 * ring_t).to_css());
			ctx.set_line_width(scale.ring_width);
			ctx.stroke();

			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + scale.ring_offset * 2.5, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&ring_color.with_alpha(0.3 * ring_t).to_css());
			ctx.set_line_width(scale.ring_width * 0.5);
			ctx.stroke();
		}
	});
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &force_graph::Node<NodeInfo>,
	scale: &ScaledValues,
	theme: &Theme,
	alpha: f64,
	radius_mult: f64,
) {
	let (x, y) = (node.x() as f64, node.y() as f64);
	let node_size = node.data.user_data.size;
	let radius = scale.node_radius * radius_mult * node_size;
	let shape = node.data.user_data.shape;
	let color = &node.data.user_data.color;

	ctx.set_global_alpha(alpha);

	trace_shape(ctx, shape, x, y, radius);
	if theme.node.use_gradient {
		let gradient = ctx
			.create_radial_gradient(x - radius * 0.3, y - radius * 0.3, 0.0, x, y, radius)
			.unwrap();

		let base_color = parse_color(color);
		let highlight = base_color.lighten(0.4);
		let shadow = base_color.darken(0.2);

		gradient.add_color_stop(0.0, &highlight.to_css()).unwrap();
		gradient.add_color_stop(0.7, &base_color.to_css()).unwrap();
		gradient.add_color_stop(1.0, &shadow.to_css()).unwrap();

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(color);
	}
	ctx.fill();

	if theme.node.border_width > 0.0 {
		trace_shape(ctx, shape, x, y, radius);
		ctx.set_stroke_style_str(&theme.node.border_color.to_css());
		ctx.set_line_width(theme.node.border_width / scale.k);
		ctx.stroke();
	}

	ctx.set_global_alpha(1.0);

	if let Some(label) = &node.data.user_data.label {
		if alpha > 0.5 {
			let label_color = &theme.node.label_color;
			ctx.set_global_alpha(alpha * 0.9);
			ctx.set_fill_style_str(&label_color.to_css());
			ctx.set_font(&scale.label_font);
			let _ = ctx.fill_text(label, x + radius + 4.0, y + 3.0);
			ctx.set_global_alpha(1.0);
		}
	}
}

/// Traces the outline for a node shape without filling or stroking it.
fn trace_shape(ctx: &CanvasRenderingContext2d, shape: NodeShape, x: f64, y: f64, radius: f64) {
	ctx.begin_path();
	match shape {
		NodeShape::Dot => {
			let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		}
		NodeShape::Star => {
			// Five points, alternating outer and inner vertices, starting at the top
			let inner = radius * 0.45;
			for i in 0..10 {
				let r = if i % 2 == 0 { radius } else { inner };
				let angle = -PI / 2.0 + (i as f64) * PI / 5.0;
				let (px, py) = (x + r * angle.cos(), y + r * angle.sin());
				if i == 0 {
					ctx.move_to(px, py);
				} else {
					ctx.line_to(px, py);
				}
			}
			ctx.close_path();
		}
		NodeShape::Triangle => {
			for i in 0..3 {
				let angle = -PI / 2.0 + (i as f64) * 2.0 * PI / 3.0;
				let (px, py) = (x + radius * angle.cos(), y + radius * angle.sin());
				if i == 0 {
					ctx.move_to(px, py);
				} else {
					ctx.line_to(px, py);
				}
			}
			ctx.close_path();
		}
	}
}

/// Parses a CSS color string into a [`Color`].
/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation.
fn parse_color(color_str: &str) -> Color {
	if color_str.starts_with('#') && color_str.len() == 7 {
		let r = u8::from_str_radix(&color_str[1..3], 16).unwrap_or(128);
		let g = u8::from_str_radix(&color_str[3..5], 16).unwrap_or(128);
		let b = u8::from_str_radix(&color_str[5..7], 16).unwrap_or(128);
		Color::rgb(r, g, b)
	} else if color_str.starts_with("rgb") {
		let nums: Vec<&str> = color_str
			.trim_start_matches("rgba(")
			.trim_start_matches("rgb(")
			.trim_end_matches(')')
			.split(',')
			.collect();
		let r = nums
			.first()
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(128);
		let g = nums
			.get(1)
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(128);
		let b = nums
			.get(2)
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(128);
		let a = nums
			.get(3)
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(1.0);
		Color::rgba(r, g, b, a)
	} else {
		Color::rgb(128, 128, 128)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_colors() {
		let c = parse_color("#3182f6");
		assert_eq!((c.r, c.g, c.b), (49, 130, 246));
	}

	#[test]
	fn parses_rgba_colors() {
		let c = parse_color("rgba(240, 68, 82, 0.5)");
		assert_eq!((c.r, c.g, c.b), (240, 68, 82));
		assert!((c.a - 0.5).abs() < 1e-9);
	}

	#[test]
	fn malformed_colors_fall_back_to_grey() {
		let c = parse_color("not-a-color");
		assert_eq!((c.r, c.g, c.b), (128, 128, 128));
	}

	#[test]
	fn smooth_step_endpoints() {
		assert_eq!(smooth_step(0.0), 0.0);
		assert_eq!(smooth_step(1.0), 1.0);
		assert_eq!(smooth_step(0.5), 0.5);
	}
}
