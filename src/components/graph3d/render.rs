use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{NODE_RADIUS, SceneState};

const BACKGROUND: &str = "#000000";

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_stars(state, ctx);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_stars(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	if state.stars.is_empty() {
		return;
	}
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.8)");
	for star in &state.stars {
		if let Some(p) = state.project(*star) {
			if p.x >= 0.0 && p.y >= 0.0 && p.x <= state.width && p.y <= state.height {
				ctx.fill_rect(p.x, p.y, 1.0, 1.0);
			}
		}
	}
}

fn draw_edges(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	ctx.set_line_width(1.5);
	for edge in &state.data.edges {
		let (Some(a), Some(b)) = (state.project(edge.start), state.project(edge.end)) else {
			continue;
		};
		ctx.set_stroke_style_str(&edge.color);
		ctx.set_global_alpha(0.6);
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &SceneState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);

	for (idx, p) in state.depth_order() {
		let node = &state.data.nodes[idx];
		let hovered = state.hover.node == Some(idx);
		let radius = NODE_RADIUS * p.scale * if hovered { 1.0 + 0.3 * t } else { 1.0 };
		if radius < 0.3 {
			continue;
		}

		if hovered && t > 0.01 {
			let glow = radius * (1.6 + 0.8 * t);
			if let Ok(gradient) = ctx.create_radial_gradient(p.x, p.y, radius * 0.5, p.x, p.y, glow) {
				let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", 0.35 * t));
				let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
				ctx.begin_path();
				let _ = ctx.arc(p.x, p.y, glow, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&node.color);
		ctx.fill();

		// Light from the upper left, like a point light in front of the scene.
		let (hx, hy) = (p.x - radius * 0.35, p.y - radius * 0.35);
		if let Ok(shade) = ctx.create_radial_gradient(hx, hy, radius * 0.1, p.x, p.y, radius) {
			let _ = shade.add_color_stop(0.0, "rgba(255, 255, 255, 0.45)");
			let _ = shade.add_color_stop(0.7, "rgba(0, 0, 0, 0)");
			let _ = shade.add_color_stop(1.0, "rgba(0, 0, 0, 0.45)");
			ctx.begin_path();
			let _ = ctx.arc(p.x, p.y, radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&shade);
			ctx.fill();
		}

		if hovered {
			ctx.set_fill_style_str("white");
			ctx.set_font("13px sans-serif");
			let _ = ctx.fill_text(&node.label, p.x + radius + 4.0, p.y + 4.0);
		}
	}
}
