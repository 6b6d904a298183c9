use std::cell::RefCell;
use std::rc::Rc;

use leptos::callback::{Callable, UnsyncCallback};
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::frame::FrameLoop;
use super::render;
use super::state::SceneState;
use crate::graph::{GraphData, GraphNode, Vec3};

const FRAME_DT: f64 = 0.016;

/// Canvas that draws `data` as spheres and lines under an orbit camera.
/// Drag to orbit, scroll to zoom, click a sphere to fire `on_node_click`.
#[component]
pub fn Graph3DCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(optional)] stars: Vec<Vec3>,
	#[prop(default = 10.0)] camera_distance: f64,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(optional, into)] on_node_click: Option<UnsyncCallback<GraphNode>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<SceneState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frames = Rc::new(FrameLoop::new());
	let (state_init, animate_init, frames_init) = (state.clone(), animate.clone(), frames.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| p.client_height() as f64)
					.filter(|h| *h > 0.0)
					.unwrap_or(600.0)
			}),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		*state_init.borrow_mut() = Some(SceneState::new(
			data.get_untracked(),
			stars.clone(),
			camera_distance,
			w,
			h,
		));

		let (state_anim, animate_inner, frames_anim) =
			(state_init.clone(), animate_init.clone(), frames_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			frames_anim.fired();
			if !frames_anim.is_running() {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(FRAME_DT);
				render::render(s, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					frames_anim.scheduled(id);
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frames_init.scheduled(id);
			}
		}
	});

	// The frame closure holds an Rc to its own cell; break that cycle and
	// cancel the queued frame when the route unmounts.
	let teardown = SendWrapper::new((frames, animate, state.clone()));
	on_cleanup(move || {
		let (frames, animate, state) = teardown.take();
		if let Some(id) = frames.stop() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		animate.borrow_mut().take();
		state.borrow_mut().take();
	});

	// New data replaces the scene contents without restarting the loop.
	let state_data = state.clone();
	Effect::new(move |_| {
		let graph = data.get();
		if let Some(ref mut s) = *state_data.borrow_mut() {
			s.set_data(graph);
		}
	});

	let local_pos = move |ev: &MouseEvent| {
		let canvas: HtmlCanvasElement = canvas_ref.get().unwrap().into();
		let rect = canvas.get_bounding_client_rect();
		(
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		)
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let (x, y) = local_pos(&ev);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.begin_drag(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let (x, y) = local_pos(&ev);
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if s.drag.active {
				s.drag_to(x, y);
			} else {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let (x, y) = local_pos(&ev);
		let clicked = state_mu.borrow_mut().as_mut().and_then(|s| {
			s.end_drag(x, y)
				.and_then(|idx| s.data.nodes.get(idx).cloned())
		});
		// The state borrow is released before handing control to the page.
		if let (Some(node), Some(cb)) = (clicked, on_node_click.as_ref()) {
			cb.run(node);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag.active = false;
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom(ev.delta_y());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph3d-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
