//! Leptos component wrapping the effect graph canvas.
//!
//! The component creates an HTML canvas, draws the scene for the current
//! selection and redraws whenever the selection changes, the view is panned
//! or zoomed, or the window is resized. Nothing animates, so there is no
//! frame loop.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::highlight::Selection;
use super::render;
use super::scale::ScaleConfig;
use super::scene::{GraphScene, RenderGraph};
use super::state::ViewState;
use super::theme::RenderStyle;

/// Bundles the drawing context with the view and the current frame.
struct CanvasContext {
	ctx: CanvasRenderingContext2d,
	view: ViewState,
	scale: ScaleConfig,
	style: RenderStyle,
	frame: RenderGraph,
}

impl CanvasContext {
	fn draw(&self) {
		render::render(&self.frame, &self.ctx, &self.view, &self.scale, &self.style);
	}
}

fn canvas_width(canvas: &HtmlCanvasElement) -> f64 {
	canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(800.0)
}

fn pointer_position(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		client_x as f64 - rect.left(),
		client_y as f64 - rect.top(),
	)
}

/// Renders the effect graph on a canvas element.
///
/// The canvas fills the width of its parent and is `style.canvas_height`
/// pixels tall. Drag the background to pan, scroll to zoom.
#[component]
pub fn EffectGraphCanvas(
	scene: Arc<GraphScene>,
	#[prop(into)] selection: Signal<Selection>,
	#[prop(optional)] style: RenderStyle,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<CanvasContext>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let (context_init, resize_cb_init, scene_init) = (context.clone(), resize_cb, scene.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = (canvas_width(&canvas), style.canvas_height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("effect-graph: canvas 2d context unavailable");
			return;
		};

		let c = CanvasContext {
			ctx,
			view: ViewState::new(w, h, scene_init.layout.radius()),
			scale: ScaleConfig::default(),
			style: style.clone(),
			frame: scene_init.render_graph(&selection.get_untracked()),
		};
		c.draw();
		*context_init.borrow_mut() = Some(c);

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let nw = canvas_width(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				let height = c.view.height;
				c.view.resize(nw, height);
				c.draw();
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	});

	let context_sel = context.clone();
	Effect::new(move |_| {
		let current = selection.get();
		match current.ingredient().and_then(|name| scene.graph.ingredient(name)) {
			Some(ingredient) => debug!(
				"effect-graph: selected {:?} (base {:?}, {} transformations)",
				ingredient.name,
				ingredient.base,
				ingredient.transformations.len()
			),
			None => debug!("effect-graph: selection changed to {:?}", current),
		}
		if let Some(ref mut c) = *context_sel.borrow_mut() {
			c.frame = scene.render_graph(&current);
			c.draw();
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer_position(&canvas, ev.client_x(), ev.client_y());
		if let Some(ref mut c) = *context_md.borrow_mut() {
			c.view.begin_pan(x, y);
		}
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer_position(&canvas, ev.client_x(), ev.client_y());
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			if c.view.pan_to(x, y) {
				c.draw();
			}
		}
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_mu.borrow_mut() {
			c.view.end_pan();
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.view.end_pan();
		}
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer_position(&canvas, ev.client_x(), ev.client_y());
		if let Some(ref mut c) = *context_wh.borrow_mut() {
			c.view.zoom_at(x, y, ev.delta_y());
			c.draw();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="effect-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
