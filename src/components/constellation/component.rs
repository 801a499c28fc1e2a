use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::layout;
use super::render;
use super::types::Constellation;

fn measure(canvas: &HtmlCanvasElement, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
	(
		width.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_width() as f64)
				.unwrap_or(600.0)
		}),
		height.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_height() as f64)
				.unwrap_or(600.0)
		}),
	)
}

fn draw(canvas: &HtmlCanvasElement, snapshot: &Constellation, width: f64, height: f64) {
	canvas.set_width(width as u32);
	canvas.set_height(height as u32);
	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();
	let computed = layout::compute(snapshot, width, height);
	render::render(&computed, &ctx, width, height);
}

/// Canvas that renders a constellation snapshot with the radial layout.
///
/// The layout is recomputed and redrawn whenever `data` changes or the
/// window resizes; with no explicit `width`/`height` the canvas fills its
/// parent element.
#[component]
pub fn ConstellationCanvas(
	#[prop(into)] data: Signal<Constellation>,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb_init = resize_cb.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let snapshot = data.get();
		let (w, h) = measure(&canvas, width, height);
		draw(&canvas, &snapshot, w, h);

		// Register the resize listener once, on first draw
		if resize_cb_init.borrow().is_none() {
			let canvas_resize = canvas.clone();
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let (nw, nh) = measure(&canvas_resize, width, height);
				draw(&canvas_resize, &data.get_untracked(), nw, nh);
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let window: Window = web_sys::window().unwrap();
				let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="constellation-canvas"
			style="display: block; width: 100%; height: 100%;"
		/>
	}
}
