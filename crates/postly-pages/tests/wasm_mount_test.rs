//! Browser-side mounting tests (wasm-pack / wasm-bindgen-test).

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use postly_pages::builder::html::{div, span};
use postly_pages::component::{IntoView, View};
use postly_pages::dom::Element;
use postly_pages::reactive::Signal;

wasm_bindgen_test_configure!(run_in_browser);

fn host() -> (web_sys::Element, Element) {
	let document = web_sys::window().unwrap().document().unwrap();
	let host = document.create_element("div").unwrap();
	document
		.document_element()
		.unwrap()
		.append_child(&host)
		.unwrap();
	(host.clone(), Element::new(host))
}

#[wasm_bindgen_test]
fn mounts_element_tree() {
	let (raw, parent) = host();

	div()
		.attr("class", "card")
		.child(span().child("hello"))
		.into_view()
		.mount(&parent)
		.unwrap();

	assert!(raw.inner_html().contains("class=\"card\""));
	assert!(raw.inner_html().contains("hello"));
}

#[wasm_bindgen_test]
fn reactive_region_updates_on_signal_change() {
	let (raw, parent) = host();

	let count = Signal::new(0);
	let count_for_render = count.clone();
	View::reactive(move || {
		span()
			.child(format!("count: {}", count_for_render.get()))
			.into_view()
	})
	.mount(&parent)
	.unwrap();

	assert!(raw.inner_html().contains("count: 0"));

	count.set(3);
	assert!(raw.inner_html().contains("count: 3"));
	assert!(!raw.inner_html().contains("count: 0"));
}
