//! Reactive DOM regions.
//!
//! `ReactiveNode` anchors a render closure in the DOM with a comment marker
//! and re-mounts its output whenever a signal read inside the closure
//! changes. Client-side only; string rendering evaluates reactive regions
//! inline.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;

use crate::component::into_view::{View, is_boolean_attr, is_boolean_attr_truthy};
use crate::reactive::Effect;

thread_local! {
	// Reactive nodes must outlive the mount call: dropping one disposes its
	// Effect and the region goes inert. They live here for the lifetime of
	// the document.
	static REACTIVE_NODES: RefCell<Vec<Box<dyn std::any::Any>>> = const { RefCell::new(Vec::new()) };
}

/// Stores a reactive node to keep it alive.
pub fn store_reactive_node<T: 'static>(node: T) {
	REACTIVE_NODES.with(|nodes| {
		nodes.borrow_mut().push(Box::new(node));
	});
}

/// Releases all reactive nodes.
///
/// Called when the whole view tree is torn down for a full re-render (route
/// changes).
pub fn cleanup_reactive_nodes() {
	REACTIVE_NODES.with(|nodes| {
		nodes.borrow_mut().clear();
	});
}

/// Manages DOM updates for a reactive render closure.
///
/// A comment node marks the insertion point; an Effect evaluates the render
/// closure, removes the previously mounted nodes and mounts the new output
/// before the marker.
pub struct ReactiveNode {
	/// Marker comment node in the DOM.
	#[allow(dead_code)] // Anchors the region; referenced by the effect closure
	marker: web_sys::Comment,
	/// Currently mounted DOM nodes.
	#[allow(dead_code)]
	current_nodes: Rc<RefCell<Vec<web_sys::Node>>>,
	/// Effect handle, kept alive to maintain reactivity.
	#[allow(dead_code)]
	effect: Effect,
}

impl ReactiveNode {
	/// Creates the marker under `parent` and starts the reactive updates.
	pub fn new<F>(parent: &crate::dom::Element, render: F) -> Self
	where
		F: Fn() -> View + 'static,
	{
		let document = web_sys::window()
			.expect("window should be available")
			.document()
			.expect("document should be available");
		let marker = document.create_comment("reactive");

		parent
			.inner()
			.append_child(&marker)
			.expect("should append marker");

		let current_nodes: Rc<RefCell<Vec<web_sys::Node>>> = Rc::new(RefCell::new(Vec::new()));

		let current_nodes_clone = current_nodes.clone();
		let marker_clone = marker.clone();

		let effect = Effect::new(move || {
			// Evaluating the render closure tracks its signal dependencies.
			let view = render();

			let mut nodes = current_nodes_clone.borrow_mut();
			for node in nodes.drain(..) {
				if let Some(parent_node) = node.parent_node() {
					let _ = parent_node.remove_child(&node);
				}
			}

			let new_nodes = mount_before_marker(&marker_clone, view);
			*nodes = new_nodes;
		});

		Self {
			marker,
			current_nodes,
			effect,
		}
	}
}

/// Mounts a View before a marker node and returns the created DOM nodes.
fn mount_before_marker(marker: &web_sys::Comment, view: View) -> Vec<web_sys::Node> {
	let document = web_sys::window()
		.expect("window should be available")
		.document()
		.expect("document should be available");

	// The region may have been unmounted by an outer re-render while one of
	// its signals was still written to. Detached marker: nothing to do.
	let Some(parent) = marker.parent_node() else {
		return Vec::new();
	};

	let mut nodes = Vec::new();

	match view {
		View::Element(el) => {
			let (tag, attrs, children, _is_void, event_handlers) = el.into_parts();

			let element = document
				.create_element(&tag)
				.expect("should create element");

			for (name, value) in attrs {
				if is_boolean_attr(&name) && !is_boolean_attr_truthy(&value) {
					continue;
				}
				let _ = element.set_attribute(&name, &value);
			}

			let element_wrapper = crate::dom::Element::new(element.clone());
			for child in children {
				let _ = child.mount(&element_wrapper);
			}

			for (event_type, handler) in event_handlers {
				use wasm_bindgen::closure::Closure;

				let handler_clone = handler.clone();
				let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
					handler_clone(event);
				}) as Box<dyn FnMut(web_sys::Event)>);

				let _ = element.add_event_listener_with_callback(
					event_type.as_str(),
					closure.as_ref().unchecked_ref(),
				);
				closure.forget();
			}

			let _ = parent.insert_before(&element, Some(marker));
			nodes.push(element.unchecked_into());
		}
		View::Text(text) => {
			let text_node = document.create_text_node(&text);
			let _ = parent.insert_before(&text_node, Some(marker));
			nodes.push(text_node.unchecked_into());
		}
		View::Fragment(children) => {
			for child in children {
				nodes.extend(mount_before_marker(marker, child));
			}
		}
		View::Reactive(reactive) => {
			// Nested reactive region: give it its own marker and node.
			let nested_marker = document.create_comment("reactive-nested");
			let _ = parent.insert_before(&nested_marker, Some(marker));
			nodes.push(nested_marker.clone().unchecked_into());

			let temp_parent =
				crate::dom::Element::new(parent.clone().unchecked_into::<web_sys::Element>());

			let render = reactive.into_render();
			let nested_node = ReactiveNode::new(&temp_parent, move || render());
			store_reactive_node(nested_node);
		}
		View::Empty => {}
	}

	nodes
}
