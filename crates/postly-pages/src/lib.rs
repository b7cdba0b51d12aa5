//! Postly Pages - WASM frontend core
//!
//! The in-house component and reactivity layer the Postly front-end is built
//! on. Built directly on wasm-bindgen, web-sys and js-sys; no high-level
//! framework dependencies.
//!
//! ## Architecture
//!
//! - [`reactive`]: fine-grained reactivity (Signal, Effect, Memo) plus the
//!   [`reactive::Resource`] data-fetch primitive with focus revalidation
//! - [`dom`]: DOM abstraction layer
//! - [`builder`]: HTML element builder API
//! - [`component`]: View tree, IntoView conversions, reactive regions, Head
//! - [`callback`]: cloneable event handler wrappers
//! - [`spawn`]: fire-and-forget task spawning
//! - [`router`]: client-side routing (History API)
//!
//! ## Example
//!
//! ```ignore
//! use postly_pages::builder::html::{button, div, span};
//! use postly_pages::component::{IntoView, View};
//! use postly_pages::dom::EventType;
//! use postly_pages::reactive::use_state;
//!
//! fn counter() -> View {
//! 	let (count, set_count) = use_state(0);
//!
//! 	let count_for_click = count.clone();
//! 	div()
//! 		.child(View::reactive({
//! 			let count = count.clone();
//! 			move || span().child(format!("Count: {}", count.get())).into_view()
//! 		}))
//! 		.child(
//! 			button()
//! 				.on(EventType::Click, move |_event| {
//! 					set_count(count_for_click.get_untracked() + 1);
//! 				})
//! 				.child("Increment"),
//! 		)
//! 		.into_view()
//! }
//! ```

#![warn(missing_docs)]

// Core modules
pub mod builder;
pub mod callback;
pub mod component;
pub mod dom;
pub mod logging;
pub mod reactive;
pub mod router;
pub mod spawn;

// Unified prelude for simplified imports
pub mod prelude;

// Re-export commonly used types
pub use callback::{Callback, IntoEventHandler, event_handler};
#[cfg(not(target_arch = "wasm32"))]
pub use component::DummyEvent;
pub use component::{Component, ElementView, Head, IntoView, MetaTag, MountError, View};
pub use dom::{Document, Element, EventType, document};
pub use reactive::{
	Effect, Memo, Resource, ResourceState, SetState, Signal, create_resource, use_callback,
	use_effect, use_memo, use_state,
};
pub use router::{Link, PathPattern, Route, RouteParams, Router, RouterError, router_outlet};
pub use spawn::spawn_task;

/// Installs the panic hook that forwards WASM panics to the console.
#[cfg(all(target_arch = "wasm32", feature = "console_error_panic_hook"))]
pub fn set_panic_hook() {
	console_error_panic_hook::set_once();
}
