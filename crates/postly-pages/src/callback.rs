//! Callback types and event handler conversion.
//!
//! [`Callback`] is a type-safe, cloneable wrapper for event handlers, and
//! [`IntoEventHandler`] converts closures and Callbacks into the
//! [`ViewEventHandler`] form that [`crate::component::ElementView`] stores.

use std::sync::Arc;

use crate::component::ViewEventHandler;

#[cfg(target_arch = "wasm32")]
type EventArg = web_sys::Event;

#[cfg(not(target_arch = "wasm32"))]
type EventArg = crate::component::DummyEvent;

/// A type-safe, cloneable callback wrapper.
///
/// Wraps the function in an `Arc`, making it cheap to clone and stable
/// across renders.
#[cfg(target_arch = "wasm32")]
pub struct Callback<Args = EventArg, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + 'static>,
}

/// A type-safe, cloneable callback wrapper (server-side version).
///
/// Requires `Send + Sync` bounds for thread-safe server-side usage.
#[cfg(not(target_arch = "wasm32"))]
pub struct Callback<Args = EventArg, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

#[cfg(target_arch = "wasm32")]
impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new Callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the callback.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

/// Converts various handler shapes into a [`ViewEventHandler`].
pub trait IntoEventHandler {
	/// Converts self into a [`ViewEventHandler`].
	fn into_event_handler(self) -> ViewEventHandler;
}

#[cfg(target_arch = "wasm32")]
impl<F> IntoEventHandler for F
where
	F: Fn(web_sys::Event) + 'static,
{
	fn into_event_handler(self) -> ViewEventHandler {
		Arc::new(self)
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl<F> IntoEventHandler for F
where
	F: Fn(crate::component::DummyEvent) + Send + Sync + 'static,
{
	fn into_event_handler(self) -> ViewEventHandler {
		Arc::new(self)
	}
}

impl IntoEventHandler for Callback<EventArg, ()> {
	fn into_event_handler(self) -> ViewEventHandler {
		self.inner
	}
}

impl IntoEventHandler for ViewEventHandler {
	fn into_event_handler(self) -> ViewEventHandler {
		self
	}
}

/// Event handler helper with a concrete argument type for inference.
#[cfg(target_arch = "wasm32")]
pub fn event_handler(f: impl Fn(web_sys::Event) + 'static) -> ViewEventHandler {
	Arc::new(f)
}

/// Event handler helper with a concrete argument type for inference
/// (server-side version).
#[cfg(not(target_arch = "wasm32"))]
pub fn event_handler(
	f: impl Fn(crate::component::DummyEvent) + Send + Sync + 'static,
) -> ViewEventHandler {
	Arc::new(f)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_callback_creation() {
		let callback = Callback::new(|_: i32| 42);
		assert_eq!(callback.call(0), 42);
	}

	#[test]
	fn test_callback_clone() {
		let callback1 = Callback::new(|x: i32| x * 2);
		let callback2 = callback1.clone();

		assert_eq!(callback1.call(5), 10);
		assert_eq!(callback2.call(5), 10);
	}

	#[test]
	fn test_callback_with_captured_state() {
		use std::sync::{Arc, Mutex};

		let counter = Arc::new(Mutex::new(0));
		let callback = Callback::new({
			let counter = Arc::clone(&counter);
			move |increment: i32| {
				*counter.lock().unwrap() += increment;
			}
		});

		callback.call(1);
		callback.call(2);
		assert_eq!(*counter.lock().unwrap(), 3);
	}

	#[cfg(not(target_arch = "wasm32"))]
	#[test]
	fn test_into_event_handler_closure() {
		use crate::component::DummyEvent;

		let handler: ViewEventHandler = (|_: DummyEvent| {}).into_event_handler();
		handler(DummyEvent::default());
	}

	#[cfg(not(target_arch = "wasm32"))]
	#[test]
	fn test_into_event_handler_callback() {
		let callback = Callback::new(|_: crate::component::DummyEvent| {});
		let _handler: ViewEventHandler = callback.into_event_handler();
	}
}
