//! `Resource<T>` - key-driven async data fetching.
//!
//! A Resource ties a fetch key to a reactive [`ResourceState`]: views render
//! from the state signal and never touch the fetch machinery directly. The
//! state is a tagged union rather than a pair of nullable fields, so every
//! consumer handles exactly three cases.
//!
//! Policy owned here:
//! - a `None` key disables fetching entirely (the caller renders from data it
//!   already has);
//! - the resource revalidates on window focus;
//! - while a revalidation is in flight the previous state stays visible;
//! - completions that arrive after the resource was disposed are dropped, so
//!   a dismissed view is never written to.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use super::signal::Signal;
use crate::spawn::spawn_task;

/// The lifecycle of a fetched value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceState<T> {
	/// No data yet and no error.
	Loading,
	/// The fetch failed; the message is rendered in place of content.
	Error(String),
	/// Data is available.
	Loaded(T),
}

impl<T> ResourceState<T> {
	/// Returns true while no data and no error are known.
	pub fn is_loading(&self) -> bool {
		matches!(self, ResourceState::Loading)
	}

	/// Returns true when the last fetch failed.
	pub fn is_error(&self) -> bool {
		matches!(self, ResourceState::Error(_))
	}

	/// Returns true when data is available.
	pub fn is_loaded(&self) -> bool {
		matches!(self, ResourceState::Loaded(_))
	}

	/// The error message, if any.
	pub fn error_message(&self) -> Option<&str> {
		match self {
			ResourceState::Error(message) => Some(message),
			_ => None,
		}
	}
}

type Fetcher<T> = Rc<dyn Fn(String) -> Pin<Box<dyn Future<Output = Result<T, String>>>>>;

/// A reactive handle on asynchronously fetched data.
pub struct Resource<T: Clone + 'static> {
	state: Signal<ResourceState<T>>,
	key: Rc<RefCell<Option<String>>>,
	alive: Rc<Cell<bool>>,
	fetcher: Fetcher<T>,
	#[cfg(target_arch = "wasm32")]
	focus_listener: Rc<RefCell<Option<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>>>>,
}

impl<T: Clone + 'static> Clone for Resource<T> {
	fn clone(&self) -> Self {
		Self {
			state: self.state.clone(),
			key: self.key.clone(),
			alive: self.alive.clone(),
			fetcher: self.fetcher.clone(),
			#[cfg(target_arch = "wasm32")]
			focus_listener: self.focus_listener.clone(),
		}
	}
}

/// Creates a resource for `key` and starts the initial fetch.
///
/// Passing `None` as the key disables fetching: the state stays `Loading`
/// and no request is ever issued. Fetch execution is client-only; on the
/// server the state likewise remains `Loading` unless seeded via
/// [`Resource::mutate`].
pub fn create_resource<T, F, Fut>(key: Option<String>, fetcher: F) -> Resource<T>
where
	T: Clone + 'static,
	F: Fn(String) -> Fut + 'static,
	Fut: Future<Output = Result<T, String>> + 'static,
{
	let resource = Resource {
		state: Signal::new(ResourceState::Loading),
		key: Rc::new(RefCell::new(key)),
		alive: Rc::new(Cell::new(true)),
		fetcher: Rc::new(move |key| Box::pin(fetcher(key))),
		#[cfg(target_arch = "wasm32")]
		focus_listener: Rc::new(RefCell::new(None)),
	};

	resource.refetch();

	#[cfg(target_arch = "wasm32")]
	resource.install_focus_listener();

	resource
}

impl<T: Clone + 'static> Resource<T> {
	/// The reactive state of this resource.
	pub fn state(&self) -> Signal<ResourceState<T>> {
		self.state.clone()
	}

	/// The current fetch key, if fetching is enabled.
	pub fn key(&self) -> Option<String> {
		self.key.borrow().clone()
	}

	/// Issues a fetch for the current key.
	///
	/// The previous state stays visible until the fetch settles. Disabled
	/// (`None` key) and disposed resources ignore the call.
	pub fn refetch(&self) {
		if !self.alive.get() {
			return;
		}
		let Some(key) = self.key.borrow().clone() else {
			return;
		};

		spawn_fetch(
			self.state.clone(),
			self.alive.clone(),
			self.fetcher.clone(),
			key,
		);
	}

	/// Overwrites the local state with a known value.
	///
	/// Used for reconciliation after mutations and for seeding
	/// server-provided data.
	pub fn mutate(&self, value: T) {
		self.state.set(ResourceState::Loaded(value));
	}

	/// Stops all future fetches and drops pending completions.
	pub fn dispose(&self) {
		self.alive.set(false);
		#[cfg(target_arch = "wasm32")]
		self.remove_focus_listener();
	}

	#[cfg(target_arch = "wasm32")]
	fn install_focus_listener(&self) {
		use wasm_bindgen::JsCast;
		use wasm_bindgen::closure::Closure;

		let Some(window) = web_sys::window() else {
			return;
		};

		// The closure must not keep the resource alive: it holds the alive
		// flag weakly so that dropping the last handle still disposes.
		let state = self.state.clone();
		let key = self.key.clone();
		let fetcher = self.fetcher.clone();
		let alive = Rc::downgrade(&self.alive);
		let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
			let Some(alive) = alive.upgrade() else {
				return;
			};
			if !alive.get() {
				return;
			}
			let Some(key) = key.borrow().clone() else {
				return;
			};
			spawn_fetch(state.clone(), alive, fetcher.clone(), key);
		}) as Box<dyn FnMut(web_sys::Event)>);

		if window
			.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref())
			.is_ok()
		{
			*self.focus_listener.borrow_mut() = Some(closure);
		}
	}

	#[cfg(target_arch = "wasm32")]
	fn remove_focus_listener(&self) {
		use wasm_bindgen::JsCast;

		if let Some(closure) = self.focus_listener.borrow_mut().take()
			&& let Some(window) = web_sys::window()
		{
			let _ = window
				.remove_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
		}
	}
}

/// Runs one fetch and writes the outcome, unless the resource was disposed
/// while the request was in flight.
fn spawn_fetch<T: Clone + 'static>(
	state: Signal<ResourceState<T>>,
	alive: Rc<Cell<bool>>,
	fetcher: Fetcher<T>,
	key: String,
) {
	spawn_task(async move {
		let result = fetcher(key).await;
		// The owning view may have been torn down while the request was in
		// flight.
		if !alive.get() {
			return;
		}
		match result {
			Ok(value) => state.set(ResourceState::Loaded(value)),
			Err(message) => state.set(ResourceState::Error(message)),
		}
	});
}

impl<T: Clone + 'static> Drop for Resource<T> {
	fn drop(&mut self) {
		// Last handle going away disposes the resource.
		if Rc::strong_count(&self.alive) == 1 {
			self.dispose();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	async fn never_called(_key: String) -> Result<u32, String> {
		Err("fetcher should not run in native tests".to_string())
	}

	#[test]
	#[serial]
	fn test_resource_starts_loading() {
		let resource = create_resource(Some("/api/posts".to_string()), never_called);
		assert!(resource.state().get_untracked().is_loading());
	}

	#[test]
	#[serial]
	fn test_disabled_resource_has_no_key() {
		let resource = create_resource::<u32, _, _>(None, never_called);
		assert_eq!(resource.key(), None);
		assert!(resource.state().get_untracked().is_loading());
	}

	#[test]
	#[serial]
	fn test_mutate_sets_loaded() {
		let resource = create_resource(Some("/api/posts".to_string()), never_called);
		resource.mutate(7);
		assert_eq!(resource.state().get_untracked(), ResourceState::Loaded(7));
	}

	#[test]
	#[serial]
	fn test_state_helpers() {
		assert!(ResourceState::<u32>::Loading.is_loading());
		assert!(ResourceState::<u32>::Error("boom".to_string()).is_error());
		assert!(ResourceState::Loaded(1).is_loaded());
		assert_eq!(
			ResourceState::<u32>::Error("boom".to_string()).error_message(),
			Some("boom")
		);
		assert_eq!(ResourceState::Loaded(1).error_message(), None);
	}

	#[test]
	#[serial]
	fn test_disposed_resource_ignores_refetch() {
		let resource = create_resource(Some("/api/posts".to_string()), never_called);
		resource.dispose();
		resource.refetch();
		assert!(resource.state().get_untracked().is_loading());
	}
}
