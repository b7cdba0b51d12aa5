//! `Signal<T>` - fine-grained reactive primitive.
//!
//! A Signal holds a value and automatically tracks which Effects and Memos
//! read it. Writing a new value re-runs exactly those dependents, before the
//! write call returns.
//!
//! `Signal<T>` is a cheap handle: clones share the same value via
//! `Rc<RefCell<T>>` and the same node id in the runtime's dependency graph.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::effect::flush_pending;
use super::runtime::{NodeId, try_with_runtime, with_runtime};

/// A reactive container for a single value.
#[derive(Clone)]
pub struct Signal<T: 'static> {
	/// Unique identifier for this signal.
	id: NodeId,
	/// The actual value, shared via reference counting.
	value: Rc<RefCell<T>>,
}

impl<T: 'static> Signal<T> {
	/// Creates a new Signal with the given initial value.
	pub fn new(value: T) -> Self {
		Self {
			id: NodeId::new(),
			value: Rc::new(RefCell::new(value)),
		}
	}

	/// Returns the current value, tracking the read as a dependency when
	/// called inside an Effect or Memo.
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		with_runtime(|rt| rt.track_dependency(self.id));
		self.get_untracked()
	}

	/// Returns the current value without registering a dependency.
	pub fn get_untracked(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Runs `f` against a borrow of the value without cloning it.
	///
	/// Tracks the read like [`Signal::get`].
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		with_runtime(|rt| rt.track_dependency(self.id));
		f(&self.value.borrow())
	}

	/// Replaces the value and re-runs all dependents.
	pub fn set(&self, value: T) {
		*self.value.borrow_mut() = value;
		with_runtime(|rt| rt.notify_signal_change(self.id));
		flush_pending();
	}

	/// Updates the value in place and re-runs all dependents once.
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		f(&mut *self.value.borrow_mut());
		with_runtime(|rt| rt.notify_signal_change(self.id));
		flush_pending();
	}

	/// The node id of this signal. Mainly for the runtime and tests.
	pub fn id(&self) -> NodeId {
		self.id
	}
}

impl<T: 'static> Drop for Signal<T> {
	fn drop(&mut self) {
		// Only clean up the runtime entry when the last clone goes away.
		if Rc::strong_count(&self.value) == 1 {
			let _ = try_with_runtime(|rt| rt.remove_node(self.id));
		}
	}
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("id", &self.id)
			.field("value", &self.get_untracked())
			.finish()
	}
}
