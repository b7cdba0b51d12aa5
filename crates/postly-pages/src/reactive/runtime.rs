//! Reactive runtime: dependency graph and observer tracking.
//!
//! The runtime is a thread-local singleton. Signals register their readers
//! (Effects and Memos) here, and change notifications are queued on it until
//! the flush performed at the end of every `Signal::set`/`Signal::update`.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// Unique identifier for a reactive node (Signal, Effect or Memo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u64);

thread_local! {
	static NEXT_NODE_ID: Cell<u64> = const { Cell::new(1) };
}

impl NodeId {
	/// Allocates a fresh node id.
	pub fn new() -> Self {
		NEXT_NODE_ID.with(|next| {
			let id = next.get();
			next.set(id + 1);
			NodeId(id)
		})
	}
}

impl Default for NodeId {
	fn default() -> Self {
		Self::new()
	}
}

/// The kind of reactive node an observer represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
	/// A side effect re-run on dependency changes.
	Effect,
	/// A cached derived value.
	Memo,
}

/// An entry on the observer stack while an Effect or Memo body runs.
#[derive(Debug, Clone, Copy)]
pub struct Observer {
	/// The observing node.
	pub id: NodeId,
	/// What kind of node is observing.
	pub node_type: NodeType,
}

/// Per-signal bookkeeping in the dependency graph.
#[derive(Debug, Default)]
pub struct DependencyNode {
	/// Observers to re-run when the signal changes.
	pub subscribers: Vec<NodeId>,
}

/// The thread-local reactive runtime.
///
/// All fields use interior mutability; the runtime itself is only ever
/// accessed through [`with_runtime`].
pub struct Runtime {
	/// Signal id -> subscribers.
	pub dependency_graph: RefCell<BTreeMap<NodeId, DependencyNode>>,
	/// Stack of currently executing observers (innermost last).
	observer_stack: RefCell<Vec<Observer>>,
	/// Effects scheduled for re-execution.
	pub pending_updates: RefCell<Vec<NodeId>>,
	/// Guard against re-entrant flushes.
	flushing: Cell<bool>,
}

impl Runtime {
	fn new() -> Self {
		Self {
			dependency_graph: RefCell::new(BTreeMap::new()),
			observer_stack: RefCell::new(Vec::new()),
			pending_updates: RefCell::new(Vec::new()),
			flushing: Cell::new(false),
		}
	}

	/// Records the innermost observer as a subscriber of `signal_id`.
	///
	/// No-op when called outside an Effect or Memo body.
	pub fn track_dependency(&self, signal_id: NodeId) {
		let observer = self.observer_stack.borrow().last().copied();
		if let Some(observer) = observer {
			let mut graph = self.dependency_graph.borrow_mut();
			let node = graph.entry(signal_id).or_default();
			if !node.subscribers.contains(&observer.id) {
				node.subscribers.push(observer.id);
			}
		}
	}

	/// Queues all subscribers of `signal_id` for re-execution.
	pub fn notify_signal_change(&self, signal_id: NodeId) {
		let subscribers = self
			.dependency_graph
			.borrow()
			.get(&signal_id)
			.map(|node| node.subscribers.clone())
			.unwrap_or_default();

		let mut pending = self.pending_updates.borrow_mut();
		for id in subscribers {
			if !pending.contains(&id) {
				pending.push(id);
			}
		}
	}

	/// Pushes an observer onto the stack for the duration of its body.
	pub fn push_observer(&self, observer: Observer) {
		self.observer_stack.borrow_mut().push(observer);
	}

	/// Pops the innermost observer.
	pub fn pop_observer(&self) {
		self.observer_stack.borrow_mut().pop();
	}

	/// Removes `observer_id` from every subscriber list.
	///
	/// Called before an Effect re-runs so that dependencies reflect only the
	/// most recent execution.
	pub fn clear_dependencies(&self, observer_id: NodeId) {
		let mut graph = self.dependency_graph.borrow_mut();
		for node in graph.values_mut() {
			node.subscribers.retain(|id| *id != observer_id);
		}
	}

	/// Removes a node entirely: its graph entry, subscriptions and any
	/// pending update.
	pub fn remove_node(&self, id: NodeId) {
		self.dependency_graph.borrow_mut().remove(&id);
		self.clear_dependencies(id);
		self.pending_updates.borrow_mut().retain(|p| *p != id);
	}

	/// Drains the pending update queue.
	pub fn take_pending(&self) -> Vec<NodeId> {
		std::mem::take(&mut *self.pending_updates.borrow_mut())
	}

	/// Marks the runtime as flushing. Returns `false` if a flush is already
	/// in progress (the caller must not start a nested one).
	pub fn begin_flush(&self) -> bool {
		if self.flushing.get() {
			return false;
		}
		self.flushing.set(true);
		true
	}

	/// Clears the flushing mark.
	pub fn end_flush(&self) {
		self.flushing.set(false);
	}
}

thread_local! {
	static RUNTIME: Runtime = Runtime::new();
}

/// Runs `f` with the thread-local runtime.
pub fn with_runtime<R>(f: impl FnOnce(&Runtime) -> R) -> R {
	RUNTIME.with(f)
}

/// Like [`with_runtime`] but survives thread-local teardown during drops.
pub fn try_with_runtime<R>(f: impl FnOnce(&Runtime) -> R) -> Result<R, ()> {
	RUNTIME.try_with(f).map_err(|_| ())
}
