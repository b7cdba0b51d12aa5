//! `Effect` - reactive side effects.
//!
//! An Effect re-runs automatically when any Signal it reads changes. The
//! bridge to the outside world (DOM updates, logging) lives here; the
//! dependency bookkeeping lives in the runtime.
//!
//! Effects run synchronously: `Signal::set` drains the pending queue before
//! returning, so a write is immediately observable through its dependents.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::runtime::{NodeId, NodeType, Observer, try_with_runtime, with_runtime};

/// Type alias for effect functions.
type EffectFn = Box<dyn FnMut() + 'static>;

thread_local! {
	// Closures for all live Effects, keyed by node id, so the runtime can
	// re-execute them when dependencies change.
	static EFFECT_FUNCTIONS: RefCell<BTreeMap<NodeId, EffectFn>> = const { RefCell::new(BTreeMap::new()) };
}

/// A reactive side effect.
///
/// Runs immediately on creation and re-runs whenever a Signal read inside
/// the closure changes. Dropping the Effect stops future runs.
pub struct Effect {
	/// Unique identifier for this effect.
	id: NodeId,
	/// Whether this effect has been disposed.
	disposed: Rc<RefCell<bool>>,
}

impl Effect {
	/// Creates a new Effect and runs it once to seed its dependencies.
	pub fn new<F>(mut f: F) -> Self
	where
		F: FnMut() + 'static,
	{
		let id = NodeId::new();
		let disposed = Rc::new(RefCell::new(false));

		let disposed_clone = disposed.clone();
		EFFECT_FUNCTIONS.with(|storage| {
			storage.borrow_mut().insert(
				id,
				Box::new(move || {
					if !*disposed_clone.borrow() {
						f();
					}
				}),
			);
		});

		Self::execute_effect(id);

		Self { id, disposed }
	}

	/// Executes an effect by id, re-tracking its dependencies.
	pub(crate) fn execute_effect(effect_id: NodeId) {
		with_runtime(|rt| {
			// Dependencies reflect only the most recent run.
			rt.clear_dependencies(effect_id);
			rt.push_observer(Observer {
				id: effect_id,
				node_type: NodeType::Effect,
			});
		});

		// Take the closure out while it runs so that a signal write inside
		// the effect (which flushes re-entrantly) cannot alias the borrow.
		let func = EFFECT_FUNCTIONS.with(|storage| storage.borrow_mut().remove(&effect_id));
		if let Some(mut func) = func {
			func();
			EFFECT_FUNCTIONS.with(|storage| {
				storage.borrow_mut().insert(effect_id, func);
			});
		}

		with_runtime(|rt| rt.pop_observer());
	}

	/// The node id of this effect (for tests).
	pub fn id(&self) -> NodeId {
		self.id
	}

	/// Stops the effect and removes it from the dependency graph.
	pub fn dispose(&self) {
		*self.disposed.borrow_mut() = true;
		let _ = try_with_runtime(|rt| rt.remove_node(self.id));
		let _ = EFFECT_FUNCTIONS.try_with(|storage| {
			storage.borrow_mut().remove(&self.id);
		});
	}
}

impl Drop for Effect {
	fn drop(&mut self) {
		self.dispose();
	}
}

/// Drains the runtime's pending queue, executing each scheduled effect.
///
/// Writes performed by an executing effect enqueue further updates, which
/// the loop picks up; a nested call during a flush is a no-op.
pub(crate) fn flush_pending() {
	let started = with_runtime(|rt| rt.begin_flush());
	if !started {
		return;
	}

	loop {
		let pending = with_runtime(|rt| rt.take_pending());
		if pending.is_empty() {
			break;
		}
		for id in pending {
			Effect::execute_effect(id);
		}
	}

	with_runtime(|rt| rt.end_flush());
}
