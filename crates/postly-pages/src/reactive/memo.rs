//! `Memo<T>` - cached derived values.
//!
//! A Memo wraps a computation over signals. The computation re-runs when a
//! dependency changes and the cached result is itself readable as a reactive
//! value.

use std::cell::RefCell;
use std::rc::Rc;

use super::effect::Effect;
use super::signal::Signal;

/// A cached derived value, recomputed when its signal dependencies change.
pub struct Memo<T: 'static> {
	/// Holds the signal carrying the cached value. Seeded by the effect's
	/// initial synchronous run.
	value: Rc<RefCell<Option<Signal<T>>>>,
	/// Kept alive to maintain reactivity.
	_effect: Rc<Effect>,
}

impl<T: Clone + 'static> Memo<T> {
	/// Creates a new Memo. The computation runs once immediately.
	pub fn new<F>(mut f: F) -> Self
	where
		F: FnMut() -> T + 'static,
	{
		let value: Rc<RefCell<Option<Signal<T>>>> = Rc::new(RefCell::new(None));
		let slot = value.clone();

		let effect = Effect::new(move || {
			let next = f();
			// Clone the handle out first: writing through `set` flushes
			// dependents which may read this memo.
			let existing = slot.borrow().clone();
			match existing {
				Some(signal) => signal.set(next),
				None => *slot.borrow_mut() = Some(Signal::new(next)),
			}
		});

		Self {
			value,
			_effect: Rc::new(effect),
		}
	}

	/// Returns the cached value, tracking the read as a dependency.
	pub fn get(&self) -> T {
		let signal = self
			.value
			.borrow()
			.clone()
			.expect("memo is seeded by its initial run");
		signal.get()
	}
}

impl<T: 'static> Clone for Memo<T> {
	fn clone(&self) -> Self {
		Self {
			value: self.value.clone(),
			_effect: self._effect.clone(),
		}
	}
}
