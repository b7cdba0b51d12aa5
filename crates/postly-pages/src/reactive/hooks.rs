//! React-style hooks over the reactive primitives.
//!
//! These are thin conveniences: unlike their React namesakes they need no
//! dependency arrays, because any Signal read inside an Effect or Memo is
//! tracked automatically.

use std::rc::Rc;

use super::effect::Effect;
use super::memo::Memo;
use super::signal::Signal;
use crate::callback::Callback;

#[cfg(target_arch = "wasm32")]
type EventArg = web_sys::Event;

#[cfg(not(target_arch = "wasm32"))]
type EventArg = crate::component::DummyEvent;

/// Setter half of [`use_state`]. Callable directly: `set_count(1)`.
pub type SetState<T> = Rc<dyn Fn(T)>;

/// Creates a piece of reactive state.
///
/// Returns the signal and a setter. The signal is cheap to clone and is what
/// render closures should capture; the setter is what event handlers and
/// async completions call.
///
/// # Example
///
/// ```ignore
/// let (count, set_count) = use_state(0);
/// set_count(count.get_untracked() + 1);
/// ```
pub fn use_state<T: Clone + 'static>(initial: T) -> (Signal<T>, SetState<T>) {
	let signal = Signal::new(initial);
	let setter = {
		let signal = signal.clone();
		Rc::new(move |value: T| signal.set(value)) as SetState<T>
	};
	(signal, setter)
}

/// Runs a side effect with automatic dependency tracking.
pub fn use_effect<F>(f: F) -> Effect
where
	F: FnMut() + 'static,
{
	Effect::new(f)
}

/// Memoizes a derived value.
pub fn use_memo<T, F>(f: F) -> Memo<T>
where
	T: Clone + 'static,
	F: FnMut() -> T + 'static,
{
	Memo::new(f)
}

/// Wraps an event handler in a stable, cloneable [`Callback`].
#[cfg(target_arch = "wasm32")]
pub fn use_callback<F>(f: F) -> Callback<EventArg, ()>
where
	F: Fn(EventArg) + 'static,
{
	Callback::new(f)
}

/// Wraps an event handler in a stable, cloneable [`Callback`]
/// (server-side version, requires `Send + Sync`).
#[cfg(not(target_arch = "wasm32"))]
pub fn use_callback<F>(f: F) -> Callback<EventArg, ()>
where
	F: Fn(EventArg) + Send + Sync + 'static,
{
	Callback::new(f)
}
