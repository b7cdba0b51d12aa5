//! Task spawning for fire-and-forget async work.
//!
//! All suspending operations in the UI (data fetches, mutations) are spawned
//! here and observed later through signal updates.

use std::future::Future;

/// Spawns a future onto the browser's event loop.
#[cfg(target_arch = "wasm32")]
pub fn spawn_task<F>(future: F)
where
	F: Future<Output = ()> + 'static,
{
	wasm_bindgen_futures::spawn_local(future);
}

/// Drops the future: async work is client-only.
///
/// Server-side rendering and native tests exercise the synchronous state
/// paths; completions never arrive there.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_task<F>(_future: F)
where
	F: Future<Output = ()> + 'static,
{
}
