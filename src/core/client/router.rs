//! Global router instance.
//!
//! Routes are declared in `config::urls`; this module owns the single
//! router the client navigates with.

use std::cell::RefCell;
use std::rc::Rc;

use postly_pages::router::Router;

use crate::config::urls::routes;

thread_local! {
	static ROUTER: RefCell<Option<Rc<Router>>> = const { RefCell::new(None) };
}

/// Initializes the global router and hooks it into the browser.
///
/// Must be called once at application startup before any routing
/// operations.
pub fn init_global_router() -> Rc<Router> {
	ROUTER.with(|slot| {
		let router = Rc::new(routes());
		router.listen();
		*slot.borrow_mut() = Some(router.clone());
		router
	})
}

/// Runs `f` with the global router.
///
/// # Panics
///
/// Panics if [`init_global_router`] has not been called.
pub fn with_router<F, R>(f: F) -> R
where
	F: FnOnce(&Rc<Router>) -> R,
{
	ROUTER.with(|slot| {
		f(slot
			.borrow()
			.as_ref()
			.expect("Router not initialized. Call init_global_router() first."))
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	#[serial]
	fn test_init_and_access() {
		let router = init_global_router();
		assert!(router.route_count() >= 4);
		with_router(|router| {
			assert!(router.has_route("home"));
		});
	}
}
