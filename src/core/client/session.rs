//! Current viewer identity.
//!
//! Authentication is owned by the backend; the client only needs to know
//! who is looking. The identity is read from the mount element's
//! `data-username` attribute at boot and kept here for components that
//! derive per-viewer state (the like toggle).

use std::cell::RefCell;

thread_local! {
	static CURRENT_USER: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Sets the signed-in viewer's username, or `None` when logged out.
pub fn set_current_user(username: Option<String>) {
	CURRENT_USER.with(|user| {
		*user.borrow_mut() = username;
	});
}

/// The signed-in viewer's username, if any.
pub fn current_user() -> Option<String> {
	CURRENT_USER.with(|user| user.borrow().clone())
}
