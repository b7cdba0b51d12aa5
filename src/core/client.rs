//! Client core: shared components, HTTP plumbing, page shells, routing and
//! session state.

pub mod components;
pub mod http;
pub mod pages;
pub mod router;
pub mod session;

/// Boots the client application: stylesheet, session, router, mount.
#[cfg(client)]
pub fn boot() {
	console_error_panic_hook::set_once();

	crate::theme::inject_stylesheet(&crate::theme::Theme::default());

	let document = postly_pages::dom::document();
	let Some(root) = document.get_element_by_id("app") else {
		postly_pages::error_log!("missing #app mount element");
		return;
	};

	// The serving page injects the signed-in viewer on the mount element.
	if let Some(username) = root.inner().get_attribute("data-username")
		&& !username.is_empty()
	{
		session::set_current_user(Some(username));
	}

	let router = router::init_global_router();
	let view = postly_pages::router::router_outlet(router);
	if let Err(err) = view.mount(&root) {
		postly_pages::error_log!("mount failed: {}", err);
	}
}
