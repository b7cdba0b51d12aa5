//! URL configuration: the client route table.

use postly_pages::router::{RouteParams, Router};

use crate::core::client::pages::{
	home_page_view, landing_page_view, not_found_page_view, post_page_view, settings_page_view,
};

/// Builds the application's route table.
pub fn routes() -> Router {
	Router::new()
		.named_route("landing", "/", |_params: &RouteParams| landing_page_view())
		.named_route("home", "/home", |_params: &RouteParams| home_page_view())
		.named_route("settings", "/settings", |_params: &RouteParams| {
			settings_page_view()
		})
		.named_route("post_detail", "/post/{id}", |params: &RouteParams| {
			post_page_view(params.get("id").cloned().unwrap_or_default())
		})
		.not_found(not_found_page_view)
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	#[test]
	#[serial]
	fn test_route_table_names() {
		let router = routes();
		for name in ["landing", "home", "settings", "post_detail"] {
			assert!(router.has_route(name), "missing route {name}");
		}
	}

	#[test]
	#[serial]
	fn test_post_detail_matches_and_reverses() {
		let router = routes();
		let matched = router.match_path("/post/p1").unwrap();
		assert_eq!(matched.params.get("id"), Some(&"p1".to_string()));
		assert_eq!(
			router.reverse("post_detail", &[("id", "p1")]).unwrap(),
			"/post/p1"
		);
	}

	#[test]
	#[serial]
	fn test_unknown_path_renders_not_found() {
		let router = routes();
		router.push("/definitely/not/here").unwrap();
		let html = router.render_current().render_to_string();
		assert!(html.contains("404"));
	}
}
