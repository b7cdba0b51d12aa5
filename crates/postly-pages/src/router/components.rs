//! Router components for navigation.

use std::rc::Rc;

use super::core::Router;
use crate::component::{Component, ElementView, IntoView, View};

/// A link that navigates without a full page reload.
///
/// Renders an `<a>` with a `data-link` marker; the router's delegated click
/// listener intercepts it and uses the History API. External links opt out
/// and open in a new tab.
#[derive(Debug, Clone)]
pub struct Link {
	/// The destination path.
	to: String,
	/// The link text or content.
	content: String,
	/// Additional CSS classes.
	class: Option<String>,
	/// Whether to open in a new tab (disables SPA navigation).
	external: bool,
	/// Custom attributes.
	attrs: Vec<(String, String)>,
}

impl Link {
	/// Creates a new link.
	pub fn new(to: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			to: to.into(),
			content: content.into(),
			class: None,
			external: false,
			attrs: Vec::new(),
		}
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Sets whether this is an external link.
	pub fn external(mut self, external: bool) -> Self {
		self.external = external;
		self
	}

	/// Adds a custom attribute.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Returns the destination path.
	pub fn to(&self) -> &str {
		&self.to
	}

	/// Returns whether this is an external link.
	pub fn is_external(&self) -> bool {
		self.external
	}
}

impl Component for Link {
	fn render(&self) -> View {
		let mut el = ElementView::new("a").attr("href", self.to.clone());

		if let Some(ref class) = self.class {
			el = el.attr("class", class.clone());
		}

		if !self.external {
			el = el.attr("data-link", "true");
		} else {
			el = el.attr("target", "_blank");
			el = el.attr("rel", "noopener noreferrer");
		}

		for (name, value) in &self.attrs {
			el = el.attr(name.clone(), value.clone());
		}

		el.child(self.content.clone()).into_view()
	}

	fn name() -> &'static str {
		"Link"
	}
}

/// Renders the matched route's content, re-rendering on navigation.
///
/// Reads the router's path signal inside a reactive region, so pushes and
/// popstate events swap the mounted page.
pub fn router_outlet(router: Rc<Router>) -> View {
	View::reactive(move || router.render_current())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::router::core::RouteParams;
	use serial_test::serial;

	#[test]
	fn test_link_internal() {
		let link = Link::new("/post/p1", "Open");
		let html = link.render().render_to_string();
		assert!(html.contains("href=\"/post/p1\""));
		assert!(html.contains("data-link=\"true\""));
		assert!(html.contains(">Open</a>"));
	}

	#[test]
	fn test_link_builder() {
		let link = Link::new("/home", "Home")
			.class("nav-link")
			.attr("aria-label", "Go home");

		let html = link.render().render_to_string();
		assert!(html.contains("class=\"nav-link\""));
		assert!(html.contains("aria-label=\"Go home\""));
	}

	#[test]
	fn test_link_external() {
		let link = Link::new("https://example.com", "Example").external(true);

		let html = link.render().render_to_string();
		assert!(html.contains("target=\"_blank\""));
		assert!(html.contains("rel=\"noopener noreferrer\""));
		assert!(!html.contains("data-link"));
	}

	#[test]
	#[serial]
	fn test_router_outlet_follows_navigation() {
		let router = Rc::new(
			Router::new()
				.route("/home", |_: &RouteParams| View::text("Home"))
				.route("/post/{id}", |params: &RouteParams| {
					View::text(format!(
						"Post {}",
						params.get("id").cloned().unwrap_or_default()
					))
				}),
		);

		let outlet = router_outlet(router.clone());
		router.push("/home").unwrap();
		assert_eq!(outlet.render_to_string(), "Home");
		router.push("/post/p9").unwrap();
		assert_eq!(outlet.render_to_string(), "Post p9");
	}
}
