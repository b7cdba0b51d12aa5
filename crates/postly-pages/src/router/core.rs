//! Core router implementation.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use super::history::{HistoryState, NavigationType, current_path, push_state, replace_state};
use super::pattern::PathPattern;
use crate::component::View;
use crate::reactive::Signal;

/// Parameters captured from a matched path.
pub type RouteParams = HashMap<String, String>;

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	/// Route not found.
	#[error("Route not found: {0}")]
	NotFound(String),
	/// Invalid route name.
	#[error("Invalid route name: {0}")]
	InvalidRouteName(String),
	/// Missing parameter for reverse URL.
	#[error("Missing parameter for route: {0}")]
	MissingParameter(String),
	/// Navigation failed.
	#[error("Navigation failed: {0}")]
	NavigationFailed(String),
}

/// A matched route with extracted parameters.
#[derive(Debug, Clone)]
pub struct RouteMatch {
	/// The matched route.
	pub route: Route,
	/// Extracted path parameters.
	pub params: RouteParams,
}

/// A single route definition.
#[derive(Clone)]
pub struct Route {
	/// The path pattern.
	pattern: PathPattern,
	/// Optional route name for reverse lookups.
	name: Option<String>,
	/// The component factory; receives the captured path parameters.
	component: Arc<dyn Fn(&RouteParams) -> View + Send + Sync>,
}

impl std::fmt::Debug for Route {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Route")
			.field("pattern", &self.pattern)
			.field("name", &self.name)
			.finish()
	}
}

impl Route {
	/// Creates a new route.
	pub fn new<F>(pattern: &str, component: F) -> Self
	where
		F: Fn(&RouteParams) -> View + Send + Sync + 'static,
	{
		Self {
			pattern: PathPattern::new(pattern),
			name: None,
			component: Arc::new(component),
		}
	}

	/// Creates a named route.
	pub fn named<F>(name: impl Into<String>, pattern: &str, component: F) -> Self
	where
		F: Fn(&RouteParams) -> View + Send + Sync + 'static,
	{
		Self {
			pattern: PathPattern::new(pattern),
			name: Some(name.into()),
			component: Arc::new(component),
		}
	}

	/// Returns the route name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the pattern.
	pub fn pattern(&self) -> &PathPattern {
		&self.pattern
	}

	/// Renders the route's component with the given parameters.
	pub fn render(&self, params: &RouteParams) -> View {
		(self.component)(params)
	}
}

/// The client-side router.
///
/// Holds the route table plus reactive signals for the current location.
/// `render_current` reads the path signal, so wrapping it in a reactive view
/// region re-renders on every navigation.
pub struct Router {
	/// Registered routes.
	routes: Vec<Route>,
	/// Named routes for reverse lookups.
	named_routes: HashMap<String, usize>,
	/// Current path signal.
	current_path: Signal<String>,
	/// Current params signal.
	current_params: Signal<RouteParams>,
	/// Current matched route name signal.
	current_route_name: Signal<Option<String>>,
	/// Not found handler.
	not_found: Option<Arc<dyn Fn() -> View + Send + Sync>>,
}

impl std::fmt::Debug for Router {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("routes_count", &self.routes.len())
			.field(
				"named_routes",
				&self.named_routes.keys().collect::<Vec<_>>(),
			)
			.finish()
	}
}

impl Default for Router {
	fn default() -> Self {
		Self::new()
	}
}

impl Router {
	/// Creates a new router seeded with the browser's current path.
	pub fn new() -> Self {
		let initial_path = current_path().unwrap_or_else(|_| "/".to_string());

		Self {
			routes: Vec::new(),
			named_routes: HashMap::new(),
			current_path: Signal::new(initial_path),
			current_params: Signal::new(RouteParams::new()),
			current_route_name: Signal::new(None),
			not_found: None,
		}
	}

	/// Adds a route.
	pub fn route<F>(mut self, pattern: &str, component: F) -> Self
	where
		F: Fn(&RouteParams) -> View + Send + Sync + 'static,
	{
		self.routes.push(Route::new(pattern, component));
		self
	}

	/// Adds a named route.
	pub fn named_route<F>(mut self, name: &str, pattern: &str, component: F) -> Self
	where
		F: Fn(&RouteParams) -> View + Send + Sync + 'static,
	{
		let index = self.routes.len();
		self.routes.push(Route::named(name, pattern, component));
		self.named_routes.insert(name.to_string(), index);
		self
	}

	/// Sets the not-found handler.
	pub fn not_found<F>(mut self, component: F) -> Self
	where
		F: Fn() -> View + Send + Sync + 'static,
	{
		self.not_found = Some(Arc::new(component));
		self
	}

	/// The current path signal.
	pub fn current_path(&self) -> &Signal<String> {
		&self.current_path
	}

	/// The current params signal.
	pub fn current_params(&self) -> &Signal<RouteParams> {
		&self.current_params
	}

	/// The current route name signal.
	pub fn current_route_name(&self) -> &Signal<Option<String>> {
		&self.current_route_name
	}

	/// Matches a path against registered routes.
	pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
		for route in &self.routes {
			if let Some(params) = route.pattern.matches(path) {
				return Some(RouteMatch {
					route: route.clone(),
					params,
				});
			}
		}
		None
	}

	/// Navigates to a path, adding a history entry.
	pub fn push(&self, path: &str) -> Result<(), RouterError> {
		self.navigate(path, NavigationType::Push)
	}

	/// Navigates to a path, replacing the current history entry.
	pub fn replace(&self, path: &str) -> Result<(), RouterError> {
		self.navigate(path, NavigationType::Replace)
	}

	fn navigate(&self, path: &str, nav_type: NavigationType) -> Result<(), RouterError> {
		let route_match = self.match_path(path);

		let state = HistoryState::new(path)
			.with_params(
				route_match
					.as_ref()
					.map(|m| m.params.clone())
					.unwrap_or_default(),
			)
			.with_route_name(
				route_match
					.as_ref()
					.and_then(|m| m.route.name())
					.unwrap_or(""),
			);

		let result = match nav_type {
			NavigationType::Push => push_state(&state),
			NavigationType::Replace => replace_state(&state),
		};
		result.map_err(RouterError::NavigationFailed)?;

		self.apply_location(path, route_match);
		Ok(())
	}

	/// Updates the reactive location signals without touching history.
	///
	/// Used by navigation itself and by the popstate listener.
	pub fn sync_location(&self, path: &str) {
		let route_match = self.match_path(path);
		self.apply_location(path, route_match);
	}

	fn apply_location(&self, path: &str, route_match: Option<RouteMatch>) {
		self.current_path.set(path.to_string());
		self.current_params.set(
			route_match
				.as_ref()
				.map(|m| m.params.clone())
				.unwrap_or_default(),
		);
		self.current_route_name.set(
			route_match
				.as_ref()
				.and_then(|m| m.route.name().map(|s| s.to_string())),
		);
	}

	/// Generates a URL by route name with parameters.
	pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouterError> {
		let index = self
			.named_routes
			.get(name)
			.ok_or_else(|| RouterError::InvalidRouteName(name.to_string()))?;

		let route = &self.routes[*index];
		let params_map: RouteParams = params
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();

		route
			.pattern
			.reverse(&params_map)
			.ok_or_else(|| RouterError::MissingParameter(name.to_string()))
	}

	/// Renders the current route's component.
	pub fn render_current(&self) -> View {
		let path = self.current_path.get();

		if let Some(route_match) = self.match_path(&path) {
			route_match.route.render(&route_match.params)
		} else if let Some(not_found) = &self.not_found {
			not_found()
		} else {
			View::Empty
		}
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}

	/// Checks if a route name exists.
	pub fn has_route(&self, name: &str) -> bool {
		self.named_routes.contains_key(name)
	}

	/// Hooks the router into the browser: popstate for back/forward, plus a
	/// delegated click listener for `a[data-link]` anchors.
	#[cfg(target_arch = "wasm32")]
	pub fn listen(self: &Rc<Self>) {
		use wasm_bindgen::JsCast;
		use wasm_bindgen::closure::Closure;

		let Some(window) = web_sys::window() else {
			return;
		};

		// Back/forward navigation
		let router = Rc::clone(self);
		let popstate = Closure::wrap(Box::new(move |_event: web_sys::Event| {
			if let Ok(path) = current_path() {
				router.sync_location(&path);
			}
		}) as Box<dyn FnMut(web_sys::Event)>);
		let _ = window
			.add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref());
		popstate.forget();

		// Intercept same-app anchor clicks
		let Some(document) = window.document() else {
			return;
		};
		let router = Rc::clone(self);
		let click = Closure::wrap(Box::new(move |event: web_sys::Event| {
			let Some(target) = event.target() else {
				return;
			};
			let Ok(element) = target.dyn_into::<web_sys::Element>() else {
				return;
			};
			let Ok(Some(anchor)) = element.closest("a[data-link]") else {
				return;
			};
			let Some(href) = anchor.get_attribute("href") else {
				return;
			};
			event.prevent_default();
			if let Err(err) = router.push(&href) {
				crate::error_log!("navigation to {} failed: {}", href, err);
			}
		}) as Box<dyn FnMut(web_sys::Event)>);
		let _ = document.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
		click.forget();
	}

	/// Browser listeners are client-only.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn listen(self: &Rc<Self>) {}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serial_test::serial;

	fn home_view(_params: &RouteParams) -> View {
		View::text("Home")
	}

	fn post_view(params: &RouteParams) -> View {
		View::text(format!(
			"Post {}",
			params.get("id").cloned().unwrap_or_default()
		))
	}

	fn not_found_view() -> View {
		View::text("404")
	}

	#[test]
	#[serial]
	fn test_route_named() {
		let route = Route::named("home", "/", home_view);
		assert_eq!(route.name(), Some("home"));
		assert!(Route::new("/", home_view).name().is_none());
	}

	#[test]
	#[serial]
	fn test_router_add_routes() {
		let router = Router::new()
			.route("/", home_view)
			.named_route("post_detail", "/post/{id}", post_view);

		assert_eq!(router.route_count(), 2);
		assert!(router.has_route("post_detail"));
		assert!(!router.has_route("nonexistent"));
	}

	#[test]
	#[serial]
	fn test_router_match_params() {
		let router = Router::new().route("/post/{id}", post_view);

		let route_match = router.match_path("/post/p42").unwrap();
		assert_eq!(route_match.params.get("id"), Some(&"p42".to_string()));
		assert!(router.match_path("/missing").is_none());
	}

	#[test]
	#[serial]
	fn test_router_reverse() {
		let router = Router::new()
			.named_route("home", "/home", home_view)
			.named_route("post_detail", "/post/{id}", post_view);

		assert_eq!(router.reverse("home", &[]).unwrap(), "/home");
		assert_eq!(
			router.reverse("post_detail", &[("id", "p1")]).unwrap(),
			"/post/p1"
		);
		assert!(matches!(
			router.reverse("post_detail", &[]),
			Err(RouterError::MissingParameter(_))
		));
		assert!(matches!(
			router.reverse("nonexistent", &[]),
			Err(RouterError::InvalidRouteName(_))
		));
	}

	#[test]
	#[serial]
	fn test_router_push_updates_signals() {
		let router = Router::new()
			.named_route("home", "/home", home_view)
			.named_route("post_detail", "/post/{id}", post_view);

		router.push("/post/p7").unwrap();
		assert_eq!(router.current_path().get_untracked(), "/post/p7");
		assert_eq!(
			router.current_params().get_untracked().get("id"),
			Some(&"p7".to_string())
		);
		assert_eq!(
			router.current_route_name().get_untracked(),
			Some("post_detail".to_string())
		);
	}

	#[test]
	#[serial]
	fn test_render_current_renders_match() {
		let router = Router::new()
			.route("/home", home_view)
			.route("/post/{id}", post_view)
			.not_found(not_found_view);

		router.push("/post/p1").unwrap();
		assert_eq!(router.render_current().render_to_string(), "Post p1");

		router.push("/nowhere").unwrap();
		assert_eq!(router.render_current().render_to_string(), "404");
	}

	#[test]
	#[serial]
	fn test_render_current_without_not_found_is_empty() {
		let router = Router::new().route("/home", home_view);
		router.push("/nowhere").unwrap();
		assert_eq!(router.render_current().render_to_string(), "");
	}
}
