//! History API integration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Serialized navigation state stored with each history entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryState {
	/// The navigated path.
	pub path: String,
	/// Parameters extracted from the matched route.
	pub params: HashMap<String, String>,
	/// Name of the matched route, if any.
	pub route_name: String,
}

impl HistoryState {
	/// Creates a state for the given path.
	pub fn new(path: &str) -> Self {
		Self {
			path: path.to_string(),
			..Self::default()
		}
	}

	/// Attaches route parameters.
	pub fn with_params(mut self, params: HashMap<String, String>) -> Self {
		self.params = params;
		self
	}

	/// Attaches the route name.
	pub fn with_route_name(mut self, name: &str) -> Self {
		self.route_name = name.to_string();
		self
	}
}

/// How a navigation manipulates the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
	/// Adds a new entry.
	Push,
	/// Replaces the current entry.
	Replace,
}

/// The current location's path.
#[cfg(target_arch = "wasm32")]
pub fn current_path() -> Result<String, String> {
	let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
	window
		.location()
		.pathname()
		.map_err(|_| "location unavailable".to_string())
}

/// The current location's path (non-WASM: there is none).
#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> Result<String, String> {
	Err("history API unavailable outside the browser".to_string())
}

/// Pushes a new history entry.
#[cfg(target_arch = "wasm32")]
pub fn push_state(state: &HistoryState) -> Result<(), String> {
	apply_state(state, NavigationType::Push)
}

/// Replaces the current history entry.
#[cfg(target_arch = "wasm32")]
pub fn replace_state(state: &HistoryState) -> Result<(), String> {
	apply_state(state, NavigationType::Replace)
}

#[cfg(target_arch = "wasm32")]
fn apply_state(state: &HistoryState, nav_type: NavigationType) -> Result<(), String> {
	let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
	let history = window.history().map_err(|_| "history unavailable".to_string())?;

	let serialized = serde_json::to_string(state).map_err(|e| e.to_string())?;
	let js_state = wasm_bindgen::JsValue::from_str(&serialized);

	let result = match nav_type {
		NavigationType::Push => {
			history.push_state_with_url(&js_state, "", Some(&state.path))
		}
		NavigationType::Replace => {
			history.replace_state_with_url(&js_state, "", Some(&state.path))
		}
	};
	result.map_err(|_| "history state update failed".to_string())
}

/// Pushes a new history entry (no-op outside the browser).
#[cfg(not(target_arch = "wasm32"))]
pub fn push_state(_state: &HistoryState) -> Result<(), String> {
	Ok(())
}

/// Replaces the current history entry (no-op outside the browser).
#[cfg(not(target_arch = "wasm32"))]
pub fn replace_state(_state: &HistoryState) -> Result<(), String> {
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_history_state_builder() {
		let mut params = HashMap::new();
		params.insert("id".to_string(), "p1".to_string());

		let state = HistoryState::new("/post/p1")
			.with_params(params.clone())
			.with_route_name("post_detail");

		assert_eq!(state.path, "/post/p1");
		assert_eq!(state.params, params);
		assert_eq!(state.route_name, "post_detail");
	}

	#[test]
	fn test_history_state_roundtrip() {
		let state = HistoryState::new("/home").with_route_name("home");
		let json = serde_json::to_string(&state).unwrap();
		let back: HistoryState = serde_json::from_str(&json).unwrap();
		assert_eq!(back.path, "/home");
		assert_eq!(back.route_name, "home");
	}

	#[cfg(not(target_arch = "wasm32"))]
	#[test]
	fn test_native_stubs() {
		assert!(current_path().is_err());
		assert!(push_state(&HistoryState::new("/")).is_ok());
		assert!(replace_state(&HistoryState::new("/")).is_ok());
	}
}
