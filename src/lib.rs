//! Postly front-end
//!
//! A social-posting web client built on postly-pages:
//! - WASM client: reactive pages mounted into the browser
//! - Native: string rendering of the same views, used by the test suite

// ============================================================================
// Applications
// ============================================================================
pub mod apps;

// ============================================================================
// Route table and theme configuration
// ============================================================================
pub mod config;
pub mod theme;

// ============================================================================
// Client core: common components, page shells, router, session
// ============================================================================
pub mod core;

#[cfg(client)]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: boots the client application.
#[cfg(client)]
#[wasm_bindgen(start)]
pub fn start() {
	core::client::boot();
}
