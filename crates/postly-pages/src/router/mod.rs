//! Client-side routing over the History API.

pub mod components;
pub mod core;
pub mod history;
pub mod pattern;

pub use components::{Link, router_outlet};
pub use core::{Route, RouteMatch, RouteParams, Router, RouterError};
pub use history::{HistoryState, NavigationType, current_path};
pub use pattern::PathPattern;
