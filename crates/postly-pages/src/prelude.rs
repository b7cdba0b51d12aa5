//! Convenience re-exports for application code.
//!
//! ```ignore
//! use postly_pages::prelude::*;
//! ```

pub use crate::builder::html::*;
pub use crate::callback::{Callback, IntoEventHandler, event_handler};
#[cfg(not(target_arch = "wasm32"))]
pub use crate::component::DummyEvent;
pub use crate::component::{Component, ElementView, Head, IntoView, MountError, View};
pub use crate::dom::{Element, EventType, document};
pub use crate::reactive::{
	Effect, Memo, Resource, ResourceState, SetState, Signal, create_resource, use_callback,
	use_effect, use_memo, use_state,
};
pub use crate::router::{Link, Route, RouteParams, Router, RouterError, router_outlet};
pub use crate::spawn::spawn_task;
