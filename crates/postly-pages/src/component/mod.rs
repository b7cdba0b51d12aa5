//! Component system: View tree, IntoView conversions, reactive regions and
//! head management.

pub mod head;
pub mod into_view;
#[cfg(target_arch = "wasm32")]
pub mod reactive;
mod r#trait;

#[cfg(not(target_arch = "wasm32"))]
pub use into_view::DummyEvent;
pub use into_view::{ElementView, IntoView, MountError, ReactiveView, View, ViewEventHandler};

pub use head::{Head, MetaTag};
#[cfg(target_arch = "wasm32")]
pub use reactive::{ReactiveNode, cleanup_reactive_nodes, store_reactive_node};
pub use r#trait::Component;
