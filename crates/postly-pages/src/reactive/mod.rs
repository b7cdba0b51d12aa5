//! Fine-grained reactivity: Signal, Effect, Memo, Resource and hooks.

pub mod effect;
pub mod hooks;
pub mod memo;
pub mod resource;
pub mod runtime;
pub mod signal;

pub use effect::Effect;
pub use hooks::{SetState, use_callback, use_effect, use_memo, use_state};
pub use memo::Memo;
pub use resource::{Resource, ResourceState, create_resource};
pub use signal::Signal;
