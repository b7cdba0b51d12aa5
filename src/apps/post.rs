//! Post application: feed, detail view and like handling.

pub mod client;
pub mod shared;
