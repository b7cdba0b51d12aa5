//! Profile application: account settings.

pub mod client;
pub mod shared;
