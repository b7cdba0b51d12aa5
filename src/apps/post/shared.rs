//! Types shared between views and the API layer.

pub mod types;
