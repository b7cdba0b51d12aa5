//! Types shared between the settings views and the API layer.

pub mod types;
