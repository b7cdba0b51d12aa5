//! HTML element builder API.

pub mod html;
