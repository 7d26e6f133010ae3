//! Refract - interactive prism ray tracer
//!
//! Library half of the application: configuration, scene construction, input
//! mapping and the window/render systems used by the binary.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;
