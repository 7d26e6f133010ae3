//! Rendering pipeline components
//!
//! A single render pipeline draws the triangle list produced by
//! [`crate::LineBatch`].

pub mod types;
pub mod line_pipeline;

pub use types::{Vertex2D, CanvasUniforms};
pub use line_pipeline::LinePipeline;
