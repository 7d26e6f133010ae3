//! 2D Rendering Library
//!
//! This crate provides the wgpu-based drawing surface the ray paths are
//! rendered onto.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`line_batch::LineBatch`] - CPU-side [`Surface`] that tessellates lines and markers
//! - [`pipeline::LinePipeline`] - Draws a tessellated batch in canvas pixels
//! - [`scene_view::SceneView`] - A scene bound to its batch; the drag target

pub mod context;
pub mod line_batch;
pub mod pipeline;
pub mod scene_view;

// Re-export core types for convenience
pub use refract_core::{Color, Scene, Surface, TracePath};

pub use line_batch::LineBatch;
pub use scene_view::SceneView;
