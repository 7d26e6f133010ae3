//! Core types for the refract simulator
//!
//! This crate provides the prism, the light rays and the tracer that follows
//! them through the prism:
//!
//! - [`Prism`] - Movable equilateral triangle with derived vertices and edges
//! - [`Light`] - A ray plus its optical state (medium, refractive index, color)
//! - [`Tracer`] - Bounded trace loop producing a [`TracePath`] per light
//! - [`Surface`] - The drawing contract, with [`RecordingSurface`] for headless use
//! - [`Scene`] - Prism + lights + viewport, retraced and redrawn on every move

mod color;
mod prism;
mod light;
mod tracer;
mod surface;
mod scene;

pub use color::Color;
pub use prism::{Prism, LayoutBox};
pub use light::{Light, Medium, Refraction, refract, DEFAULT_SPECTRUM};
pub use tracer::{Tracer, TraceConfig, TracePath, Termination, Segment, Hit};
pub use surface::{Surface, Rect, DrawCommand, RecordingSurface};
pub use scene::{Scene, SceneStyle};

// Re-export commonly used types from refract_math for convenience
pub use refract_math::{Basis, GeometryError, Line, Point, Triangle, Vector2, Viewport};
