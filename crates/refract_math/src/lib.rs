//! 2D Geometry Library
//!
//! This crate provides the planar primitives the prism ray tracer is built on.
//!
//! ## Core Types
//!
//! - [`Vector2`] - Basis-independent direction/displacement
//! - [`Point`] - A position tagged with the [`Basis`] it is expressed in
//! - [`Line`] - Infinite line through a point with slope/intercept arithmetic
//! - [`Triangle`] - Area-sum interior test
//! - [`Viewport`] - Conversions between World, CanvasPixel and ScreenPixel bases

mod vector;
mod point;
mod error;
pub mod line;
pub mod triangle;
pub mod viewport;

pub use vector::Vector2;
pub use point::{Basis, Point};
pub use error::GeometryError;
pub use line::Line;
pub use triangle::Triangle;
pub use viewport::Viewport;

/// Default tolerance for "equal slopes" when intersecting lines
pub const PARALLEL_EPSILON: f64 = 1e-9;

/// Default absolute tolerance for the triangle area-sum interior test
pub const INTERIOR_EPSILON: f64 = 1e-6;
