//! Pointer Input Handling
//!
//! This crate turns raw pointer events into drag sessions on a draggable
//! target (the prism).

mod drag_controller;

pub use drag_controller::{DragController, DragTarget};
