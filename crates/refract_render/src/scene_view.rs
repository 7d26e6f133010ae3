//! A scene bound to the batch it draws into
//!
//! [`SceneView`] is what the drag controller moves: every drag retraces the
//! scene and redraws it into the batch, then marks the view dirty so the host
//! uploads the new triangles before the next frame.

use refract_core::{Point, Scene, TracePath};
use refract_input::DragTarget;

use crate::LineBatch;

pub struct SceneView {
    scene: Scene,
    batch: LineBatch,
    paths: Vec<TracePath>,
    dirty: bool,
}

impl SceneView {
    /// Bind a scene to a batch and draw it once
    pub fn new(scene: Scene, mut batch: LineBatch) -> Self {
        let paths = scene.redraw(&mut batch);
        Self {
            scene,
            batch,
            paths,
            dirty: true,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn batch(&self) -> &LineBatch {
        &self.batch
    }

    /// Paths from the latest redraw
    pub fn paths(&self) -> &[TracePath] {
        &self.paths
    }

    /// Retrace and redraw without moving anything
    pub fn redraw(&mut self) {
        self.paths = self.scene.redraw(&mut self.batch);
        self.dirty = true;
    }

    /// Put the prism back at its starting position
    pub fn recenter(&mut self) {
        self.paths = self.scene.recenter(&mut self.batch);
        self.dirty = true;
        log::info!("Prism recentered at {}", self.scene.prism().center());
    }

    /// Returns true once after every change, then clears the flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }
}

impl DragTarget for SceneView {
    fn hit_test(&self, at: Point) -> bool {
        match self.scene.hit_test(at) {
            Ok(hit) => hit,
            Err(e) => {
                log::error!("Hit test failed: {}", e);
                false
            }
        }
    }

    fn drag_by(&mut self, dx: f64, dy: f64) {
        self.paths = self.scene.apply_delta(dx, dy, &mut self.batch);
        self.dirty = true;
        log::debug!("Prism dragged to {}", self.scene.prism().center());
    }
}
