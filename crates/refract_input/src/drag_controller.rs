//! Drag controller for moving the prism with the pointer
//!
//! Controls:
//! - Left press on the target: begin a drag session
//! - Pointer motion while dragging: accumulate a screen delta
//! - Left release: end the session
//!
//! Deltas are not applied on every motion event. They accumulate and are
//! handed to the target once per [`DragController::update`], which the host
//! calls once per frame. An optional minimum interval throttles further.

use std::time::{Duration, Instant};

use refract_math::{Point, Vector2};
use winit::event::{ElementState, MouseButton};

/// Drag controller for handling pointer input
pub struct DragController {
    // Session state
    dragging: bool,
    cursor: Option<Point>,

    // Accumulated screen-space motion not yet applied
    pending: Vector2,
    last_applied: Option<Instant>,

    // Configuration
    pub min_interval: Duration,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self {
            dragging: false,
            cursor: None,
            pending: Vector2::ZERO,
            last_applied: None,
            min_interval: Duration::ZERO,
        }
    }

    /// Process pointer movement (ScreenPixel position)
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        let next = Point::screen(x, y);
        if self.dragging {
            if let Some(prev) = self.cursor {
                self.pending += Vector2::new(next.x - prev.x, next.y - prev.y);
            }
        }
        self.cursor = Some(next);
    }

    /// Process pointer leaving the window
    pub fn process_cursor_left(&mut self) {
        self.cursor = None;
        self.end_drag();
    }

    /// Process mouse button input
    ///
    /// A left press starts a session only when it lands on the target.
    /// Returns true when a session started or ended.
    pub fn process_mouse_button<T: DragTarget + ?Sized>(
        &mut self,
        button: MouseButton,
        state: ElementState,
        target: &T,
    ) -> bool {
        if button != MouseButton::Left {
            return false;
        }

        match state {
            ElementState::Pressed => {
                let Some(at) = self.cursor else {
                    return false;
                };
                if !self.dragging && target.hit_test(at) {
                    self.dragging = true;
                    self.pending = Vector2::ZERO;
                    log::info!("Drag started at {}", at);
                    true
                } else {
                    false
                }
            }
            ElementState::Released => self.end_drag(),
        }
    }

    fn end_drag(&mut self) -> bool {
        if !self.dragging {
            return false;
        }
        self.dragging = false;
        log::info!("Drag ended");
        true
    }

    /// Apply accumulated motion to the target
    ///
    /// Motion gathered before a release is still delivered. Returns true when
    /// the target was moved.
    pub fn update<T: DragTarget + ?Sized>(&mut self, target: &mut T, now: Instant) -> bool {
        if self.pending.is_zero() {
            return false;
        }
        if let Some(last) = self.last_applied {
            if now.saturating_duration_since(last) < self.min_interval {
                return false;
            }
        }

        let delta = std::mem::replace(&mut self.pending, Vector2::ZERO);
        target.drag_by(delta.x, delta.y);
        self.last_applied = Some(now);
        true
    }

    /// Check if a drag session is active
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Motion waiting for the next update
    pub fn pending_delta(&self) -> Vector2 {
        self.pending
    }

    /// Builder: set the minimum interval between applied deltas
    pub fn with_min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = interval;
        self
    }
}

/// Trait for draggable targets
/// Allows the controller to work with anything that can be hit and moved
pub trait DragTarget {
    /// True when a ScreenPixel point lies on the target
    fn hit_test(&self, at: Point) -> bool;
    /// Move by a ScreenPixel delta (y down)
    fn drag_by(&mut self, dx: f64, dy: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Square target recording every move
    struct Square {
        left: f64,
        top: f64,
        size: f64,
        moves: Vec<(f64, f64)>,
    }

    impl Square {
        fn new() -> Self {
            Self { left: 100.0, top: 100.0, size: 50.0, moves: Vec::new() }
        }
    }

    impl DragTarget for Square {
        fn hit_test(&self, at: Point) -> bool {
            at.x >= self.left && at.x <= self.left + self.size
                && at.y >= self.top && at.y <= self.top + self.size
        }

        fn drag_by(&mut self, dx: f64, dy: f64) {
            self.left += dx;
            self.top += dy;
            self.moves.push((dx, dy));
        }
    }

    fn press(c: &mut DragController, target: &Square) -> bool {
        c.process_mouse_button(MouseButton::Left, ElementState::Pressed, target)
    }

    fn release(c: &mut DragController, target: &Square) -> bool {
        c.process_mouse_button(MouseButton::Left, ElementState::Released, target)
    }

    #[test]
    fn test_press_outside_target_does_not_drag() {
        let mut c = DragController::new();
        let mut sq = Square::new();
        c.process_cursor_moved(10.0, 10.0);
        assert!(!press(&mut c, &sq));
        c.process_cursor_moved(30.0, 30.0);
        assert!(!c.update(&mut sq, Instant::now()));
        assert!(sq.moves.is_empty());
    }

    #[test]
    fn test_press_without_cursor_does_not_drag() {
        let mut c = DragController::new();
        let sq = Square::new();
        assert!(!press(&mut c, &sq));
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_deltas_accumulate_until_update() {
        let mut c = DragController::new();
        let mut sq = Square::new();
        c.process_cursor_moved(110.0, 110.0);
        assert!(press(&mut c, &sq));
        c.process_cursor_moved(115.0, 108.0);
        c.process_cursor_moved(120.0, 111.0);
        assert_eq!(c.pending_delta(), Vector2::new(10.0, 1.0));

        assert!(c.update(&mut sq, Instant::now()));
        assert_eq!(sq.moves, vec![(10.0, 1.0)]);
        assert_eq!(c.pending_delta(), Vector2::ZERO);
    }

    #[test]
    fn test_release_ends_session_but_flushes_motion() {
        let mut c = DragController::new();
        let mut sq = Square::new();
        c.process_cursor_moved(110.0, 110.0);
        press(&mut c, &sq);
        c.process_cursor_moved(112.0, 110.0);
        assert!(release(&mut c, &sq));
        assert!(!c.is_dragging());

        // Motion after release is ignored
        c.process_cursor_moved(150.0, 150.0);
        c.update(&mut sq, Instant::now());
        assert_eq!(sq.moves, vec![(2.0, 0.0)]);
        assert!(!release(&mut c, &sq));
    }

    #[test]
    fn test_min_interval_throttles() {
        let mut c = DragController::new().with_min_interval(Duration::from_millis(16));
        let mut sq = Square::new();
        let t0 = Instant::now();

        c.process_cursor_moved(110.0, 110.0);
        press(&mut c, &sq);
        c.process_cursor_moved(111.0, 110.0);
        assert!(c.update(&mut sq, t0));

        c.process_cursor_moved(113.0, 110.0);
        assert!(!c.update(&mut sq, t0 + Duration::from_millis(5)));
        c.process_cursor_moved(114.0, 110.0);
        assert!(c.update(&mut sq, t0 + Duration::from_millis(20)));

        assert_eq!(sq.moves, vec![(1.0, 0.0), (3.0, 0.0)]);
    }

    #[test]
    fn test_cursor_leaving_ends_drag() {
        let mut c = DragController::new();
        let sq = Square::new();
        c.process_cursor_moved(110.0, 110.0);
        press(&mut c, &sq);
        c.process_cursor_left();
        assert!(!c.is_dragging());
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut c = DragController::new();
        let sq = Square::new();
        c.process_cursor_moved(110.0, 110.0);
        assert!(!c.process_mouse_button(MouseButton::Right, ElementState::Pressed, &sq));
        assert!(!c.is_dragging());
    }
}
