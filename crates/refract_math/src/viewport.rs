//! Coordinate transforms between World, CanvasPixel and ScreenPixel
//!
//! - **World**: origin at the canvas center, y up
//! - **CanvasPixel**: origin at the canvas top-left, y down
//! - **ScreenPixel**: origin at the screen top-left, y down; the canvas
//!   top-left sits at `(origin_x, origin_y)`
//!
//! Every conversion checks the source basis and refuses points tagged with
//! any other basis.

use serde::{Serialize, Deserialize};

use crate::{Basis, GeometryError, Point, Vector2};

/// Size of the drawing surface and its placement on screen
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Screen x of the canvas top-left corner
    pub origin_x: f64,
    /// Screen y of the canvas top-left corner
    pub origin_y: f64,
}

impl Viewport {
    /// Canvas of the given size placed at the screen origin
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    /// Builder: place the canvas top-left at `(x, y)` on screen
    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    /// World → CanvasPixel: `(x + W/2, H/2 - y)`
    pub fn world_to_canvas(&self, p: Point) -> Result<Point, GeometryError> {
        let p = p.expect_basis(Basis::World)?;
        Ok(Point::canvas(p.x + self.width / 2.0, self.height / 2.0 - p.y))
    }

    /// CanvasPixel → World, exact inverse of [`Viewport::world_to_canvas`]
    pub fn canvas_to_world(&self, p: Point) -> Result<Point, GeometryError> {
        let p = p.expect_basis(Basis::CanvasPixel)?;
        Ok(Point::world(p.x - self.width / 2.0, self.height / 2.0 - p.y))
    }

    /// World → ScreenPixel: the canvas position shifted by the canvas origin
    pub fn world_to_screen(&self, p: Point) -> Result<Point, GeometryError> {
        let p = p.expect_basis(Basis::World)?;
        Ok(Point::screen(
            p.x + self.origin_x + self.width / 2.0,
            self.origin_y + self.height / 2.0 - p.y,
        ))
    }

    /// ScreenPixel → World, exact inverse of [`Viewport::world_to_screen`]
    pub fn screen_to_world(&self, p: Point) -> Result<Point, GeometryError> {
        let p = p.expect_basis(Basis::ScreenPixel)?;
        Ok(Point::world(
            p.x - self.origin_x - self.width / 2.0,
            self.origin_y + self.height / 2.0 - p.y,
        ))
    }

    /// Convert a screen-space drag delta (y down) into a world delta (y up)
    #[inline]
    pub fn screen_delta_to_world(&self, dx: f64, dy: f64) -> Vector2 {
        Vector2::new(dx, -dy)
    }

    /// World-space bounds of the canvas as `(min, max)`
    pub fn world_bounds(&self) -> (Point, Point) {
        (
            Point::world(-self.width / 2.0, -self.height / 2.0),
            Point::world(self.width / 2.0, self.height / 2.0),
        )
    }

    /// Point where a ray from `origin` along `direction` leaves the canvas
    ///
    /// A zero direction, or an origin already outside and moving away,
    /// yields `origin` itself.
    pub fn exit_point(&self, origin: Point, direction: Vector2) -> Result<Point, GeometryError> {
        let origin = origin.expect_basis(Basis::World)?;
        let (min, max) = self.world_bounds();

        let axis_exit = |o: f64, d: f64, lo: f64, hi: f64| {
            if d > 0.0 {
                (hi - o) / d
            } else if d < 0.0 {
                (lo - o) / d
            } else {
                f64::INFINITY
            }
        };

        let t = axis_exit(origin.x, direction.x, min.x, max.x)
            .min(axis_exit(origin.y, direction.y, min.y, max.y));

        if !t.is_finite() || t <= 0.0 {
            return Ok(origin);
        }
        Ok(origin.offset(direction * t))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(500.0, 500.0)
    }
}
