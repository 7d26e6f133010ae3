//! Infinite lines with slope/intercept arithmetic
//!
//! A line is stored as an origin point plus a direction. The slope `k` and
//! intercept `b` of `y = kx + b` are derived on demand. Vertical lines have no
//! slope and are handled by explicit branches. Intersection points are solved
//! along the directions rather than from `k` and `b`, so steep lines keep
//! their precision and nothing divides by zero or produces `NaN`.

use crate::{GeometryError, Point, Vector2};

/// Below this |dx / dy| a direction is treated as vertical
const VERTICAL_EPSILON: f64 = 1e-12;

/// An infinite line through `origin` along `direction`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub origin: Point,
    pub direction: Vector2,
}

impl Line {
    /// Create a line through `origin` along `direction`
    #[inline]
    pub fn new(origin: Point, direction: Vector2) -> Self {
        Self { origin, direction }
    }

    /// Line through two points (direction from `a` to `b`)
    pub fn through(a: Point, b: Point) -> Result<Self, GeometryError> {
        Ok(Self::new(a, a.to(b)?))
    }

    /// True when the direction has zero length
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction.is_zero()
    }

    /// True when the direction has (practically) no x component
    #[inline]
    pub fn is_vertical(&self) -> bool {
        !self.is_degenerate() && self.direction.x.abs() < VERTICAL_EPSILON * self.direction.y.abs()
    }

    /// Slope `k = dy/dx`, or `None` for vertical and degenerate lines
    pub fn slope(&self) -> Option<f64> {
        if self.is_degenerate() || self.is_vertical() {
            None
        } else {
            Some(self.direction.y / self.direction.x)
        }
    }

    /// Intercept `b` of `y = kx + b`, or `None` when there is no slope
    pub fn intercept(&self) -> Option<f64> {
        self.slope().map(|k| self.origin.y - k * self.origin.x)
    }

    /// Evaluate `y` at `x`, or `None` when there is no slope
    pub fn y_at(&self, x: f64) -> Option<f64> {
        let k = self.slope()?;
        let b = self.intercept()?;
        Some(k * x + b)
    }

    /// Intersection point of two infinite lines
    ///
    /// Returns `Ok(None)` for parallel lines (slopes equal within `epsilon`,
    /// both-vertical included) and for degenerate directions. Both origins
    /// must share a basis.
    pub fn intersect(&self, other: &Line, epsilon: f64) -> Result<Option<Point>, GeometryError> {
        other.origin.expect_basis(self.origin.basis)?;

        if self.is_degenerate() || other.is_degenerate() {
            return Ok(None);
        }

        let parallel = match (self.slope(), other.slope()) {
            (None, None) => true,
            (Some(ka), Some(kb)) => (ka - kb).abs() < epsilon,
            _ => false,
        };
        let denom = self.direction.cross(other.direction);
        if parallel || denom == 0.0 {
            return Ok(None);
        }

        // Parameter along `self`: cross(o2 - o1, d2) / cross(d1, d2)
        let t = self.origin.to(other.origin)?.cross(other.direction) / denom;
        let hit = self.origin.offset(self.direction * t);
        if !(hit.x.is_finite() && hit.y.is_finite()) {
            return Ok(None);
        }
        Ok(Some(hit))
    }

    /// Signed travel from the origin to `p`, measured along the direction
    ///
    /// Positive means `p` lies ahead of the origin. Degenerate lines return 0.
    pub fn travel_to(&self, p: Point) -> Result<f64, GeometryError> {
        let len = self.direction.norm();
        if len == 0.0 {
            return Ok(0.0);
        }
        Ok(self.direction.dot(self.origin.to(p)?) / len)
    }
}
