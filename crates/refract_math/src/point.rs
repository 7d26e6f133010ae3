//! Basis-tagged points

use std::fmt;

use serde::{Serialize, Deserialize};

use crate::{GeometryError, Vector2};

/// The coordinate frame a [`Point`] is expressed in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basis {
    /// Centered on the scene, y axis up
    #[default]
    World,
    /// Top-left of the drawing surface, y axis down
    CanvasPixel,
    /// Top-left of the whole screen/viewport, y axis down
    ScreenPixel,
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Basis::World => "World",
            Basis::CanvasPixel => "CanvasPixel",
            Basis::ScreenPixel => "ScreenPixel",
        };
        f.write_str(name)
    }
}

/// An immutable position tagged with its basis
///
/// Operations combining two points check that both share a basis and return
/// [`GeometryError::BasisMismatch`] otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub basis: Basis,
}

impl Point {
    /// Create a point in the given basis
    #[inline]
    pub const fn new(x: f64, y: f64, basis: Basis) -> Self {
        Self { x, y, basis }
    }

    /// Create a point in World basis
    #[inline]
    pub const fn world(x: f64, y: f64) -> Self {
        Self::new(x, y, Basis::World)
    }

    /// Create a point in CanvasPixel basis
    #[inline]
    pub const fn canvas(x: f64, y: f64) -> Self {
        Self::new(x, y, Basis::CanvasPixel)
    }

    /// Create a point in ScreenPixel basis
    #[inline]
    pub const fn screen(x: f64, y: f64) -> Self {
        Self::new(x, y, Basis::ScreenPixel)
    }

    /// Fail unless this point is expressed in `expected`
    #[inline]
    pub fn expect_basis(self, expected: Basis) -> Result<Self, GeometryError> {
        if self.basis == expected {
            Ok(self)
        } else {
            Err(GeometryError::BasisMismatch {
                expected,
                found: self.basis,
            })
        }
    }

    /// Displacement from `self` to `other` (both in the same basis)
    pub fn to(self, other: Point) -> Result<Vector2, GeometryError> {
        other.expect_basis(self.basis)?;
        Ok(Vector2::new(other.x - self.x, other.y - self.y))
    }

    /// Euclidean distance to another point in the same basis
    pub fn distance(self, other: Point) -> Result<f64, GeometryError> {
        Ok(self.to(other)?.norm())
    }

    /// Translate by a vector, keeping the basis
    #[inline]
    pub fn offset(self, v: Vector2) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.basis)
    }

    /// Position vector (drops the basis tag)
    #[inline]
    pub fn as_vector(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({:.3}, {:.3}; {})", self.x, self.y, self.basis)
    }
}
