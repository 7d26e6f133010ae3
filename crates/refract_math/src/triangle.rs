//! Triangle area and interior test

use crate::{Basis, GeometryError, Point};

/// A triangle given by three points in a common basis
///
/// Only [`Triangle::new`] builds one, so the vertices always share a basis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    a: Point,
    b: Point,
    c: Point,
}

impl Triangle {
    /// Create a triangle; all three points must share a basis
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self, GeometryError> {
        b.expect_basis(a.basis)?;
        c.expect_basis(a.basis)?;
        Ok(Self { a, b, c })
    }

    /// Unsigned area of the triangle `xyz`
    pub fn area_of(x: Point, y: Point, z: Point) -> Result<f64, GeometryError> {
        let yx = y.to(x)?;
        let yz = y.to(z)?;
        Ok(yx.cross(yz).abs() / 2.0)
    }

    /// Unsigned area of this triangle
    pub fn area(&self) -> f64 {
        let ab = self.a.as_vector() - self.b.as_vector();
        let cb = self.c.as_vector() - self.b.as_vector();
        ab.cross(cb).abs() / 2.0
    }

    /// Area-sum interior test
    ///
    /// `m` is inside (boundary included) when the areas of `ABM`, `BCM` and
    /// `ACM` sum to the area of `ABC` within `epsilon`.
    pub fn contains(&self, m: Point, epsilon: f64) -> Result<bool, GeometryError> {
        m.expect_basis(self.a.basis)?;
        let parts = Self::area_of(self.a, self.b, m)?
            + Self::area_of(self.b, self.c, m)?
            + Self::area_of(self.a, self.c, m)?;
        Ok((self.area() - parts).abs() < epsilon)
    }

    /// Vertices in construction order
    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Basis shared by all three vertices
    #[inline]
    pub fn basis(&self) -> Basis {
        self.a.basis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INTERIOR_EPSILON;

    fn unit() -> Triangle {
        Triangle::new(
            Point::world(0.0, 0.0),
            Point::world(4.0, 0.0),
            Point::world(0.0, 3.0),
        )
        .unwrap()
    }

    #[test]
    fn test_area() {
        assert_eq!(unit().area(), 6.0);
        assert_eq!(
            Triangle::area_of(Point::world(0.0, 0.0), Point::world(4.0, 0.0), Point::world(0.0, 3.0)).unwrap(),
            6.0
        );
    }

    #[test]
    fn test_contains_interior_and_exterior() {
        let tri = unit();
        assert!(tri.contains(Point::world(1.0, 1.0), INTERIOR_EPSILON).unwrap());
        assert!(!tri.contains(Point::world(5.0, 5.0), INTERIOR_EPSILON).unwrap());
        assert!(!tri.contains(Point::world(-0.1, 1.0), INTERIOR_EPSILON).unwrap());
    }

    #[test]
    fn test_contains_boundary() {
        let tri = unit();
        for v in tri.vertices() {
            assert!(tri.contains(v, INTERIOR_EPSILON).unwrap());
        }
        // Midpoint of the hypotenuse
        assert!(tri.contains(Point::world(2.0, 1.5), INTERIOR_EPSILON).unwrap());
    }

    #[test]
    fn test_mixed_basis_rejected() {
        assert!(Triangle::new(
            Point::world(0.0, 0.0),
            Point::canvas(1.0, 0.0),
            Point::world(0.0, 1.0),
        )
        .is_err());
        assert_eq!(unit().basis(), Basis::World);
        assert!(unit().contains(Point::screen(1.0, 1.0), INTERIOR_EPSILON).is_err());
    }
}
