//! 2D Vector type

use serde::{Serialize, Deserialize};

/// Planar vector used for directions and displacements
///
/// Vectors carry no basis: the same direction means the same thing in every
/// frame that shares axis orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Create a new Vector2
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector at `angle` radians from the +x axis (counter-clockwise)
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product: `a.x * b.y - a.y * b.x`
    #[inline]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Length squared
    #[inline]
    pub fn norm_squared(self) -> f64 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// True when both components are exactly zero
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Normalize to unit length (zero stays zero)
    #[inline]
    pub fn normalized(self) -> Self {
        let len = self.norm();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            Self::ZERO
        }
    }

    /// Cosine of the angle between two vectors
    ///
    /// Returns `None` if either vector has zero length.
    pub fn cosine(self, other: Self) -> Option<f64> {
        let denom = self.norm() * other.norm();
        if denom > 0.0 {
            Some((self.dot(other) / denom).clamp(-1.0, 1.0))
        } else {
            None
        }
    }
}

impl std::ops::Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl std::ops::Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f64> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl std::ops::Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 4.0);
        assert_eq!(a.dot(b), 11.0);
    }

    #[test]
    fn test_cross() {
        assert_eq!(Vector2::X.cross(Vector2::Y), 1.0);
        assert_eq!(Vector2::Y.cross(Vector2::X), -1.0);
        // 2*5 - 3*4 = -2
        assert_eq!(Vector2::new(2.0, 3.0).cross(Vector2::new(4.0, 5.0)), -2.0);
    }

    #[test]
    fn test_norm() {
        assert_eq!(Vector2::new(3.0, 4.0).norm(), 5.0);
        assert_eq!(Vector2::ZERO.norm(), 0.0);
    }

    #[test]
    fn test_normalized() {
        let n = Vector2::new(0.0, 5.0).normalized();
        assert_eq!(n, Vector2::Y);
        assert_eq!(Vector2::ZERO.normalized(), Vector2::ZERO);
    }

    #[test]
    fn test_cosine() {
        let c = Vector2::X.cosine(Vector2::new(1.0, 1.0)).unwrap();
        assert!((c - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert_eq!(Vector2::X.cosine(-Vector2::X), Some(-1.0));
    }

    #[test]
    fn test_cosine_zero_length() {
        assert_eq!(Vector2::ZERO.cosine(Vector2::X), None);
        assert_eq!(Vector2::X.cosine(Vector2::ZERO), None);
    }

    #[test]
    fn test_from_angle() {
        let v = Vector2::from_angle(std::f64::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ops() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(0.5, -1.0);
        assert_eq!(a + b, Vector2::new(1.5, 1.0));
        assert_eq!(a - b, Vector2::new(0.5, 3.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
    }
}
