//! Light rays and the refraction rule
//!
//! A [`Light`] is one straight piece of a traced path: a [`Line`] plus the
//! optical state it travels with. Lights are values; every surface crossing
//! produces a new one through [`Light::spawn`].

use refract_math::{Line, Point, Vector2};

use crate::Color;

/// `sqrt(3) / 2`, the cosine of the prism's 30° edge-normal offset
const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Refractive indices and colors of the default six-ray spectrum
pub const DEFAULT_SPECTRUM: [(f64, Color); 6] = [
    (1.25, Color::RED),
    (1.4, Color::ORANGE),
    (1.55, Color::YELLOW),
    (1.7, Color::GREEN),
    (1.85, Color::BLUE),
    (2.0, Color::PURPLE),
];

/// Which side of the prism boundary a ray travels on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Medium {
    Outside,
    Inside,
}

impl Medium {
    /// The medium on the other side of a boundary
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Medium::Outside => Medium::Inside,
            Medium::Inside => Medium::Outside,
        }
    }

    #[inline]
    pub fn is_inside(self) -> bool {
        self == Medium::Inside
    }
}

/// Outcome of a ray meeting the prism boundary
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Refraction {
    /// The ray continues along this direction on the other side
    Transmitted(Vector2),
    /// Beyond the critical angle: the ray stays trapped and the path ends
    TotalInternalReflection,
}

/// Apply the prism's refraction rule
///
/// `sin_incidence` is `|cos|` of the angle between the ray and the edge
/// tangent. Exiting rays whose incidence exceeds `1/index` by more than
/// `tolerance` are totally reflected; incidences within `tolerance` of the
/// critical value exit grazing. Entering rays always refract.
///
/// The outgoing direction is expressed in the equilateral prism's 60° edge
/// frame, mirrored in y between entering and exiting. A non-positive or
/// non-finite index traps the ray.
pub fn refract(sin_incidence: f64, index: f64, medium: Medium, tolerance: f64) -> Refraction {
    if !index.is_finite() || index <= 0.0 {
        return Refraction::TotalInternalReflection;
    }

    let sin_out = match medium {
        Medium::Inside => {
            let excess = sin_incidence - 1.0 / index;
            if excess > tolerance {
                return Refraction::TotalInternalReflection;
            }
            if excess.abs() <= tolerance {
                1.0
            } else {
                sin_incidence * index
            }
        }
        Medium::Outside => sin_incidence / index,
    }
    .clamp(0.0, 1.0);

    let cos_out = (1.0 - sin_out * sin_out).max(0.0).sqrt();
    let cos_l = HALF_SQRT_3 * cos_out + 0.5 * sin_out;
    let sin_l = HALF_SQRT_3 * sin_out - 0.5 * cos_out;

    let direction = match medium {
        Medium::Outside => Vector2::new(cos_l, sin_l),
        Medium::Inside => Vector2::new(cos_l, -sin_l),
    };
    Refraction::Transmitted(direction)
}

/// A ray with its optical state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    ray: Line,
    medium: Medium,
    index: f64,
    color: Color,
}

impl Light {
    /// Create a light starting outside the prism
    pub fn new(origin: Point, direction: Vector2, index: f64, color: Color) -> Self {
        Self {
            ray: Line::new(origin, direction),
            medium: Medium::Outside,
            index,
            color,
        }
    }

    /// One light per `(index, color)` pair, all sharing origin and direction
    pub fn spectrum(origin: Point, direction: Vector2, bands: &[(f64, Color)]) -> Vec<Self> {
        bands
            .iter()
            .map(|&(index, color)| Self::new(origin, direction, index, color))
            .collect()
    }

    /// Builder: start on the given side of the boundary
    pub fn with_medium(mut self, medium: Medium) -> Self {
        self.medium = medium;
        self
    }

    #[inline]
    pub fn ray(&self) -> &Line {
        &self.ray
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.ray.origin
    }

    #[inline]
    pub fn direction(&self) -> Vector2 {
        self.ray.direction
    }

    #[inline]
    pub fn medium(&self) -> Medium {
        self.medium
    }

    #[inline]
    pub fn index(&self) -> f64 {
        self.index
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The continuation after crossing the boundary at `at`
    ///
    /// Same index and color, opposite medium.
    pub fn spawn(&self, at: Point, direction: Vector2) -> Self {
        Self {
            ray: Line::new(at, direction),
            medium: self.medium.flipped(),
            index: self.index,
            color: self.color,
        }
    }

    /// Refract this light at a boundary whose tangent is `edge_direction`
    ///
    /// A zero-length ray or edge cannot define an incidence angle and is
    /// treated as trapped.
    pub fn refract_at(&self, edge_direction: Vector2, tolerance: f64) -> Refraction {
        match self.direction().cosine(edge_direction) {
            Some(cos) => refract(cos.abs(), self.index, self.medium, tolerance),
            None => Refraction::TotalInternalReflection,
        }
    }
}
