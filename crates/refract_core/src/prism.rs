//! Equilateral prism geometry
//!
//! The prism is stored as a World-basis center plus a fixed edge length.
//! Vertices and edges are recomputed from the current center on every call,
//! so a move can never leave stale geometry behind.

use refract_math::{Basis, GeometryError, Line, Point, Triangle, Vector2, Viewport};

/// Host layout box of the prism element, in ScreenPixel basis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutBox {
    /// Screen x of the top-left corner
    pub left: f64,
    /// Screen y of the top-left corner
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Center of the box in ScreenPixel basis
    pub fn center(&self) -> Point {
        Point::screen(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// An equilateral triangle with its base parallel to the x axis, apex up
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prism {
    center: Point,
    edge_length: f64,
}

impl Prism {
    /// Create a prism centered at a World-basis point
    pub fn new(center: Point, edge_length: f64) -> Result<Self, GeometryError> {
        let center = center.expect_basis(Basis::World)?;
        Ok(Self { center, edge_length })
    }

    /// Create a prism from the host's layout box
    ///
    /// The center is the box center converted to World basis; the edge length
    /// is the box width.
    pub fn from_layout(layout: LayoutBox, viewport: &Viewport) -> Result<Self, GeometryError> {
        let center = viewport.screen_to_world(layout.center())?;
        Self::new(center, layout.width)
    }

    /// Current center (World basis)
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Fixed edge length
    #[inline]
    pub fn edge_length(&self) -> f64 {
        self.edge_length
    }

    /// Height of the triangle: `L * sqrt(3) / 2`
    #[inline]
    pub fn height(&self) -> f64 {
        self.edge_length * 3f64.sqrt() / 2.0
    }

    /// Vertices `[A, B, C]`: bottom-left, bottom-right, apex
    pub fn vertices(&self) -> [Point; 3] {
        let half_edge = self.edge_length / 2.0;
        let half_height = self.height() / 2.0;
        let Point { x, y, .. } = self.center;
        [
            Point::world(x - half_edge, y - half_height),
            Point::world(x + half_edge, y - half_height),
            Point::world(x, y + half_height),
        ]
    }

    /// The prism as a triangle for interior tests
    pub fn triangle(&self) -> Result<Triangle, GeometryError> {
        let [a, b, c] = self.vertices();
        Triangle::new(a, b, c)
    }

    /// Boundary edges `[AB, BC, CA]`, each directed from its first vertex
    pub fn edges(&self) -> [Line; 3] {
        let [a, b, c] = self.vertices();
        let edge = |from: Point, to: Point| {
            Line::new(from, Vector2::new(to.x - from.x, to.y - from.y))
        };
        [edge(a, b), edge(b, c), edge(c, a)]
    }

    /// Area-sum interior test (boundary included)
    pub fn contains(&self, p: Point, epsilon: f64) -> Result<bool, GeometryError> {
        self.triangle()?.contains(p, epsilon)
    }

    /// Move the center to a World-basis point
    pub fn move_to(&mut self, p: Point) -> Result<(), GeometryError> {
        self.center = p.expect_basis(Basis::World)?;
        Ok(())
    }

    /// Translate the center by a World-basis displacement
    pub fn translate(&mut self, delta: Vector2) {
        self.center = self.center.offset(delta);
    }

    /// Layout box the host should place the prism element at
    ///
    /// The box is the bounding square-ish rectangle `L x h` around the
    /// triangle, positioned in ScreenPixel basis.
    pub fn layout_box(&self, viewport: &Viewport) -> Result<LayoutBox, GeometryError> {
        let center = viewport.world_to_screen(self.center)?;
        let width = self.edge_length;
        let height = self.height();
        Ok(LayoutBox::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refract_math::INTERIOR_EPSILON;

    fn prism() -> Prism {
        Prism::new(Point::world(0.0, 0.0), 150.0).unwrap()
    }

    #[test]
    fn test_vertices() {
        let [a, b, c] = prism().vertices();
        let h = 150.0 * 3f64.sqrt() / 2.0;
        assert_eq!(a, Point::world(-75.0, -h / 2.0));
        assert_eq!(b, Point::world(75.0, -h / 2.0));
        assert_eq!(c, Point::world(0.0, h / 2.0));
    }

    #[test]
    fn test_edges_are_equilateral() {
        for edge in prism().edges() {
            assert!((edge.direction.norm() - 150.0).abs() < 1e-9);
        }
        // Base parallel to x
        assert_eq!(prism().edges()[0].direction.y, 0.0);
    }

    #[test]
    fn test_vertices_satisfy_interior_identity() {
        let p = Prism::new(Point::world(37.5, -12.25), 220.0).unwrap();
        for v in p.vertices() {
            assert!(p.contains(v, INTERIOR_EPSILON).unwrap(), "vertex {} should be on the prism", v);
        }
    }

    #[test]
    fn test_triangle_matches_vertices() {
        let p = Prism::new(Point::world(37.5, -12.25), 220.0).unwrap();
        let tri = p.triangle().unwrap();
        assert_eq!(tri.vertices(), p.vertices());
        assert_eq!(tri.basis(), Basis::World);
    }

    #[test]
    fn test_contains() {
        let p = prism();
        assert!(p.contains(Point::world(0.0, 0.0), INTERIOR_EPSILON).unwrap());
        assert!(!p.contains(Point::world(70.0, 60.0), INTERIOR_EPSILON).unwrap());
        assert!(p.contains(Point::canvas(0.0, 0.0), INTERIOR_EPSILON).is_err());
    }

    #[test]
    fn test_new_requires_world_basis() {
        assert!(Prism::new(Point::screen(0.0, 0.0), 10.0).is_err());
    }

    #[test]
    fn test_move_to_and_translate() {
        let mut p = prism();
        p.move_to(Point::world(10.0, 20.0)).unwrap();
        assert_eq!(p.center(), Point::world(10.0, 20.0));
        p.translate(Vector2::new(-10.0, 5.0));
        assert_eq!(p.center(), Point::world(0.0, 25.0));
        assert_eq!(p.vertices()[2].y, 25.0 + p.height() / 2.0);
        assert!(p.move_to(Point::canvas(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_from_layout_and_back() {
        let viewport = Viewport::new(500.0, 500.0).with_origin(20.0, 40.0);
        let layout = LayoutBox::new(120.0, 157.0, 300.0, 266.0);
        let p = Prism::from_layout(layout, &viewport).unwrap();
        // Box center (270, 290) on screen is the canvas center
        assert_eq!(p.center(), Point::world(0.0, 0.0));
        assert_eq!(p.edge_length(), 300.0);

        let out = p.layout_box(&viewport).unwrap();
        let (a, b) = (out.center(), layout.center());
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y - b.y).abs() < 1e-9);
        assert_eq!(out.width, 300.0);
    }
}
