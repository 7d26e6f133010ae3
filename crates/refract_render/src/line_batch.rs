//! CPU-side tessellation of drawing calls
//!
//! [`LineBatch`] implements [`Surface`] by turning every call into flat
//! triangles in canvas pixels:
//!
//! - a line becomes a quad `width` pixels wide
//! - a filled marker becomes a triangle fan approximating a disc
//! - clearing the whole canvas drops everything; clearing part of it paints
//!   a background quad over that region
//!
//! The batch is uploaded as-is by [`crate::pipeline::LinePipeline::upload`].

use refract_core::{Basis, Color, GeometryError, Point, Rect, Surface, Viewport};

use crate::pipeline::Vertex2D;

/// Default number of fan triangles per marker
const DEFAULT_CIRCLE_SEGMENTS: u32 = 16;

/// Triangles accumulated since the last full clear
#[derive(Clone, Debug)]
pub struct LineBatch {
    vertices: Vec<Vertex2D>,
    canvas: Rect,
    background: Color,
    circle_segments: u32,
}

impl LineBatch {
    /// Create an empty batch for a viewport's canvas
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            vertices: Vec::new(),
            canvas: Rect::canvas(viewport),
            background: Color::BLACK,
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
        }
    }

    /// Builder: set the background used by partial clears
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Builder: set marker smoothness (at least 3)
    pub fn with_circle_segments(mut self, segments: u32) -> Self {
        self.circle_segments = segments.max(3);
        self
    }

    /// Track a resized canvas
    pub fn resize(&mut self, viewport: &Viewport) {
        self.canvas = Rect::canvas(viewport);
    }

    /// Tessellated triangles, three vertices each
    pub fn vertices(&self) -> &[Vertex2D] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn background(&self) -> Color {
        self.background
    }

    fn push_quad(&mut self, corners: [[f32; 2]; 4], color: [f32; 4]) {
        let [a, b, c, d] = corners;
        for position in [a, b, c, a, c, d] {
            self.vertices.push(Vertex2D::new(position, color));
        }
    }
}

impl Surface for LineBatch {
    fn clear_rect(&mut self, rect: Rect) {
        if rect.covers(&self.canvas) {
            self.vertices.clear();
            return;
        }
        let (x0, y0) = (rect.x as f32, rect.y as f32);
        let (x1, y1) = ((rect.x + rect.width) as f32, (rect.y + rect.height) as f32);
        self.push_quad([[x0, y0], [x1, y0], [x1, y1], [x0, y1]], self.background.to_array());
    }

    fn draw_line(&mut self, from: Point, to: Point, width: f32, color: Color) -> Result<(), GeometryError> {
        let from = from.expect_basis(Basis::CanvasPixel)?;
        let to = to.expect_basis(Basis::CanvasPixel)?;

        let dx = (to.x - from.x) as f32;
        let dy = (to.y - from.y) as f32;
        let len = (dx * dx + dy * dy).sqrt();
        if len == 0.0 || !len.is_finite() {
            log::trace!("Skipping zero-length line at {}", from);
            return Ok(());
        }

        // Half-width offset perpendicular to the line
        let half = width.max(0.0) / 2.0;
        let (nx, ny) = (-dy / len * half, dx / len * half);
        let (fx, fy) = (from.x as f32, from.y as f32);
        let (tx, ty) = (to.x as f32, to.y as f32);

        self.push_quad(
            [
                [fx + nx, fy + ny],
                [tx + nx, ty + ny],
                [tx - nx, ty - ny],
                [fx - nx, fy - ny],
            ],
            color.to_array(),
        );
        Ok(())
    }

    fn fill_shape(&mut self, at: Point, size: f32, color: Color) -> Result<(), GeometryError> {
        let at = at.expect_basis(Basis::CanvasPixel)?;
        let center = [at.x as f32, at.y as f32];
        let color = color.to_array();
        let step = std::f32::consts::TAU / self.circle_segments as f32;

        let rim = |i: u32| {
            let angle = step * i as f32;
            [center[0] + size * angle.cos(), center[1] + size * angle.sin()]
        };
        for i in 0..self.circle_segments {
            self.vertices.push(Vertex2D::new(center, color));
            self.vertices.push(Vertex2D::new(rim(i), color));
            self.vertices.push(Vertex2D::new(rim(i + 1), color));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch() -> LineBatch {
        LineBatch::new(&Viewport::new(500.0, 400.0))
    }

    #[test]
    fn test_line_is_a_quad() {
        let mut b = batch();
        b.draw_line(Point::canvas(10.0, 10.0), Point::canvas(110.0, 10.0), 4.0, Color::RED)
            .unwrap();
        assert_eq!(b.vertex_count(), 6);
        // Horizontal line: corners offset by half the width in y
        let ys: Vec<f32> = b.vertices().iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|&y| y == 12.0 || y == 8.0));
        assert!(b.vertices().iter().all(|v| v.color == Color::RED.to_array()));
    }

    #[test]
    fn test_zero_length_line_is_skipped() {
        let mut b = batch();
        b.draw_line(Point::canvas(5.0, 5.0), Point::canvas(5.0, 5.0), 2.0, Color::WHITE)
            .unwrap();
        assert!(b.is_empty());
    }

    #[test]
    fn test_marker_is_a_fan() {
        let mut b = batch().with_circle_segments(8);
        b.fill_shape(Point::canvas(50.0, 60.0), 5.0, Color::BLUE).unwrap();
        assert_eq!(b.vertex_count(), 24);
        for v in b.vertices() {
            let d = ((v.position[0] - 50.0).powi(2) + (v.position[1] - 60.0).powi(2)).sqrt();
            assert!(d < 5.0 + 1e-4);
        }
    }

    #[test]
    fn test_full_clear_empties_batch() {
        let mut b = batch();
        b.fill_shape(Point::canvas(50.0, 60.0), 5.0, Color::BLUE).unwrap();
        b.clear_rect(Rect::new(0.0, 0.0, 500.0, 400.0));
        assert!(b.is_empty());
    }

    #[test]
    fn test_partial_clear_paints_background() {
        let mut b = batch().with_background(Color::BLACK);
        b.clear_rect(Rect::new(10.0, 10.0, 20.0, 20.0));
        assert_eq!(b.vertex_count(), 6);
        assert!(b.vertices().iter().all(|v| v.color == Color::BLACK.to_array()));
    }

    #[test]
    fn test_rejects_world_points() {
        let mut b = batch();
        assert!(b
            .draw_line(Point::world(0.0, 0.0), Point::canvas(1.0, 1.0), 1.0, Color::WHITE)
            .is_err());
        assert!(b.fill_shape(Point::world(0.0, 0.0), 5.0, Color::WHITE).is_err());
        assert!(b.is_empty());
    }
}
