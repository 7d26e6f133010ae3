//! The drawing contract
//!
//! Everything the simulator draws goes through [`Surface`]. Coordinates are in
//! CanvasPixel basis; the GPU line batch in `refract_render` and the
//! [`RecordingSurface`] used by tests both implement it.

use refract_math::{Basis, GeometryError, Point, Viewport};

use crate::Color;

/// Axis-aligned rectangle in CanvasPixel basis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// The whole canvas of a viewport
    pub fn canvas(viewport: &Viewport) -> Self {
        Self::new(0.0, 0.0, viewport.width, viewport.height)
    }

    /// True when this rectangle covers all of `other`
    pub fn covers(&self, other: &Rect) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.x + self.width >= other.x + other.width
            && self.y + self.height >= other.y + other.height
    }
}

/// A 2D drawing target
pub trait Surface {
    /// Clear a rectangle to the background
    fn clear_rect(&mut self, rect: Rect);

    /// Stroke a straight line between two CanvasPixel points
    fn draw_line(&mut self, from: Point, to: Point, width: f32, color: Color) -> Result<(), GeometryError>;

    /// Fill a round marker of radius `size` centered at a CanvasPixel point
    fn fill_shape(&mut self, at: Point, size: f32, color: Color) -> Result<(), GeometryError>;
}

/// One recorded drawing call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Color,
    },
    Fill {
        at: Point,
        size: f32,
        color: Color,
    },
}

/// A surface that records calls instead of drawing
///
/// Used headless and in tests. Points are basis-checked exactly like a real
/// surface would.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands in call order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Line commands only
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. }))
    }

    /// Fill commands only
    pub fn fills(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Fill { .. }))
    }

    /// Take the recorded commands, leaving the surface empty
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn draw_line(&mut self, from: Point, to: Point, width: f32, color: Color) -> Result<(), GeometryError> {
        let from = from.expect_basis(Basis::CanvasPixel)?;
        let to = to.expect_basis(Basis::CanvasPixel)?;
        self.commands.push(DrawCommand::Line { from, to, width, color });
        Ok(())
    }

    fn fill_shape(&mut self, at: Point, size: f32, color: Color) -> Result<(), GeometryError> {
        let at = at.expect_basis(Basis::CanvasPixel)?;
        self.commands.push(DrawCommand::Fill { at, size, color });
        Ok(())
    }
}
