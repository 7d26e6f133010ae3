//! Scene: prism, lights and viewport
//!
//! A scene owns everything needed to redraw the canvas. Any change to the
//! prism position triggers a full retrace of every light followed by a clear
//! and redraw of the whole canvas; nothing is drawn incrementally.

use serde::{Serialize, Deserialize};

use refract_math::{Basis, GeometryError, Point, Viewport};

use crate::{Color, LayoutBox, Light, Prism, Rect, Surface, Tracer, TracePath};

/// Drawing options for a scene
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneStyle {
    /// Stroke width of ray segments
    pub line_width: f32,
    /// Draw the prism outline
    pub show_outline: bool,
    pub outline_color: Color,
    /// Draw a marker at every boundary hit
    pub show_hits: bool,
    /// Hit marker radius in pixels
    pub marker_size: f32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            show_outline: true,
            outline_color: Color::WHITE,
            show_hits: true,
            marker_size: 5.0,
        }
    }
}

/// A prism with the lights shining on it
#[derive(Clone, Debug)]
pub struct Scene {
    viewport: Viewport,
    prism: Prism,
    /// Prism center restored by [`Scene::recenter`]
    home: Point,
    lights: Vec<Light>,
    tracer: Tracer,
    style: SceneStyle,
}

impl Scene {
    pub fn new(viewport: Viewport, prism: Prism, lights: Vec<Light>) -> Self {
        Self {
            viewport,
            home: prism.center(),
            prism,
            lights,
            tracer: Tracer::default(),
            style: SceneStyle::default(),
        }
    }

    /// Builder: trace with the given tracer
    pub fn with_tracer(mut self, tracer: Tracer) -> Self {
        self.tracer = tracer;
        self
    }

    /// Builder: draw with the given style
    pub fn with_style(mut self, style: SceneStyle) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn prism(&self) -> &Prism {
        &self.prism
    }

    #[inline]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    #[inline]
    pub fn style(&self) -> &SceneStyle {
        &self.style
    }

    /// Trace every light against the current prism
    ///
    /// Lights that fail to trace are logged and left out; the rest are
    /// unaffected.
    pub fn trace_all(&self) -> Vec<TracePath> {
        self.lights
            .iter()
            .filter_map(|light| match self.tracer.trace(light, &self.prism, &self.viewport) {
                Ok(path) => Some(path),
                Err(e) => {
                    log::error!("Skipping ray n={}: {}", light.index(), e);
                    None
                }
            })
            .collect()
    }

    /// Clear the canvas and draw the prism and every traced path
    ///
    /// Returns the paths that were drawn.
    pub fn redraw(&self, surface: &mut dyn Surface) -> Vec<TracePath> {
        let paths = self.trace_all();

        surface.clear_rect(Rect::canvas(&self.viewport));

        if self.style.show_outline {
            for edge in self.prism.edges() {
                let to = edge.origin.offset(edge.direction);
                if let Err(e) = self.stroke(surface, edge.origin, to, 1.0, self.style.outline_color) {
                    log::warn!("Skipping prism edge: {}", e);
                }
            }
        }

        for path in &paths {
            for segment in path.drawn_segments() {
                if let Err(e) = self.stroke(surface, segment.from, segment.to, self.style.line_width, path.color) {
                    log::warn!("Skipping segment of ray n={}: {}", path.index, e);
                }
            }
            if self.style.show_hits {
                for hit in path.hit_points() {
                    let marked = self
                        .viewport
                        .world_to_canvas(hit)
                        .and_then(|at| surface.fill_shape(at, self.style.marker_size, path.color));
                    if let Err(e) = marked {
                        log::warn!("Skipping hit marker of ray n={}: {}", path.index, e);
                    }
                }
            }
        }

        paths
    }

    fn stroke(
        &self,
        surface: &mut dyn Surface,
        from: Point,
        to: Point,
        width: f32,
        color: Color,
    ) -> Result<(), GeometryError> {
        let from = self.viewport.world_to_canvas(from)?;
        let to = self.viewport.world_to_canvas(to)?;
        surface.draw_line(from, to, width, color)
    }

    /// Move the prism center to a World point, then retrace and redraw
    pub fn move_to(&mut self, p: Point, surface: &mut dyn Surface) -> Result<Vec<TracePath>, GeometryError> {
        if let Err(e) = self.prism.move_to(p) {
            log::error!("Rejected prism move: {}", e);
            return Err(e);
        }
        Ok(self.redraw(surface))
    }

    /// Shift the prism by a ScreenPixel delta, then retrace and redraw
    pub fn apply_delta(&mut self, dx: f64, dy: f64, surface: &mut dyn Surface) -> Vec<TracePath> {
        self.prism.translate(self.viewport.screen_delta_to_world(dx, dy));
        self.redraw(surface)
    }

    /// Put the prism back where the scene started, then retrace and redraw
    pub fn recenter(&mut self, surface: &mut dyn Surface) -> Vec<TracePath> {
        self.prism.translate(self.home.as_vector() - self.prism.center().as_vector());
        self.redraw(surface)
    }

    /// True when a point lies on the prism
    ///
    /// Accepts ScreenPixel or CanvasPixel points, as delivered by the host.
    pub fn hit_test(&self, p: Point) -> Result<bool, GeometryError> {
        let world = match p.basis {
            Basis::ScreenPixel => self.viewport.screen_to_world(p)?,
            Basis::CanvasPixel => self.viewport.canvas_to_world(p)?,
            Basis::World => p,
        };
        self.prism.contains(world, self.tracer.config().interior_epsilon)
    }

    /// Layout box of the prism element after the latest move
    pub fn prism_layout(&self) -> Result<LayoutBox, GeometryError> {
        self.prism.layout_box(&self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawCommand, RecordingSurface, Vector2, DEFAULT_SPECTRUM};

    fn scene() -> Scene {
        let prism = Prism::new(Point::world(0.0, 0.0), 150.0).unwrap();
        let lights = Light::spectrum(
            Point::world(-300.0, -100.0),
            Vector2::from_angle(std::f64::consts::PI / 8.0),
            &DEFAULT_SPECTRUM,
        );
        Scene::new(Viewport::new(500.0, 500.0), prism, lights)
    }

    #[test]
    fn test_redraw_starts_with_full_clear() {
        let s = scene();
        let mut surface = RecordingSurface::new();
        s.redraw(&mut surface);
        assert_eq!(
            surface.commands()[0],
            DrawCommand::Clear(Rect::canvas(s.viewport()))
        );
    }

    #[test]
    fn test_redraw_draws_outline_paths_and_markers() {
        let s = scene();
        let mut surface = RecordingSurface::new();
        let paths = s.redraw(&mut surface);
        assert_eq!(paths.len(), 6);

        let segments: usize = paths.iter().map(|p| p.drawn_segments().count()).sum();
        let hits: usize = paths.iter().map(|p| p.hit_points().count()).sum();
        assert_eq!(surface.lines().count(), 3 + segments);
        assert_eq!(surface.fills().count(), hits);
    }

    #[test]
    fn test_style_hides_outline_and_markers() {
        let s = scene().with_style(SceneStyle {
            show_outline: false,
            show_hits: false,
            ..SceneStyle::default()
        });
        let mut surface = RecordingSurface::new();
        let paths = s.redraw(&mut surface);
        let segments: usize = paths.iter().map(|p| p.drawn_segments().count()).sum();
        assert_eq!(surface.lines().count(), segments);
        assert_eq!(surface.fills().count(), 0);
    }

    #[test]
    fn test_move_to_rejects_wrong_basis() {
        let mut s = scene();
        let mut surface = RecordingSurface::new();
        assert!(s.move_to(Point::screen(10.0, 10.0), &mut surface).is_err());
        assert_eq!(s.prism().center(), Point::world(0.0, 0.0));
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_apply_delta_flips_screen_y() {
        let mut s = scene();
        let mut surface = RecordingSurface::new();
        s.apply_delta(10.0, 20.0, &mut surface);
        assert_eq!(s.prism().center(), Point::world(10.0, -20.0));
    }

    #[test]
    fn test_recenter() {
        let mut s = scene();
        let mut surface = RecordingSurface::new();
        s.move_to(Point::world(80.0, 40.0), &mut surface).unwrap();
        s.recenter(&mut surface);
        assert_eq!(s.prism().center(), Point::world(0.0, 0.0));
    }

    #[test]
    fn test_hit_test() {
        let s = scene();
        // Canvas center is the prism center
        assert!(s.hit_test(Point::canvas(250.0, 250.0)).unwrap());
        assert!(s.hit_test(Point::screen(250.0, 250.0)).unwrap());
        assert!(!s.hit_test(Point::screen(10.0, 10.0)).unwrap());
    }
}
