//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for building a prism scene from code or config.

use refract_core::{
    Basis, Color, GeometryError, Light, Point, Prism, Scene, SceneStyle, TraceConfig, Tracer, Vector2,
    Viewport, DEFAULT_SPECTRUM,
};

use crate::config::AppConfig;

/// Builder for constructing prism scenes
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new(Viewport::new(500.0, 500.0))
///     .with_prism(Point::world(0.0, 0.0), 150.0)
///     .with_light_origin(Point::world(-300.0, -100.0))
///     .with_single_ray(1.55, Color::YELLOW)
///     .build()?;
/// ```
pub struct SceneBuilder {
    viewport: Viewport,
    prism_center: Point,
    edge_length: f64,
    light_origin: Option<Point>,
    angle: f64,
    bands: Vec<(f64, Color)>,
    trace: TraceConfig,
    style: SceneStyle,
}

impl SceneBuilder {
    /// Create a scene builder with the default prism and spectrum
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            prism_center: Point::world(0.0, 0.0),
            edge_length: 150.0,
            light_origin: None,
            angle: std::f64::consts::FRAC_PI_8,
            bands: DEFAULT_SPECTRUM.to_vec(),
            trace: TraceConfig::default(),
            style: SceneStyle::default(),
        }
    }

    /// Create a scene builder from application config
    pub fn from_config(config: &AppConfig) -> Self {
        let viewport = config.viewport();
        let [cx, cy] = config.prism.center;
        Self::new(viewport)
            .with_prism(Point::world(cx, cy), config.prism.edge_length)
            .with_light_origin(config.light.origin_for(&viewport))
            .with_angle(config.light.angle)
            .with_spectrum(config.light.bands())
            .with_trace_config(config.trace)
            .with_style(config.rendering.scene_style(config.light.line_width))
    }

    /// Place the prism (World center) and set its edge length
    pub fn with_prism(mut self, center: Point, edge_length: f64) -> Self {
        self.prism_center = center;
        self.edge_length = edge_length;
        self
    }

    /// Set the shared origin of every ray (World basis)
    pub fn with_light_origin(mut self, origin: Point) -> Self {
        self.light_origin = Some(origin);
        self
    }

    /// Set the shared ray angle in radians
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Trace one ray per `(index, color)` pair
    pub fn with_spectrum(mut self, bands: Vec<(f64, Color)>) -> Self {
        self.bands = bands;
        self
    }

    /// Trace a single ray
    pub fn with_single_ray(mut self, index: f64, color: Color) -> Self {
        self.bands = vec![(index, color)];
        self
    }

    pub fn with_trace_config(mut self, trace: TraceConfig) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_style(mut self, style: SceneStyle) -> Self {
        self.style = style;
        self
    }

    /// Build the scene
    ///
    /// Fails when the prism center or light origin is not in World basis.
    pub fn build(self) -> Result<Scene, GeometryError> {
        let prism = Prism::new(self.prism_center, self.edge_length)?;
        let origin = match self.light_origin {
            Some(origin) => origin.expect_basis(Basis::World)?,
            None => Point::world(-self.viewport.width / 2.0 - 10.0, -self.viewport.height / 8.0),
        };
        let lights = Light::spectrum(origin, Vector2::from_angle(self.angle), &self.bands);

        log::info!(
            "Built scene: prism L={} at {}, {} ray(s) from {}",
            self.edge_length,
            prism.center(),
            lights.len(),
            origin
        );

        Ok(Scene::new(self.viewport, prism, lights)
            .with_tracer(Tracer::new(self.trace))
            .with_style(self.style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(500.0, 500.0)
    }

    #[test]
    fn test_default_scene() {
        let scene = SceneBuilder::new(viewport()).build().unwrap();
        assert_eq!(scene.lights().len(), 6);
        assert_eq!(scene.prism().edge_length(), 150.0);
        assert_eq!(scene.lights()[0].origin(), Point::world(-260.0, -62.5));
    }

    #[test]
    fn test_single_ray_scene() {
        let scene = SceneBuilder::new(viewport())
            .with_light_origin(Point::world(-300.0, -100.0))
            .with_single_ray(1.55, Color::YELLOW)
            .build()
            .unwrap();
        assert_eq!(scene.lights().len(), 1);
        let paths = scene.trace_all();
        assert_eq!(paths[0].segments.len(), 2);
        assert!(paths[0].is_escaped());
    }

    #[test]
    fn test_prism_placement() {
        let scene = SceneBuilder::new(viewport())
            .with_prism(Point::world(20.0, -5.0), 200.0)
            .build()
            .unwrap();
        assert_eq!(scene.prism().center(), Point::world(20.0, -5.0));
        assert_eq!(scene.prism().edge_length(), 200.0);
    }

    #[test]
    fn test_non_world_inputs_rejected() {
        assert!(SceneBuilder::new(viewport())
            .with_prism(Point::screen(0.0, 0.0), 150.0)
            .build()
            .is_err());
        assert!(SceneBuilder::new(viewport())
            .with_light_origin(Point::canvas(0.0, 0.0))
            .build()
            .is_err());
    }

    #[test]
    fn test_from_config() {
        let mut config = AppConfig::default();
        config.light.origin = Some([-300.0, -100.0]);
        config.rendering.show_hits = false;
        config.trace.max_bounces = 4;
        let scene = SceneBuilder::from_config(&config).build().unwrap();
        assert_eq!(scene.lights()[0].origin(), Point::world(-300.0, -100.0));
        assert!(!scene.style().show_hits);
        assert_eq!(scene.style().line_width, 2.0);
    }
}
