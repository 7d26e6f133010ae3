//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`REFRACT_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use refract_core::{Color, Point, SceneStyle, TraceConfig, Viewport, DEFAULT_SPECTRUM};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Prism configuration
    #[serde(default)]
    pub prism: PrismConfig,
    /// Light configuration
    #[serde(default)]
    pub light: LightConfig,
    /// Tracer tolerances and limits
    #[serde(default)]
    pub trace: TraceConfig,
    /// Pointer interaction configuration
    #[serde(default)]
    pub interaction: InteractionConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`REFRACT_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // REFRACT_PRISM__EDGE_LENGTH=200 -> prism.edge_length = 200
        figment = figment.merge(Env::prefixed("REFRACT_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Canvas viewport sized to the window
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.window.width as f64, self.window.height as f64)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Refract - Prism Ray Tracer".to_string(),
            width: 500,
            height: 500,
            vsync: true,
        }
    }
}

/// Prism configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    /// Edge length in pixels
    pub edge_length: f64,
    /// Starting center in World coordinates [x, y]
    pub center: [f64; 2],
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            edge_length: 150.0,
            center: [0.0, 0.0],
        }
    }
}

/// One ray of the spectrum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumBand {
    /// Refractive index of the prism for this ray
    pub index: f64,
    /// Stroke color [r, g, b, a]
    pub color: [f32; 4],
}

/// Light configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    /// Ray origin in World coordinates [x, y]; just off the left edge when unset
    pub origin: Option<[f64; 2]>,
    /// Ray angle in radians, counter-clockwise from +x
    pub angle: f64,
    /// Stroke width of ray segments
    pub line_width: f32,
    /// Rays traced together, one per refractive index
    pub spectrum: Vec<SpectrumBand>,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            origin: None,
            angle: std::f64::consts::FRAC_PI_8,
            line_width: 2.0,
            spectrum: DEFAULT_SPECTRUM
                .iter()
                .map(|&(index, color)| SpectrumBand { index, color: color.to_array() })
                .collect(),
        }
    }
}

impl LightConfig {
    /// Ray origin for a canvas, defaulting to `(-W/2 - 10, -H/8)`
    pub fn origin_for(&self, viewport: &Viewport) -> Point {
        match self.origin {
            Some([x, y]) => Point::world(x, y),
            None => Point::world(-viewport.width / 2.0 - 10.0, -viewport.height / 8.0),
        }
    }

    /// The spectrum as `(index, color)` pairs
    pub fn bands(&self) -> Vec<(f64, Color)> {
        self.spectrum
            .iter()
            .map(|band| (band.index, Color::from(band.color)))
            .collect()
    }
}

/// Pointer interaction configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Minimum milliseconds between applied drags (0 = once per frame)
    pub drag_interval_ms: u64,
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Draw the prism outline
    pub show_outline: bool,
    /// Outline color [r, g, b, a]
    pub outline_color: [f32; 4],
    /// Mark every boundary hit
    pub show_hits: bool,
    /// Hit marker radius in pixels
    pub marker_size: f32,
    /// Triangles per hit marker
    pub circle_segments: u32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            show_outline: true,
            outline_color: [1.0, 1.0, 1.0, 1.0],
            show_hits: true,
            marker_size: 5.0,
            circle_segments: 16,
        }
    }
}

impl RenderingConfig {
    /// Scene style from rendering options and the light's stroke width
    pub fn scene_style(&self, line_width: f32) -> SceneStyle {
        SceneStyle {
            line_width,
            show_outline: self.show_outline,
            outline_color: Color::from(self.outline_color),
            show_hits: self.show_hits,
            marker_size: self.marker_size,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace), used when RUST_LOG is unset
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 500);
        assert_eq!(config.prism.edge_length, 150.0);
        assert_eq!(config.light.spectrum.len(), 6);
        assert_eq!(config.trace.max_bounces, 16);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("edge_length"));
        assert!(toml.contains("max_bounces"));
    }

    #[test]
    fn test_default_origin_follows_canvas() {
        let light = LightConfig::default();
        let origin = light.origin_for(&Viewport::new(500.0, 500.0));
        assert_eq!(origin, Point::world(-260.0, -62.5));

        let fixed = LightConfig { origin: Some([-300.0, -100.0]), ..LightConfig::default() };
        assert_eq!(fixed.origin_for(&Viewport::new(500.0, 500.0)), Point::world(-300.0, -100.0));
    }

    #[test]
    fn test_bands_match_default_spectrum() {
        let bands = LightConfig::default().bands();
        assert_eq!(bands, DEFAULT_SPECTRUM.to_vec());
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: AppConfig = toml::from_str("[prism]\nedge_length = 220.0\n").unwrap();
        assert_eq!(config.prism.edge_length, 220.0);
        assert_eq!(config.prism.center, [0.0, 0.0]);
        assert_eq!(config.window.height, 500);
    }
}
