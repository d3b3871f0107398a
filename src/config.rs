//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`NDR_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use ndrender_core::{
    ComplexGraph, Hypertorus, Preset, PresetLoadError, RotationSchedule, ShapeTemplate,
    DEFAULT_PROJECTION_CONSTANT, DEFAULT_VIEW_DISTANCE,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shape configuration
    #[serde(default)]
    pub shape: ShapeConfig,
    /// Projection configuration
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,
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
    /// 3. Environment variables (`NDR_*`)
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

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // NDR_SHAPE__DIMENSIONS=5 -> shape.dimensions = 5
        figment = figment.merge(Env::prefixed("NDR_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Shape template described by the `shape` section
    pub fn shape_template(&self) -> ShapeTemplate {
        let shape = &self.shape;
        match shape.kind {
            ShapeKind::Hypercube => ShapeTemplate::hypercube(shape.dimensions),
            ShapeKind::Hypertorus => ShapeTemplate::hypertorus(shape.dimensions, shape.smoothness),
            ShapeKind::ComplexGraph => {
                ShapeTemplate::complex_graph(shape.grid_density, shape.grid_view_size)
            }
        }
    }

    /// The preset to run
    ///
    /// A preset file named in `session.preset` replaces the shape, projection
    /// and schedule settings. Otherwise the preset is assembled from them.
    pub fn preset(&self) -> Result<Preset, PresetLoadError> {
        if let Some(path) = &self.session.preset {
            log::info!("Loading preset from {}", path);
            return Preset::load(path);
        }

        Ok(Preset {
            name: format!("{:?}", self.shape.kind),
            shape: self.shape_template(),
            schedule: self.animation.schedule.clone(),
            projection_constant: self.projection.constant,
            view_distance: self.projection.view_distance,
            depth_sort: self.projection.depth_sort,
        })
    }
}

/// Shape family selected in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    #[default]
    Hypercube,
    Hypertorus,
    ComplexGraph,
}

/// Shape configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeConfig {
    /// Shape family
    pub kind: ShapeKind,
    /// Number of dimensions (hypercube and hypertorus)
    pub dimensions: usize,
    /// Samples per circle (hypertorus)
    pub smoothness: usize,
    /// Samples per grid side (complex graph)
    pub grid_density: usize,
    /// Side length of the sampled square (complex graph)
    pub grid_view_size: f32,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            kind: ShapeKind::Hypercube,
            dimensions: 4,
            smoothness: Hypertorus::DEFAULT_SMOOTHNESS,
            grid_density: ComplexGraph::DEFAULT_DENSITY,
            grid_view_size: ComplexGraph::DEFAULT_VIEW_SIZE,
        }
    }
}

/// Projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Camera distance to the hyperplane of projection (greater than 1)
    pub constant: f32,
    /// Viewer distance along +Z used for depth sorting
    pub view_distance: f32,
    /// Sort faces back to front every frame
    pub depth_sort: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            constant: DEFAULT_PROJECTION_CONSTANT,
            view_distance: DEFAULT_VIEW_DISTANCE,
            depth_sort: false,
        }
    }
}

/// Animation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Number of frames the headless driver runs
    pub frames: u64,
    /// Target time between frames in milliseconds
    pub frame_interval_ms: u64,
    /// Rotation planes and angular velocities (radians per second)
    #[serde(default)]
    pub schedule: RotationSchedule,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            frame_interval_ms: 16,
            schedule: RotationSchedule::default(),
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Optional RON preset path
    #[serde(default)]
    pub preset: Option<String>,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
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
        assert_eq!(config.shape.kind, ShapeKind::Hypercube);
        assert_eq!(config.shape.dimensions, 4);
        assert_eq!(config.projection.constant, 3.0);
        assert_eq!(config.animation.frames, 600);
        assert!(config.session.preset.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("kind = \"hypercube\""));
        assert!(toml.contains("angular_velocity"));

        let parsed: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.animation.schedule, RotationSchedule::default());
    }

    #[test]
    fn test_partial_sections_use_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [shape]
            kind = "complex_graph"
            dimensions = 4
            smoothness = 10
            grid_density = 20
            grid_view_size = 2.0
            "#,
        )
        .unwrap();
        assert_eq!(config.shape_template(), ShapeTemplate::complex_graph(20, 2.0));
        assert_eq!(config.projection.view_distance, 10.0);
    }

    #[test]
    fn test_preset_from_sections() {
        let mut config = AppConfig::default();
        config.shape.kind = ShapeKind::Hypertorus;
        config.shape.dimensions = 5;
        config.projection.depth_sort = true;

        let preset = config.preset().unwrap();
        assert_eq!(preset.shape, ShapeTemplate::hypertorus(5, 10));
        assert!(preset.depth_sort);
        assert_eq!(preset.schedule, RotationSchedule::default());
    }

    #[test]
    fn test_missing_preset_file() {
        let mut config = AppConfig::default();
        config.session.preset = Some("/nonexistent/ndrender.ron".to_string());
        assert!(matches!(config.preset(), Err(PresetLoadError::Io(_))));
    }
}
