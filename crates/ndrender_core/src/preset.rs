//! Preset serialization
//!
//! A preset is everything needed to start a session: the shape template,
//! projection settings and rotation schedule. Presets are stored as RON.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::shape::{DEFAULT_PROJECTION_CONSTANT, DEFAULT_VIEW_DISTANCE};
use crate::{RotationSchedule, Session, ShapeError, ShapeTemplate};

fn default_projection_constant() -> f32 {
    DEFAULT_PROJECTION_CONSTANT
}

fn default_view_distance() -> f32 {
    DEFAULT_VIEW_DISTANCE
}

/// A serializable session description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Preset name (for display/debugging)
    pub name: String,
    /// Shape to build
    pub shape: ShapeTemplate,
    /// Planes to rotate in every frame
    #[serde(default)]
    pub schedule: RotationSchedule,
    /// Camera distance to the hyperplane of projection
    #[serde(default = "default_projection_constant")]
    pub projection_constant: f32,
    /// Viewer distance used for depth sorting
    #[serde(default = "default_view_distance")]
    pub view_distance: f32,
    /// Sort faces back to front every frame
    #[serde(default)]
    pub depth_sort: bool,
}

impl Preset {
    /// Create a preset with default projection and schedule
    pub fn new(name: impl Into<String>, shape: ShapeTemplate) -> Self {
        Self {
            name: name.into(),
            shape,
            schedule: RotationSchedule::default(),
            projection_constant: DEFAULT_PROJECTION_CONSTANT,
            view_distance: DEFAULT_VIEW_DISTANCE,
            depth_sort: false,
        }
    }

    /// Load a preset from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PresetLoadError> {
        let contents = fs::read_to_string(path)?;
        let preset = ron::from_str(&contents)?;
        Ok(preset)
    }

    /// Save a preset to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PresetSaveError> {
        // Struct names would break the tagged shape template on reload
        let pretty = ron::ser::PrettyConfig::new().enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Replace the rotation schedule
    pub fn with_schedule(mut self, schedule: RotationSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Set the camera distance to the hyperplane of projection
    pub fn with_projection_constant(mut self, k: f32) -> Self {
        self.projection_constant = k;
        self
    }

    /// Enable back-to-front sorting, seen from `view_distance`
    pub fn with_depth_sort(mut self, view_distance: f32) -> Self {
        self.depth_sort = true;
        self.view_distance = view_distance;
        self
    }

    /// Build the shape and wrap it in a session
    pub fn create_session(&self) -> Result<Session, ShapeError> {
        let shape = self
            .shape
            .create_shape(self.projection_constant)?
            .with_view_distance(self.view_distance)
            .with_depth_sort(self.depth_sort);
        log::info!("Starting preset '{}' ({}D {})", self.name, shape.dimensions(), shape.name());
        Ok(Session::new(shape, self.schedule.clone()))
    }
}

/// Error loading a preset
#[derive(Debug)]
pub enum PresetLoadError {
    /// IO error reading file
    Io(io::Error),
    /// RON parsing error
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for PresetLoadError {
    fn from(e: io::Error) -> Self {
        PresetLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for PresetLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        PresetLoadError::Parse(e)
    }
}

impl std::fmt::Display for PresetLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetLoadError::Io(e) => write!(f, "IO error: {}", e),
            PresetLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for PresetLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PresetLoadError::Io(e) => Some(e),
            PresetLoadError::Parse(e) => Some(e),
        }
    }
}

/// Error saving a preset
#[derive(Debug)]
pub enum PresetSaveError {
    /// IO error writing file
    Io(io::Error),
    /// RON serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for PresetSaveError {
    fn from(e: io::Error) -> Self {
        PresetSaveError::Io(e)
    }
}

impl From<ron::Error> for PresetSaveError {
    fn from(e: ron::Error) -> Self {
        PresetSaveError::Serialize(e)
    }
}

impl std::fmt::Display for PresetSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresetSaveError::Io(e) => write!(f, "IO error: {}", e),
            PresetSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for PresetSaveError {}
