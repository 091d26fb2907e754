//! Configuration and settings management for RadiantKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Layout defaults (spacing, orientation, practical spacing limit)
//! - Render preferences (output file, animation threshold and timing)

use radiantkit_core::{ConfigError, Error, Result};
pub use radiantkit_layout::Orientation;
use radiantkit_layout::{DEFAULT_MAX_POINTS, DEFAULT_MIN_PRACTICAL_SPACING};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Supported config file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            }
            .into()),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Layout defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Room width in meters; prompted for when absent
    pub width: Option<f64>,
    /// Room height in meters; prompted for when absent
    pub height: Option<f64>,
    /// Pipe spacing in meters; prompted for when absent
    pub spacing: Option<f64>,
    /// Run direction
    pub orientation: Orientation,
    /// Spacing below this triggers a confirmation prompt
    pub min_practical_spacing: f64,
    /// Largest grid (in stations) a layout may use
    pub max_points: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            spacing: None,
            orientation: Orientation::Auto,
            min_practical_spacing: DEFAULT_MIN_PRACTICAL_SPACING,
            max_points: DEFAULT_MAX_POINTS,
        }
    }
}

/// Render preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Where the SVG is written
    pub output_path: PathBuf,
    /// Rooms at or above this area (m²) are drawn statically
    pub animation_area_threshold: f64,
    /// Frames held before the first and after the last segment
    pub pause_frames: usize,
    /// Total animation length the frame interval is derived from
    pub target_duration_ms: u64,
    pub min_interval_ms: u64,
    pub max_interval_ms: u64,
    /// Points highlighted behind the installation head
    pub trail_length: usize,
    /// Drawing scale
    pub pixels_per_meter: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("radiant_layout.svg"),
            animation_area_threshold: 600.0,
            pause_frames: 20,
            target_duration_ms: 10_000,
            min_interval_ms: 5,
            max_interval_ms: 30,
            trail_length: 5,
            pixels_per_meter: 50.0,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Layout defaults
    pub layout: LayoutSettings,
    /// Render preferences
    pub render: RenderSettings,
}

fn invalid(key: &str, reason: &str) -> Error {
    ConfigError::InvalidSetting {
        key: key.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

fn check_dimension(key: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => Err(invalid(key, "must be > 0")),
        _ => Ok(()),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location: `<config dir>/radiantkit/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("radiantkit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
                format: format.name(),
                reason: e.to_string(),
            })?,
            FileFormat::Toml => toml::from_str(&content).map_err(|e| ConfigError::Parse {
                format: format.name(),
                reason: e.to_string(),
            })?,
        };

        config.validate()?;
        debug!("Loaded {} config from {}", format, path.display());
        Ok(config)
    }

    /// Load `path` if given, else the default location if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(default) if default.exists() => Self::load_from_file(&default),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let format = FileFormat::from_path(path)?;
        let content = match format {
            FileFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?,
            FileFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| Error::other(format!("Failed to serialize config: {}", e)))?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        check_dimension("layout.width", self.layout.width)?;
        check_dimension("layout.height", self.layout.height)?;
        check_dimension("layout.spacing", self.layout.spacing)?;

        let min_spacing = self.layout.min_practical_spacing;
        if min_spacing.is_nan() || min_spacing < 0.0 {
            return Err(invalid("layout.min_practical_spacing", "must be >= 0"));
        }

        if self.layout.max_points == 0 {
            return Err(invalid("layout.max_points", "must be > 0"));
        }

        let render = &self.render;
        if render.animation_area_threshold.is_nan() || render.animation_area_threshold <= 0.0 {
            return Err(invalid("render.animation_area_threshold", "must be > 0"));
        }

        if render.target_duration_ms == 0 {
            return Err(invalid("render.target_duration_ms", "must be > 0"));
        }

        if render.min_interval_ms == 0 {
            return Err(invalid("render.min_interval_ms", "must be > 0"));
        }

        if render.min_interval_ms > render.max_interval_ms {
            return Err(invalid(
                "render.max_interval_ms",
                "must not be smaller than render.min_interval_ms",
            ));
        }

        if !(render.pixels_per_meter.is_finite() && render.pixels_per_meter > 0.0) {
            return Err(invalid("render.pixels_per_meter", "must be > 0"));
        }

        if render.output_path.as_os_str().is_empty() {
            return Err(invalid("render.output_path", "must not be empty"));
        }

        Ok(())
    }
}
