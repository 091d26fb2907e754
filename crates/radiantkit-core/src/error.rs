//! Error handling for RadiantKit
//!
//! Provides error types for every layer of the application:
//! - Layout errors (room/spacing validation, grid construction)
//! - Render errors (SVG output)
//! - Config errors (settings files)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Layout error type
///
/// Raised before any path is computed when the room or spacing cannot
/// produce a serpentine layout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A room dimension or the spacing is unusable
    #[error("Invalid dimension '{name}' = {value}: {reason}")]
    InvalidDimension {
        /// Which input was rejected (`width`, `height` or `spacing`).
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why it was rejected.
        reason: String,
    },

    /// The inset grid cannot hold at least two stations on each axis
    #[error("Room too small for specified spacing: {step_stations} x {run_stations} stations (need at least 2 x 2)")]
    RoomTooSmall {
        /// Stations available along the step axis.
        step_stations: usize,
        /// Stations available along the run axis.
        run_stations: usize,
    },

    /// The grid would hold more stations than the configured limit
    #[error("Layout needs {points} grid stations, more than the limit of {limit}")]
    TooManyPoints {
        /// Stations the grid would need; `usize::MAX` on overflow.
        points: usize,
        /// Configured maximum.
        limit: usize,
    },
}

impl LayoutError {
    /// Create an invalid dimension error
    pub fn invalid_dimension(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        LayoutError::InvalidDimension {
            name,
            value,
            reason: reason.into(),
        }
    }
}

/// Render error type
#[derive(Error, Debug)]
pub enum RenderError {
    /// Nothing to draw
    #[error("Layout has {points} points, at least 2 are needed to render")]
    InsufficientPoints {
        /// Number of points in the layout.
        points: usize,
    },

    /// Output could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Destination path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Configuration error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The file extension is neither `.json` nor `.toml`
    #[error("Config file must be .json or .toml: {path}")]
    UnsupportedFormat {
        /// Offending path.
        path: String,
    },

    /// The file content could not be parsed
    #[error("Invalid {format} config: {reason}")]
    Parse {
        /// `JSON` or `TOML`.
        format: &'static str,
        /// Parser message.
        reason: String,
    },

    /// A value failed validation
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting {
        /// Dotted key of the setting.
        key: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Main error type for RadiantKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Render error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Config error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// Check if this is a render error
    pub fn is_render_error(&self) -> bool {
        matches!(self, Error::Render(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
