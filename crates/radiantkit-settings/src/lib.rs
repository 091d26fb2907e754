//! RadiantKit Settings Crate
//!
//! Handles application configuration: defaults, validation and persistence.

pub mod config;

pub use config::{Config, FileFormat, LayoutSettings, Orientation, RenderSettings};
