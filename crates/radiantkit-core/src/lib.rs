//! # RadiantKit Core
//!
//! Core types shared across RadiantKit crates: floor-plan geometry and the
//! error hierarchy used by the layout, settings and rendering layers.

pub mod error;
pub mod geometry;

pub use error::{ConfigError, Error, LayoutError, RenderError, Result};
pub use geometry::{Bounds, Point, Room};
