//! # RadiantKit Layout
//!
//! Pure computation of serpentine radiant-heating pipe layouts.
//!
//! - **Grid**: inset station grid and run orientation
//! - **Serpentine**: supply riser, back-and-forth runs and return line
//! - **Coverage**: pipe length, covered area and coverage percentage
//! - **Validation**: dimension checks and non-fatal advisories
//!
//! Nothing in this crate performs I/O; renderers and the CLI consume the
//! [`Layout`] and [`CoverageStats`] it produces.

pub mod coverage;
pub mod grid;
pub mod serpentine;
pub mod validation;

pub use coverage::{calculate_pipe_length, path_extent, CoverageStats};
pub use grid::{station_count, Grid, Orientation, DEFAULT_MAX_POINTS};
pub use serpentine::{generate_layout, Layout, SerpentineGenerator, SerpentineParameters};
pub use validation::{advisories, validate_inputs, Advisory, DEFAULT_MIN_PRACTICAL_SPACING};
