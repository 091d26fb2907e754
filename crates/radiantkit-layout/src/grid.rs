//! Inset station grid the serpentine is laid on.
//!
//! The grid is described in a canonical frame: the *step* axis is the one
//! the serpentine advances along, the *run* axis is the one each straight
//! pipe run spans. [`Orientation`] decides which room axis plays which role.

use radiantkit_core::{LayoutError, Point, Room};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Slack added before flooring so exact multiples such as 9.6 / 0.2 survive
/// floating-point rounding.
const STATION_EPSILON: f64 = 1e-9;

/// Default cap on grid stations, and so on path points
pub const DEFAULT_MAX_POINTS: usize = 2_000_000;

/// Direction of the straight pipe runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Runs span the shorter room side (vertical on a tie)
    #[default]
    Auto,
    /// Runs parallel to y, stepping along x
    Vertical,
    /// Runs parallel to x, stepping along y
    Horizontal,
}

impl Orientation {
    /// Resolve `Auto` against a room; never returns `Auto`.
    pub fn resolve(self, room: &Room) -> Self {
        match self {
            Self::Auto if room.width < room.height => Self::Horizontal,
            Self::Auto => Self::Vertical,
            other => other,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Vertical => write!(f, "vertical"),
            Self::Horizontal => write!(f, "horizontal"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "vertical" | "v" => Ok(Self::Vertical),
            "horizontal" | "h" => Ok(Self::Horizontal),
            _ => Err(format!("Unknown orientation: {}", s)),
        }
    }
}

/// Number of stations spaced `spacing` apart that fit in `extent` once an
/// inset of one spacing is removed from both ends.
pub fn station_count(extent: f64, spacing: f64) -> usize {
    let usable = extent - 2.0 * spacing;
    if usable < -STATION_EPSILON {
        return 0;
    }
    (usable / spacing + STATION_EPSILON).floor() as usize + 1
}

/// Station grid inside the inset boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    orientation: Orientation,
    spacing: f64,
    step_positions: Vec<f64>,
    run_positions: Vec<f64>,
}

impl Grid {
    /// Build the grid for `room`.
    ///
    /// The step axis is trimmed to an even number of stations so the last
    /// run finishes on the same side as the return line. Grids with more
    /// than `max_points` stations are rejected before anything is allocated.
    pub fn build(
        room: &Room,
        spacing: f64,
        orientation: Orientation,
        max_points: usize,
    ) -> Result<Self, LayoutError> {
        let orientation = orientation.resolve(room);
        let (step_extent, run_extent) = match orientation {
            Orientation::Horizontal => (room.height, room.width),
            _ => (room.width, room.height),
        };

        let mut step_stations = station_count(step_extent, spacing);
        let run_stations = station_count(run_extent, spacing);

        if step_stations < 2 || run_stations < 2 {
            return Err(LayoutError::RoomTooSmall {
                step_stations,
                run_stations,
            });
        }

        if step_stations % 2 != 0 {
            step_stations -= 1;
        }

        let points = step_stations
            .checked_mul(run_stations)
            .unwrap_or(usize::MAX);
        if points > max_points {
            return Err(LayoutError::TooManyPoints {
                points,
                limit: max_points,
            });
        }

        let positions = |n: usize| -> Vec<f64> {
            (0..n).map(|i| spacing + i as f64 * spacing).collect()
        };

        let grid = Self {
            orientation,
            spacing,
            step_positions: positions(step_stations),
            run_positions: positions(run_stations),
        };

        debug!(
            "Grid {}: {} step stations, {} run stations, spacing {}m",
            orientation, step_stations, run_stations, spacing
        );

        Ok(grid)
    }

    /// Resolved orientation (`Vertical` or `Horizontal`)
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Stations along the step axis, one per pipe run.
    pub fn step_positions(&self) -> &[f64] {
        &self.step_positions
    }

    /// Stations along the run axis; the first one carries the return line.
    pub fn run_positions(&self) -> &[f64] {
        &self.run_positions
    }

    /// Runs the serpentine lays, equal to the step station count.
    pub fn run_count(&self) -> usize {
        self.step_positions.len()
    }

    /// Rows of the serpentine field, excluding the return line station.
    pub fn field_rows(&self) -> usize {
        self.run_positions.len() - 1
    }

    pub fn vertical_lines(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => self.field_rows(),
            _ => self.run_count(),
        }
    }

    pub fn horizontal_lines(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => self.run_count(),
            _ => self.field_rows(),
        }
    }

    /// Station coordinates along x.
    pub fn x_positions(&self) -> &[f64] {
        match self.orientation {
            Orientation::Horizontal => &self.run_positions,
            _ => &self.step_positions,
        }
    }

    /// Station coordinates along y.
    pub fn y_positions(&self) -> &[f64] {
        match self.orientation {
            Orientation::Horizontal => &self.step_positions,
            _ => &self.run_positions,
        }
    }

    /// Map canonical (step, run) coordinates onto the floor plan.
    pub fn to_point(&self, step: f64, run: f64) -> Point {
        match self.orientation {
            Orientation::Horizontal => Point::new(run, step),
            _ => Point::new(step, run),
        }
    }

    /// Step-axis coordinate of a floor-plan point.
    pub fn step_coordinate(&self, p: &Point) -> f64 {
        match self.orientation {
            Orientation::Horizontal => p.y,
            _ => p.x,
        }
    }
}
