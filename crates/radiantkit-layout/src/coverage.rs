//! Coverage and pipe length accounting for a generated layout.

use crate::serpentine::Layout;
use radiantkit_core::{Bounds, Point};
use serde::Serialize;

/// Total length of a polyline: the sum of distances between consecutive points.
pub fn calculate_pipe_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Summary statistics for a layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageStats {
    /// Room floor area in square meters
    pub room_area: f64,
    /// Area of the inset rectangle the pipe field spans
    pub covered_area: f64,
    pub coverage_percent: f64,
    /// Pipe length in meters
    pub total_length: f64,
    /// Pipe meters per square meter of room
    pub length_per_area: f64,
    pub point_count: usize,
}

impl CoverageStats {
    pub fn calculate(layout: &Layout) -> Self {
        let room = layout.room();
        let spacing = layout.grid().spacing();

        let usable_width = (room.width - 2.0 * spacing).max(0.0);
        let usable_height = (room.height - 2.0 * spacing).max(0.0);
        let covered_area = usable_width * usable_height;
        let room_area = room.area();
        let total_length = calculate_pipe_length(layout.points());

        Self {
            room_area,
            covered_area,
            coverage_percent: covered_area / room_area * 100.0,
            total_length,
            length_per_area: total_length / room_area,
            point_count: layout.len(),
        }
    }
}

/// Extent of the path on the floor plan.
pub fn path_extent(layout: &Layout) -> Bounds {
    Bounds::from_points(layout.points())
}
