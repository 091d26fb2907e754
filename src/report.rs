//! Console report of a generated layout.

use radiantkit_layout::{path_extent, CoverageStats, Layout};
use radiantkit_visualizer::{AnimationPlan, RenderMode};
use std::fmt;

/// Statistics block printed after a layout is generated.
pub struct Report<'a> {
    layout: &'a Layout,
    stats: CoverageStats,
}

impl<'a> Report<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self {
            layout,
            stats: CoverageStats::calculate(layout),
        }
    }

    pub fn stats(&self) -> &CoverageStats {
        &self.stats
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let room = self.layout.room();
        let grid = self.layout.grid();
        let stats = &self.stats;

        writeln!(f, "Room Configuration:")?;
        writeln!(f, "Room dimensions: {}m x {}m", room.width, room.height)?;
        writeln!(f, "Room area: {:.1}m²", stats.room_area)?;
        writeln!(f, "Pipe spacing: {}m", grid.spacing())?;
        writeln!(f, "Run orientation: {}", grid.orientation())?;

        writeln!(f, "\nGrid Information:")?;
        writeln!(f, "Vertical lines: {}", grid.vertical_lines())?;
        writeln!(f, "Horizontal lines: {}", grid.horizontal_lines())?;
        writeln!(f, "Grid spacing: {}m", grid.spacing())?;

        writeln!(f, "\nCoverage Information:")?;
        writeln!(f, "Room area: {:.2}m²", stats.room_area)?;
        writeln!(f, "Covered area: {:.2}m²", stats.covered_area)?;
        writeln!(f, "Coverage percentage: {:.1}%", stats.coverage_percent)?;

        writeln!(f, "\nPipe Information:")?;
        writeln!(f, "Total pipe length: {:.2}m", stats.total_length)?;
        writeln!(f, "Pipe length per m² of room: {:.2}m/m²", stats.length_per_area)?;

        writeln!(f, "\nPath Information:")?;
        writeln!(f, "Generated {} coordinate points", stats.point_count)?;
        if let (Some(start), Some(end)) = (self.layout.start(), self.layout.end()) {
            writeln!(f, "Path starts at: ({:.2}, {:.2})", start.x, start.y)?;
            writeln!(f, "Path ends at: ({:.2}, {:.2})", end.x, end.y)?;
        }
        let extent = path_extent(self.layout);
        if extent.is_valid() {
            writeln!(
                f,
                "Coverage: x range [{:.2}, {:.2}], y range [{:.2}, {:.2}]",
                extent.min_x, extent.max_x, extent.min_y, extent.max_y
            )?;
        }
        Ok(())
    }
}

/// One-line notice of which rendering the room gets.
pub fn render_notice(mode: RenderMode, area: f64, threshold: f64) -> String {
    match mode {
        RenderMode::Static => format!(
            "Room area ({:.1}m²) is at or above {}m². Showing static layout.",
            area, threshold
        ),
        RenderMode::Animated => format!("Room area ({:.1}m²). Showing animated layout.", area),
    }
}

/// Timing summary of an animated rendering.
pub struct AnimationSummary<'a>(pub &'a AnimationPlan);

impl fmt::Display for AnimationSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;
        writeln!(f, "Animation settings:")?;
        writeln!(f, "Total frames: {}", plan.total_frames())?;
        writeln!(f, "Frame interval: {:.1}ms", plan.interval_ms())?;
        writeln!(f, "Total duration: {:.1} seconds", plan.duration_secs())
    }
}
