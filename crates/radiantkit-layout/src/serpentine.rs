//! Serpentine pipe layout generator.
//!
//! The pipe enters at the inset corner, climbs a supply riser along the
//! first station column, snakes back and forth through the remaining
//! columns, drops to the return line and runs back along it so that supply
//! and return both finish next to the manifold corner.

use crate::grid::{Grid, Orientation, DEFAULT_MAX_POINTS};
use crate::validation::validate_inputs;
use radiantkit_core::{LayoutError, Point, Room};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct SerpentineParameters {
    /// Room width along x in meters
    pub width: f64,
    /// Room height along y in meters
    pub height: f64,
    /// Distance between neighbouring pipe runs in meters
    pub spacing: f64,
    pub orientation: Orientation,
    /// Largest grid the generator will lay out
    pub max_points: usize,
}

impl SerpentineParameters {
    pub fn new(width: f64, height: f64, spacing: f64) -> Self {
        Self {
            width,
            height,
            spacing,
            orientation: Orientation::Auto,
            max_points: DEFAULT_MAX_POINTS,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    pub fn room(&self) -> Room {
        Room::new(self.width, self.height)
    }
}

/// A generated pipe layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    room: Room,
    grid: Grid,
    points: Vec<Point>,
    transition: usize,
}

impl Layout {
    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Ordered path points, one per grid station visited.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn end(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Index of the first point on the far station column, where supply
    /// turns into return.
    pub fn transition_index(&self) -> usize {
        self.transition
    }

    /// Supply half of the path, transition point included.
    pub fn supply(&self) -> &[Point] {
        &self.points[..=self.transition]
    }

    /// Return half of the path, transition point included.
    pub fn return_line(&self) -> &[Point] {
        &self.points[self.transition..]
    }
}

/// Appends points while dropping consecutive duplicates.
#[derive(Debug, Default)]
struct PathBuilder {
    points: Vec<Point>,
}

impl PathBuilder {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, p: Point) {
        if self.points.last() != Some(&p) {
            self.points.push(p);
        }
    }

    fn finish(self) -> Vec<Point> {
        self.points
    }
}

pub struct SerpentineGenerator {
    params: SerpentineParameters,
}

impl SerpentineGenerator {
    pub fn new(params: SerpentineParameters) -> Self {
        Self { params }
    }

    pub fn generate(&self) -> Result<Layout, LayoutError> {
        let p = &self.params;
        let room = p.room();

        validate_inputs(&room, p.spacing)?;
        let grid = Grid::build(&room, p.spacing, p.orientation, p.max_points)?;

        let points = trace_path(&grid);

        let far_column = grid.step_positions()[grid.run_count() - 1];
        let transition = points
            .iter()
            .position(|pt| grid.step_coordinate(pt) == far_column)
            .unwrap_or(points.len() - 1);

        info!(
            "Generated {} point layout for {}m x {}m room at {}m spacing ({} runs)",
            points.len(),
            room.width,
            room.height,
            p.spacing,
            grid.run_count()
        );

        Ok(Layout {
            room,
            grid,
            points,
            transition,
        })
    }
}

/// Walk the grid: riser, serpentine, drop, return line.
fn trace_path(grid: &Grid) -> Vec<Point> {
    let cols = grid.step_positions();
    let rows = grid.run_positions();
    let last_col = cols.len() - 1;
    let return_row = rows[0];
    let top = rows[rows.len() - 1];
    let field_bottom = rows[1];

    let mut path = PathBuilder::with_capacity(cols.len() * rows.len());

    // Supply riser up the first column, return row included
    for &v in rows {
        path.push(grid.to_point(cols[0], v));
    }

    for i in 1..cols.len() {
        let u = cols[i];
        if i % 2 == 1 {
            path.push(grid.to_point(u, top));
            for &v in rows[1..].iter().rev() {
                path.push(grid.to_point(u, v));
            }
            if i < last_col {
                path.push(grid.to_point(cols[i + 1], field_bottom));
            }
        } else {
            for &v in &rows[1..] {
                path.push(grid.to_point(u, v));
            }
            if i < last_col {
                path.push(grid.to_point(cols[i + 1], top));
            }
        }
    }

    // Drop from the last column onto the return row
    path.push(grid.to_point(cols[last_col], return_row));

    // Return line stops one station short of the supply riser
    for &u in cols[1..last_col].iter().rev() {
        path.push(grid.to_point(u, return_row));
    }

    let points = path.finish();
    debug!("Traced {} path points", points.len());
    points
}

/// Convenience wrapper around [`SerpentineGenerator`].
pub fn generate_layout(room: &Room, spacing: f64) -> Result<Layout, LayoutError> {
    SerpentineGenerator::new(SerpentineParameters::new(room.width, room.height, spacing)).generate()
}
