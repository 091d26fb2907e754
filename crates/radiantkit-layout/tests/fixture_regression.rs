//! Regression tests against the persisted coordinate fixtures.

use radiantkit_layout::{
    calculate_pipe_length, CoverageStats, Orientation, SerpentineGenerator, SerpentineParameters,
};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
struct FixtureCase {
    width: f64,
    height: f64,
    spacing: f64,
    orientation: Orientation,
    expected_coords: Vec<(f64, f64)>,
    expected_length: f64,
}

fn load_fixtures() -> BTreeMap<String, FixtureCase> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/test_coordinates.json");
    let content = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

fn generate(case: &FixtureCase) -> radiantkit_layout::Layout {
    let params = SerpentineParameters::new(case.width, case.height, case.spacing);
    SerpentineGenerator::new(params).generate().unwrap()
}

#[test]
fn test_coordinate_sequences_match_fixtures() {
    let fixtures = load_fixtures();
    assert!(fixtures.contains_key("10x10_1m"));

    for (name, case) in &fixtures {
        let layout = generate(case);
        assert_eq!(
            layout.grid().orientation(),
            case.orientation,
            "{}: orientation",
            name
        );
        assert_eq!(
            layout.len(),
            case.expected_coords.len(),
            "{}: expected {} coordinates but got {}",
            name,
            case.expected_coords.len(),
            layout.len()
        );

        for (i, (actual, expected)) in layout.points().iter().zip(&case.expected_coords).enumerate() {
            assert!(
                (actual.x - expected.0).abs() < 1e-6 && (actual.y - expected.1).abs() < 1e-6,
                "{}: mismatch at position {}: expected {:?}, got ({}, {})",
                name,
                i,
                expected,
                actual.x,
                actual.y
            );
        }

        let length = calculate_pipe_length(layout.points());
        assert!(
            (length - case.expected_length).abs() < 1e-6,
            "{}: expected pipe length {}m but got {}m",
            name,
            case.expected_length,
            length
        );
    }
}

#[test]
fn test_documented_square_room_example() {
    let layout = SerpentineGenerator::new(SerpentineParameters::new(10.0, 10.0, 1.0))
        .generate()
        .unwrap();
    let stats = CoverageStats::calculate(&layout);

    assert_eq!(layout.grid().vertical_lines(), 8);
    assert_eq!(layout.grid().horizontal_lines(), 8);
    assert!((stats.covered_area - 64.0).abs() < 1e-9);
    assert!((stats.coverage_percent - 64.0).abs() < 1e-9);
}

#[test]
fn test_grid_alignment() {
    let fixtures = load_fixtures();
    let layout = generate(&fixtures["10x10_1m"]);
    let grid = layout.grid();

    for p in layout.points() {
        assert!(
            grid.x_positions().iter().any(|x| (x - p.x).abs() < 1e-9),
            "Point {},{} not on vertical grid line",
            p.x,
            p.y
        );
        assert!(
            grid.y_positions().iter().any(|y| (y - p.y).abs() < 1e-9),
            "Point {},{} not on horizontal grid line",
            p.x,
            p.y
        );
    }
}
