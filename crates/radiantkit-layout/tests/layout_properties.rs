//! Property tests for the serpentine generator.

use proptest::prelude::*;
use radiantkit_core::{LayoutError, Room};
use radiantkit_layout::{
    calculate_pipe_length, CoverageStats, Layout, Orientation, SerpentineGenerator,
    SerpentineParameters,
};

fn try_generate(w: f64, h: f64, s: f64, orientation: Orientation) -> Result<Layout, LayoutError> {
    SerpentineGenerator::new(SerpentineParameters::new(w, h, s).with_orientation(orientation))
        .generate()
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![
        Just(Orientation::Auto),
        Just(Orientation::Vertical),
        Just(Orientation::Horizontal),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn points_stay_inside_room(w in 0.5f64..40.0, h in 0.5f64..40.0, s in 0.1f64..3.0, o in orientation()) {
        prop_assume!(s < w.min(h));
        if let Ok(layout) = try_generate(w, h, s, o) {
            let room = Room::new(w, h);
            for p in layout.points() {
                prop_assert!(room.contains(p), "({}, {}) outside {}x{}", p.x, p.y, w, h);
            }
            // First and last points sit on or inside the inset boundary
            for p in [layout.start().unwrap(), layout.end().unwrap()] {
                prop_assert!(p.x >= s - 1e-9 && p.x <= w - s + 1e-9);
                prop_assert!(p.y >= s - 1e-9 && p.y <= h - s + 1e-9);
            }
        }
    }

    #[test]
    fn length_is_sum_of_segments(w in 1.0f64..30.0, h in 1.0f64..30.0, s in 0.1f64..2.0) {
        prop_assume!(s < w.min(h));
        if let Ok(layout) = try_generate(w, h, s, Orientation::Auto) {
            let stats = CoverageStats::calculate(&layout);
            let summed: f64 = layout.segments().map(|(a, b)| a.distance_to(b)).sum();
            prop_assert!((stats.total_length - summed).abs() < 1e-9);
            prop_assert!((calculate_pipe_length(layout.points()) - summed).abs() < 1e-9);
        }
    }

    #[test]
    fn segments_are_axis_aligned_steps(w in 1.0f64..20.0, h in 1.0f64..20.0, s in 0.2f64..2.0, o in orientation()) {
        prop_assume!(s < w.min(h));
        if let Ok(layout) = try_generate(w, h, s, o) {
            for (a, b) in layout.segments() {
                let dx = (b.x - a.x).abs();
                let dy = (b.y - a.y).abs();
                prop_assert!(dx < 1e-9 || dy < 1e-9, "diagonal segment {:?} -> {:?}", a, b);
                prop_assert!((a.distance_to(b) - s).abs() < 1e-6, "segment length {} != {}", a.distance_to(b), s);
            }
            for w3 in layout.points().windows(3) {
                let (d1x, d1y) = (w3[1].x - w3[0].x, w3[1].y - w3[0].y);
                let (d2x, d2y) = (w3[2].x - w3[1].x, w3[2].y - w3[1].y);
                let dot = d1x * d2x + d1y * d2y;
                let straight = (d1x - d2x).abs() < 1e-9 && (d1y - d2y).abs() < 1e-9;
                prop_assert!(straight || dot.abs() < 1e-9, "non-90-degree turn at {:?}", w3[1]);
            }
        }
    }

    #[test]
    fn path_never_revisits_a_point(w in 1.0f64..15.0, h in 1.0f64..15.0, s in 0.5f64..2.0, o in orientation()) {
        prop_assume!(s < w.min(h));
        if let Ok(layout) = try_generate(w, h, s, o) {
            let pts = layout.points();
            for i in 0..pts.len() {
                for j in (i + 1)..pts.len() {
                    prop_assert!(pts[i].distance_to(&pts[j]) > 1e-9, "point {:?} visited twice", pts[i]);
                }
            }
        }
    }

    #[test]
    fn coverage_grows_as_spacing_shrinks(w in 2.0f64..30.0, h in 2.0f64..30.0, s1 in 0.1f64..1.0, s2 in 0.1f64..1.0) {
        let (dense, sparse) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
        if let (Ok(a), Ok(b)) = (try_generate(w, h, dense, Orientation::Auto), try_generate(w, h, sparse, Orientation::Auto)) {
            let dense_stats = CoverageStats::calculate(&a);
            let sparse_stats = CoverageStats::calculate(&b);
            prop_assert!(dense_stats.coverage_percent >= sparse_stats.coverage_percent);
        }
    }

    #[test]
    fn generation_is_idempotent(w in 1.0f64..25.0, h in 1.0f64..25.0, s in 0.1f64..2.0) {
        let first = try_generate(w, h, s, Orientation::Auto);
        let second = try_generate(w, h, s, Orientation::Auto);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn spacing_at_least_shorter_side_is_rejected(w in 0.5f64..20.0, h in 0.5f64..20.0, extra in 0.0f64..5.0) {
        let s = w.min(h) + extra;
        let result = try_generate(w, h, s, Orientation::Auto);
        let is_invalid_dimension = matches!(result, Err(LayoutError::InvalidDimension { .. }));
        prop_assert!(is_invalid_dimension);
    }
}
