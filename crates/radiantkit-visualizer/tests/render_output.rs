use proptest::prelude::*;
use radiantkit_core::RenderError;
use radiantkit_layout::{Layout, SerpentineGenerator, SerpentineParameters};
use radiantkit_settings::RenderSettings;
use radiantkit_visualizer::{AnimationPlan, LayoutRenderer, RenderMode, Progress};
use std::fs;
use tempfile::TempDir;

fn layout(w: f64, h: f64, s: f64) -> Layout {
    SerpentineGenerator::new(SerpentineParameters::new(w, h, s))
        .generate()
        .unwrap()
}

#[test]
fn test_rendering_written_to_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layout.svg");

    let renderer = LayoutRenderer::new(RenderSettings::default());
    let rendering = renderer.render(&layout(6.0, 4.0, 0.5)).unwrap();
    rendering.write_to(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, rendering.svg);
    assert!(written.contains("<animate"));
}

#[test]
fn test_write_failure_is_render_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("layout.svg");

    let renderer = LayoutRenderer::new(RenderSettings::default());
    let rendering = renderer.render(&layout(6.0, 4.0, 0.5)).unwrap();
    let err = rendering.write_to(&path).unwrap_err();
    assert!(matches!(err, RenderError::Write { .. }));
    assert!(err.to_string().contains("layout.svg"));
}

#[test]
fn test_threshold_comes_from_settings() {
    let settings = RenderSettings {
        animation_area_threshold: 20.0,
        ..RenderSettings::default()
    };
    let renderer = LayoutRenderer::new(settings);
    assert_eq!(renderer.mode_for(&layout(6.0, 4.0, 0.5)), RenderMode::Static);
    assert_eq!(renderer.mode_for(&layout(4.0, 4.0, 0.5)), RenderMode::Animated);
}

#[test]
fn test_static_supply_and_return_share_transition_point() {
    let renderer = LayoutRenderer::new(RenderSettings::default());
    let svg = renderer.render_static(&layout(10.0, 10.0, 1.0)).unwrap();

    let points_of = |id: &str| -> Vec<String> {
        let marker = format!("id=\"{}\" points=\"", id);
        let rest = svg.split(&marker).nth(1).unwrap();
        let list = rest.split('"').next().unwrap();
        list.split(' ').map(str::to_string).collect()
    };

    let supply = points_of("supply");
    let ret = points_of("return");
    assert_eq!(supply.last(), ret.first());
    assert_eq!(supply.len() + ret.len(), 73);
}

proptest! {
    #[test]
    fn frame_plan_is_monotone(points in 2usize..5000) {
        let plan = AnimationPlan::new(points, &RenderSettings::default());
        prop_assert!(plan.interval_ms() >= 5.0 && plan.interval_ms() <= 30.0);

        let mut last_head = 0;
        for frame in plan.frames() {
            prop_assert!(frame.head >= last_head);
            prop_assert!(frame.head < points);
            prop_assert!(frame.trail.end == frame.head);
            prop_assert!(frame.trail.len() <= 5);
            last_head = frame.head;
        }

        let final_frame = plan.frame(plan.total_frames() - 1);
        prop_assert_eq!(final_frame.progress, Progress::Complete);
    }
}
