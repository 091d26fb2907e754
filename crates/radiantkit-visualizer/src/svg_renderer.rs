//! SVG rendering of pipe layouts.
//!
//! Rooms below the configured area threshold get an animated document
//! (SMIL timing, no scripting) that replays the installation point by point;
//! larger rooms get a static drawing with the supply and return halves in
//! flat colours.

use crate::animation::AnimationPlan;
use crate::palette::{
    segment_color, Rgb, BOUNDARY_COLOR, INK_COLOR, RETURN_COLOR, ROOM_COLOR, SUPPLY_COLOR,
};
use radiantkit_core::{Point, RenderError};
use radiantkit_layout::Layout;
use radiantkit_settings::RenderSettings;
use std::fmt::{self, Write};
use std::path::Path;
use tracing::{debug, info, trace};

const TITLE: &str = "Radiant Heating Pipe Layout";
const MARGIN_PX: f64 = 60.0;
const LEGEND_WIDTH_PX: f64 = 220.0;
const PIPE_WIDTH_PX: f64 = 3.0;
const HEAD_RADIUS_PX: f64 = 5.0;
const TRAIL_RADIUS_PX: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Static,
    Animated,
}

impl RenderMode {
    /// Rooms of `threshold` m² or more are drawn statically.
    pub fn for_area(area: f64, threshold: f64) -> Self {
        if area < threshold {
            Self::Animated
        } else {
            Self::Static
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static => write!(f, "static"),
            Self::Animated => write!(f, "animated"),
        }
    }
}

/// A finished SVG document.
#[derive(Debug, Clone)]
pub struct Rendering {
    pub mode: RenderMode,
    pub svg: String,
    /// Present for animated renderings
    pub plan: Option<AnimationPlan>,
}

impl Rendering {
    pub fn write_to(&self, path: &Path) -> Result<(), RenderError> {
        write_svg(path, &self.svg)
    }
}

/// Maps room meters onto SVG pixels, y axis pointing up.
#[derive(Debug, Clone, Copy)]
struct Canvas {
    height_m: f64,
    padding_m: f64,
    scale: f64,
    plot_width: f64,
    plot_height: f64,
}

impl Canvas {
    fn new(width_m: f64, height_m: f64, padding_m: f64, scale: f64) -> Self {
        Self {
            height_m,
            padding_m,
            scale,
            plot_width: (width_m + 2.0 * padding_m) * scale,
            plot_height: (height_m + 2.0 * padding_m) * scale,
        }
    }

    fn x(&self, x: f64) -> f64 {
        MARGIN_PX + (x + self.padding_m) * self.scale
    }

    fn y(&self, y: f64) -> f64 {
        MARGIN_PX + (self.height_m + self.padding_m - y) * self.scale
    }

    fn width(&self) -> f64 {
        self.plot_width + 2.0 * MARGIN_PX + LEGEND_WIDTH_PX
    }

    fn height(&self) -> f64 {
        self.plot_height + 2.0 * MARGIN_PX
    }
}

#[derive(Debug, Clone, Copy)]
enum Swatch {
    Fill(Rgb),
    Dashed(Rgb),
    Line(Rgb),
    Dot { color: Rgb, radius: f64 },
}

pub struct LayoutRenderer {
    settings: RenderSettings,
}

impl LayoutRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn mode_for(&self, layout: &Layout) -> RenderMode {
        RenderMode::for_area(layout.room().area(), self.settings.animation_area_threshold)
    }

    /// Render in the mode the room area calls for.
    pub fn render(&self, layout: &Layout) -> Result<Rendering, RenderError> {
        let mode = self.mode_for(layout);
        debug!(
            "Rendering {} layout ({:.1} m², threshold {:.1} m²)",
            mode,
            layout.room().area(),
            self.settings.animation_area_threshold
        );

        match mode {
            RenderMode::Static => Ok(Rendering {
                mode,
                svg: self.render_static(layout)?,
                plan: None,
            }),
            RenderMode::Animated => {
                let plan = AnimationPlan::new(layout.len(), &self.settings);
                let svg = self.render_animated(layout, &plan)?;
                Ok(Rendering {
                    mode,
                    svg,
                    plan: Some(plan),
                })
            }
        }
    }

    pub fn render_static(&self, layout: &Layout) -> Result<String, RenderError> {
        check_points(layout)?;
        let canvas = self.canvas(layout);
        let mut svg = String::with_capacity(layout.len() * 24 + 4096);

        self.write_backdrop(&mut svg, &canvas, layout);
        let _ = writeln!(
            svg,
            r#"<text id="title" x="{:.2}" y="{:.2}" text-anchor="middle" font-size="18">{}</text>"#,
            MARGIN_PX + canvas.plot_width / 2.0,
            MARGIN_PX / 2.0,
            TITLE
        );

        write_polyline(&mut svg, &canvas, "supply", layout.supply(), SUPPLY_COLOR);
        write_polyline(&mut svg, &canvas, "return", layout.return_line(), RETURN_COLOR);

        let mut legend = base_legend();
        legend.push(("Supply Line", Swatch::Line(SUPPLY_COLOR)));
        legend.push(("Return Line", Swatch::Line(RETURN_COLOR)));
        write_legend(&mut svg, &canvas, &legend);

        svg.push_str("</svg>\n");
        debug!("Static SVG: {} bytes", svg.len());
        Ok(svg)
    }

    pub fn render_animated(
        &self,
        layout: &Layout,
        plan: &AnimationPlan,
    ) -> Result<String, RenderError> {
        check_points(layout)?;
        let canvas = self.canvas(layout);
        let points = layout.points();
        let n = points.len();
        let mut svg = String::with_capacity(n * 320 + 4096);

        self.write_backdrop(&mut svg, &canvas, layout);

        // Segment i appears once the head reaches point i + 1
        svg.push_str("<g id=\"installed\" stroke-linecap=\"round\">\n");
        for (i, (a, b)) in layout.segments().enumerate() {
            let begin = plan.frame_time_ms(plan.first_frame_of(i + 1));
            let _ = writeln!(
                svg,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}" visibility="hidden"><set attributeName="visibility" to="visible" begin="{:.1}ms" fill="freeze"/></line>"#,
                canvas.x(a.x),
                canvas.y(a.y),
                canvas.x(b.x),
                canvas.y(b.y),
                segment_color(i, n),
                PIPE_WIDTH_PX,
                begin
            );
        }
        svg.push_str("</g>\n");

        self.write_trail(&mut svg, &canvas, points, plan);
        write_head(&mut svg, &canvas, points, plan);
        write_titles(&mut svg, &canvas, plan);

        let mut legend = base_legend();
        legend.push((
            "Installation Point",
            Swatch::Dot {
                color: INK_COLOR,
                radius: HEAD_RADIUS_PX,
            },
        ));
        legend.push((
            "Installation Trail",
            Swatch::Dot {
                color: INK_COLOR,
                radius: TRAIL_RADIUS_PX,
            },
        ));
        write_legend(&mut svg, &canvas, &legend);

        svg.push_str("</svg>\n");
        debug!(
            "Animated SVG: {} frames at {:.1}ms, {} bytes",
            plan.total_frames(),
            plan.interval_ms(),
            svg.len()
        );
        Ok(svg)
    }

    fn canvas(&self, layout: &Layout) -> Canvas {
        let room = layout.room();
        Canvas::new(
            room.width,
            room.height,
            layout.grid().spacing(),
            self.settings.pixels_per_meter,
        )
    }

    /// Document header, room, grid, inset boundary and axis labels.
    fn write_backdrop(&self, svg: &mut String, canvas: &Canvas, layout: &Layout) {
        let room = layout.room();
        let grid = layout.grid();
        let s = grid.spacing();

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.2} {h:.2}" font-family="sans-serif">"#,
            w = canvas.width(),
            h = canvas.height()
        );
        svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

        let _ = writeln!(
            svg,
            r#"<rect id="room" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}" fill-opacity="0.1"/>"#,
            canvas.x(0.0),
            canvas.y(room.height),
            room.width * canvas.scale,
            room.height * canvas.scale,
            ROOM_COLOR
        );

        let _ = writeln!(
            svg,
            r#"<g id="grid" stroke="{}" stroke-opacity="0.2" stroke-dasharray="1,3">"#,
            INK_COLOR
        );
        for &x in grid.x_positions() {
            let _ = writeln!(
                svg,
                r#"<line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}"/>"#,
                canvas.y(0.0),
                canvas.y(room.height),
                x = canvas.x(x)
            );
        }
        for &y in grid.y_positions() {
            let _ = writeln!(
                svg,
                r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}"/>"#,
                canvas.x(0.0),
                canvas.x(room.width),
                y = canvas.y(y)
            );
        }
        svg.push_str("</g>\n");

        let _ = writeln!(
            svg,
            r#"<rect id="boundary" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="{}" stroke-opacity="0.5" stroke-dasharray="6,4"/>"#,
            canvas.x(s),
            canvas.y(room.height - s),
            (room.width - 2.0 * s) * canvas.scale,
            (room.height - 2.0 * s) * canvas.scale,
            BOUNDARY_COLOR
        );

        let _ = writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="14">Width (m)</text>"#,
            MARGIN_PX + canvas.plot_width / 2.0,
            MARGIN_PX + canvas.plot_height + MARGIN_PX * 0.6
        );
        let ly = MARGIN_PX + canvas.plot_height / 2.0;
        let _ = writeln!(
            svg,
            r#"<text x="{lx:.2}" y="{ly:.2}" text-anchor="middle" font-size="14" transform="rotate(-90 {lx:.2} {ly:.2})">Length (m)</text>"#,
            lx = MARGIN_PX * 0.4,
            ly = ly
        );
    }

    /// Dots lagging the head by 1..=trail_length points.
    fn write_trail(&self, svg: &mut String, canvas: &Canvas, points: &[Point], plan: &AnimationPlan) {
        let total_ms = plan.frame_time_ms(plan.total_frames());
        svg.push_str("<g id=\"trail\" fill-opacity=\"0.5\">\n");

        for lag in 1..=plan.trail_length() {
            if lag >= points.len() {
                break;
            }
            let shown = &points[..points.len() - lag];
            let key_times: Vec<f64> = (0..shown.len())
                .map(|i| {
                    if i == 0 {
                        0.0
                    } else {
                        plan.frame_time_ms(plan.first_frame_of(i + lag)) / total_ms
                    }
                })
                .collect();

            let begin = plan.frame_time_ms(plan.first_frame_of(lag));
            let _ = write!(
                svg,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" visibility="hidden"><set attributeName="visibility" to="visible" begin="{:.1}ms" fill="freeze"/>"#,
                canvas.x(shown[0].x),
                canvas.y(shown[0].y),
                TRAIL_RADIUS_PX,
                INK_COLOR,
                begin
            );
            write_discrete_track(svg, canvas, shown, &key_times, total_ms);
            svg.push_str("</circle>\n");
        }

        svg.push_str("</g>\n");
        trace!("Trail of {} dots", plan.trail_length().min(points.len() - 1));
    }
}

fn check_points(layout: &Layout) -> Result<(), RenderError> {
    if layout.len() < 2 {
        return Err(RenderError::InsufficientPoints {
            points: layout.len(),
        });
    }
    Ok(())
}

fn base_legend() -> Vec<(&'static str, Swatch)> {
    vec![
        ("Room", Swatch::Fill(ROOM_COLOR)),
        ("Pipe Offset Boundary", Swatch::Dashed(BOUNDARY_COLOR)),
    ]
}

fn write_polyline(svg: &mut String, canvas: &Canvas, id: &str, points: &[Point], color: Rgb) {
    let _ = write!(svg, r#"<polyline id="{}" points=""#, id);
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            svg.push(' ');
        }
        let _ = write!(svg, "{:.2},{:.2}", canvas.x(p.x), canvas.y(p.y));
    }
    let _ = writeln!(
        svg,
        r#"" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round"/>"#,
        color, PIPE_WIDTH_PX
    );
}

/// `cx`/`cy` animations stepping through `points` at `key_times`.
fn write_discrete_track(
    svg: &mut String,
    canvas: &Canvas,
    points: &[Point],
    key_times: &[f64],
    total_ms: f64,
) {
    let times = key_times
        .iter()
        .map(|t| format!("{:.6}", t))
        .collect::<Vec<_>>()
        .join(";");

    let join = |coords: Vec<f64>| {
        coords
            .iter()
            .map(|c| format!("{:.2}", c))
            .collect::<Vec<_>>()
            .join(";")
    };
    let xs = join(points.iter().map(|p| canvas.x(p.x)).collect());
    let ys = join(points.iter().map(|p| canvas.y(p.y)).collect());

    for (attr, values) in [("cx", xs), ("cy", ys)] {
        let _ = write!(
            svg,
            r#"<animate attributeName="{}" calcMode="discrete" values="{}" keyTimes="{}" dur="{:.1}ms" fill="freeze"/>"#,
            attr, values, times, total_ms
        );
    }
}

fn write_head(svg: &mut String, canvas: &Canvas, points: &[Point], plan: &AnimationPlan) {
    let total_ms = plan.frame_time_ms(plan.total_frames());
    let key_times: Vec<f64> = (0..points.len())
        .map(|i| plan.frame_time_ms(plan.first_frame_of(i)) / total_ms)
        .collect();

    let _ = write!(
        svg,
        r#"<circle id="head" cx="{:.2}" cy="{:.2}" r="{}" fill="{}">"#,
        canvas.x(points[0].x),
        canvas.y(points[0].y),
        HEAD_RADIUS_PX,
        INK_COLOR
    );
    write_discrete_track(svg, canvas, points, &key_times, total_ms);
    svg.push_str("</circle>\n");
}

/// One title element per distinct progress label, each visible while the
/// head sits on the points it describes.
fn write_titles(svg: &mut String, canvas: &Canvas, plan: &AnimationPlan) {
    let n = plan.point_count();
    let mut spans: Vec<(String, usize, Option<usize>)> = Vec::new();

    for index in 0..n {
        let first = plan.first_frame_of(index);
        let title = plan.frame(first).progress.title();
        if let Some(last) = spans.last_mut() {
            if last.0 == title {
                continue;
            }
            last.2 = Some(first);
        }
        spans.push((title, first, None));
    }

    svg.push_str("<g id=\"title\" text-anchor=\"middle\" font-size=\"18\">\n");
    for (title, begin, end) in &spans {
        let _ = write!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" visibility="hidden">{}<set attributeName="visibility" to="visible" begin="{:.1}ms""#,
            MARGIN_PX + canvas.plot_width / 2.0,
            MARGIN_PX / 2.0,
            title,
            plan.frame_time_ms(*begin)
        );
        match end {
            Some(end) => {
                let _ = write!(svg, r#" end="{:.1}ms""#, plan.frame_time_ms(*end));
            }
            None => svg.push_str(r#" fill="freeze""#),
        }
        svg.push_str("/></text>\n");
    }
    svg.push_str("</g>\n");
    trace!("{} title states", spans.len());
}

fn write_legend(svg: &mut String, canvas: &Canvas, entries: &[(&str, Swatch)]) {
    let x = MARGIN_PX * 1.5 + canvas.plot_width;
    let row = 24.0;
    let top = MARGIN_PX + canvas.plot_height / 2.0 - row * entries.len() as f64 / 2.0;

    svg.push_str("<g id=\"legend\" font-size=\"13\">\n");
    for (i, (label, swatch)) in entries.iter().enumerate() {
        let y = top + i as f64 * row;
        match swatch {
            Swatch::Fill(c) => {
                let _ = writeln!(
                    svg,
                    r#"<rect x="{:.2}" y="{:.2}" width="24" height="12" fill="{}" fill-opacity="0.1" stroke="{}" stroke-opacity="0.3"/>"#,
                    x,
                    y - 6.0,
                    c,
                    c
                );
            }
            Swatch::Dashed(c) => {
                let _ = writeln!(
                    svg,
                    r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{}" stroke-opacity="0.5" stroke-dasharray="6,4"/>"#,
                    x,
                    x + 24.0,
                    c,
                    y = y
                );
            }
            Swatch::Line(c) => {
                let _ = writeln!(
                    svg,
                    r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{}" stroke-width="{}"/>"#,
                    x,
                    x + 24.0,
                    c,
                    PIPE_WIDTH_PX,
                    y = y
                );
            }
            Swatch::Dot { color, radius } => {
                let _ = writeln!(
                    svg,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
                    x + 12.0,
                    y,
                    radius,
                    color
                );
            }
        }
        let _ = writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" dominant-baseline="middle">{}</text>"#,
            x + 32.0,
            y,
            label
        );
    }
    svg.push_str("</g>\n");
}

/// Write an SVG document to `path`.
pub fn write_svg(path: &Path, svg: &str) -> Result<(), RenderError> {
    std::fs::write(path, svg).map_err(|source| RenderError::Write {
        path: path.display().to_string(),
        source,
    })?;
    info!("Wrote {} ({} bytes)", path.display(), svg.len());
    Ok(())
}
