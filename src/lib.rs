//! # RadiantKit
//!
//! Serpentine radiant floor heating pipe layouts for rectangular rooms:
//! - Pipe path generation at a fixed spacing, inset from the walls
//! - Coverage, pipe length and grid statistics
//! - Static and animated SVG renderings of the installation
//!
//! ## Architecture
//!
//! RadiantKit is organized as a workspace with multiple crates:
//!
//! 1. **radiantkit-core** - Geometry types and the error hierarchy
//! 2. **radiantkit-layout** - Layout generation, coverage and validation
//! 3. **radiantkit-settings** - Configuration files and defaults
//! 4. **radiantkit-visualizer** - SVG rendering and animation planning
//! 5. **radiantkit** - Command-line binary that ties the crates together

pub mod cli;
pub mod prompt;
pub mod report;

pub use cli::Cli;
pub use prompt::Prompter;
pub use report::{render_notice, AnimationSummary, Report};

pub use radiantkit_core::{Error, LayoutError, Point, RenderError, Result, Room};
pub use radiantkit_layout::{
    CoverageStats, Layout, Orientation, SerpentineGenerator, SerpentineParameters,
};
pub use radiantkit_settings::Config;
pub use radiantkit_visualizer::{LayoutRenderer, RenderMode};

use radiantkit_layout::{advisories, validate_inputs};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr so the report on stdout stays clean
/// - RUST_LOG environment variable support
/// - Default level raised by each `-v`
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(verbosity > 1);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// How a run ended
#[derive(Debug)]
pub enum Outcome {
    /// The user declined to continue past an advisory
    Cancelled,
    /// A layout was generated and reported
    Generated {
        stats: CoverageStats,
        /// Written SVG, if rendering ran and succeeded
        output: Option<PathBuf>,
        /// Rendering failure; the printed statistics are still valid
        render_error: Option<RenderError>,
    },
}

/// Take `config.layout` dimensions, asking for any that are missing.
fn resolve_dimensions<R: BufRead, W: Write>(
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<(f64, f64, f64)> {
    let layout = &config.layout;
    if layout.width.is_none() || layout.height.is_none() || layout.spacing.is_none() {
        let out = prompter.output();
        writeln!(out, "Radiant Heating Layout Generator")?;
        writeln!(out, "===============================")?;
        writeln!(out, "Please enter the following measurements in meters:\n")?;
    }

    let height = match layout.height {
        Some(h) => h,
        None => prompter.read_positive("Enter the room length in meters: ")?,
    };
    let width = match layout.width {
        Some(w) => w,
        None => prompter.read_positive("Enter the room width in meters: ")?,
    };
    let spacing = match layout.spacing {
        Some(s) => s,
        None => prompter.read_positive("Enter the spacing between pipes in meters (e.g., 0.2): ")?,
    };

    Ok((width, height, spacing))
}

/// Generate, report and render one layout.
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<Outcome> {
    let (width, height, spacing) = resolve_dimensions(config, prompter)?;
    let room = Room::new(width, height);

    validate_inputs(&room, spacing)?;

    for advisory in advisories(spacing, config.layout.min_practical_spacing) {
        warn!("{}", advisory);
        if cli.yes {
            writeln!(prompter.output(), "Warning: {}", advisory)?;
            continue;
        }
        if !prompter.confirm(&format!("Warning: {}. Continue?", advisory))? {
            writeln!(prompter.output(), "Operation cancelled by user")?;
            return Ok(Outcome::Cancelled);
        }
    }

    writeln!(
        prompter.output(),
        "\nCalculating layout for room {}m x {}m with {}m spacing...\n",
        width,
        height,
        spacing
    )?;

    let params = SerpentineParameters::new(width, height, spacing)
        .with_orientation(config.layout.orientation)
        .with_max_points(config.layout.max_points);
    let layout = SerpentineGenerator::new(params).generate()?;

    let report = Report::new(&layout);
    write!(prompter.output(), "{}", report)?;
    let stats = report.stats().clone();

    if cli.no_render {
        info!("Rendering skipped");
        return Ok(Outcome::Generated {
            stats,
            output: None,
            render_error: None,
        });
    }

    let renderer = LayoutRenderer::new(config.render.clone());
    let path = config.render.output_path.clone();
    let rendered = renderer
        .render(&layout)
        .and_then(|rendering| rendering.write_to(&path).map(|_| rendering));

    let out = prompter.output();
    match rendered {
        Ok(rendering) => {
            writeln!(
                out,
                "\n{}",
                render_notice(
                    rendering.mode,
                    room.area(),
                    config.render.animation_area_threshold
                )
            )?;
            if let Some(plan) = &rendering.plan {
                write!(out, "\n{}", AnimationSummary(plan))?;
            }
            writeln!(out, "\nLayout written to {}", path.display())?;
            Ok(Outcome::Generated {
                stats,
                output: Some(path),
                render_error: None,
            })
        }
        Err(e) => {
            warn!("Rendering failed: {}", e);
            writeln!(out, "\nRendering failed: {}", e)?;
            Ok(Outcome::Generated {
                stats,
                output: None,
                render_error: Some(e),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn session(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn config_in(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.render.output_path = dir.path().join("layout.svg");
        config
    }

    #[test]
    fn test_prompted_session_writes_animation() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let cli = Cli::default();

        // length, width, spacing
        let mut prompter = session("10\nten\n10\n1\n");
        let outcome = run(&cli, &config, &mut prompter).unwrap();

        match outcome {
            Outcome::Generated {
                stats,
                output,
                render_error,
            } => {
                assert!((stats.total_length - 71.0).abs() < 1e-9);
                assert!((stats.coverage_percent - 64.0).abs() < 1e-9);
                assert_eq!(output, Some(dir.path().join("layout.svg")));
                assert!(render_error.is_none());
            }
            other => panic!("unexpected outcome {:?}", other),
        }

        let out = String::from_utf8(prompter.into_output()).unwrap();
        assert!(out.contains("Please enter a valid number"));
        assert!(out.contains("Showing animated layout."));
        assert!(out.contains("Total frames: 112"));

        let svg = std::fs::read_to_string(dir.path().join("layout.svg")).unwrap();
        assert!(svg.contains("<animate"));
    }

    #[test]
    fn test_configured_dimensions_skip_prompts() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.layout.width = Some(30.0);
        config.layout.height = Some(25.0);
        config.layout.spacing = Some(0.5);

        let mut prompter = session("");
        let outcome = run(&Cli::default(), &config, &mut prompter).unwrap();
        assert!(matches!(outcome, Outcome::Generated { output: Some(_), .. }));

        let out = String::from_utf8(prompter.into_output()).unwrap();
        assert!(!out.contains("Enter the room"));
        assert!(out.contains("Showing static layout."));
    }

    #[test]
    fn test_declined_advisory_cancels() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.layout.width = Some(2.0);
        config.layout.height = Some(2.0);
        config.layout.spacing = Some(0.05);

        let mut prompter = session("n\n");
        let outcome = run(&Cli::default(), &config, &mut prompter).unwrap();
        assert!(matches!(outcome, Outcome::Cancelled));
        assert!(!dir.path().join("layout.svg").exists());

        let out = String::from_utf8(prompter.into_output()).unwrap();
        assert!(out.contains("may be impractical"));
        assert!(out.contains("Operation cancelled by user"));
    }

    #[test]
    fn test_yes_flag_skips_confirmation() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.layout.width = Some(1.0);
        config.layout.height = Some(1.0);
        config.layout.spacing = Some(0.05);

        let cli = Cli {
            yes: true,
            no_render: true,
            ..Cli::default()
        };
        let mut prompter = session("");
        let outcome = run(&cli, &config, &mut prompter).unwrap();
        assert!(matches!(outcome, Outcome::Generated { output: None, .. }));
    }

    #[test]
    fn test_spacing_too_large_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.layout.width = Some(4.0);
        config.layout.height = Some(6.0);
        config.layout.spacing = Some(5.0);

        let err = run(&Cli::default(), &config, &mut session("")).unwrap_err();
        assert!(err.to_string().contains("spacing"));
        assert!(!dir.path().join("layout.svg").exists());
    }

    #[test]
    fn test_render_failure_keeps_statistics() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.render.output_path = dir.path().join("missing").join("layout.svg");
        config.layout.width = Some(5.0);
        config.layout.height = Some(4.0);
        config.layout.spacing = Some(0.5);

        let mut prompter = session("");
        let outcome = run(&Cli::default(), &config, &mut prompter).unwrap();
        match outcome {
            Outcome::Generated {
                stats,
                render_error,
                ..
            } => {
                assert!(stats.total_length > 0.0);
                assert!(render_error.is_some());
            }
            other => panic!("unexpected outcome {:?}", other),
        }

        let out = String::from_utf8(prompter.into_output()).unwrap();
        assert!(out.contains("Total pipe length"));
        assert!(out.contains("Rendering failed"));
    }

    #[test]
    fn test_oversized_room_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.layout.width = Some(100_000.0);
        config.layout.height = Some(100_000.0);
        config.layout.spacing = Some(0.01);
        config.layout.min_practical_spacing = 0.0;

        let err = run(&Cli::default(), &config, &mut session("")).unwrap_err();
        assert!(err.to_string().contains("more than the limit"));

        config.layout.width = Some(10.0);
        config.layout.height = Some(10.0);
        config.layout.spacing = Some(1.0);
        config.layout.max_points = 10;
        let err = run(&Cli::default(), &config, &mut session("")).unwrap_err();
        assert!(err.to_string().contains("limit of 10"));
    }
}
