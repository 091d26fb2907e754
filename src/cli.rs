//! Command-Line Interface

use clap::{ArgAction, Parser};
use radiantkit_layout::Orientation;
use radiantkit_settings::Config;
use std::path::PathBuf;

/// Serpentine radiant floor heating pipe layout generator
#[derive(Parser, Debug, Default)]
#[command(name = "radiantkit")]
#[command(author, about, long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
pub struct Cli {
    /// Room width in meters (x axis)
    #[arg(long)]
    pub width: Option<f64>,

    /// Room length in meters (y axis)
    #[arg(long, visible_alias = "length")]
    pub height: Option<f64>,

    /// Spacing between pipe runs in meters
    #[arg(short, long)]
    pub spacing: Option<f64>,

    /// Direction of the straight pipe runs
    #[arg(long, value_name = "auto|vertical|horizontal")]
    pub orientation: Option<Orientation>,

    /// SVG output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (.json or .toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report without writing an SVG
    #[arg(long)]
    pub no_render: bool,

    /// Continue past advisories without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Overlay command-line values on top of `config`.
    pub fn apply(&self, config: &mut Config) {
        if let Some(width) = self.width {
            config.layout.width = Some(width);
        }
        if let Some(height) = self.height {
            config.layout.height = Some(height);
        }
        if let Some(spacing) = self.spacing {
            config.layout.spacing = Some(spacing);
        }
        if let Some(orientation) = self.orientation {
            config.layout.orientation = orientation;
        }
        if let Some(output) = &self.output {
            config.render.output_path = output.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command_line() {
        let cli = Cli::try_parse_from([
            "radiantkit",
            "--width",
            "10",
            "--length",
            "8.5",
            "-s",
            "0.2",
            "--orientation",
            "horizontal",
            "-o",
            "room.svg",
            "--yes",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.width, Some(10.0));
        assert_eq!(cli.height, Some(8.5));
        assert_eq!(cli.spacing, Some(0.2));
        assert_eq!(cli.orientation, Some(Orientation::Horizontal));
        assert_eq!(cli.output, Some(PathBuf::from("room.svg")));
        assert!(cli.yes);
        assert!(!cli.no_render);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_bad_orientation_rejected() {
        assert!(Cli::try_parse_from(["radiantkit", "--orientation", "diagonal"]).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = Config::default();
        config.layout.spacing = Some(0.3);
        config.layout.width = Some(4.0);

        let cli = Cli {
            spacing: Some(0.15),
            orientation: Some(Orientation::Vertical),
            ..Cli::default()
        };
        cli.apply(&mut config);

        assert_eq!(config.layout.spacing, Some(0.15));
        assert_eq!(config.layout.width, Some(4.0));
        assert_eq!(config.layout.orientation, Orientation::Vertical);
    }

    #[test]
    fn test_clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
