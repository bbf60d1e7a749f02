//! flare - procedural lens-flare renderer
//!
//! Renders YAML scene files of rings and disks to PNG, and converts colors
//! between the supported spaces.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use flare_core::ColorSpaceId;
use flare_shapes::BlendMode;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod scene;

#[derive(Parser)]
#[command(name = "flare")]
#[command(author, version, about = "Procedural lens-flare renderer")]
#[command(long_about = "
Renders procedural lens-flare shapes (rings, solid disks, gradient disks)
described in a YAML scene file, and converts colors between spaces.

Examples:
  flare render scene.yaml -o flare.png          # Render a scene
  flare render scene.yaml -o flare.png -b max   # Override the blend mode
  flare convert --from srgb --to lab 1 0.5 0    # Convert a color
  flare -vv render scene.yaml -o out.png        # Debug logging

Color spaces: srgb, linear, xyz, lab, hsv, hsl
Set RUST_LOG to override the log filter.
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene file to PNG
    #[command(visible_alias = "r")]
    Render(RenderArgs),

    /// Convert a color triple between spaces
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),
}

/// Arguments for the `render` command.
#[derive(Args)]
struct RenderArgs {
    /// Scene file (YAML)
    scene: PathBuf,

    /// Output PNG
    #[arg(short, long)]
    output: PathBuf,

    /// Blend mode: add, max, over, screen (overrides the scene)
    #[arg(short, long)]
    blend: Option<BlendMode>,
}

/// Arguments for the `convert` command.
#[derive(Args)]
struct ConvertArgs {
    /// Source color space
    #[arg(short, long)]
    from: ColorSpaceId,

    /// Target color space
    #[arg(short, long)]
    to: ColorSpaceId,

    /// Three components
    #[arg(num_args = 3, required = true, allow_negative_numbers = true)]
    values: Vec<f32>,
}

/// Installs the global tracing subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Convert(args) => commands::convert::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let args = ["flare", "-vv", "render", "s.yaml", "-o", "o.png", "--blend", "screen"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Render(a) => {
                assert_eq!(a.scene, PathBuf::from("s.yaml"));
                assert_eq!(a.blend, Some(BlendMode::Screen));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_parse_convert_negative() {
        let args = ["flare", "convert", "--from", "lab", "--to", "srgb", "50", "-20", "10"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Convert(a) => {
                assert_eq!(a.from, ColorSpaceId::Lab);
                assert_eq!(a.to, ColorSpaceId::Srgb);
                assert_eq!(a.values, vec![50.0, -20.0, 10.0]);
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_space() {
        let args = ["flare", "convert", "--from", "cmyk", "--to", "srgb", "0", "0", "0"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
