//! Curved keyboard key well generator.
//!
//! # Commands
//!
//! - `dactyl generate` - build the key well and write it as STL
//! - `dactyl positions` - write where every key lands as JSON
//! - `dactyl params` - print the default parameters as JSON
//!
//! Parameters come from a JSON file (`--config`); missing fields take
//! their defaults. Logs go to stderr, filtered by `RUST_LOG` or
//! `--log-level`.

mod config;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dactyl::io::{save_positions_json, save_stl, write_positions_json};
use dactyl::layout::{CurvatureStyle, KeyLayout, positions};
use dactyl::parts::{CapSize, WellOptions, key_well};
use dactyl::types::Vector3;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Curved keyboard key well generator
#[derive(Parser, Debug)]
#[command(name = "dactyl")]
#[command(about = "Generate curved keyboard key wells", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the key well and write it as STL
    Generate {
        /// JSON parameter file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output STL path
        #[arg(short, long, default_value = "key_well.stl")]
        output: PathBuf,

        /// Curvature style (standard, orthographic, fixed)
        #[arg(long)]
        style: Option<CurvatureStyle>,

        /// Add keycaps of this width in key units (1, 1.5 or 2)
        #[arg(long)]
        caps: Option<f64>,

        /// Write ASCII instead of binary STL
        #[arg(long)]
        ascii: bool,

        /// Place keys in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Write where every key centre lands as JSON
    Positions {
        /// JSON parameter file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Curvature style (standard, orthographic, fixed)
        #[arg(long)]
        style: Option<CurvatureStyle>,

        /// Output path; stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the default parameters as JSON
    Params,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            config,
            output,
            style,
            caps,
            ascii,
            parallel,
        } => {
            let params = config::load(config.as_deref(), style)?;
            let layout = KeyLayout::new(params).context("invalid geometry parameters")?;

            let mut options = WellOptions::default().with_parallel(parallel);
            if let Some(units) = caps {
                options = options.with_caps(CapSize::try_from(units)?);
            }

            let well = key_well(&layout, &options).context("failed to build key well")?;
            save_stl(&well, &output, !ascii)?;
            info!(path = %output.display(), faces = well.face_count(), "done");
            Ok(())
        }
        Commands::Positions {
            config,
            style,
            output,
        } => {
            let params = config::load(config.as_deref(), style)?;
            let layout = KeyLayout::new(params).context("invalid geometry parameters")?;
            let placed = positions(
                &layout,
                Vector3::zeros(),
                layout.grid().thumb_cluster_carve_out(),
            )
            .context("failed to place keys")?;

            match output {
                Some(path) => save_positions_json(&placed, path)?,
                None => write_positions_json(&placed, io::stdout().lock())?,
            }
            Ok(())
        }
        Commands::Params => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", config::defaults_json()?)?;
            Ok(())
        }
    }
}
