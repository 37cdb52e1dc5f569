// ─────────────────────────────────────────────────────────────────────
// Traffic Dimensioning Core — CLI
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `traffic` — command-line caller for the blocking model.
//!
//! Parses traffic inputs, hands them to `BlockingModel`, prints the result
//! as text or JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use traffic_core::model::{validate_load, validate_target, BlockingModel};
use traffic_math::table::blocking_table;
use traffic_types::state::SearchStatus;

#[derive(Parser)]
#[command(name = "traffic")]
#[command(version)]
#[command(about = "Erlang B blocking and channel dimensioning for loss systems")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON dimensioning config (search cap, bisection limits)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Blocking probability of a pool
    Blocking {
        /// Offered load [Erlang]
        #[arg(short, long)]
        load: f64,

        /// Number of channels
        #[arg(short, long)]
        channels: usize,
    },

    /// Smallest channel count meeting a target blocking
    Dimension {
        /// Offered load [Erlang]
        #[arg(short, long)]
        load: f64,

        /// Target blocking probability, in (0, 1]
        #[arg(short, long)]
        target: f64,
    },

    /// Largest offered load a pool carries within a target blocking
    Capacity {
        /// Number of channels
        #[arg(short, long)]
        channels: usize,

        /// Target blocking probability, in (0, 1]
        #[arg(short, long)]
        target: f64,
    },

    /// Erlang B table for a list of loads
    Table {
        /// Comma-separated offered loads [Erlang]
        #[arg(short, long, value_delimiter = ',', required = true)]
        loads: Vec<f64>,

        /// Largest channel count in the table
        #[arg(short, long, default_value = "20")]
        max_channels: usize,
    },
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    // Only fails if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn load_model(config: Option<&PathBuf>) -> Result<BlockingModel> {
    match config {
        Some(path) => {
            let model = BlockingModel::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
            info!(path = %path.display(), max_channels = model.max_channels(), "config loaded");
            Ok(model)
        }
        None => Ok(BlockingModel::default()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let model = load_model(cli.config.as_ref())?;

    match cli.command {
        Commands::Blocking { load, channels } => {
            let channels = model.check_channels(channels)?;
            let blocking = model.try_evaluate_blocking(load, channels)?;
            if cli.json {
                println!(
                    "{}",
                    json!({ "load": load, "channels": channels, "blocking": blocking })
                );
            } else {
                println!("B({load} E, {channels} ch) = {blocking:.6e}");
            }
        }

        Commands::Dimension { load, target } => {
            let result = model.try_dimension(load, target)?;
            if result.status == SearchStatus::CapReached {
                warn!(
                    cap = model.max_channels(),
                    "target not reachable within channel cap; channel count is the cap"
                );
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("Offered load:   {:.4} E", result.load);
                println!("Target:         {:.4e}", result.target);
                println!("Channels:       {}", result.channels);
                println!("Blocking:       {:.6e}", result.blocking);
                println!("Carried load:   {:.4} E", result.carried_load);
                println!("Lost load:      {:.4e} E", result.lost_load);
                println!("Occupancy:      {:.2} %", 100.0 * result.occupancy);
                println!("Status:         {:?}", result.status);
            }
        }

        Commands::Capacity { channels, target } => {
            let channels = model.check_channels(channels)?;
            let target = validate_target(target)?;
            let load = model.max_offered_load(channels, target);
            if cli.json {
                println!(
                    "{}",
                    json!({ "channels": channels, "target": target, "max_load": load })
                );
            } else {
                println!("{channels} channels carry up to {load:.4} E at B <= {target:.4e}");
            }
        }

        Commands::Table {
            loads,
            max_channels,
        } => {
            for &load in &loads {
                validate_load(load)?;
            }
            let max_channels = model.check_channels(max_channels)?;
            let table = blocking_table(&loads, max_channels)?;
            let rows: Vec<Vec<f64>> = table.rows().into_iter().map(|r| r.to_vec()).collect();
            if cli.json {
                println!(
                    "{}",
                    json!({ "loads": loads, "max_channels": max_channels, "blocking": rows })
                );
            } else {
                print!("{:>10}", "load \\ c");
                for c in 0..=max_channels {
                    print!("{c:>12}");
                }
                println!();
                for (load, row) in loads.iter().zip(&rows) {
                    print!("{load:>10.3}");
                    for b in row {
                        print!("{b:>12.4e}");
                    }
                    println!();
                }
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    run(cli)
}
