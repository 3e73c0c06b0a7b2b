// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `qrt`: command-line front end for the residue searches.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use residue_telescope::config::{load_config, Config, OutputFormat};
use residue_telescope::lens::parse_moduli;
use residue_telescope::present;
use residue_telescope::{
    find_isoforms, find_sum_invariants, LinearInvariantSearcher, SpectralMap,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "qrt")]
#[command(version)]
#[command(about = "Quantum-Residue Telescope: modular pattern analyzer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Find isoforms: numbers with the same residue vector
    Iso(CommonArgs),

    /// Find ghost energy clusters: numbers with the same residue sum
    Ghost(CommonArgs),

    /// Find linear invariants: a*r1 + ... + k*rk constant over a cluster
    Linear(LinearArgs),
}

#[derive(Args)]
struct CommonArgs {
    /// First value of the range (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    start: i64,

    /// Last value of the range (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    end: i64,

    /// Moduli of the lens (e.g. --mods 6 8 9)
    #[arg(long, num_args = 1.., required = true)]
    mods: Vec<String>,

    /// Minimum cluster size (defaults depend on the mode)
    #[arg(long)]
    min_cluster: Option<usize>,

    /// Number of clusters to print
    #[arg(long)]
    max_clusters: Option<usize>,

    /// Print clusters as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct LinearArgs {
    #[command(flatten)]
    common: CommonArgs,

    /// Largest absolute value of each coefficient
    #[arg(long)]
    max_coeff: Option<i64>,

    /// Evaluate coefficient vectors on the calling thread only
    #[arg(long)]
    sequential: bool,
}

fn build_map(args: &CommonArgs) -> anyhow::Result<SpectralMap> {
    let lens = parse_moduli(args.mods.as_slice())?;
    let mut map = SpectralMap::new(lens);
    map.build_from_range(args.start, args.end)?;
    Ok(map)
}

fn emit<T: Serialize>(
    args: &CommonArgs,
    config: &Config,
    clusters: &[T],
    render: fn(&[T], usize) -> String,
) -> anyhow::Result<()> {
    let max_clusters = args.max_clusters.unwrap_or(config.output.max_clusters);
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    match format {
        OutputFormat::Text => print!("{}", render(clusters, max_clusters)),
        OutputFormat::Json => {
            let shown = &clusters[..clusters.len().min(max_clusters)];
            println!("{}", serde_json::to_string_pretty(shown)?);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Results go to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(&cli.log_level))
        .init();

    let config = load_config(cli.config.as_deref()).context("loading configuration")?;

    match cli.command {
        Commands::Iso(args) => {
            let map = build_map(&args)?;
            let min_size = args.min_cluster.unwrap_or(config.search.isoform_min_size);
            let clusters = find_isoforms(&map, min_size);
            emit(&args, &config, &clusters, present::isoforms_to_string)
        }
        Commands::Ghost(args) => {
            let map = build_map(&args)?;
            let min_cluster = args.min_cluster.unwrap_or(config.search.energy_min_cluster);
            let clusters = find_sum_invariants(&map, min_cluster);
            emit(&args, &config, &clusters, present::ghosts_to_string)
        }
        Commands::Linear(args) => {
            let map = build_map(&args.common)?;
            let searcher = LinearInvariantSearcher::new(
                args.max_coeff.unwrap_or(config.search.max_coeff),
                args.common
                    .min_cluster
                    .unwrap_or(config.search.linear_min_cluster),
            )
            .with_parallel(config.search.parallel && !args.sequential);
            let clusters = searcher.search(&map)?;
            emit(&args.common, &config, &clusters, present::linear_to_string)
        }
    }
}
