//! Solve a grid file: find the cheapest route from `A` to `B`.
//!
//! Run: cargo run --bin trekgrid -- grid.txt --health 200 --moves 450

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use trekgrid_cli::{OutputFormat, enforce_strict, init_logging, load_grid, report};
use trekgrid_core::{Budget, DEFAULT_HEALTH, DEFAULT_MOVES};
use trekgrid_paths::find_path;

/// Find a route across a hazard grid without running out of health or moves.
#[derive(Parser, Debug)]
#[command(name = "trekgrid", version, about, long_about = None)]
struct Args {
    /// Grid file, one row of tile codes per line
    filename: PathBuf,

    /// Only accept 100x100 grids with the default health and moves
    #[arg(long)]
    strict: bool,

    /// Starting health, at least 1
    #[arg(
        short = 'e',
        long,
        default_value_t = DEFAULT_HEALTH,
        value_parser = clap::value_parser!(i32).range(1..)
    )]
    health: i32,

    /// Starting moves, at least 0
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_MOVES,
        value_parser = clap::value_parser!(i32).range(0..)
    )]
    moves: i32,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let grid = load_grid(&args.filename)?;
    let budget = Budget::new(args.health, args.moves);
    if args.strict {
        enforce_strict(&grid, budget)?;
    }

    let route = find_path(&grid, budget)
        .with_context(|| format!("cannot search {}", args.filename.display()))?;
    match &route {
        Some(route) => tracing::info!("route of {} tiles found", route.path.len()),
        None => tracing::info!("no route within {budget}"),
    }

    print!("{}", report(&grid, route.as_ref(), args.format)?);
    Ok(())
}
