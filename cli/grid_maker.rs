//! Generate a random grid file for the solver.
//!
//! Run: cargo run --bin grid-maker -- grid.txt --rows 100 --cols 100

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use trekgrid_cli::{init_logging, write_grid};
use trekgrid_gen::{DEFAULT_DIM, GridMaker};

/// Write a random hazard grid with a start on the left edge and a goal on
/// the right edge.
#[derive(Parser, Debug)]
#[command(name = "grid-maker", version, about, long_about = None)]
struct Args {
    /// Output file
    filename: PathBuf,

    /// Number of rows
    #[arg(short = 'x', long, default_value_t = DEFAULT_DIM)]
    rows: i32,

    /// Number of columns
    #[arg(short = 'y', long, default_value_t = DEFAULT_DIM)]
    cols: i32,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let grid = GridMaker::new(args.rows, args.cols).generate(&mut rng)?;
    write_grid(&args.filename, &grid)?;
    tracing::info!("wrote {} grid to {}", grid.bounds(), args.filename.display());
    Ok(())
}
