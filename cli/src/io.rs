//! Reading and writing grid files.

use std::fs;
use std::path::Path;

use trekgrid_core::{Budget, DEFAULT_HEALTH, DEFAULT_MOVES, TileGrid};
use trekgrid_gen::DEFAULT_DIM;

use crate::error::CliError;
use crate::render::grid_text;

/// Load a grid file, one row of tile codes per line.
pub fn load_grid(path: &Path) -> Result<TileGrid, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid: TileGrid = text.parse()?;
    tracing::debug!("loaded {} grid from {}", grid.bounds(), path.display());
    Ok(grid)
}

/// Write `grid` with rows separated by `\n` and no trailing newline.
pub fn write_grid(path: &Path, grid: &TileGrid) -> Result<(), CliError> {
    fs::write(path, grid_text(grid)).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Strict mode only accepts 100x100 grids searched with the default budget.
pub fn enforce_strict(grid: &TileGrid, budget: Budget) -> Result<(), CliError> {
    if grid.rows() != DEFAULT_DIM || grid.cols() != DEFAULT_DIM {
        return Err(CliError::StrictViolation(format!(
            "grid is {}, expected {DEFAULT_DIM}x{DEFAULT_DIM}",
            grid.bounds()
        )));
    }
    if budget != Budget::STANDARD {
        return Err(CliError::StrictViolation(format!(
            "budget is {} health / {} moves, expected {DEFAULT_HEALTH} / {DEFAULT_MOVES}",
            budget.health, budget.moves
        )));
    }
    Ok(())
}
