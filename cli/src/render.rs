//! Turning search results into text or JSON.

use clap::ValueEnum;
use serde::Serialize;
use trekgrid_core::{Coord, TileGrid};
use trekgrid_paths::Route;

use crate::error::CliError;

/// Output format for the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Final resources followed by the grid with the path drawn in arrows.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
}

/// JSON-serializable search outcome.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonOutcome<'a> {
    Found {
        health: i32,
        moves: i32,
        path: &'a [Coord],
    },
    NoPath,
}

/// Arrow pointing from `from` towards the adjacent `to`.
fn arrow(from: Coord, to: Coord) -> char {
    if to.row > from.row {
        '↓'
    } else if to.row < from.row {
        '↑'
    } else if to.col > from.col {
        '→'
    } else {
        '←'
    }
}

/// A copy of `grid` where every path cell but the last shows an arrow
/// towards the next cell. Paths shorter than two cells leave it unchanged.
pub fn pretty_path(grid: &TileGrid, path: &[Coord]) -> TileGrid {
    let mut drawn = grid.clone();
    for step in path.windows(2) {
        drawn.set(step[0], arrow(step[0], step[1]));
    }
    drawn
}

/// Rows joined by `\n`, without a trailing newline.
pub fn grid_text(grid: &TileGrid) -> String {
    grid.row_slices()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a search outcome. `route` is `None` when no path exists.
pub fn report(
    grid: &TileGrid,
    route: Option<&Route>,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(match route {
            Some(route) => format!(
                "{}\n\n{}\n",
                route.resources,
                grid_text(&pretty_path(grid, &route.path))
            ),
            None => "no path found\n".to_string(),
        }),
        OutputFormat::Json => {
            let outcome = match route {
                Some(route) => JsonOutcome::Found {
                    health: route.resources.health,
                    moves: route.resources.moves,
                    path: &route.path,
                },
                None => JsonOutcome::NoPath,
            };
            Ok(serde_json::to_string_pretty(&outcome)? + "\n")
        }
    }
}
