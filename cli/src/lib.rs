//! Shared pieces of the `trekgrid` and `grid-maker` binaries: grid file
//! loading, the strict-mode check, result rendering and logging setup.

pub mod error;
pub mod io;
pub mod logging;
pub mod render;

pub use error::CliError;
pub use io::{enforce_strict, load_grid, write_grid};
pub use logging::init_logging;
pub use render::{OutputFormat, pretty_path, report};
