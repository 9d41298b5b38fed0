//! Random grid generation for trekgrid: weighted terrain with a start
//! marker on the left edge and a goal marker on the right edge.

pub mod mapgen;

pub use mapgen::{DEFAULT_DIM, DEFAULT_TILE_WEIGHTS, GenError, GridMaker, TileWeights};
