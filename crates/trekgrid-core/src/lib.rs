//! **trekgrid-core** — grid and resource types for hazard-aware pathfinding.
//!
//! This crate provides the foundational types used across the *trekgrid*
//! workspace: grid coordinates, the tile grid itself, the per-tile effect
//! table and the two depleting resources (health and moves) a traveller
//! carries across the grid.

pub mod error;
pub mod geom;
pub mod grid;
pub mod resources;
pub mod tiles;

pub use error::GridError;
pub use geom::{Bounds, Coord};
pub use grid::TileGrid;
pub use resources::{Budget, DEFAULT_HEALTH, DEFAULT_MOVES, Resources};
pub use tiles::{TileEffect, TileEffects, TileKind};
