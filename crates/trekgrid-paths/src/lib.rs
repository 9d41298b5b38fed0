//! Resource-constrained pathfinding for trekgrid tile grids.
//!
//! A traveller crosses a grid from the start marker to the goal marker
//! while two resources, health and moves, deplete according to the tiles
//! stepped on. The search is a best-first search whose edge cost is a
//! blended "relative cost": the percentage of each current reserve that a
//! step would consume, summed over both resources.
//!
//! - [`relative_cost`] converts a step into that scalar cost.
//! - [`Planner::find_path`] runs the search and returns a [`Route`].
//! - [`reconstruct`] turns a predecessor map into an ordered path.
//!
//! A missing start or goal is a [`SearchError`]; an exhausted search is the
//! ordinary `Ok(None)` outcome.

mod cost;
mod distance;
mod frontier;
mod neighbors;
mod reconstruct;
mod search;

pub use cost::relative_cost;
pub use distance::manhattan;
pub use neighbors::CARDINALS;
pub use reconstruct::reconstruct;
pub use search::{Planner, Route, SearchError, find_path};
