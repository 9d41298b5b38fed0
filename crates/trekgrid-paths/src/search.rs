use std::collections::HashMap;

use thiserror::Error;
use trekgrid_core::{Budget, Coord, Resources, TileEffects, TileGrid};

use crate::cost::relative_cost;
use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::neighbors::cardinal_in;
use crate::reconstruct::reconstruct;

/// The grid cannot be searched at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("invalid grid: no start marker 'A'")]
    MissingStart,
    #[error("invalid grid: no goal marker 'B'")]
    MissingGoal,
}

/// A successful search: the path taken and what is left on arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Coordinates from start to goal, both inclusive.
    pub path: Vec<Coord>,
    /// Health and moves remaining at the goal.
    pub resources: Resources,
}

/// Runs resource-constrained searches with a fixed effect table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planner {
    effects: TileEffects,
}

impl Planner {
    pub fn new(effects: TileEffects) -> Self {
        Self { effects }
    }

    /// Find the cheapest route from the start marker to the goal marker.
    ///
    /// Returns `Err` when a marker is missing, `Ok(None)` when every route
    /// runs out of health or moves, and `Ok(Some(route))` otherwise.
    ///
    /// Steps that would leave health at or below zero, or moves below zero,
    /// are never taken. Each step costs [`relative_cost`] and is queued with
    /// that accumulated cost plus the one-tile Manhattan distance it covers.
    pub fn find_path(
        &self,
        grid: &TileGrid,
        budget: Budget,
    ) -> Result<Option<Route>, SearchError> {
        let (start, goal) = grid.markers();
        let start = start.ok_or(SearchError::MissingStart)?;
        let goal = goal.ok_or(SearchError::MissingGoal)?;
        log::debug!(
            "searching {} grid from {start} to {goal} with {budget}",
            grid.bounds()
        );

        let bounds = grid.bounds();
        let mut came_from: HashMap<Coord, Coord> = HashMap::new();
        let mut g_score: HashMap<Coord, i32> = HashMap::new();
        let mut frontier = Frontier::new();
        let mut pops = 0usize;

        g_score.insert(start, 0);
        frontier.push(0, start, budget);

        while let Some(current) = frontier.pop() {
            pops += 1;
            let loc = current.pos;
            let stats = current.resources;

            if loc == goal {
                log::debug!(
                    "reached {goal} with {stats} after {pops} pops, {} pushes, {} stale",
                    frontier.pushes,
                    frontier.stale
                );
                return Ok(Some(Route {
                    path: reconstruct(&came_from, loc),
                    resources: stats,
                }));
            }

            let current_g = g_score.get(&loc).copied().unwrap_or_default();
            log::trace!(
                "expand {loc} g={current_g} {stats}, {} queued",
                frontier.len()
            );

            for next in cardinal_in(bounds, loc) {
                let Some(code) = grid.at(next) else {
                    continue;
                };
                let prospective = stats.apply(self.effects.effect(code));
                if !prospective.is_viable() {
                    continue;
                }

                let tentative = current_g + relative_cost(stats, prospective);
                if g_score.get(&next).is_some_and(|&known| tentative >= known) {
                    continue;
                }

                came_from.insert(next, loc);
                g_score.insert(next, tentative);
                if frontier.contains(next) {
                    log::trace!("cheaper route to queued {next}: {tentative}");
                }
                frontier.push(tentative + manhattan(loc, next), next, prospective);
            }
        }

        log::debug!(
            "no path from {start} to {goal} after {pops} pops, {} pushes, {} stale",
            frontier.pushes,
            frontier.stale
        );
        Ok(None)
    }
}

/// Search `grid` with the standard effect table.
pub fn find_path(grid: &TileGrid, budget: Budget) -> Result<Option<Route>, SearchError> {
    Planner::default().find_path(grid, budget)
}
