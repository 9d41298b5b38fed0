use std::collections::HashMap;

use trekgrid_core::Coord;

/// Walk a predecessor map back from `goal` and return the path in
/// start-to-goal order.
///
/// The walk stops at the first coordinate without a predecessor, which is
/// the start. The result always contains at least `goal` itself. A walk
/// that revisits more coordinates than the map holds is cut short, so a
/// malformed map cannot loop forever.
pub fn reconstruct(came_from: &HashMap<Coord, Coord>, goal: Coord) -> Vec<Coord> {
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(&prev) = came_from.get(&cur) {
        if path.len() > came_from.len() {
            log::warn!("predecessor cycle through {cur}; path truncated");
            break;
        }
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}
