use trekgrid_core::{Bounds, Coord};

/// Cardinal step offsets in expansion order: up, right, down, left.
pub const CARDINALS: [Coord; 4] = [
    Coord::new(-1, 0),
    Coord::new(0, 1),
    Coord::new(1, 0),
    Coord::new(0, -1),
];

/// In-bounds cardinal neighbours of `c`, in [`CARDINALS`] order.
pub(crate) fn cardinal_in(bounds: Bounds, c: Coord) -> impl Iterator<Item = Coord> {
    CARDINALS
        .into_iter()
        .map(move |d| c + d)
        .filter(move |&n| bounds.contains(n))
}
