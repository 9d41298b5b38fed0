//! The two depleting resources carried along a path.

use std::fmt;

use crate::tiles::TileEffect;

/// Health a traveller starts with unless told otherwise.
pub const DEFAULT_HEALTH: i32 = 200;
/// Moves a traveller starts with unless told otherwise.
pub const DEFAULT_MOVES: i32 = 450;

/// Remaining health and moves at some point along a path.
///
/// Either value may go negative while a prospective step is evaluated; a
/// state is only admissible when [`is_viable`](Resources::is_viable) holds.
/// Ordering is health first, then moves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resources {
    pub health: i32,
    pub moves: i32,
}

impl Resources {
    #[inline]
    pub const fn new(health: i32, moves: i32) -> Self {
        Self { health, moves }
    }

    /// The resources left after stepping onto a tile with `effect`.
    /// Saturates at the `i32` limits instead of wrapping.
    #[inline]
    pub const fn apply(self, effect: TileEffect) -> Self {
        Self {
            health: self.health.saturating_add(effect.health),
            moves: self.moves.saturating_add(effect.moves),
        }
    }

    /// Health must stay strictly positive and moves must not go negative.
    #[inline]
    pub const fn is_viable(self) -> bool {
        self.health > 0 && self.moves >= 0
    }
}

impl fmt::Display for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.health, self.moves)
    }
}

/// The resources a search starts from.
pub type Budget = Resources;

impl Budget {
    /// The standard starting budget: 200 health, 450 moves.
    pub const STANDARD: Budget = Resources::new(DEFAULT_HEALTH, DEFAULT_MOVES);
}
