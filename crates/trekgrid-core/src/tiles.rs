//! Tile codes and the table of effects a step onto each tile incurs.
//!
//! Every step costs one move and no health unless the tile is one of the
//! hazard/boost codes:
//!
//! | Code | Kind | Effect (health, moves) |
//! |---|---|---|
//! | `S` | speeder | (-5, 0) |
//! | `L` | lava | (-50, -10) |
//! | `M` | mud | (-10, -5) |
//! | anything else | — | (0, -1) |

/// Start marker.
pub const START: char = 'A';
/// Goal marker.
pub const GOAL: char = 'B';
/// Plain empty tile, as written by the grid generator.
pub const EMPTY: char = 'E';
pub const SPEEDER: char = 'S';
pub const LAVA: char = 'L';
pub const MUD: char = 'M';

/// Classification of a single tile code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Start,
    Goal,
    Empty,
    Speeder,
    Lava,
    Mud,
    /// Any unrecognised code. Treated as empty ground.
    Other(char),
}

impl TileKind {
    pub const fn from_char(ch: char) -> Self {
        match ch {
            START => Self::Start,
            GOAL => Self::Goal,
            EMPTY => Self::Empty,
            SPEEDER => Self::Speeder,
            LAVA => Self::Lava,
            MUD => Self::Mud,
            other => Self::Other(other),
        }
    }

    /// The code this kind is written as.
    pub const fn code(self) -> char {
        match self {
            Self::Start => START,
            Self::Goal => GOAL,
            Self::Empty => EMPTY,
            Self::Speeder => SPEEDER,
            Self::Lava => LAVA,
            Self::Mud => MUD,
            Self::Other(ch) => ch,
        }
    }
}

/// Change in (health, moves) incurred by stepping onto a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileEffect {
    pub health: i32,
    pub moves: i32,
}

impl TileEffect {
    #[inline]
    pub const fn new(health: i32, moves: i32) -> Self {
        Self { health, moves }
    }
}

/// Immutable effect table consulted by the search.
///
/// The table is a plain value handed to a planner rather than process-wide
/// state, so concurrent searches never share anything mutable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileEffects {
    pub speeder: TileEffect,
    pub lava: TileEffect,
    pub mud: TileEffect,
    /// Applied to every other tile, including the start and goal markers.
    pub ground: TileEffect,
}

impl TileEffects {
    /// The standard effect table.
    pub const STANDARD: Self = Self {
        speeder: TileEffect::new(-5, 0),
        lava: TileEffect::new(-50, -10),
        mud: TileEffect::new(-10, -5),
        ground: TileEffect::new(0, -1),
    };

    /// Look up the effect of stepping onto a tile of kind `kind`.
    #[inline]
    pub const fn for_kind(&self, kind: TileKind) -> TileEffect {
        match kind {
            TileKind::Speeder => self.speeder,
            TileKind::Lava => self.lava,
            TileKind::Mud => self.mud,
            TileKind::Start
            | TileKind::Goal
            | TileKind::Empty
            | TileKind::Other(_) => self.ground,
        }
    }

    /// Look up the effect of stepping onto the tile written as `code`.
    #[inline]
    pub const fn effect(&self, code: char) -> TileEffect {
        self.for_kind(TileKind::from_char(code))
    }
}

impl Default for TileEffects {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hazard_codes() {
        let t = TileEffects::STANDARD;
        assert_eq!(t.effect('S'), TileEffect::new(-5, 0));
        assert_eq!(t.effect('L'), TileEffect::new(-50, -10));
        assert_eq!(t.effect('M'), TileEffect::new(-10, -5));
    }

    #[test]
    fn everything_else_costs_one_move() {
        let t = TileEffects::default();
        for code in ['A', 'B', 'E', 'x', ' ', '#'] {
            assert_eq!(t.effect(code), TileEffect::new(0, -1), "code {code:?}");
        }
    }

    #[test]
    fn kind_round_trips_code() {
        for code in ['A', 'B', 'E', 'S', 'L', 'M', 'q'] {
            assert_eq!(TileKind::from_char(code).code(), code);
        }
        assert_eq!(TileKind::from_char('q'), TileKind::Other('q'));
    }
}
