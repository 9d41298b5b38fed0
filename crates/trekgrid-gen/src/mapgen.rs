//! Weighted random terrain.
//!
//! Every cell is drawn independently from the four terrain codes `E S M L`
//! according to [`TileWeights`]. The start marker then goes in the first
//! column of a random row and the goal marker in the last column of
//! another (possibly the same) random row.

use rand::Rng;
use thiserror::Error;
use trekgrid_core::{Coord, TileGrid, tiles};

/// Side length of the square grids used by the strict solver mode.
pub const DEFAULT_DIM: i32 = 100;

/// Default relative frequencies of empty, speeder, mud and lava tiles.
pub const DEFAULT_TILE_WEIGHTS: TileWeights = TileWeights {
    empty: 65,
    speeder: 20,
    mud: 10,
    lava: 5,
};

/// Relative frequency of each terrain code. Only the ratios matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileWeights {
    pub empty: u32,
    pub speeder: u32,
    pub mud: u32,
    pub lava: u32,
}

impl TileWeights {
    fn table(self) -> [(char, u32); 4] {
        [
            (tiles::EMPTY, self.empty),
            (tiles::SPEEDER, self.speeder),
            (tiles::MUD, self.mud),
            (tiles::LAVA, self.lava),
        ]
    }

    fn total(self) -> u64 {
        self.table().iter().map(|&(_, w)| u64::from(w)).sum()
    }

    /// Pick a terrain code with probability proportional to its weight.
    fn pick(self, rng: &mut impl Rng) -> char {
        let mut roll = rng.random_range(0..self.total());
        for (code, w) in self.table() {
            let w = u64::from(w);
            if roll < w {
                return code;
            }
            roll -= w;
        }
        tiles::EMPTY
    }
}

impl Default for TileWeights {
    fn default() -> Self {
        DEFAULT_TILE_WEIGHTS
    }
}

/// Reasons a generator configuration cannot produce a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    EmptyDimensions { rows: i32, cols: i32 },
    #[error("at least one tile weight must be non-zero")]
    ZeroWeights,
}

/// Generator settings for random grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMaker {
    pub rows: i32,
    pub cols: i32,
    pub weights: TileWeights,
}

impl Default for GridMaker {
    fn default() -> Self {
        Self::new(DEFAULT_DIM, DEFAULT_DIM)
    }
}

impl GridMaker {
    /// A `rows x cols` generator with the default tile weights.
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows,
            cols,
            weights: DEFAULT_TILE_WEIGHTS,
        }
    }

    /// Replace the tile weights (builder).
    pub fn with_weights(mut self, weights: TileWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Generate a grid.
    ///
    /// A single-column grid puts the goal over the start when both land on
    /// the same row; the start is then missing and the solver rejects it.
    pub fn generate(&self, rng: &mut impl Rng) -> Result<TileGrid, GenError> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(GenError::EmptyDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.weights.total() == 0 {
            return Err(GenError::ZeroWeights);
        }

        let mut grid = TileGrid::filled(self.rows, self.cols, tiles::EMPTY);
        for c in grid.bounds() {
            grid.set(c, self.weights.pick(rng));
        }

        let start = Coord::new(rng.random_range(0..self.rows), 0);
        let goal = Coord::new(rng.random_range(0..self.rows), self.cols - 1);
        grid.set(start, tiles::START);
        grid.set(goal, tiles::GOAL);
        log::debug!(
            "generated {} grid, start {start}, goal {goal}",
            grid.bounds()
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use trekgrid_core::Budget;

    #[test]
    fn markers_on_opposite_edges() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = GridMaker::new(12, 9).generate(&mut rng).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (12, 9));

        let (start, goal) = grid.markers();
        assert_eq!(start.unwrap().col, 0);
        assert_eq!(goal.unwrap().col, 8);
        let starts = grid.iter().filter(|&(_, ch)| ch == 'A').count();
        let goals = grid.iter().filter(|&(_, ch)| ch == 'B').count();
        assert_eq!((starts, goals), (1, 1));
    }

    #[test]
    fn same_seed_same_grid() {
        let maker = GridMaker::new(20, 20);
        let a = maker.generate(&mut StdRng::seed_from_u64(42)).unwrap();
        let b = maker.generate(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn only_weighted_terrain_appears() {
        let maker = GridMaker::new(10, 10).with_weights(TileWeights {
            empty: 0,
            speeder: 0,
            mud: 0,
            lava: 1,
        });
        let grid = maker.generate(&mut StdRng::seed_from_u64(1)).unwrap();
        assert!(grid.iter().all(|(_, ch)| matches!(ch, 'L' | 'A' | 'B')));
    }

    #[test]
    fn default_weights_produce_every_terrain() {
        let grid = GridMaker::default()
            .generate(&mut StdRng::seed_from_u64(3))
            .unwrap();
        for code in ['E', 'S', 'M', 'L'] {
            assert!(grid.iter().any(|(_, ch)| ch == code), "missing {code}");
        }
    }

    #[test]
    fn rejects_bad_config() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            GridMaker::new(0, 5).generate(&mut rng),
            Err(GenError::EmptyDimensions { rows: 0, cols: 5 })
        );
        let zero = TileWeights {
            empty: 0,
            speeder: 0,
            mud: 0,
            lava: 0,
        };
        assert_eq!(
            GridMaker::new(3, 3).with_weights(zero).generate(&mut rng),
            Err(GenError::ZeroWeights)
        );
    }

    #[test]
    fn open_ground_is_always_solvable() {
        let maker = GridMaker::new(6, 6).with_weights(TileWeights {
            empty: 1,
            speeder: 0,
            mud: 0,
            lava: 0,
        });
        for seed in 0..10 {
            let grid = maker.generate(&mut StdRng::seed_from_u64(seed)).unwrap();
            let route = trekgrid_paths::find_path(&grid, Budget::STANDARD).unwrap();
            assert!(route.is_some(), "seed {seed}");
        }
    }
}
