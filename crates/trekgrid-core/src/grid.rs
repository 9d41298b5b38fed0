//! The [`TileGrid`] type — a fixed-size 2D array of single-character tile
//! codes.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::geom::{Bounds, BoundsIter, Coord};
use crate::tiles::{GOAL, START};

/// A rectangular grid of tile codes, stored row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGrid {
    tiles: Vec<char>,
    bounds: Bounds,
}

impl TileGrid {
    /// Create a `rows x cols` grid filled with `fill`.
    pub fn filled(rows: i32, cols: i32, fill: char) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            tiles: vec![fill; bounds.len()],
            bounds,
        }
    }

    /// Build a grid from textual rows, one tile per `char`.
    ///
    /// Every row must have as many tiles as the first one.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tiles = Vec::new();
        let mut width = None;
        let mut height = 0usize;
        for (row, line) in rows.into_iter().enumerate() {
            let before = tiles.len();
            tiles.extend(line.as_ref().chars());
            let found = tiles.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }
        let width = width.unwrap_or(0);
        let rows = i32::try_from(height).map_err(|_| GridError::TooLarge(height))?;
        let cols = i32::try_from(width).map_err(|_| GridError::TooLarge(width))?;
        Ok(Self {
            tiles,
            bounds: Bounds::new(rows, cols),
        })
    }

    /// The bounding rectangle of the grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some((c.row as usize) * (self.bounds.cols as usize) + (c.col as usize))
        } else {
            None
        }
    }

    /// The tile code at `c`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<char> {
        self.index(c).map(|i| self.tiles[i])
    }

    /// Overwrite the tile at `c`. No-op outside the grid.
    pub fn set(&mut self, c: Coord, code: char) {
        if let Some(i) = self.index(c) {
            self.tiles[i] = code;
        }
    }

    /// Locate the start and goal markers.
    ///
    /// The scan is row-major and the last occurrence of each marker wins.
    pub fn markers(&self) -> (Option<Coord>, Option<Coord>) {
        let mut start = None;
        let mut goal = None;
        for (c, code) in self.iter() {
            let slot = match code {
                START => &mut start,
                GOAL => &mut goal,
                _ => continue,
            };
            if let Some(prev) = slot.replace(c) {
                log::warn!("duplicate marker {code:?} at {prev} superseded by {c}");
            }
        }
        (start, goal)
    }

    /// Row-major iterator over `(Coord, char)` pairs.
    pub fn iter(&self) -> TileIter<'_> {
        TileIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }

    /// Iterator over the rows as `char` slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[char]> {
        // chunks() panics on a zero chunk size
        self.tiles.chunks(self.bounds.cols.max(1) as usize)
    }
}

impl FromStr for TileGrid {
    type Err = GridError;

    /// Parse one row per line. Line endings (`\n` or `\r\n`) are stripped and
    /// a trailing newline does not produce an extra row.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(s.lines())
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_slices() {
            for ch in row {
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over `(Coord, char)` pairs in a [`TileGrid`].
pub struct TileIter<'a> {
    grid: &'a TileGrid,
    inner: BoundsIter,
}

impl Iterator for TileIter<'_> {
    type Item = (Coord, char);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.inner.next()?;
        self.grid.at(c).map(|code| (c, code))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
