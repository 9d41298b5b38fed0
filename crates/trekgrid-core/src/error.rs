//! Errors raised while building a [`TileGrid`](crate::TileGrid).

use thiserror::Error;

/// A grid could not be constructed from its textual rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The grid has more rows or columns than a coordinate can address.
    #[error("grid dimension {0} does not fit in a coordinate")]
    TooLarge(usize),
}
