//! Moore neighbourhood offsets and bounded neighbour lookup

use crate::spatial::grid::Grid;

/// Relative position of a neighbouring cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NeighbourOffset {
    /// Row delta in `-1..=1`
    pub row: i32,
    /// Column delta in `-1..=1`
    pub col: i32,
}

impl NeighbourOffset {
    /// Create an offset from row and column deltas
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position reached by applying this offset to `(row, col)`
    ///
    /// Computed in `i64` so offsets from extreme `i32` coordinates cannot overflow.
    pub const fn apply(self, row: i64, col: i64) -> (i64, i64) {
        (row + self.row as i64, col + self.col as i64)
    }
}

/// The eight non-zero offsets of the Moore neighbourhood, row-major
pub static NEIGHBOUR_OFFSETS: [NeighbourOffset; 8] = [
    NeighbourOffset::new(-1, -1),
    NeighbourOffset::new(-1, 0),
    NeighbourOffset::new(-1, 1),
    NeighbourOffset::new(0, -1),
    NeighbourOffset::new(0, 1),
    NeighbourOffset::new(1, -1),
    NeighbourOffset::new(1, 0),
    NeighbourOffset::new(1, 1),
];

/// Whether the cell at a possibly out-of-range position is alive
///
/// Positions outside `[0, rows) x [0, cols)` are dead, which gives the grid
/// a fixed, non-wrapping boundary.
pub fn is_alive_neighbour(grid: &Grid, row: i64, col: i64) -> bool {
    match (usize::try_from(row), usize::try_from(col)) {
        (Ok(row), Ok(col)) => grid.is_alive(row, col),
        _ => false,
    }
}

/// Count live cells around `(row, col)` without validating the position
///
/// The centre cell itself is never counted.
pub fn count_in_bounds(grid: &Grid, row: i64, col: i64) -> u8 {
    let mut count = 0;
    for offset in &NEIGHBOUR_OFFSETS {
        let (neighbour_row, neighbour_col) = offset.apply(row, col);
        if is_alive_neighbour(grid, neighbour_row, neighbour_col) {
            count += 1;
        }
    }
    count
}
