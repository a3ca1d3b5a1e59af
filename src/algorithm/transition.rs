//! Life-rule transition engine
//!
//! Each output cell depends only on the input snapshot, so the next
//! generation is always written to a separate buffer and the input grid is
//! never touched.

use ndarray::Array2;

use crate::io::configuration::{BIRTH_NEIGHBOURS, SURVIVAL_NEIGHBOURS};
use crate::io::error::{Axis, LifeError, Result};
use crate::spatial::grid::{Cell, Grid};
use crate::spatial::neighbours::count_in_bounds;

/// Stateless engine computing Game of Life generations
#[derive(Debug, Clone, Copy, Default)]
pub struct GridManager;

impl GridManager {
    /// Compute the generation following `grid`
    ///
    /// The result has the same dimensions as the input. A cell is alive when
    /// it has exactly three live neighbours, or exactly two and was already
    /// alive.
    pub fn compute_next_generation(grid: &Grid) -> Grid {
        let mut next = Array2::from_elem(grid.dimensions(), Cell::DEAD);

        for ((row, col), cell) in next.indexed_iter_mut() {
            let neighbours = count_in_bounds(grid, row as i64, col as i64);
            let current = grid.get(row, col).unwrap_or(Cell::DEAD);
            *cell = next_cell_state(current, neighbours);
        }

        Grid::from_cells(next)
    }

    /// Count live neighbours of `(row, col)` in `[0, 8]`
    ///
    /// Neighbours outside the grid count as dead. Only negative coordinates
    /// are rejected; positions at or past the far edges are accepted and
    /// count whatever neighbours fall inside the grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinate` for a negative row, otherwise for a
    /// negative column
    pub fn count_alive_neighbours(grid: &Grid, row: i32, col: i32) -> Result<u8> {
        validate_coordinates(row, col)?;
        Ok(count_in_bounds(grid, i64::from(row), i64::from(col)))
    }
}

/// Apply the Life rule to one cell given its live neighbour count
pub const fn next_cell_state(current: Cell, neighbours: u8) -> Cell {
    Cell::new(
        neighbours == BIRTH_NEIGHBOURS
            || (neighbours == SURVIVAL_NEIGHBOURS && current.is_alive()),
    )
}

fn validate_coordinates(row: i32, col: i32) -> Result<()> {
    if row < 0 {
        return Err(LifeError::InvalidCoordinate {
            axis: Axis::Row,
            value: row,
        });
    }
    if col < 0 {
        return Err(LifeError::InvalidCoordinate {
            axis: Axis::Column,
            value: col,
        });
    }
    Ok(())
}
