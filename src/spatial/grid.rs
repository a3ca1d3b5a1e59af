//! Immutable rectangular grids of binary cells
//!
//! A `Grid` is a snapshot: its dimensions are fixed at construction and no
//! cell can be changed afterwards. Every transition produces a fresh grid.

use ndarray::Array2;
use std::fmt;

use crate::io::configuration::{MAX_GRID_DIMENSION, PLAINTEXT_ALIVE, PLAINTEXT_DEAD};
use crate::io::error::{Result, invalid_parameter, malformed_grid};

/// A single cell, either alive or dead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    /// Live cell
    pub const ALIVE: Self = Self { alive: true };
    /// Dead cell
    pub const DEAD: Self = Self { alive: false };

    /// Create a cell with the given state
    pub const fn new(alive: bool) -> Self {
        Self { alive }
    }

    /// Whether the cell is alive
    pub const fn is_alive(self) -> bool {
        self.alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Self::new(alive)
    }
}

/// Rectangular snapshot of cell states addressed by `(row, col)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create an all-dead grid
    ///
    /// # Errors
    ///
    /// Returns `MalformedGrid` if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn dead(rows: usize, cols: usize) -> Result<Self> {
        validate_dimensions(rows, cols)?;
        Ok(Self {
            cells: Array2::from_elem((rows, cols), Cell::DEAD),
        })
    }

    /// Create a grid whose cell states are produced by `alive_at(row, col)`
    ///
    /// Cells are visited in row-major order.
    ///
    /// # Errors
    ///
    /// Returns `MalformedGrid` if either dimension is zero or exceeds
    /// `MAX_GRID_DIMENSION`
    pub fn from_fn<F>(rows: usize, cols: usize, mut alive_at: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> bool,
    {
        validate_dimensions(rows, cols)?;
        Ok(Self {
            cells: Array2::from_shape_fn((rows, cols), |(row, col)| {
                Cell::new(alive_at(row, col))
            }),
        })
    }

    /// Create a grid from nested rows of cell states
    ///
    /// # Errors
    ///
    /// Returns `MalformedGrid` if there are no rows, the rows are empty,
    /// or the rows differ in length
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(malformed_grid(&"grid has no rows"));
        };
        let cols = first.len();

        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != cols)
        {
            return Err(malformed_grid(&format!(
                "row {index} has {} cells, expected {cols}",
                row.len()
            )));
        }

        validate_dimensions(rows.len(), cols)?;

        let flat: Vec<Cell> = rows
            .iter()
            .flat_map(|row| row.iter().copied().map(Cell::new))
            .collect();

        let cells = Array2::from_shape_vec((rows.len(), cols), flat)
            .map_err(|e| malformed_grid(&e))?;

        Ok(Self { cells })
    }

    /// Create a grid with only the listed coordinates alive
    ///
    /// # Errors
    ///
    /// Returns `MalformedGrid` for invalid dimensions and `InvalidParameter`
    /// if a coordinate lies outside the grid
    pub fn with_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Result<Self> {
        validate_dimensions(rows, cols)?;
        let mut cells = Array2::from_elem((rows, cols), Cell::DEAD);

        for &(row, col) in alive {
            let cell = cells.get_mut((row, col)).ok_or_else(|| {
                invalid_parameter(
                    "alive",
                    &format!("({row}, {col})"),
                    &format!("outside {rows}x{cols} grid"),
                )
            })?;
            *cell = Cell::ALIVE;
        }

        Ok(Self { cells })
    }

    // Shape is inherited from an already validated grid
    pub(crate) const fn from_cells(cells: Array2<Cell>) -> Self {
        Self { cells }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Cell at `(row, col)`, or `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get((row, col)).copied()
    }

    /// Whether the cell at `(row, col)` is alive; positions outside the grid are dead
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Whether no cell is alive
    pub fn is_extinct(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Coordinates of live cells in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|(position, cell)| cell.is_alive().then_some(position))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: String = row
                .iter()
                .map(|cell| {
                    if cell.is_alive() {
                        PLAINTEXT_ALIVE
                    } else {
                        PLAINTEXT_DEAD
                    }
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(malformed_grid(&format!(
            "dimensions must be positive (got {rows}x{cols})"
        )));
    }
    if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        return Err(malformed_grid(&format!(
            "dimensions {rows}x{cols} exceed maximum of {MAX_GRID_DIMENSION}"
        )));
    }
    Ok(())
}
