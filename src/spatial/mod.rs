//! Spatial data structures
//!
//! This module contains:
//! - Immutable cell grids
//! - The fixed Moore neighbourhood and bounded neighbour lookup

/// Grid and cell types
pub mod grid;
/// Neighbour offsets and boundary-aware lookup
pub mod neighbours;

pub use grid::{Cell, Grid};
