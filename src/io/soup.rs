//! Seeded random starting grids

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::Grid;

/// Generate a random soup where each cell is alive with probability `density`
///
/// The same seed, dimensions and density always produce the same grid.
///
/// # Errors
///
/// Returns `InvalidParameter` if `density` is outside `[0, 1]` or NaN, and
/// `MalformedGrid` for invalid dimensions
pub fn random_soup(rows: usize, cols: usize, density: f64, seed: u64) -> Result<Grid> {
    if !(0.0..=1.0).contains(&density) {
        return Err(invalid_parameter(
            "density",
            &density,
            &"must be within [0, 1]",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    Grid::from_fn(rows, cols, |_, _| rng.random_bool(density))
}
