//! Generation driver that repeatedly applies the transition engine
//!
//! The driver keeps only the current snapshot and a generation counter;
//! superseded grids are dropped as soon as the next one is computed.

use std::fmt;

use crate::algorithm::transition::GridManager;
use crate::spatial::grid::Grid;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The requested number of generations was reached
    GenerationLimit,
    /// A generation was identical to its predecessor with live cells remaining
    Stable,
    /// A generation was identical to its predecessor with no live cells
    Extinct,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenerationLimit => write!(f, "generation limit reached"),
            Self::Stable => write!(f, "stable"),
            Self::Extinct => write!(f, "extinct"),
        }
    }
}

/// Outcome of a call to [`Simulation::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Generations computed during this run
    pub generations: usize,
    /// Live cells in the final grid
    pub population: usize,
    /// Reason the run ended
    pub stop_reason: StopReason,
}

/// Owns the current grid and advances it one generation at a time
#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    generation: usize,
}

impl Simulation {
    /// Start a simulation at generation zero
    pub const fn new(grid: Grid) -> Self {
        Self {
            grid,
            generation: 0,
        }
    }

    /// Current grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of generations computed so far
    pub const fn generation(&self) -> usize {
        self.generation
    }

    /// Consume the simulation, returning the current grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Advance one generation
    ///
    /// Returns whether the new grid differs from the previous one.
    pub fn step(&mut self) -> bool {
        let next = GridManager::compute_next_generation(&self.grid);
        let changed = next != self.grid;
        self.grid = next;
        self.generation += 1;
        changed
    }

    /// Advance up to `max_generations` generations
    ///
    /// With `stop_when_stable`, the run ends after the first generation that
    /// equals its predecessor.
    pub fn run(&mut self, max_generations: usize, stop_when_stable: bool) -> RunSummary {
        self.run_with(max_generations, stop_when_stable, |_| {})
    }

    /// Like [`Simulation::run`], calling `on_step` after every generation
    pub fn run_with<F>(
        &mut self,
        max_generations: usize,
        stop_when_stable: bool,
        mut on_step: F,
    ) -> RunSummary
    where
        F: FnMut(&Self),
    {
        let mut generations = 0;
        let mut stop_reason = StopReason::GenerationLimit;

        while generations < max_generations {
            let changed = self.step();
            generations += 1;
            on_step(self);

            if stop_when_stable && !changed {
                stop_reason = if self.grid.is_extinct() {
                    StopReason::Extinct
                } else {
                    StopReason::Stable
                };
                break;
            }
        }

        RunSummary {
            generations,
            population: self.grid.population(),
            stop_reason,
        }
    }
}
