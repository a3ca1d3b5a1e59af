//! Conway's Game of Life transition engine
//!
//! The core computes one generation from an immutable grid snapshot using the
//! classic rules (survive on two neighbours, birth or survive on three) with a
//! fixed, non-wrapping boundary. Pattern loading, random soups and a generation
//! driver are built on top of it.

#![forbid(unsafe_code)]

/// Transition engine and generation driver
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid storage and neighbourhood lookup
pub mod spatial;

pub use algorithm::transition::GridManager;
pub use io::error::{LifeError, Result};
pub use spatial::grid::{Cell, Grid};
