//! Rule constants and runtime configuration defaults

// Classic Life rules; not configurable
/// Neighbour count at which a live cell survives unchanged
pub const SURVIVAL_NEIGHBOURS: u8 = 2;
/// Neighbour count at which a cell is alive in the next generation
pub const BIRTH_NEIGHBOURS: u8 = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible soups
pub const DEFAULT_SEED: u64 = 42;

/// Default maximum generations before stopping
pub const DEFAULT_GENERATIONS: usize = 100;

/// Default probability of a soup cell starting alive
pub const DEFAULT_SOUP_DENSITY: f64 = 0.35;

/// Default soup dimensions (rows, cols)
pub const DEFAULT_SOUP_SIZE: (usize, usize) = (64, 64);

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";
/// Output file stem used when no pattern file was given
pub const SOUP_STEM: &str = "soup";
/// Default output extension
pub const DEFAULT_OUTPUT_EXTENSION: &str = "cells";

// Plaintext format characters
/// Marker for a live cell in `.cells` files
pub const PLAINTEXT_ALIVE: char = 'O';
/// Marker for a dead cell in `.cells` files
pub const PLAINTEXT_DEAD: char = '.';
/// Prefix of comment lines in `.cells` files
pub const PLAINTEXT_COMMENT: char = '!';

// Image settings
/// Default edge length in pixels of one exported cell
pub const DEFAULT_PIXEL_SCALE: u32 = 4;
/// Colour of live cells in exported images
pub const ALIVE_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Colour of dead cells in exported images
pub const DEAD_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Luminance below which an imported pixel counts as alive
pub const ALIVE_LUMINANCE_THRESHOLD: u8 = 128;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
