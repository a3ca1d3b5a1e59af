//! Input/output operations, configuration and errors

/// Command-line interface and run orchestration
pub mod cli;
/// Rule constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG import and export
pub mod image;
/// Plaintext patterns and format dispatch
pub mod pattern;
/// Progress display
pub mod progress;
/// Seeded random grids
pub mod soup;
