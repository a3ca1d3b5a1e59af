//! Generation computation and repeated stepping

/// Repeated stepping with stability detection
pub mod simulation;
/// Life-rule transition engine
pub mod transition;
