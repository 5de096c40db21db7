//! Fourline - Terminal Connect Four Tournament Library
//!
//! This module exposes the rules engine and tournament controller for
//! testing and external use.

pub mod build_info;
pub mod game;
pub mod input;
pub mod tournament;

// UI is exposed so the binary can drive it, but it is tightly coupled to the
// terminal and not part of the testable core.
pub mod ui;
