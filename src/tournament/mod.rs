//! Round-robin tournament orchestration: roster, schedule, controller.

pub mod controller;
pub mod roster;
pub mod schedule;

pub use controller::{Command, Flow, MatchState, Phase, ScoreTable, Tournament};
pub use roster::{Player, PlayerHue, TournamentConfig};
pub use schedule::{round_robin, Pairing};
