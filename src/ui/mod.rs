//! Terminal rendering, tightly coupled to ratatui.

pub mod board_styles;
pub mod game_common;
pub mod match_scene;
pub mod results_scene;

use crate::tournament::{Phase, Tournament};
use ratatui::Frame;

/// Top-level draw: route to the scene for the current phase.
pub fn draw(frame: &mut Frame, tournament: &Tournament) {
    let area = frame.size();
    match tournament.phase() {
        Phase::TournamentComplete => results_scene::render_results(frame, area, tournament),
        _ => match_scene::render_match(frame, area, tournament),
    }
}
