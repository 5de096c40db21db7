//! Final standings scene, shown once every pairing has been played.

use super::board_styles::hue_color;
use crate::tournament::Tournament;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the final score table for every roster player, zero-win players
/// included.
pub fn render_results(frame: &mut Frame, area: Rect, tournament: &Tournament) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Tournament Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "FINAL STANDINGS",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for (id, player) in tournament.config().players() {
        let wins = tournament.scores().wins(id);
        let label = if wins == 1 { "win" } else { "wins" };
        lines.push(Line::from(Span::styled(
            format!("{}: {} {}", player.name, wins, label),
            Style::default().fg(hue_color(player.hue)),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Press any key to exit]",
        Style::default().fg(Color::DarkGray),
    )));

    let content_height = lines.len() as u16;
    let y_offset = inner.y + (inner.height.saturating_sub(content_height)) / 2;

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(inner.x, y_offset, inner.width, content_height),
    );
}
