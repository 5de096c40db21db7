//! Match scene: board grid, turn prompt, pairing info panel.

use super::board_styles::{calculate_board_centering, disc_style, empty_style, hue_color};
use super::game_common::{
    create_game_layout, render_info_panel_frame, render_round_banner, render_status_bar,
};
use crate::game::{COLS, ROWS};
use crate::tournament::{MatchState, Phase, Tournament};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Cell width without the trailing separator ("` S `" format).
const CELL_WIDTH: u16 = 3;
/// Selector row + board rows + separator rows between them.
const BOARD_HEIGHT: u16 = 1 + ROWS as u16 + (ROWS as u16 - 1);
const BOARD_WIDTH: u16 = COLS as u16 * (CELL_WIDTH + 1) - 1;

/// Render the match scene for the pairing in progress.
pub fn render_match(frame: &mut Frame, area: Rect, tournament: &Tournament) {
    let Some(state) = tournament.match_state() else {
        return;
    };

    let layout = create_game_layout(
        frame,
        area,
        " Connect Four ",
        Color::Cyan,
        BOARD_HEIGHT + 2,
        24,
    );

    render_board(frame, layout.content, tournament, state);
    render_status(frame, layout.status_bar, tournament, state);
    render_info_panel(frame, layout.info_panel, tournament);

    match tournament.phase() {
        Phase::RoundWon => {
            let winner = tournament.config().player(state.turn);
            render_round_banner(
                frame,
                layout.content,
                hue_color(winner.hue),
                "VICTORY",
                &format!("{} wins the round!", winner.name),
            );
        }
        Phase::RoundDraw => {
            render_round_banner(
                frame,
                layout.content,
                Color::Yellow,
                "DRAW",
                "The board is full with no winner.",
            );
        }
        _ => {}
    }
}

fn render_board(frame: &mut Frame, area: Rect, tournament: &Tournament, state: &MatchState) {
    let (x_offset, y_offset) = calculate_board_centering(
        area.x,
        area.y,
        area.width,
        area.height,
        BOARD_WIDTH,
        BOARD_HEIGHT,
    );

    // Column selector only while a column is actually being chosen.
    let selected = match tournament.phase() {
        Phase::SelectingColumn => Some(state.cursor),
        _ => None,
    };

    let mut y = y_offset;
    render_line(frame, x_offset, y, selector_row(selected));
    y += 1;

    let separator = row_separator();
    for row in 0..ROWS {
        render_line(frame, x_offset, y, cell_row(tournament, state, row, selected));
        y += 1;
        if row < ROWS - 1 {
            render_line(frame, x_offset, y, separator.clone());
            y += 1;
        }
    }
}

fn render_line(frame: &mut Frame, x: u16, y: u16, line: Line) {
    frame.render_widget(Paragraph::new(line), Rect::new(x, y, BOARD_WIDTH, 1));
}

/// The "▼" marker row above the grid.
fn selector_row(selected: Option<usize>) -> Line<'static> {
    let mut spans = Vec::new();
    for col in 0..COLS {
        if Some(col) == selected {
            spans.push(Span::styled(
                " ▼ ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw("   "));
        }
        if col < COLS - 1 {
            spans.push(Span::raw(" "));
        }
    }
    Line::from(spans)
}

fn cell_row<'a>(
    tournament: &'a Tournament,
    state: &MatchState,
    row: usize,
    selected: Option<usize>,
) -> Line<'a> {
    let mut spans = Vec::new();
    for col in 0..COLS {
        let in_selected_column = Some(col) == selected;
        let in_winning_line = state
            .winning_line
            .map_or(false, |line| line.contains(&(row, col)));

        let span = match state.board.cell(row, col) {
            Some(id) => {
                let player = tournament.config().player(id);
                Span::styled(
                    format!(" {} ", player.tag),
                    disc_style(hue_color(player.hue), in_winning_line, in_selected_column),
                )
            }
            None => Span::styled(" · ".to_string(), empty_style(in_selected_column)),
        };
        spans.push(span);
        if col < COLS - 1 {
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }
    }
    Line::from(spans)
}

fn row_separator() -> Line<'static> {
    let mut spans = Vec::new();
    for col in 0..COLS {
        spans.push(Span::styled("───", Style::default().fg(Color::DarkGray)));
        if col < COLS - 1 {
            spans.push(Span::styled("┼", Style::default().fg(Color::DarkGray)));
        }
    }
    Line::from(spans)
}

fn render_status(frame: &mut Frame, area: Rect, tournament: &Tournament, state: &MatchState) {
    match tournament.phase() {
        Phase::SelectingColumn => {
            if state.column_full {
                render_status_bar(
                    frame,
                    area,
                    "Column is full. Try again.",
                    Color::Red,
                    CONTROLS,
                );
            } else {
                let player = tournament.config().player(state.turn);
                render_status_bar(
                    frame,
                    area,
                    &format!("{}'s turn", player.name),
                    hue_color(player.hue),
                    CONTROLS,
                );
            }
        }
        _ => {
            render_status_bar(
                frame,
                area,
                "Round over",
                Color::DarkGray,
                &[("[Any key]", "Continue")],
            );
        }
    }
}

const CONTROLS: &[(&str, &str)] = &[("[←/→]", "Move"), ("[Enter]", "Drop"), ("[Q]", "Quit")];

fn render_info_panel(frame: &mut Frame, area: Rect, tournament: &Tournament) {
    let inner = render_info_panel_frame(frame, area);

    let mut lines: Vec<Line> = vec![Line::from(vec![
        Span::styled("Match ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} of {}", tournament.match_number(), tournament.match_total()),
            Style::default().fg(Color::Cyan),
        ),
    ])];

    if let Some(pairing) = tournament.pairing() {
        let first = tournament.config().player(pairing.first);
        let second = tournament.config().player(pairing.second);
        lines.push(Line::from(vec![
            Span::styled(
                first.name.clone(),
                Style::default().fg(hue_color(first.hue)),
            ),
            Span::styled(" vs ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                second.name.clone(),
                Style::default().fg(hue_color(second.hue)),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "STANDINGS",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));

    for (id, player) in tournament.config().players() {
        lines.push(Line::from(Span::styled(
            format!(
                "{} {:<8} {:>2}",
                player.tag,
                player.name,
                tournament.scores().wins(id)
            ),
            Style::default().fg(hue_color(player.hue)),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
