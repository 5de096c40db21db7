//! Board cell styling shared by the match scenes.
//!
//! This is the only place roster hues meet concrete terminal colors; core
//! modules treat `PlayerHue` as an opaque value.

use crate::tournament::PlayerHue;
use ratatui::style::{Color, Modifier, Style};

/// Map a roster hue to its terminal color.
pub fn hue_color(hue: PlayerHue) -> Color {
    match hue {
        PlayerHue::Green => Color::Green,
        PlayerHue::Blue => Color::Blue,
        PlayerHue::Magenta => Color::Magenta,
        PlayerHue::Yellow => Color::Yellow,
    }
}

/// Style for an occupied cell. Winning-line highlight takes precedence over
/// the selected-column wash.
pub fn disc_style(color: Color, in_winning_line: bool, in_selected_column: bool) -> Style {
    let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if in_winning_line {
        style = style.add_modifier(Modifier::REVERSED);
    } else if in_selected_column {
        style = style.bg(Color::DarkGray);
    }
    style
}

/// Style for an empty cell.
pub fn empty_style(in_selected_column: bool) -> Style {
    if in_selected_column {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Calculate centering offsets for a board within an area.
pub fn calculate_board_centering(
    area_x: u16,
    area_y: u16,
    area_width: u16,
    area_height: u16,
    board_width: u16,
    board_height: u16,
) -> (u16, u16) {
    let x_offset = area_x + (area_width.saturating_sub(board_width)) / 2;
    let y_offset = area_y + (area_height.saturating_sub(board_height)) / 2;
    (x_offset, y_offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_hue_maps_to_a_distinct_color() {
        let hues = [
            PlayerHue::Green,
            PlayerHue::Blue,
            PlayerHue::Magenta,
            PlayerHue::Yellow,
        ];
        let colors: Vec<Color> = hues.iter().map(|&h| hue_color(h)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_disc_style_plain() {
        let style = disc_style(Color::Green, false, false);
        assert_eq!(style.fg, Some(Color::Green));
        assert_eq!(style.bg, None);
    }

    #[test]
    fn test_disc_style_selected_column_gets_background() {
        let style = disc_style(Color::Blue, false, true);
        assert_eq!(style.bg, Some(Color::DarkGray));
    }

    #[test]
    fn test_winning_highlight_beats_column_wash() {
        let style = disc_style(Color::Yellow, true, true);
        assert_eq!(style.bg, None);
        assert!(style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_board_centering() {
        let (x, y) = calculate_board_centering(0, 0, 40, 20, 20, 10);
        assert_eq!(x, 10);
        assert_eq!(y, 5);
    }
}
