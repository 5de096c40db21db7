//! Player roster and tournament configuration.

use crate::game::PlayerId;
use serde::{Deserialize, Serialize};

/// Display hue for a player. Core code treats this as an opaque capability;
/// only the ui layer maps it to a concrete terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerHue {
    Green,
    Blue,
    Magenta,
    Yellow,
}

/// One tournament participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Single-character tag shown in board cells.
    pub tag: char,
    /// Display name used in prompts and standings.
    pub name: String,
    pub hue: PlayerHue,
}

impl Player {
    pub fn new(tag: char, name: impl Into<String>, hue: PlayerHue) -> Self {
        Self {
            tag,
            name: name.into(),
            hue,
        }
    }
}

/// The fixed roster, read-only for the tournament's lifetime. Constructed
/// once in `main` and passed by reference into the controller.
#[derive(Debug, Clone)]
pub struct TournamentConfig {
    players: Vec<Player>,
}

impl TournamentConfig {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// The standard four-player roster.
    pub fn default_roster() -> Self {
        Self::new(vec![
            Player::new('S', "Simra", PlayerHue::Green),
            Player::new('U', "Sumayya", PlayerHue::Blue),
            Player::new('M', "Mariam", PlayerHue::Magenta),
            Player::new('N', "Mahnoor", PlayerHue::Yellow),
        ])
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.0]
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Roster-order iteration, paired with each player's id.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(index, player)| (PlayerId(index), player))
    }
}
