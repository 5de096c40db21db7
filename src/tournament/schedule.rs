//! Round-robin match scheduling.

use crate::game::PlayerId;

/// One scheduled match-up of two distinct players. The pair is unordered as
/// a match-up; `first` simply takes the opening turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pairing {
    pub first: PlayerId,
    pub second: PlayerId,
}

impl Pairing {
    /// The other member of the pairing.
    pub fn opponent_of(&self, id: PlayerId) -> PlayerId {
        if id == self.first {
            self.second
        } else {
            self.first
        }
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        id == self.first || id == self.second
    }
}

/// Enumerate every unordered pair of roster indices in roster order: player
/// i against every later player j. Four players yield exactly six pairings.
/// Pure and deterministic; the schedule is never reshuffled.
pub fn round_robin(player_count: usize) -> Vec<Pairing> {
    let mut schedule = Vec::new();
    for i in 0..player_count {
        for j in (i + 1)..player_count {
            schedule.push(Pairing {
                first: PlayerId(i),
                second: PlayerId(j),
            });
        }
    }
    schedule
}
