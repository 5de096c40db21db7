//! Tournament controller: the per-match state machine and score tracking.
//!
//! The controller consumes abstract commands (UI-agnostic, like the
//! per-game input enums elsewhere in this codebase) and owns every state
//! transition: column selection, drops, turn alternation, round endings,
//! and advancing through the schedule.

use crate::game::{find_winning_sequence, Board, PlayerId, WinningLine, COLS};
use crate::tournament::roster::TournamentConfig;
use crate::tournament::schedule::{round_robin, Pairing};
use serde::{Deserialize, Serialize};

/// Abstract input command consumed by the controller. `Other` stands for any
/// unrecognized key: ignored while selecting a column, treated as the
/// acknowledgment once a round has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Confirm,
    Quit,
    Other,
}

/// What the controller is currently waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The turn-holder is choosing a column.
    SelectingColumn,
    /// A match just ended with a win; the winning line stays on display
    /// until acknowledged.
    RoundWon,
    /// The board filled with no line; awaiting acknowledgment.
    RoundDraw,
    /// All pairings played; final standings on display.
    TournamentComplete,
    /// Quit was issued mid-match; remaining pairings are skipped and no
    /// final report is shown.
    Aborted,
}

/// Signal back to the event loop.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Win counts per roster player. Draws leave it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    wins: Vec<u32>,
}

impl ScoreTable {
    pub fn new(player_count: usize) -> Self {
        Self {
            wins: vec![0; player_count],
        }
    }

    pub fn record_win(&mut self, id: PlayerId) {
        self.wins[id.0] += 1;
    }

    pub fn wins(&self, id: PlayerId) -> u32 {
        self.wins[id.0]
    }
}

/// Transient per-pairing state, rebuilt fresh for every scheduled match.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub board: Board,
    /// Whose move is currently being accepted.
    pub turn: PlayerId,
    /// Selected column, clamped to [0, COLS - 1]. Column-only: the landing
    /// row is decided by gravity, never by the cursor.
    pub cursor: usize,
    /// The line that just ended the match, when one was detected.
    pub winning_line: Option<WinningLine>,
    /// Set when the last drop attempt hit a full column; cleared by the next
    /// recognized command.
    pub column_full: bool,
}

impl MatchState {
    fn new(pairing: Pairing) -> Self {
        Self {
            board: Board::new(),
            turn: pairing.first,
            cursor: 0,
            winning_line: None,
            column_full: false,
        }
    }
}

/// Runs the full round-robin: one match per scheduled pairing, scores
/// accumulated across matches, standings reported at the end.
pub struct Tournament<'cfg> {
    config: &'cfg TournamentConfig,
    schedule: Vec<Pairing>,
    current: usize,
    scores: ScoreTable,
    match_state: Option<MatchState>,
    phase: Phase,
}

impl<'cfg> Tournament<'cfg> {
    pub fn new(config: &'cfg TournamentConfig) -> Self {
        let schedule = round_robin(config.player_count());
        let scores = ScoreTable::new(config.player_count());
        let (match_state, phase) = match schedule.first() {
            Some(&pairing) => (Some(MatchState::new(pairing)), Phase::SelectingColumn),
            None => (None, Phase::TournamentComplete),
        };
        Self {
            config,
            schedule,
            current: 0,
            scores,
            match_state,
            phase,
        }
    }

    pub fn config(&self) -> &TournamentConfig {
        self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    /// State of the match in progress (or just finished). `None` once the
    /// schedule is exhausted.
    pub fn match_state(&self) -> Option<&MatchState> {
        self.match_state.as_ref()
    }

    /// Pairing currently being played (or just finished).
    pub fn pairing(&self) -> Option<Pairing> {
        self.schedule.get(self.current).copied()
    }

    /// 1-based number of the current match, for display.
    pub fn match_number(&self) -> usize {
        (self.current + 1).min(self.schedule.len())
    }

    pub fn match_total(&self) -> usize {
        self.schedule.len()
    }

    /// Feed one abstract command through the state machine.
    pub fn handle(&mut self, command: Command) -> Flow {
        match self.phase {
            Phase::SelectingColumn => self.handle_selecting(command),
            // Round endings wait for a single arbitrary key press.
            Phase::RoundWon | Phase::RoundDraw => {
                self.advance_round();
                Flow::Continue
            }
            Phase::TournamentComplete | Phase::Aborted => Flow::Exit,
        }
    }

    fn handle_selecting(&mut self, command: Command) -> Flow {
        if command == Command::Quit {
            self.phase = Phase::Aborted;
            return Flow::Exit;
        }
        let Some(state) = self.match_state.as_mut() else {
            return Flow::Continue;
        };
        match command {
            Command::MoveLeft => {
                state.column_full = false;
                state.cursor = state.cursor.saturating_sub(1);
            }
            Command::MoveRight => {
                state.column_full = false;
                state.cursor = (state.cursor + 1).min(COLS - 1);
            }
            Command::Confirm => self.resolve_drop(),
            // Unrecognized keys are silently ignored.
            Command::Quit | Command::Other => {}
        }
        Flow::Continue
    }

    /// Confirm pressed: drop at the cursor and classify the outcome.
    fn resolve_drop(&mut self) {
        let Some(state) = self.match_state.as_mut() else {
            return;
        };
        let pairing = self.schedule[self.current];
        let player = state.turn;

        if !state.board.drop_disc(state.cursor, player) {
            // Recoverable: the same player picks again.
            state.column_full = true;
            return;
        }
        state.column_full = false;

        if let Some(line) = find_winning_sequence(&state.board, player) {
            state.winning_line = Some(line);
            self.scores.record_win(player);
            self.phase = Phase::RoundWon;
        } else if state.board.is_full() {
            self.phase = Phase::RoundDraw;
        } else {
            // Turn switch: the opponent selects next.
            state.turn = pairing.opponent_of(player);
        }
    }

    /// Acknowledgment after a win or draw: start the next pairing, or wrap
    /// up once the schedule is exhausted.
    fn advance_round(&mut self) {
        self.current += 1;
        match self.schedule.get(self.current) {
            Some(&pairing) => {
                self.match_state = Some(MatchState::new(pairing));
                self.phase = Phase::SelectingColumn;
            }
            None => {
                self.match_state = None;
                self.phase = Phase::TournamentComplete;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TournamentConfig {
        TournamentConfig::default_roster()
    }

    fn drive(tournament: &mut Tournament, commands: &[Command]) {
        for &command in commands {
            assert_eq!(tournament.handle(command), Flow::Continue);
        }
    }

    /// Move the cursor to `target` and confirm a drop there.
    fn drop_at(tournament: &mut Tournament, target: usize) {
        loop {
            let cursor = tournament.match_state().expect("match active").cursor;
            if cursor == target {
                break;
            }
            let step = if cursor < target {
                Command::MoveRight
            } else {
                Command::MoveLeft
            };
            drive(tournament, &[step]);
        }
        drive(tournament, &[Command::Confirm]);
    }

    /// Play out a match so the pairing's first player wins with a vertical
    /// line in column 0 while the second stacks in column 1.
    fn play_first_player_win(tournament: &mut Tournament) {
        for _ in 0..3 {
            drop_at(tournament, 0);
            drop_at(tournament, 1);
        }
        drop_at(tournament, 0);
        assert_eq!(tournament.phase(), Phase::RoundWon);
    }

    #[test]
    fn test_initial_state() {
        let config = config();
        let tournament = Tournament::new(&config);
        assert_eq!(tournament.phase(), Phase::SelectingColumn);
        assert_eq!(tournament.match_total(), 6);
        assert_eq!(tournament.match_number(), 1);
        let state = tournament.match_state().unwrap();
        assert_eq!(state.turn, PlayerId(0));
        assert_eq!(state.cursor, 0);
        assert!(state.winning_line.is_none());
        assert!(!state.column_full);
    }

    #[test]
    fn test_cursor_clamps_at_both_edges() {
        let config = config();
        let mut tournament = Tournament::new(&config);
        drive(&mut tournament, &[Command::MoveLeft]);
        assert_eq!(tournament.match_state().unwrap().cursor, 0);
        for _ in 0..10 {
            drive(&mut tournament, &[Command::MoveRight]);
        }
        assert_eq!(tournament.match_state().unwrap().cursor, COLS - 1);
    }

    #[test]
    fn test_confirm_alternates_turn() {
        let config = config();
        let mut tournament = Tournament::new(&config);
        drive(&mut tournament, &[Command::Confirm]);
        assert_eq!(tournament.match_state().unwrap().turn, PlayerId(1));
        drive(&mut tournament, &[Command::Confirm]);
        assert_eq!(tournament.match_state().unwrap().turn, PlayerId(0));
    }

    #[test]
    fn test_full_column_reprompts_same_player() {
        let config = config();
        let mut tournament = Tournament::new(&config);
        // Alternating drops fill column 0 without a line: A B A B A B.
        for _ in 0..6 {
            drop_at(&mut tournament, 0);
        }
        let turn_before = tournament.match_state().unwrap().turn;
        drop_at(&mut tournament, 0);
        let state = tournament.match_state().unwrap();
        assert!(state.column_full);
        assert_eq!(state.turn, turn_before);
        assert_eq!(tournament.phase(), Phase::SelectingColumn);
    }

    #[test]
    fn test_column_full_notice_cleared_by_cursor_move() {
        let config = config();
        let mut tournament = Tournament::new(&config);
        for _ in 0..6 {
            drop_at(&mut tournament, 0);
        }
        drop_at(&mut tournament, 0);
        assert!(tournament.match_state().unwrap().column_full);
        drive(&mut tournament, &[Command::MoveRight]);
        assert!(!tournament.match_state().unwrap().column_full);
    }

    #[test]
    fn test_win_records_score_and_presents_line() {
        let config = config();
        let mut tournament = Tournament::new(&config);
        play_first_player_win(&mut tournament);
        assert_eq!(tournament.scores().wins(PlayerId(0)), 1);
        assert_eq!(tournament.scores().wins(PlayerId(1)), 0);
        let line = tournament.match_state().unwrap().winning_line.unwrap();
        assert_eq!(line, [(2, 0), (3, 0), (4, 0), (5, 0)]);
    }

    #[test]
    fn test_acknowledgment_advances_to_next_pairing() {
        let config = config();
        let mut tournament = Tournament::new(&config);
        play_first_player_win(&mut tournament);
        drive(&mut tournament, &[Command::Other]);
        assert_eq!(tournament.phase(), Phase::SelectingColumn);
        assert_eq!(tournament.match_number(), 2);
        let state = tournament.match_state().unwrap();
        // Second pairing of a four-player roster is (0, 2); fresh board.
        assert_eq!(state.turn, PlayerId(0));
        assert!(state.board.cell(5, 0).is_none());
        assert!(state.winning_line.is_none());
    }

    #[test]
    fn test_quit_aborts_mid_match() {
        let config = config();
        let mut tournament = Tournament::new(&config);
        drive(&mut tournament, &[Command::Confirm, Command::MoveRight]);
        assert_eq!(tournament.handle(Command::Quit), Flow::Exit);
        assert_eq!(tournament.phase(), Phase::Aborted);
    }

    #[test]
    fn test_other_keys_ignored_while_selecting() {
        let config = config();
        let mut tournament = Tournament::new(&config);
        drive(&mut tournament, &[Command::Other, Command::Other]);
        let state = tournament.match_state().unwrap();
        assert_eq!(state.cursor, 0);
        assert_eq!(state.turn, PlayerId(0));
        assert_eq!(tournament.phase(), Phase::SelectingColumn);
    }

    #[test]
    fn test_tournament_completes_after_all_pairings() {
        let config = config();
        let mut tournament = Tournament::new(&config);
        for _ in 0..6 {
            play_first_player_win(&mut tournament);
            drive(&mut tournament, &[Command::Other]);
        }
        assert_eq!(tournament.phase(), Phase::TournamentComplete);
        assert!(tournament.match_state().is_none());
        // First player of every pairing won: 0 plays first three times.
        assert_eq!(tournament.scores().wins(PlayerId(0)), 3);
        assert_eq!(tournament.scores().wins(PlayerId(1)), 2);
        assert_eq!(tournament.scores().wins(PlayerId(2)), 1);
        assert_eq!(tournament.scores().wins(PlayerId(3)), 0);
        // Final acknowledgment exits the loop.
        assert_eq!(tournament.handle(Command::Other), Flow::Exit);
    }

    #[test]
    fn test_score_table_starts_at_zero() {
        let scores = ScoreTable::new(4);
        for i in 0..4 {
            assert_eq!(scores.wins(PlayerId(i)), 0);
        }
    }
}
