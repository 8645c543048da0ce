//! Game session: sequences placement, win detection and turn order.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules::{check_win, WinLine};
use super::{Board, Coordinate, MarkKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Where a session stands.
///
/// `Ended` is terminal: once reached, no further move is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionStatus {
    /// Waiting for `turn` to move.
    InProgress {
        /// Kind of the next mark to be placed.
        turn: MarkKind,
    },
    /// A run of five was completed.
    Ended {
        /// Kind that completed the run.
        winner: MarkKind,
        /// The completed run.
        win_line: WinLine,
    },
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on with the other kind to move.
    Continued {
        /// The mark just placed.
        placed: Move,
        /// Kind to move next.
        next_turn: MarkKind,
    },
    /// The move completed a run of five and ended the game.
    Won {
        /// The mark just placed.
        placed: Move,
        /// The completed run.
        win_line: WinLine,
    },
}

impl MoveOutcome {
    /// The mark placed by the move.
    pub fn placed(&self) -> Move {
        match self {
            MoveOutcome::Continued { placed, .. } | MoveOutcome::Won { placed, .. } => *placed,
        }
    }
}

/// A single game between two players sharing one board.
///
/// Sessions own all of their state; any number may coexist.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameSession {
    /// Every mark placed so far.
    pub(crate) board: Board,
    /// Current phase of the game.
    pub(crate) status: SessionStatus,
}

impl GameSession {
    /// Starts a new game with [`MarkKind::First`] to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: SessionStatus::InProgress {
                turn: MarkKind::First,
            },
        }
    }

    /// Places the current player's mark at `coordinate`.
    ///
    /// On success the turn passes to the other kind, or the session ends if the
    /// mark completed a run of five. Postconditions are checked in debug builds only.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyEnded`] if the session has ended.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    ///
    /// A rejected move leaves the session unchanged.
    #[instrument(skip(self), fields(turn = ?self.turn()))]
    pub fn request_move(&mut self, coordinate: Coordinate) -> Result<MoveOutcome, MoveError> {
        let turn = match self.status {
            SessionStatus::InProgress { turn } => turn,
            SessionStatus::Ended { .. } => {
                warn!("Move requested after the game ended");
                return Err(MoveError::GameAlreadyEnded);
            }
        };
        let placed = Move::new(turn, coordinate);

        if let Err(err) = MoveContract::pre(self, &placed) {
            warn!(%err, "Move rejected");
            return Err(err);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.place(coordinate, turn)?;

        let outcome = match check_win(&self.board, coordinate, turn) {
            Some(win_line) => {
                info!(winner = %turn, %win_line, "Game won");
                self.status = SessionStatus::Ended {
                    winner: turn,
                    win_line,
                };
                MoveOutcome::Won { placed, win_line }
            }
            None => {
                let next_turn = turn.opponent();
                debug!(%placed, %next_turn, "Move accepted");
                self.status = SessionStatus::InProgress { turn: next_turn };
                MoveOutcome::Continued { placed, next_turn }
            }
        };

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(outcome)
    }

    /// Kind to move next, or `None` once the game has ended.
    pub fn turn(&self) -> Option<MarkKind> {
        match self.status {
            SessionStatus::InProgress { turn } => Some(turn),
            SessionStatus::Ended { .. } => None,
        }
    }

    /// Checks whether the game has ended.
    pub fn is_ended(&self) -> bool {
        matches!(self.status, SessionStatus::Ended { .. })
    }

    /// The winning run, once the game has ended.
    pub fn win_line(&self) -> Option<&WinLine> {
        match &self.status {
            SessionStatus::Ended { win_line, .. } => Some(win_line),
            SessionStatus::InProgress { .. } => None,
        }
    }

    /// The kind that won, once the game has ended.
    pub fn winner(&self) -> Option<MarkKind> {
        match self.status {
            SessionStatus::Ended { winner, .. } => Some(winner),
            SessionStatus::InProgress { .. } => None,
        }
    }

    /// Marks outside the winning run, sorted by coordinate.
    ///
    /// These are the marks a host de-emphasizes when the game ends.
    /// Empty while the game is in progress.
    pub fn faded_marks(&self) -> Vec<(Coordinate, MarkKind)> {
        let Some(win_line) = self.win_line() else {
            return Vec::new();
        };
        let mut faded: Vec<_> = self
            .board
            .marks()
            .filter(|(c, _)| !win_line.contains(*c))
            .collect();
        faded.sort_unstable();
        faded
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(session: &mut GameSession, cells: &[(i32, i32)]) -> MoveOutcome {
        let mut last = None;
        for &cell in cells {
            last = Some(session.request_move(cell.into()).unwrap());
        }
        last.expect("at least one move")
    }

    #[test]
    fn test_new_session_first_to_move() {
        let session = GameSession::new();
        assert_eq!(session.turn(), Some(MarkKind::First));
        assert!(!session.is_ended());
        assert!(session.board().is_empty());
    }

    #[test]
    fn test_accepted_move_flips_turn() {
        let mut session = GameSession::new();
        let outcome = session.request_move(Coordinate::new(0, 0)).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Continued {
                placed: Move::new(MarkKind::First, Coordinate::new(0, 0)),
                next_turn: MarkKind::Second,
            }
        );
        assert_eq!(session.turn(), Some(MarkKind::Second));
    }

    #[test]
    fn test_occupied_cell_leaves_session_unchanged() {
        let mut session = GameSession::new();
        session.request_move(Coordinate::new(0, 0)).unwrap();
        let before = session.clone();

        let result = session.request_move(Coordinate::new(0, 0));
        assert_eq!(result, Err(MoveError::CellOccupied(Coordinate::new(0, 0))));
        assert_eq!(session, before);
    }

    #[test]
    fn test_win_ends_session() {
        let mut session = GameSession::new();
        // First plays y = 0, Second plays y = 5.
        let outcome = play(
            &mut session,
            &[(0, 0), (0, 5), (1, 0), (1, 5), (2, 0), (2, 5), (3, 0), (3, 5), (4, 0)],
        );

        assert!(matches!(outcome, MoveOutcome::Won { .. }));
        assert_eq!(session.winner(), Some(MarkKind::First));
        assert_eq!(session.turn(), None);
        assert_eq!(session.faded_marks().len(), 4);
        assert!(
            session
                .faded_marks()
                .iter()
                .all(|(_, kind)| *kind == MarkKind::Second)
        );
    }

    #[test]
    fn test_faded_marks_empty_in_progress() {
        let mut session = GameSession::new();
        play(&mut session, &[(0, 0), (1, 1)]);
        assert!(session.faded_marks().is_empty());
    }

    #[test]
    fn test_status_serializes_with_tag() {
        let status = SessionStatus::InProgress {
            turn: MarkKind::Second,
        };
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json["state"], "in_progress");
        assert_eq!(json["turn"], "Second");
    }
}
