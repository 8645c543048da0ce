//! Win line invariant: the session ends exactly when a run of five exists.

use super::super::rules::has_five_through;
use super::super::{Direction, GameSession, SessionStatus, WIN_LENGTH};
use super::Invariant;

/// Invariant: the recorded win line is real, and no unrecorded one exists.
///
/// When ended, the win line is five contiguous collinear cells all holding
/// the winner's kind. While in progress, no run of five exists anywhere.
/// The second half is checked with the orientation count rather than the
/// directional sweep that produced the status.
pub struct WinLineInvariant;

impl Invariant<GameSession> for WinLineInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        match session.status() {
            SessionStatus::Ended { winner, win_line } => {
                let cells = win_line.cells();
                let owned = cells.iter().all(|&c| board.mark_at(c) == Some(*winner));
                let contiguous = Direction::SWEEP.iter().any(|&d| {
                    (0..WIN_LENGTH).all(|i| cells[i] == cells[0].offset(d, i as i32))
                });
                owned && contiguous
            }
            SessionStatus::InProgress { .. } => board
                .marks()
                .all(|(c, kind)| !has_five_through(board, c, kind)),
        }
    }

    fn description() -> &'static str {
        "Session ends exactly when five in a row exist"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, MarkKind};

    #[test]
    fn test_won_session_holds() {
        let mut session = GameSession::new();
        for y in 0..4 {
            session.request_move(Coordinate::new(0, y)).unwrap();
            session.request_move(Coordinate::new(1, y)).unwrap();
        }
        session.request_move(Coordinate::new(0, 4)).unwrap();

        assert!(session.is_ended());
        assert!(WinLineInvariant::holds(&session));
    }

    #[test]
    fn test_unrecorded_five_violates() {
        let mut session = GameSession::new();
        for x in 0..5 {
            session
                .board
                .place(Coordinate::new(x, x), MarkKind::Second)
                .unwrap();
        }
        assert!(!WinLineInvariant::holds(&session));
    }

    #[test]
    fn test_four_in_progress_holds() {
        let mut session = GameSession::new();
        for x in 0..4 {
            session
                .board
                .place(Coordinate::new(x, 0), MarkKind::First)
                .unwrap();
        }
        assert!(WinLineInvariant::holds(&session));
    }
}
