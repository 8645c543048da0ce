//! Balanced marks invariant: kinds alternate, First always moves first.

use super::super::{GameSession, MarkKind, SessionStatus};
use super::Invariant;

/// Invariant: mark counts match strict alternation.
///
/// First has either as many marks as Second or exactly one more. The kind
/// to move (or the winner, who moved last) must agree with those counts.
pub struct BalancedMarksInvariant;

impl Invariant<GameSession> for BalancedMarksInvariant {
    fn holds(session: &GameSession) -> bool {
        let first = session.board().count(MarkKind::First);
        let second = session.board().count(MarkKind::Second);

        let first_moved_last = if first == second + 1 {
            true
        } else if first == second {
            false
        } else {
            return false;
        };

        match *session.status() {
            SessionStatus::InProgress { turn } => (turn == MarkKind::Second) == first_moved_last,
            SessionStatus::Ended { winner, .. } => (winner == MarkKind::First) == first_moved_last,
        }
    }

    fn description() -> &'static str {
        "Mark counts follow alternation starting with First"
    }
}
