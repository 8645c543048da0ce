//! Contract-based validation for move requests.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, SessionInvariants};
use super::session::GameSession;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the session still accepts moves.
pub struct GameNotEnded;

impl GameNotEnded {
    /// Fails with [`MoveError::GameAlreadyEnded`] once the session has ended.
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        if session.is_ended() {
            Err(MoveError::GameAlreadyEnded)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] if the cell holds a mark.
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), MoveError> {
        if session.board().is_occupied(mov.coordinate) {
            Err(MoveError::CellOccupied(mov.coordinate))
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move requests.
///
/// Preconditions:
/// - Session has not ended
/// - Target cell is empty
///
/// Postconditions:
/// - Exactly one mark was added and no earlier mark changed
/// - Session invariants hold
pub struct MoveContract;

impl Contract<GameSession, Move> for MoveContract {
    fn pre(session: &GameSession, action: &Move) -> Result<(), MoveError> {
        GameNotEnded::check(session)?;
        CellIsEmpty::check(action, session)
    }

    #[instrument(skip_all)]
    fn post(before: &GameSession, after: &GameSession) -> Result<(), MoveError> {
        let grew_by_one = after.board().len() == before.board().len() + 1;
        let kept_marks = before
            .board()
            .marks()
            .all(|(c, k)| after.board().mark_at(c) == Some(k));
        if !grew_by_one || !kept_marks {
            warn!(grew_by_one, kept_marks, "Board changed beyond one placement");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move must add exactly one mark".to_string(),
            ));
        }

        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
