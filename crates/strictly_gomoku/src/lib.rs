//! Five-in-a-row on an unbounded grid.
//!
//! Two players alternate placing crosses ([`MarkKind::First`]) and rings
//! ([`MarkKind::Second`]) at integer coordinates. The first to complete five
//! contiguous marks horizontally, vertically or diagonally wins.
//!
//! # Architecture
//!
//! - **Board**: sparse, write-once map from [`Coordinate`] to [`MarkKind`]
//! - **Rules**: win detection starting from the last placed mark
//! - **Session**: turn order and the in-progress/ended state machine
//! - **Contracts/Invariants**: move preconditions and debug-build postconditions
//!
//! # Example
//!
//! ```
//! use strictly_gomoku::{Coordinate, GameSession, MoveOutcome};
//!
//! let mut session = GameSession::new();
//! let outcome = session.request_move(Coordinate::new(0, 0)).unwrap();
//! assert!(matches!(outcome, MoveOutcome::Continued { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod contracts;
pub mod invariants;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, BoardError};
pub use rules::{check_win, has_five_through, longest_run_through, WinLine};
pub use session::{GameSession, MoveOutcome, SessionStatus};
pub use types::{Coordinate, Direction, MarkKind, WIN_LENGTH};
