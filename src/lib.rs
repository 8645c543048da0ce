//! Strictly Gomoku terminal host library
//!
//! Everything the `strictly_gomoku` binary needs around the engine:
//! display configuration, text rendering and the input loop.
//!
//! # Architecture
//!
//! - **Engine**: [`strictly_gomoku`], re-exported here
//! - **Config**: display symbols and margins loaded from TOML
//! - **Render**: plain-text board and status line
//! - **Host**: coordinate parsing, hot-seat loop, move-list replay
//!
//! # Example
//!
//! ```
//! use strictly_gomoku_cli::{replay, render_board, Coordinate, HostConfig};
//!
//! let session = replay(&[Coordinate::new(0, 0), Coordinate::new(1, 0)]).unwrap();
//! let text = render_board(&session, &HostConfig::default());
//! assert!(text.contains('X'));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod host;
mod render;

// Crate-level exports - Configuration
pub use config::{ConfigError, HostConfig};

// Crate-level exports - Host loop
pub use host::{parse_coordinate, replay, run_interactive, GameSnapshot, ParseCoordinateError, ReplayError};

// Crate-level exports - Rendering
pub use render::{render_board, status_line, MAX_VIEW_SPAN};

// Crate-level exports - Engine types
pub use strictly_gomoku::{
    check_win, has_five_through, longest_run_through, Board, BoardError, Coordinate, Direction,
    GameSession, MarkKind, Move, MoveError, MoveOutcome, SessionStatus, WinLine, WIN_LENGTH,
};
