//! Terminal host: turns text input into move requests and reports results.

use crate::config::HostConfig;
use crate::render::{render_board, status_line};
use anyhow::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use strictly_gomoku::{Coordinate, GameSession, Move, MoveError, SessionStatus};
use tracing::{debug, info, instrument, warn};

/// Input that does not name a grid cell.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Cannot read {:?} as a coordinate (expected x,y)", input)]
pub struct ParseCoordinateError {
    /// The rejected input.
    pub input: String,
}

impl std::error::Error for ParseCoordinateError {}

/// Parses `x,y`, `x y` or `(x, y)` into a coordinate.
#[instrument]
pub fn parse_coordinate(text: &str) -> Result<Coordinate, ParseCoordinateError> {
    let err = || ParseCoordinateError {
        input: text.to_string(),
    };

    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(trimmed);

    let parts: Vec<&str> = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [x, y] => {
            let x = x.parse().map_err(|_| err())?;
            let y = y.parse().map_err(|_| err())?;
            Ok(Coordinate::new(x, y))
        }
        _ => Err(err()),
    }
}

/// Plays a hot-seat game, reading one coordinate per line from `input`.
///
/// Occupied cells and unreadable lines are reported and ignored. The loop
/// ends when the game is won, on `quit`, or at end of input.
#[instrument(skip_all)]
pub fn run_interactive<R, W>(
    session: &mut GameSession,
    config: &HostConfig,
    mut input: R,
    mut output: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", render_board(session, config))?;
    writeln!(output, "{}", status_line(session, config))?;

    while let Some(turn) = session.turn() {
        write!(output, "{} > ", config.symbol(turn, false))?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("End of input");
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("q") {
            info!("Player quit");
            break;
        }

        let coordinate = match parse_coordinate(line) {
            Ok(coordinate) => coordinate,
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };

        match session.request_move(coordinate) {
            Ok(_) => {
                write!(output, "{}", render_board(session, config))?;
                writeln!(output, "{}", status_line(session, config))?;
            }
            Err(err @ (MoveError::CellOccupied(_) | MoveError::GameAlreadyEnded)) => {
                writeln!(output, "{}, ignored", err)?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// A move in a replay list that the session refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Move {} at {} rejected: {}", index + 1, coordinate, source)]
pub struct ReplayError {
    /// Zero-based position of the move in the list.
    pub index: usize,
    /// The refused coordinate.
    pub coordinate: Coordinate,
    /// Why the session refused it.
    pub source: MoveError,
}

/// Applies `moves` in order to a new session.
///
/// Unlike the interactive loop, any refused move aborts the replay,
/// including moves listed after the game was won.
#[instrument(skip_all, fields(moves = moves.len()))]
pub fn replay(moves: &[Coordinate]) -> Result<GameSession, ReplayError> {
    let mut session = GameSession::new();
    for (index, &coordinate) in moves.iter().enumerate() {
        session
            .request_move(coordinate)
            .map_err(|source| {
                warn!(index, %coordinate, %source, "Replay stopped");
                ReplayError {
                    index,
                    coordinate,
                    source,
                }
            })?;
    }
    info!(ended = session.is_ended(), "Replay finished");
    Ok(session)
}

/// Serializable view of a session for machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Every placed mark, sorted by coordinate.
    pub marks: Vec<Move>,
    /// Current status, including the win line once ended.
    pub status: SessionStatus,
    /// Marks outside the winning line; empty while in progress.
    pub faded: Vec<Move>,
}

impl From<&GameSession> for GameSnapshot {
    fn from(session: &GameSession) -> Self {
        let mut marks: Vec<Move> = session
            .board()
            .marks()
            .map(|(coordinate, mark)| Move::new(mark, coordinate))
            .collect();
        marks.sort_unstable_by_key(|m| m.coordinate);

        let faded = session
            .faded_marks()
            .into_iter()
            .map(|(coordinate, mark)| Move::new(mark, coordinate))
            .collect();

        Self {
            marks,
            status: *session.status(),
            faded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepted_forms() {
        for text in ["3,-4", " 3 , -4 ", "3 -4", "(3, -4)", "(3,-4)\n"] {
            assert_eq!(parse_coordinate(text), Ok(Coordinate::new(3, -4)), "{text:?}");
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", "3", "3,4,5", "a,b", "(3,4", "99999999999,0"] {
            assert!(parse_coordinate(text).is_err(), "{text:?}");
        }
    }

    #[test]
    fn test_replay_error_names_move() {
        let moves = [Coordinate::new(0, 0), Coordinate::new(0, 0)];
        let err = replay(&moves).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.source, MoveError::CellOccupied(Coordinate::new(0, 0)));
        assert_eq!(
            err.to_string(),
            "Move 2 at (0, 0) rejected: Cell (0, 0) is already occupied"
        );
    }
}
