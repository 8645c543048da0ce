//! Win detection for five-in-a-row.
//!
//! Only the cell that just changed can complete a line, so detection starts
//! from the last placed mark instead of scanning the whole board.

use super::super::{Board, Coordinate, Direction, MarkKind, WIN_LENGTH};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The five cells of a winning run, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Coordinate; WIN_LENGTH]);

impl WinLine {
    /// Returns the cells of the line.
    pub fn cells(&self) -> &[Coordinate; WIN_LENGTH] {
        &self.0
    }

    /// Checks whether the line passes through `coordinate`.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.0.contains(&coordinate)
    }

    /// First cell in scan order.
    pub fn first(&self) -> Coordinate {
        self.0[0]
    }

    /// Last cell in scan order.
    pub fn last(&self) -> Coordinate {
        self.0[WIN_LENGTH - 1]
    }

    fn walk(start: Coordinate, direction: Direction) -> Self {
        Self(std::array::from_fn(|i| start.offset(direction, i as i32)))
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.first(), self.last())
    }
}

/// Checks whether placing `kind` at `last_placed` completed a run of five.
///
/// Each of the eight directions is tried in [`Direction::SWEEP`] order. For a
/// direction `d` the run starting at `last_placed` is tested first, then the
/// runs that start at `last_placed + d * i` for the interior offsets
/// `i = 1..=3` and walk back along `-d`. The far endpoint of a run is reached
/// by the direct check of the opposite direction. The first run that matches
/// is returned.
#[instrument(skip(board))]
pub fn check_win(board: &Board, last_placed: Coordinate, kind: MarkKind) -> Option<WinLine> {
    for direction in Direction::SWEEP {
        if is_run(board, last_placed, direction, kind) {
            debug!(?direction, "Direct run found");
            return Some(WinLine::walk(last_placed, direction));
        }

        let reverse = direction.reverse();
        for i in 1..=(WIN_LENGTH - 2) as i32 {
            let start = last_placed.offset(direction, i);
            if is_run(board, start, reverse, kind) {
                debug!(?direction, offset = i, "Run through interior cell found");
                return Some(WinLine::walk(start, reverse));
            }
        }
    }

    None
}

/// Checks whether the five cells from `start` along `direction` all hold `kind`.
fn is_run(board: &Board, start: Coordinate, direction: Direction, kind: MarkKind) -> bool {
    (0..WIN_LENGTH as i32).all(|i| board.mark_at(start.offset(direction, i)) == Some(kind))
}

/// Length of the longest contiguous run of `kind` passing through `coordinate`.
///
/// Counts outwards along both halves of each of the four line orientations.
/// Returns 0 when `coordinate` does not hold `kind`.
#[instrument(skip(board))]
pub fn longest_run_through(board: &Board, coordinate: Coordinate, kind: MarkKind) -> usize {
    if board.mark_at(coordinate) != Some(kind) {
        return 0;
    }

    Direction::ORIENTATIONS
        .iter()
        .map(|&direction| {
            1 + count_from(board, coordinate, direction, kind)
                + count_from(board, coordinate, direction.reverse(), kind)
        })
        .max()
        .unwrap_or(1)
}

/// Checks whether a run of at least five of `kind` passes through `coordinate`.
pub fn has_five_through(board: &Board, coordinate: Coordinate, kind: MarkKind) -> bool {
    longest_run_through(board, coordinate, kind) >= WIN_LENGTH
}

/// Counts same-kind cells after `from` along `direction`, stopping at the first miss.
fn count_from(board: &Board, from: Coordinate, direction: Direction, kind: MarkKind) -> usize {
    (1..)
        .map(|i| from.offset(direction, i))
        .take_while(|&c| board.mark_at(c) == Some(kind))
        .count()
}
