//! Core domain types for five-in-a-row.

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Number of contiguous same-kind marks that wins the game.
pub const WIN_LENGTH: usize = 5;

/// A cell on the unbounded grid.
///
/// `y` grows upwards, so [`Direction::Up`] is `(0, 1)`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Coordinate {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coordinate {
    /// The origin cell `(0, 0)`.
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    /// Creates a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `self + direction * steps`.
    ///
    /// Arithmetic wraps instead of panicking on overflow.
    pub fn offset(self, direction: Direction, steps: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x.wrapping_add(dx.wrapping_mul(steps)),
            y: self.y.wrapping_add(dy.wrapping_mul(steps)),
        }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Kind of mark a player places.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
    derive_more::Display,
)]
pub enum MarkKind {
    /// The cross. Always moves first.
    #[display("X")]
    First,
    /// The ring.
    #[display("O")]
    Second,
}

impl MarkKind {
    /// Returns the other kind.
    pub fn opponent(self) -> Self {
        match self {
            MarkKind::First => MarkKind::Second,
            MarkKind::Second => MarkKind::First,
        }
    }

    /// Conventional single-character symbol.
    pub fn symbol(self) -> char {
        match self {
            MarkKind::First => 'X',
            MarkKind::Second => 'O',
        }
    }
}

/// Unit step used to walk a line across the grid.
///
/// Variant order is the win-scan priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    /// `(-1, 0)`
    Left,
    /// `(1, 0)`
    Right,
    /// `(0, 1)`
    Up,
    /// `(0, -1)`
    Down,
    /// `(-1, -1)`
    DownLeft,
    /// `(-1, 1)`
    UpLeft,
    /// `(1, -1)`
    DownRight,
    /// `(1, 1)`
    UpRight,
}

impl Direction {
    /// All eight directions in scan priority order.
    pub const SWEEP: [Direction; 8] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
        Direction::DownLeft,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::UpRight,
    ];

    /// One direction per line orientation: horizontal, vertical and the two diagonals.
    pub const ORIENTATIONS: [Direction; 4] = [
        Direction::Right,
        Direction::Up,
        Direction::UpRight,
        Direction::DownRight,
    ];

    /// Returns the `(dx, dy)` step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::DownLeft => (-1, -1),
            Direction::UpLeft => (-1, 1),
            Direction::DownRight => (1, -1),
            Direction::UpRight => (1, 1),
        }
    }

    /// Returns the opposite direction.
    pub const fn reverse(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::DownLeft => Direction::UpRight,
            Direction::UpLeft => Direction::DownRight,
            Direction::DownRight => Direction::UpLeft,
            Direction::UpRight => Direction::DownLeft,
        }
    }
}
