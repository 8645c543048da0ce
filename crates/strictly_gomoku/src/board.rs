//! Sparse, write-once board.

use super::types::{Coordinate, MarkKind};
use std::collections::HashMap;
use tracing::instrument;

/// Error returned when placing a mark fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    AlreadyOccupied(Coordinate),
}

impl std::error::Error for BoardError {}

/// Marks placed on the unbounded grid.
///
/// Placement is append-only: a cell that holds a mark keeps it
/// for the lifetime of the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    marks: HashMap<Coordinate, MarkKind>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at `coordinate`, if any.
    pub fn mark_at(&self, coordinate: Coordinate) -> Option<MarkKind> {
        self.marks.get(&coordinate).copied()
    }

    /// Places `kind` at `coordinate`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::AlreadyOccupied`] if the cell holds a mark of either kind.
    #[instrument(skip(self))]
    pub fn place(&mut self, coordinate: Coordinate, kind: MarkKind) -> Result<(), BoardError> {
        if self.marks.contains_key(&coordinate) {
            return Err(BoardError::AlreadyOccupied(coordinate));
        }
        self.marks.insert(coordinate, kind);
        Ok(())
    }

    /// Checks whether a cell holds a mark.
    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.marks.contains_key(&coordinate)
    }

    /// Number of placed marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Checks whether no mark has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Number of marks of the given kind.
    pub fn count(&self, kind: MarkKind) -> usize {
        self.marks.values().filter(|&&k| k == kind).count()
    }

    /// Iterates over all placed marks in arbitrary order.
    pub fn marks(&self) -> impl Iterator<Item = (Coordinate, MarkKind)> + '_ {
        self.marks.iter().map(|(&c, &k)| (c, k))
    }

    /// Returns the lower-left and upper-right corners of the occupied area.
    pub fn bounds(&self) -> Option<(Coordinate, Coordinate)> {
        let mut cells = self.marks.keys();
        let first = *cells.next()?;
        let (min, max) = cells.fold((first, first), |(min, max), c| {
            (
                Coordinate::new(min.x.min(c.x), min.y.min(c.y)),
                Coordinate::new(max.x.max(c.x), max.y.max(c.y)),
            )
        });
        Some((min, max))
    }
}
