//! Validated configuration of a [`TourSearch`](crate::TourSearch).

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::NonZero;

use crate::location::Location;
use crate::moves::{MoveSet, Piece};
use crate::solver::{Strategy, TourSearch};

/// Reasons a [`SearchBuilder`] may become invalid while building.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum InvalidReason {
    /// The grid was given a side length of zero.
    ZeroSize,
    /// The starting location lies outside the grid.
    StartOutOfBounds,
    /// The move set has no offsets, so not even a second cell can be reached.
    EmptyMoveSet,
    /// The move set contains `(0, 0)`, a move which goes nowhere.
    NullOffset,
}

impl Display for InvalidReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Self::ZeroSize => "grid size must be at least 1",
            Self::StartOutOfBounds => "starting location is off the grid",
            Self::EmptyMoveSet => "move set is empty",
            Self::NullOffset => "move set contains the null offset (0, 0)",
        })
    }
}

impl Error for InvalidReason {}

/// Configures and validates a [`TourSearch`].
///
/// Like any builder here, it mutates itself while building and can be [`Clone`]d to save its state.
/// Once a call has made it invalid, every further configuring call does nothing.
#[derive(Clone, Debug)]
pub struct SearchBuilder {
    size: usize,
    start: Location,
    moves: MoveSet,
    strategy: Strategy,
    invalid_reasons: Vec<InvalidReason>,
}

impl Default for SearchBuilder {
    fn default() -> Self {
        Self::with_size(5)
    }
}

impl SearchBuilder {
    /// A search over a `size` by `size` grid for a knight starting in the top left corner, trying moves in their fixed order.
    ///
    /// Causes a [`ZeroSize`](InvalidReason::ZeroSize) invalid state if `size` is 0.
    pub fn with_size(size: usize) -> Self {
        let mut invalid_reasons = Vec::new();
        if size == 0 {
            invalid_reasons.push(InvalidReason::ZeroSize);
        }

        Self {
            size,
            start: Location(0, 0),
            moves: MoveSet::default(),
            strategy: Strategy::default(),
            invalid_reasons,
        }
    }

    /// Start the tour at `location`.
    ///
    /// May cause a [`StartOutOfBounds`](InvalidReason::StartOutOfBounds) invalid state.
    pub fn start_at(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if location.0 >= self.size || location.1 >= self.size {
            self.invalid_reasons.push(InvalidReason::StartOutOfBounds);
            return self;
        }

        self.start = location;
        self
    }

    /// Move with `moves` instead of the knight's moves.
    ///
    /// May cause an [`EmptyMoveSet`](InvalidReason::EmptyMoveSet) or [`NullOffset`](InvalidReason::NullOffset) invalid state.
    pub fn moves(&mut self, moves: MoveSet) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if moves.is_empty() {
            self.invalid_reasons.push(InvalidReason::EmptyMoveSet);
            return self;
        }
        if moves.has_null_offset() {
            self.invalid_reasons.push(InvalidReason::NullOffset);
            return self;
        }

        self.moves = moves;
        self
    }

    /// Shorthand for [`Self::moves`] with the moves of `piece`.
    pub fn piece(&mut self, piece: Piece) -> &mut Self {
        self.moves(piece.moves())
    }

    /// Order candidate moves according to `strategy`.
    pub fn strategy(&mut self, strategy: Strategy) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        self.strategy = strategy;
        self
    }

    /// Check the validity of this builder.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<InvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<InvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a fresh [`TourSearch`] with a blank grid.
    pub fn build(&self) -> Result<TourSearch, &Vec<InvalidReason>> {
        let size = match NonZero::new(self.size) {
            Some(size) if self.invalid_reasons.is_empty() => size,
            _ => return Err(&self.invalid_reasons),
        };

        Ok(TourSearch::new(size, self.start, self.moves.clone(), self.strategy))
    }
}
