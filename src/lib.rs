#![warn(missing_docs)]

//! # `cavalier`
//!
//! A solver for the [knight's tour](https://en.wikipedia.org/wiki/Knight%27s_tour): find a sequence of knight moves visiting every cell of a square grid exactly once.
//! Begin by configuring a search with a [`SearchBuilder`], then call [`solve()`](crate::TourSearch::solve), consuming the search and yielding a [`Tour`].
//! For the common case, [`solve()`] does both.
//!
//! Knights are not the only option: any [`Piece`] that leaps, or any hand-written [`MoveSet`], can be toured instead.
//!
//! # Internals
//! The search is a plain depth first search with backtracking.
//! Cells hold the step number on which they were visited, with 0 meaning unvisited.
//! Starting from step 1 on the start cell, moves are tried in the fixed order of the [`MoveSet`], and each move which fails to lead anywhere is undone before the next is tried.
//! By default there is no pruning and no randomness, so a search either finds the first tour in move order or proves there is none, and it takes exactly the same number of attempts every time.
//!
//! For instance, the knight on a 5x5 grid starting in the top left corner:
//!
//! ```
//! use cavalier::{solve, Location};
//!
//! let tour = solve(5, Location(0, 0)).unwrap();
//! assert!(tour.found());
//! assert_eq!(tour.grid().to_string(), " 1  6 15 10 21
//! 14  9 20  5 16
//! 19  2  7 22 11
//!  8 13 24 17  4
//! 25 18  3 12 23
//! ");
//! ```
//!
//! Exhaustive search grows exponentially with the grid, so larger grids want [`Strategy::Warnsdorff`], which visits the most constrained cells first.

pub use builder::{InvalidReason, SearchBuilder};
pub use graph::MoveGraph;
pub use grid::{Grid, StepNumber};
pub use location::{Location, Offset};
pub use moves::{MoveSet, Piece};
pub use solver::{Observer, Strategy, Tour, TourSearch};

pub mod builder;
pub(crate) mod graph;
pub(crate) mod grid;
pub(crate) mod location;
pub(crate) mod moves;
pub(crate) mod solver;
#[cfg(feature = "wasm")]
pub mod wasm;
mod tests;

/// Search for a knight's tour of a `size` by `size` grid from `start`, trying moves in their fixed order.
///
/// Returns every reason the arguments are invalid, if any.
pub fn solve(size: usize, start: Location) -> Result<Tour, Vec<InvalidReason>> {
    let mut builder = SearchBuilder::with_size(size);
    builder.start_at(start);

    let search = builder.build().map_err(|reasons| reasons.clone())?;
    Ok(search.solve())
}
