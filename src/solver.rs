use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::Serialize;
use strum::{Display as StrumDisplay, EnumString, VariantArray};

use crate::grid::{Grid, StepNumber};
use crate::location::{Dimension, Location};
use crate::moves::MoveSet;

/// How each search step orders the moves it is about to try.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, StrumDisplay, EnumString, VariantArray, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Try moves exactly in [`MoveSet`] order, with no pruning whatsoever.
    /// Exhaustive and reproducible, but exponential as the grid grows.
    #[default]
    Ordered,
    /// Try moves into the cells with the fewest vacant onward cells first (Warnsdorff's rule), breaking ties by [`MoveSet`] order.
    /// Failed branches are still backtracked, so no tour is ever missed.
    Warnsdorff,
}

/// Hooks into a running [`TourSearch`]. Every method defaults to doing nothing, as does `()`.
pub trait Observer {
    /// A search step was entered at `at`, which holds step `step - 1`; `step` is the number the next cell would receive.
    fn entered(&mut self, grid: &Grid, at: Location, step: StepNumber) {
        let _ = (grid, at, step);
    }

    /// Every move out of `cell` failed, so `cell` was reset to vacant.
    fn retracted(&mut self, grid: &Grid, cell: Location) {
        let _ = (grid, cell);
    }
}

impl Observer for () {}

struct Frame {
    at: Location,
    // the number the next cell on the path will receive
    step: StepNumber,
    candidates: Vec<Location>,
    cursor: usize,
}

enum Entered {
    Complete,
    Open(Frame),
}

/// One depth first search for a tour, owning its grid and attempt counter.
///
/// Build one with a [`SearchBuilder`](crate::SearchBuilder), then [`solve`](Self::solve) it.
///
/// # Search
/// The start cell is marked 1. Each step then takes the cell the path currently ends on and tries its moves in turn.
/// A move is skipped if it leaves the grid or lands on a visited cell; otherwise the landing cell gets the next step number and the search steps again from there.
/// Once every cell is numbered the search succeeds at once.
/// When every move out of a cell has failed, that cell is reset to 0 and its predecessor moves on to its next move.
///
/// Steps are kept on an explicit stack of frames rather than the call stack, so the depth of the path (up to N²) costs heap, not stack.
pub struct TourSearch {
    grid: Grid,
    start: Location,
    moves: MoveSet,
    strategy: Strategy,
    attempts: u64,
}

impl TourSearch {
    pub(crate) fn new(size: Dimension, start: Location, moves: MoveSet, strategy: Strategy) -> Self {
        Self {
            grid: Grid::with_size(size),
            start,
            moves,
            strategy,
            attempts: 0,
        }
    }

    /// The side length of the grid to be toured.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Where the tour starts.
    pub fn start(&self) -> Location {
        self.start
    }

    /// The moves this search makes, in the order it tries them.
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// The grid as it stands; blank until the search runs.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Run the search to completion, consuming `self`.
    ///
    /// Either a tour is found and the returned grid is completely numbered, or every path from the start was exhausted and the grid is blank again.
    pub fn solve(self) -> Tour {
        self.solve_observed(&mut ())
    }

    /// As [`Self::solve`], reporting every step entered and every cell retracted to `observer`.
    pub fn solve_observed<O: Observer>(mut self, observer: &mut O) -> Tour {
        let found = self.run(observer);

        Tour {
            found,
            attempts: self.attempts,
            start: self.start,
            strategy: self.strategy,
            moves: self.moves,
            grid: self.grid,
        }
    }

    fn run<O: Observer>(&mut self, observer: &mut O) -> bool {
        self.grid.mark(self.start, 1);

        let mut stack = Vec::with_capacity(self.grid.cell_count());
        match self.enter(self.start, 2, observer) {
            Entered::Complete => return true,
            Entered::Open(frame) => stack.push(frame),
        }

        while let Some(frame) = stack.last_mut() {
            match Self::next_candidate(&self.grid, frame) {
                Some((next, step)) => {
                    self.grid.mark(next, step);
                    match self.enter(next, step + 1, observer) {
                        Entered::Complete => return true,
                        Entered::Open(frame) => stack.push(frame),
                    }
                }
                None => {
                    // every move out of this frame failed; the start cell is cleared too, leaving a blank grid
                    let Some(exhausted) = stack.pop() else { break };
                    self.grid.clear(exhausted.at);
                    if !stack.is_empty() {
                        observer.retracted(&self.grid, exhausted.at);
                    }
                }
            }
        }

        false
    }

    fn enter<O: Observer>(&mut self, at: Location, step: StepNumber, observer: &mut O) -> Entered {
        self.attempts += 1;
        observer.entered(&self.grid, at, step);

        if step > self.grid.cell_count() {
            return Entered::Complete;
        }

        Entered::Open(Frame {
            at,
            step,
            candidates: self.candidates(at),
            cursor: 0,
        })
    }

    fn candidates(&self, at: Location) -> Vec<Location> {
        let on_grid = self.moves.targets_from(at).filter(|target| self.grid.contains(*target));

        match self.strategy {
            Strategy::Ordered => on_grid.collect_vec(),
            // stable, so equal degrees keep move order
            Strategy::Warnsdorff => on_grid
                .sorted_by_key(|target| match self.grid.is_vacant(*target) {
                    true => self.onward_degree(*target),
                    false => usize::MAX,
                })
                .collect_vec(),
        }
    }

    fn onward_degree(&self, from: Location) -> usize {
        self.moves.targets_from(from)
            .filter(|target| self.grid.is_vacant(*target))
            .count()
    }

    fn next_candidate(grid: &Grid, frame: &mut Frame) -> Option<(Location, StepNumber)> {
        while let Some(candidate) = frame.candidates.get(frame.cursor).copied() {
            frame.cursor += 1;
            if grid.is_vacant(candidate) {
                return Some((candidate, frame.step));
            }
        }

        None
    }
}

/// The outcome of a [`TourSearch`].
#[derive(Clone, Debug, Serialize)]
pub struct Tour {
    found: bool,
    attempts: u64,
    start: Location,
    strategy: Strategy,
    moves: MoveSet,
    grid: Grid,
}

impl Tour {
    /// Whether a tour was found.
    pub fn found(&self) -> bool {
        self.found
    }

    /// How many search steps were entered, counting the first and any that failed.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Where the tour starts.
    pub fn start(&self) -> Location {
        self.start
    }

    /// The strategy the search ran with.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The moves the search made.
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// The numbered grid if a tour was found, a blank one otherwise.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Take the grid, dropping everything else.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// The cells in the order the tour visits them; empty if no tour was found.
    pub fn path(&self) -> Vec<Location> {
        self.grid.path()
    }

    /// Whether the tour is closed ("re-entrant"), i.e. one more move returns from the last cell to the first.
    pub fn is_closed(&self) -> bool {
        let path = self.path();
        match (path.first(), path.last()) {
            (Some(first), Some(last)) if self.found && path.len() > 1 => self.moves.connects(*last, *first),
            _ => false,
        }
    }
}

impl Display for Tour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.found {
            write!(f, "{}\nTook {} attempts to find this solution", self.grid, self.attempts)
        } else {
            write!(f, "No tour of the {n}x{n} grid from {} after {} attempts", self.start, self.attempts, n = self.grid.size())
        }
    }
}
