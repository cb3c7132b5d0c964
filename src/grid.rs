use std::fmt::{Display, Formatter};

use itertools::Itertools;
use ndarray::Array2;
use serde::{Serialize, Serializer};

use crate::location::{Dimension, Location};

/// The 1-based position of a cell within a tour. `0` marks a cell not yet visited.
pub type StepNumber = usize;

/// A square board of [`StepNumber`]s, indexed by [`Location`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    cells: Array2<StepNumber>,
    size: Dimension,
}

impl Grid {
    pub(crate) fn with_size(size: Dimension) -> Self {
        Self {
            cells: Array2::zeros((size.get(), size.get())),
            size,
        }
    }

    /// The side length of this grid.
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// The number of cells, i.e. the length of a complete tour.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `location` lies on this grid.
    pub fn contains(&self, location: Location) -> bool {
        location.within(self.size)
    }

    /// The step number at `location`, or [`None`] if `location` is off the grid.
    pub fn get(&self, location: Location) -> Option<StepNumber> {
        self.cells.get(location.as_index()).copied()
    }

    /// Whether `location` is on the grid and not yet visited.
    #[inline]
    pub fn is_vacant(&self, location: Location) -> bool {
        self.get(location) == Some(0)
    }

    #[inline]
    pub(crate) fn mark(&mut self, location: Location, step: StepNumber) {
        self.cells[location.as_index()] = step;
    }

    #[inline]
    pub(crate) fn clear(&mut self, location: Location) {
        self.cells[location.as_index()] = 0;
    }

    /// How many cells have been visited.
    pub fn visited(&self) -> usize {
        self.cells.iter().filter(|step| **step != 0).count()
    }

    /// Whether no cell has been visited.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|step| *step == 0)
    }

    /// Whether the visited cells are numbered exactly `1..=k` for some `k`, each number appearing once.
    pub fn is_numbered_contiguously(&self) -> bool {
        self.cells.iter()
            .copied()
            .filter(|step| *step != 0)
            .sorted_unstable()
            .eq(1..=self.visited())
    }

    /// Whether every cell is visited and the cells hold each of `1..=N²` exactly once.
    pub fn is_complete(&self) -> bool {
        self.visited() == self.cell_count() && self.is_numbered_contiguously()
    }

    /// Visited locations in the order they were visited.
    pub fn path(&self) -> Vec<Location> {
        self.cells.indexed_iter()
            .filter(|(_, step)| **step != 0)
            .sorted_by_key(|(_, step)| **step)
            .map(|(index, _)| Location::from(index))
            .collect_vec()
    }

    /// A copy of the cells, row by row.
    pub fn rows(&self) -> Vec<Vec<StepNumber>> {
        self.cells.rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect_vec()
    }

    /// Render this grid with unvisited cells shown as `.` rather than `0`.
    pub fn empty_board(&self) -> String {
        self.render(".")
    }

    fn render(&self, vacant: &str) -> String {
        let mut out = String::with_capacity(self.cells.len() * 3);

        for row in self.cells.rows() {
            out.push_str(&row.iter()
                .map(|step| match step {
                    0 => format!("{vacant:>2}"),
                    step => format!("{step:>2}"),
                })
                .join(" "));
            out.push('\n');
        }

        out
    }
}

/// Rows of right-aligned two-character fields separated by single spaces.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render("0"))
    }
}

/// Serialized as nested arrays, row by row.
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows().serialize(serializer)
    }
}
