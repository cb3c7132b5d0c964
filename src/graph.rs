use std::num::NonZero;

use itertools::Itertools;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;
use petgraph::Direction;

use crate::grid::Grid;
use crate::location::Location;
use crate::moves::MoveSet;

/// Every legal move on a square grid as a directed graph, one vertex per cell.
///
/// Moves are directed since an arbitrary [`MoveSet`] need not contain the reverse of each of its offsets.
/// Searching never consults this graph; it answers questions about the grid as a whole instead.
pub struct MoveGraph {
    graph: DiGraphMap<Location, ()>,
}

impl MoveGraph {
    /// Build the move graph of `moves` on a `size` by `size` grid.
    pub fn new(size: NonZero<usize>, moves: &MoveSet) -> Self {
        let side = size.get();
        let mut graph = DiGraphMap::with_capacity(side * side, side * side * moves.len());

        for (row, col) in (0..side).cartesian_product(0..side) {
            graph.add_node(Location(row, col));
        }

        for (row, col) in (0..side).cartesian_product(0..side) {
            let from = Location(row, col);
            for to in moves.targets_from(from).filter(|to| to.within(size)) {
                graph.add_edge(from, to, ());
            }
        }

        Self { graph }
    }

    /// The number of cells.
    pub fn cell_count(&self) -> usize {
        self.graph.node_count()
    }

    /// The number of cells one move away from `location`.
    pub fn degree(&self, location: Location) -> usize {
        self.graph.neighbors_directed(location, Direction::Outgoing).count()
    }

    /// Whether a single move leads from `from` to `to`.
    pub fn is_move(&self, from: Location, to: Location) -> bool {
        self.graph.contains_edge(from, to)
    }

    /// How many cells, `start` included, can be reached from `start` by any number of moves.
    ///
    /// A tour from `start` is impossible whenever this falls short of [`Self::cell_count`].
    pub fn reachable_from(&self, start: Location) -> usize {
        if !self.graph.contains_node(start) {
            return 0;
        }

        let mut dfs = Dfs::new(&self.graph, start);
        let mut reached = 0;
        while dfs.next(&self.graph).is_some() {
            reached += 1;
        }

        reached
    }

    /// Whether the visited cells of `grid` are numbered `1..=k` and each consecutive pair is a single move apart.
    pub fn traces(&self, grid: &Grid) -> bool {
        grid.is_numbered_contiguously()
            && grid.path()
                .iter()
                .tuple_windows()
                .all(|(from, to)| self.is_move(*from, *to))
    }
}
