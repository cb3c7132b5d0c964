#[cfg(test)]
mod tests {
    use std::num::NonZero;
    use std::str::FromStr;

    use strum::VariantArray;

    use crate::builder::{InvalidReason, SearchBuilder};
    use crate::graph::MoveGraph;
    use crate::grid::{Grid, StepNumber};
    use crate::location::Location;
    use crate::moves::{MoveSet, Piece};
    use crate::solver::{Observer, Strategy};
    use crate::solve;

    /// Checks the path invariant on entry to every step, and that every retraction restores the grid exactly.
    struct Auditor {
        graph: MoveGraph,
        // grids as they were just before each open step's cell was marked
        snapshots: Vec<(Location, Grid)>,
        entered: u64,
        retracted: u64,
        violations: Vec<String>,
    }

    impl Auditor {
        fn new(size: usize) -> Self {
            Self {
                graph: MoveGraph::new(NonZero::new(size).unwrap(), &MoveSet::default()),
                snapshots: Vec::new(),
                entered: 0,
                retracted: 0,
                violations: Vec::new(),
            }
        }
    }

    impl Observer for Auditor {
        fn entered(&mut self, grid: &Grid, at: Location, step: StepNumber) {
            self.entered += 1;

            if !self.graph.traces(grid) || grid.visited() != step - 1 || grid.get(at) != Some(step - 1) {
                self.violations.push(format!("bad path entering {at} for step {step}:\n{grid}"));
            }

            if step > 2 {
                let mut before = grid.clone();
                before.clear(at);
                self.snapshots.push((at, before));
            }
        }

        fn retracted(&mut self, grid: &Grid, cell: Location) {
            self.retracted += 1;

            match self.snapshots.pop() {
                Some((at, before)) if at == cell && before == *grid => {}
                _ => self.violations.push(format!("bad retraction of {cell}:\n{grid}")),
            }
        }
    }

    #[test]
    fn empty_board() {
        let search = SearchBuilder::default().build().unwrap();

        assert_eq!(search.grid().empty_board(), " .  .  .  .  .
 .  .  .  .  .
 .  .  .  .  .
 .  .  .  .  .
 .  .  .  .  .
");
        assert_eq!(format!("{}", search.grid()), " 0  0  0  0  0
 0  0  0  0  0
 0  0  0  0  0
 0  0  0  0  0
 0  0  0  0  0
");
    }

    #[test]
    fn solve_five_from_corner() {
        let tour = solve(5, Location(0, 0)).unwrap();

        assert!(tour.found());
        assert_eq!(tour.attempts(), 8840);
        assert_eq!(format!("{}", tour), " 1  6 15 10 21
14  9 20  5 16
19  2  7 22 11
 8 13 24 17  4
25 18  3 12 23

Took 8840 attempts to find this solution");

        assert!(tour.grid().is_complete());
        assert!(MoveGraph::new(NonZero::new(5).unwrap(), tour.moves()).traces(tour.grid()));
        assert!(!tour.is_closed());
    }

    #[test]
    fn solve_five_from_center() {
        let mut builder = SearchBuilder::with_size(5);
        builder.start_at(Location(2, 2));
        let tour = builder.build().unwrap().solve();

        assert!(tour.found());
        assert_eq!(tour.attempts(), 9909);
        assert_eq!(tour.grid().rows(), vec![
            vec![23, 10, 15, 4, 25],
            vec![16, 5, 24, 9, 14],
            vec![11, 22, 1, 18, 3],
            vec![6, 17, 20, 13, 8],
            vec![21, 12, 7, 2, 19],
        ]);
        assert_eq!(tour.path().first(), Some(&Location(2, 2)));
        assert_eq!(tour.path().last(), Some(&Location(0, 4)));
    }

    #[test]
    fn single_cell() {
        let tour = solve(1, Location(0, 0)).unwrap();

        assert!(tour.found());
        assert_eq!(tour.attempts(), 1);
        assert_eq!(format!("{}", tour.grid()), " 1\n");
        assert_eq!(tour.path(), vec![Location(0, 0)]);
        assert!(!tour.is_closed());
    }

    #[test]
    fn no_tour_leaves_blank_grid() {
        for (size, attempts) in [(2, 1), (3, 15), (4, 2223)] {
            let tour = solve(size, Location(0, 0)).unwrap();

            assert!(!tour.found(), "{size}x{size} has no tour");
            assert_eq!(tour.attempts(), attempts);
            assert!(tour.grid().is_blank());
            assert!(tour.path().is_empty());
        }

        assert_eq!(
            format!("{}", solve(3, Location(0, 0)).unwrap()),
            "No tour of the 3x3 grid from (0, 0) after 15 attempts",
        );
    }

    #[test]
    fn deterministic() {
        for size in [3, 4, 5] {
            let first = solve(size, Location(0, 0)).unwrap();
            let second = solve(size, Location(0, 0)).unwrap();

            assert_eq!(first.found(), second.found());
            assert_eq!(first.attempts(), second.attempts());
            assert_eq!(first.grid(), second.grid());
        }
    }

    #[test]
    fn path_holds_on_every_step() {
        for size in [4, 5] {
            let mut auditor = Auditor::new(size);
            let tour = SearchBuilder::with_size(size).build().unwrap().solve_observed(&mut auditor);

            assert!(auditor.violations.is_empty(), "{}", auditor.violations.join("\n"));
            assert_eq!(auditor.entered, tour.attempts());
        }
    }

    #[test]
    fn retraction_restores_grid() {
        let mut auditor = Auditor::new(4);
        let tour = SearchBuilder::with_size(4).build().unwrap().solve_observed(&mut auditor);

        assert!(!tour.found());
        assert!(auditor.violations.is_empty(), "{}", auditor.violations.join("\n"));
        // every step but the first failed and was retracted
        assert_eq!(auditor.retracted, tour.attempts() - 1);
        assert!(auditor.snapshots.is_empty());
    }

    #[test]
    fn warnsdorff() {
        for (size, attempts) in [(5, 25), (8, 64)] {
            let mut builder = SearchBuilder::with_size(size);
            builder.strategy(Strategy::Warnsdorff);
            let tour = builder.build().unwrap().solve();

            assert!(tour.found());
            assert_eq!(tour.attempts(), attempts);
            assert!(tour.grid().is_complete());
            assert!(MoveGraph::new(NonZero::new(size).unwrap(), tour.moves()).traces(tour.grid()));
        }
    }

    #[test]
    fn warnsdorff_still_exhausts() {
        let mut builder = SearchBuilder::with_size(3);
        builder.strategy(Strategy::Warnsdorff);
        let tour = builder.build().unwrap().solve();

        assert!(!tour.found());
        assert_eq!(tour.attempts(), 15);
        assert!(tour.grid().is_blank());
    }

    #[test]
    fn knight_order() {
        assert_eq!(MoveSet::default().offsets(), &[(2, 1), (1, 2), (-1, 2), (-2, 1), (-2, -1), (-1, -2), (1, -2), (2, -1)]);
        assert_eq!(Piece::Camel.moves().offsets()[..2], [(3, 1), (1, 3)]);
        // a (1, 1) leap only has four distinct orientations
        assert_eq!(MoveSet::leaper(1, 1).offsets(), &[(1, 1), (-1, 1), (-1, -1), (1, -1)]);

        for piece in Piece::VARIANTS {
            assert_eq!(piece.moves().len(), 8);
            assert_eq!(Piece::from_str(&piece.to_string()).unwrap(), *piece);
        }
    }

    #[test]
    fn custom_moves() {
        // right, down, left, up: spirals inward without ever backtracking
        let mut builder = SearchBuilder::with_size(3);
        builder.moves(MoveSet::from_offsets([(0, 1), (1, 0), (0, -1), (-1, 0)]));
        let tour = builder.build().unwrap().solve();

        assert!(tour.found());
        assert_eq!(tour.attempts(), 9);
        assert_eq!(format!("{}", tour.grid()), " 1  2  3
 8  9  4
 7  6  5
");
    }

    #[test]
    fn closed_tour() {
        let mut builder = SearchBuilder::with_size(2);
        builder.moves(MoveSet::from_offsets([(0, 1), (1, 0), (0, -1), (-1, 0)]));
        let tour = builder.build().unwrap().solve();

        assert!(tour.found());
        assert_eq!(tour.path(), vec![Location(0, 0), Location(0, 1), Location(1, 1), Location(1, 0)]);
        assert!(tour.is_closed());
    }

    #[test]
    fn invalid_builders() {
        assert_eq!(SearchBuilder::with_size(0).build().err(), Some(&vec![InvalidReason::ZeroSize]));

        let mut builder = SearchBuilder::with_size(5);
        builder.start_at(Location(5, 0));
        assert_eq!(builder.is_valid(), Some(&vec![InvalidReason::StartOutOfBounds]));

        // already invalid, so nothing further is recorded
        builder.moves(MoveSet::from_offsets([]));
        assert_eq!(builder.build().err(), Some(&vec![InvalidReason::StartOutOfBounds]));

        let mut builder = SearchBuilder::with_size(5);
        builder.moves(MoveSet::from_offsets([]));
        assert_eq!(builder.is_valid(), Some(&vec![InvalidReason::EmptyMoveSet]));

        let mut builder = SearchBuilder::with_size(5);
        builder.moves(MoveSet::from_offsets([(1, 2), (0, 0)]));
        assert_eq!(builder.is_valid(), Some(&vec![InvalidReason::NullOffset]));

        let mut builder = SearchBuilder::with_size(5);
        builder.piece(Piece::Zebra).start_at(Location(4, 4)).strategy(Strategy::Warnsdorff);
        assert!(builder.is_valid().is_none());

        assert_eq!(solve(0, Location(0, 0)).err(), Some(vec![InvalidReason::ZeroSize]));
        assert_eq!(solve(3, Location(1, 3)).err(), Some(vec![InvalidReason::StartOutOfBounds]));
    }

    #[test]
    fn move_graph() {
        let graph = MoveGraph::new(NonZero::new(3).unwrap(), &MoveSet::default());
        assert_eq!(graph.cell_count(), 9);
        assert_eq!(graph.degree(Location(1, 1)), 0);
        assert_eq!(graph.degree(Location(0, 0)), 2);
        assert_eq!(graph.reachable_from(Location(1, 1)), 1);
        assert_eq!(graph.reachable_from(Location(0, 0)), 8);
        assert_eq!(graph.reachable_from(Location(3, 0)), 0);
        assert!(graph.is_move(Location(0, 0), Location(2, 1)));
        assert!(!graph.is_move(Location(0, 0), Location(1, 1)));

        let graph = MoveGraph::new(NonZero::new(8).unwrap(), &MoveSet::default());
        assert_eq!(graph.degree(Location(0, 0)), 2);
        assert_eq!(graph.degree(Location(3, 3)), 8);
        assert_eq!(graph.reachable_from(Location(0, 0)), 64);
    }

    #[test]
    fn offsets() {
        assert_eq!(Location(0, 0).offset_to(Location(2, 1)), Some((2, 1)));
        assert_eq!(Location(2, 1).offset_to(Location(0, 0)), Some((-2, -1)));
        assert!(!Location(0, 0).offset_by((-1, 2)).within(NonZero::new(5).unwrap()));
        assert!(MoveSet::default().connects(Location(4, 4), Location(2, 3)));
        assert!(!MoveSet::default().connects(Location(4, 4), Location(3, 3)));
    }

    #[test]
    fn serialize_tour() {
        let tour = solve(5, Location(0, 0)).unwrap();
        let json = serde_json::to_value(&tour).unwrap();

        assert_eq!(json["found"], true);
        assert_eq!(json["attempts"], 8840);
        assert_eq!(json["start"], serde_json::json!([0, 0]));
        assert_eq!(json["strategy"], "ordered");
        assert_eq!(json["moves"][0], serde_json::json!([2, 1]));
        assert_eq!(json["grid"][0], serde_json::json!([1, 6, 15, 10, 21]));
    }

    #[cfg(feature = "wasm")]
    #[test]
    fn flatten_for_wasm() {
        use crate::wasm::WasmTour;

        let tour = WasmTour::try_from(solve(5, Location(0, 0)).unwrap()).unwrap();
        assert!(tour.found());
        assert_eq!(tour.size(), 5);
        assert_eq!(tour.attempts(), 8840.0);
        assert_eq!(tour.cells(), &[
            1, 6, 15, 10, 21,
            14, 9, 20, 5, 16,
            19, 2, 7, 22, 11,
            8, 13, 24, 17, 4,
            25, 18, 3, 12, 23,
        ]);

        let tour = WasmTour::try_from(solve(3, Location(0, 0)).unwrap()).unwrap();
        assert!(!tour.found());
        assert_eq!(tour.size(), 3);
        assert_eq!(tour.cells(), &[0; 9]);
    }
}
