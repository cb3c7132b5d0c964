use std::num::NonZero;
use std::process::ExitCode;
use std::str::FromStr;

use cavalier::{InvalidReason, Location, MoveGraph, Piece, SearchBuilder, Strategy, Tour, TourSearch};
use clap::Parser;

/// Search for a tour of a square board by a leaping piece, visiting every cell exactly once.
#[derive(Parser, Debug)]
#[command(name = "cavalier", version)]
struct Args {
    /// Side length of the board
    #[arg(short, long, default_value_t = 5)]
    size: usize,

    /// Starting cell, as ROW,COL counted from the top left corner
    #[arg(long, default_value = "0,0", value_parser = parse_location)]
    start: Location,

    /// Piece to tour with
    #[arg(short, long, default_value_t = Piece::Knight, value_parser = Piece::from_str)]
    piece: Piece,

    /// Order in which each step tries its moves
    #[arg(long, default_value_t = Strategy::Ordered, value_parser = Strategy::from_str)]
    strategy: Strategy,

    /// Print the result as JSON instead of a board
    #[arg(long)]
    json: bool,

    /// Skip printing the empty board before searching
    #[arg(short, long)]
    quiet: bool,
}

fn parse_location(s: &str) -> Result<Location, String> {
    let (row, col) = s.split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but found {s:?}"))?;
    let row = row.trim().parse().map_err(|e| format!("bad row {row:?}: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("bad column {col:?}: {e}"))?;

    Ok(Location(row, col))
}

impl Args {
    fn search(&self) -> Result<TourSearch, Vec<InvalidReason>> {
        let mut builder = SearchBuilder::with_size(self.size);
        builder.start_at(self.start)
            .piece(self.piece)
            .strategy(self.strategy);

        builder.build().map_err(|reasons| reasons.clone())
    }
}

/// The piece's name as a title, e.g. `Knight`.
fn title(piece: Piece) -> String {
    let name = piece.to_string();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    }
}

fn banner(piece: Piece) -> String {
    format!("Looking for a {}'s Tour solution...", title(piece))
}

fn outcome(tour: &Tour) -> String {
    if !tour.found() {
        return "\nNo solution exists for this board size".to_string();
    }

    let mut out = format!("\nFound a solution!\n{tour}");
    if tour.is_closed() {
        out.push_str("\nThe tour is closed: the last cell is one move from the first");
    }
    out
}

fn main() -> ExitCode {
    let args = Args::parse();

    let search = match args.search() {
        Ok(search) => search,
        Err(reasons) => {
            for reason in reasons {
                eprintln!("Invalid search: {reason}");
            }
            return ExitCode::from(2);
        }
    };

    if !args.json && !args.quiet {
        println!("\n Empty board ({}'s movement space):", args.piece);
        println!("{}", search.grid().empty_board());
        println!("{}", banner(args.piece));
    }

    let tour = search.solve();

    if args.json {
        match serde_json::to_string_pretty(&tour) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize result: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", outcome(&tour));
    }

    if !tour.found() {
        if let Some(size) = NonZero::new(args.size) {
            let graph = MoveGraph::new(size, tour.moves());
            let reached = graph.reachable_from(args.start);
            if reached < graph.cell_count() {
                eprintln!("Only {reached} of {} cells can be reached from {}", graph.cell_count(), args.start);
            }
        }
    }

    ExitCode::SUCCESS
}
