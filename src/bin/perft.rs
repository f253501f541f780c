use clap::Parser;
use damista::board::{Board, Color};
use damista::movegen::child_boards;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 6)]
    depth: u8,

    /// Side to move first: red or blue
    #[arg(short, long, default_value_t = String::from("red"))]
    side: String,
}

fn main() {
    let args = Args::parse();

    let side = match args.side.as_str() {
        "red" => Color::Red,
        "blue" => Color::Blue,
        other => {
            eprintln!("unknown side '{}', expected red or blue", other);
            std::process::exit(1);
        }
    };

    println!(
        "Running perft on the starting board at depth {} with {} to move",
        args.depth, side
    );

    let board = Board::new();
    let start = std::time::Instant::now();
    let nodes = perft(&board, side, args.depth);
    let duration = start.elapsed();

    println!(
        "perft({}) = {} nodes ({} ms, {:.2} Mnps)",
        args.depth,
        nodes,
        duration.as_millis(),
        nodes as f64 / (duration.as_micros().max(1) as f64)
    );
}

fn perft(board: &Board, side: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for child in child_boards(board, side) {
        nodes += perft(&child, side.opponent(), depth - 1);
    }
    nodes
}
