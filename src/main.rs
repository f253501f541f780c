//! Damista CLI entry point: play the engine from the terminal, or watch a
//! self-play game. Turn sequencing (multi-jump continuation, loss checks)
//! lives here, outside the rules core.

use std::io::{self, BufRead};

use clap::Parser;
use log::info;

use damista::board::{Board, Color, Cord};
use damista::codec::encode_board;
use damista::movegen::piece_moves;
use damista::rules::{more_jumps_possible, validate_placement};
use damista::search::{Search, SearchParams};
use damista::terminal::is_lost;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search depth in plies
    #[arg(short, long, default_value_t = 3)]
    depth: u8,

    /// Time budget per engine move in milliseconds
    #[arg(short, long, default_value_t = 5000)]
    time_ms: u64,

    /// Worker threads for child-board generation (0 = all cores)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Engine plays both sides instead of reading moves from stdin
    #[arg(long)]
    selfplay: bool,

    /// Ply cap for self-play before the game is called a draw
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Print the final board in the wire encoding as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let params = SearchParams::new()
        .max_depth(args.depth)
        .time_limit(args.time_ms)
        .num_threads(args.threads);

    let final_board = if args.selfplay {
        selfplay(params, args.max_plies)
    } else {
        interactive(params)
    };

    if args.json {
        match serde_json::to_string(&encode_board(&final_board)) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("failed to encode final board: {}", e),
        }
    }
}

enum Command {
    Move { from: Cord, to: Cord },
    Moves(Cord),
    Pass,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["quit"] | ["exit"] => Some(Command::Quit),
        ["pass"] => Some(Command::Pass),
        ["moves", row, col] => {
            let row = row.parse().ok()?;
            let col = col.parse().ok()?;
            Some(Command::Moves(Cord::new(row, col)))
        }
        [fr, fc, tr, tc] => {
            let from = Cord::new(fr.parse().ok()?, fc.parse().ok()?);
            let to = Cord::new(tr.parse().ok()?, tc.parse().ok()?);
            Some(Command::Move { from, to })
        }
        _ => None,
    }
}

/// Human plays Blue against the engine's Red. A capture that leaves another
/// jump available keeps the turn with the same piece; `pass` ends the chain
/// early.
fn interactive(params: SearchParams) -> Board {
    let mut engine = Search::new(params.ai_color(Color::Red));
    let mut board = Board::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("You play blue (b/B), moving toward row 0.");
    println!("Moves are 'FROM_ROW FROM_COL TO_ROW TO_COL'.");
    println!("'moves ROW COL' lists a piece's legal moves, 'pass' ends a jump chain, 'quit' exits.");

    // Piece locked into an unfinished jump chain, if any.
    let mut chained: Option<Cord> = None;

    loop {
        println!("{}", board);
        if is_lost(&board, Color::Blue) {
            println!("blue has no pieces or moves left - red wins");
            break;
        }
        if is_lost(&board, Color::Red) {
            println!("red has no pieces or moves left - blue wins");
            break;
        }

        match chained {
            Some(cord) => println!("your turn (must continue jumping from {})", cord),
            None => println!("your turn"),
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let command = match parse_command(&line) {
            Some(command) => command,
            None => {
                println!("could not read that - try 'moves ROW COL' or four numbers");
                continue;
            }
        };

        let (from, to) = match command {
            Command::Quit => break,
            Command::Moves(cord) => {
                for mv in piece_moves(&board, cord) {
                    match mv.jumped {
                        Some(over) => println!("  {} -> {} jumping {}", mv.from, mv.to, over),
                        None => println!("  {} -> {}", mv.from, mv.to),
                    }
                }
                continue;
            }
            Command::Pass => {
                if chained.take().is_some() {
                    board = engine_turn(&mut engine, &board);
                } else {
                    println!("nothing to pass - a jump chain is not in progress");
                }
                continue;
            }
            Command::Move { from, to } => (from, to),
        };

        if let Some(cord) = chained {
            if from != cord {
                println!("the jump chain must continue from {}", cord);
                continue;
            }
        }
        if board.get(from).map(|p| p.is_color(Color::Blue)) != Some(true) {
            println!("no blue piece at {}", from);
            continue;
        }

        let result = validate_placement(&board, from, to);
        if !result.valid {
            println!("illegal move");
            continue;
        }
        board = result.board;

        if result.removed.is_some() && more_jumps_possible(&board, to) {
            chained = Some(to);
            continue;
        }
        chained = None;
        board = engine_turn(&mut engine, &board);
    }
    board
}

fn engine_turn(engine: &mut Search, board: &Board) -> Board {
    let next = engine.choose_move(board);
    let stats = engine.stats();
    info!(
        "engine searched {} nodes in {} ms ({} nps)",
        stats.nodes,
        stats.search_time.as_millis(),
        stats.nps
    );
    next
}

/// Engine against itself. One board per turn; a side whose search comes
/// back with the board unchanged has no move and loses.
fn selfplay(params: SearchParams, max_plies: usize) -> Board {
    let mut red = Search::new(params.clone().ai_color(Color::Red));
    let mut blue = Search::new(params.ai_color(Color::Blue));
    let mut board = Board::new();
    let mut side = Color::Red;

    for ply in 1..=max_plies {
        if is_lost(&board, side) {
            println!("{} has lost after {} plies", side, ply - 1);
            return board;
        }
        let engine = match side {
            Color::Red => &mut red,
            Color::Blue => &mut blue,
        };
        let next = engine.choose_move(&board);
        if next == board {
            println!("{} has no move - {} wins", side, side.opponent());
            return board;
        }
        board = next;
        println!("ply {} ({}):", ply, side);
        println!("{}", board);
        side = side.opponent();
    }
    println!("ply cap reached - calling it a draw");
    board
}
