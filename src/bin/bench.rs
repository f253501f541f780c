//! Search benchmark: times `choose_move` on the starting board at
//! increasing depths and prints the engine's statistics.

use clap::Parser;
use damista::board::Board;
use damista::search::{Search, SearchParams};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Deepest search to benchmark
    #[arg(short, long, default_value_t = 6)]
    max_depth: u8,

    /// Time budget per search in milliseconds (0 = unlimited)
    #[arg(short, long, default_value_t = 0)]
    time_ms: u64,

    /// Worker threads for child-board generation (0 = all cores)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let board = Board::new();

    for depth in 1..=args.max_depth {
        let params = SearchParams::new()
            .max_depth(depth)
            .time_limit(args.time_ms)
            .num_threads(args.threads);
        let mut search = Search::new(params);

        search.choose_move(&board);
        let stats = search.stats();
        println!(
            "depth {}: {} nodes, {} boards, {} ms, {} nps{}",
            depth,
            stats.nodes,
            stats.boards_generated,
            stats.search_time.as_millis(),
            stats.nps,
            if stats.aborts > 0 { " (aborted)" } else { "" }
        );
    }
}
