use damista::board::{Board, Color, Cord, Piece};
use damista::eval::evaluate;
use damista::movegen::child_boards;
use damista::search::{Search, SearchParams};
use damista::time::Deadline;

fn cord(row: i8, col: i8) -> Cord {
    Cord::new(row, col)
}

fn board_with(pieces: &[(Cord, Piece)]) -> Board {
    let mut board = Board::empty();
    for &(at, piece) in pieces {
        board = board.with(at, piece);
    }
    board
}

#[test]
fn minimax_is_deterministic() {
    let board = Board::new();
    let params = SearchParams::new().max_depth(3).time_limit(0);
    let mut search = Search::new(params);

    let first = search.minimax(&board, 3, true, &Deadline::unlimited());
    let second = search.minimax(&board, 3, true, &Deadline::unlimited());

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn depth_zero_returns_the_static_evaluation() {
    let board = board_with(&[
        (cord(3, 2), Piece::king(Color::Red)),
        (cord(5, 4), Piece::man(Color::Blue)),
    ]);
    let mut search = Search::new(SearchParams::new());

    let (score, result) = search
        .minimax(&board, 0, true, &Deadline::unlimited())
        .expect("an unlimited deadline cannot expire");

    assert_eq!(score, evaluate(&board, Color::Red));
    assert_eq!(result, board);
}

#[test]
fn chosen_board_is_a_legal_child() {
    let board = Board::new();
    let params = SearchParams::new().max_depth(2).time_limit(0);
    let mut search = Search::new(params);

    let chosen = search.choose_move(&board);

    assert_ne!(chosen, board);
    assert!(child_boards(&board, Color::Red).contains(&chosen));
}

#[test]
fn engine_takes_a_free_capture() {
    let board = board_with(&[
        (cord(2, 1), Piece::man(Color::Red)),
        (cord(3, 2), Piece::man(Color::Blue)),
        (cord(6, 5), Piece::man(Color::Blue)),
    ]);
    let params = SearchParams::new().max_depth(1).time_limit(0);
    let mut search = Search::new(params);

    let chosen = search.choose_move(&board);

    assert_eq!(chosen.count(Color::Blue), 1);
    assert_eq!(chosen.get(cord(3, 2)), Some(Piece::Empty));
    assert_eq!(chosen.get(cord(4, 3)), Some(Piece::man(Color::Red)));
}

#[test]
fn no_legal_move_returns_the_board_unchanged() {
    let board = board_with(&[(cord(4, 4), Piece::man(Color::Blue))]);
    let params = SearchParams::new().max_depth(3).time_limit(0);
    let mut search = Search::new(params);

    let chosen = search.choose_move(&board);

    assert_eq!(chosen, board);
    assert_eq!(search.stats().fallbacks, 1);
}

#[test]
fn expired_deadline_falls_back_to_a_legal_board() {
    let board = Board::new();
    // A one-millisecond budget cannot finish a full-width depth-20 search.
    let params = SearchParams::new().max_depth(20).time_limit(1);
    let mut search = Search::new(params);

    let chosen = search.choose_move(&board);

    assert!(child_boards(&board, Color::Red).contains(&chosen));
    assert_eq!(search.stats().fallbacks, 1);
    assert_eq!(search.stats().aborts, 1);
}

#[test]
fn stats_are_collected() {
    let board = Board::new();
    let params = SearchParams::new().max_depth(2).time_limit(0);
    let mut search = Search::new(params);

    search.choose_move(&board);
    let stats = search.stats();

    assert!(stats.nodes > 0);
    assert!(stats.leaves > 0);
    assert!(stats.boards_generated > 0);
    assert_eq!(stats.fallbacks, 0);
}

#[test]
fn search_prefers_the_line_that_keeps_material() {
    // Blue to answer: if Red steps to (4,3), Blue at (5,4) must not be able
    // to take the man back for free in the engine's chosen line. A depth-2
    // search sees the reply; the engine keeps its man safe instead.
    let board = board_with(&[
        (cord(3, 2), Piece::man(Color::Red)),
        (cord(5, 4), Piece::man(Color::Blue)),
        (cord(7, 0), Piece::man(Color::Blue)),
    ]);
    let params = SearchParams::new().max_depth(2).time_limit(0);
    let mut search = Search::new(params);

    let chosen = search.choose_move(&board);

    // Stepping to (4,3) hands Blue a jump to (3,2); the safe step is (4,1).
    assert_eq!(chosen.get(cord(4, 1)), Some(Piece::man(Color::Red)));
}
