use damista::board::{Board, Color, Cord, Piece};
use damista::movegen::{apply, child_boards, piece_moves, valid_moves};

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
fn initial_board_has_seven_moves_per_side() {
    let board = Board::new();

    let red = valid_moves(&board, Color::Red);
    let blue = valid_moves(&board, Color::Blue);

    assert_eq!(red.len(), 7);
    assert_eq!(blue.len(), 7);
    assert!(red.iter().all(|mv| mv.jumped.is_none()));
    assert!(blue.iter().all(|mv| mv.jumped.is_none()));
    // Only the front ranks can move at the start.
    assert!(red.iter().all(|mv| mv.from.row == 2));
    assert!(blue.iter().all(|mv| mv.from.row == 5));
}

#[test]
fn edge_piece_has_a_single_move() {
    let board = Board::new();
    let moves = piece_moves(&board, cord(2, 7));

    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].to, cord(3, 6));
}

#[test]
fn empty_or_off_board_cell_has_no_moves() {
    let board = Board::new();
    assert!(piece_moves(&board, cord(3, 3)).is_empty());
    assert!(piece_moves(&board, cord(100, 20)).is_empty());
}

#[test]
fn jumps_carry_the_jumped_cord() {
    let board = board_with(&[
        (cord(2, 1), Piece::man(Color::Red)),
        (cord(3, 2), Piece::man(Color::Blue)),
    ]);
    let moves = valid_moves(&board, Color::Red);

    // The simple step to (3,0) plus the jump to (4,3).
    assert_eq!(moves.len(), 2);
    let jump = moves
        .iter()
        .find(|mv| mv.jumped.is_some())
        .expect("the capture should be enumerated");
    assert_eq!(jump.to, cord(4, 3));
    assert_eq!(jump.jumped, Some(cord(3, 2)));
}

#[test]
fn crowned_piece_moves_in_four_directions() {
    let board = board_with(&[(cord(4, 3), Piece::king(Color::Blue))]);
    let moves = valid_moves(&board, Color::Blue);

    let targets: Vec<Cord> = moves.iter().map(|mv| mv.to).collect();
    assert_eq!(moves.len(), 4);
    for to in [cord(3, 2), cord(3, 4), cord(5, 2), cord(5, 4)] {
        assert!(targets.contains(&to), "missing king move to {}", to);
    }
}

#[test]
fn child_boards_match_the_move_list() {
    let board = board_with(&[
        (cord(2, 1), Piece::man(Color::Red)),
        (cord(3, 2), Piece::man(Color::Blue)),
        (cord(5, 6), Piece::man(Color::Blue)),
    ]);

    let moves = valid_moves(&board, Color::Red);
    let children = child_boards(&board, Color::Red);

    assert_eq!(children.len(), moves.len());
    for (mv, child) in moves.iter().zip(&children) {
        assert_eq!(apply(&board, *mv), *child);
    }
}

#[test]
fn capture_children_lose_the_jumped_piece() {
    let board = board_with(&[
        (cord(2, 1), Piece::man(Color::Red)),
        (cord(3, 2), Piece::man(Color::Blue)),
    ]);

    let children = child_boards(&board, Color::Red);
    assert!(children
        .iter()
        .any(|child| child.count(Color::Blue) == 0 && child.get(cord(3, 2)) == Some(Piece::Empty)));
}

#[test]
fn children_are_crowned_on_arrival() {
    let board = board_with(&[(cord(6, 2), Piece::man(Color::Red))]);
    let children = child_boards(&board, Color::Red);

    assert!(!children.is_empty());
    for child in children {
        assert_eq!(child.king_count(Color::Red), 1);
    }
}

#[test]
fn enumeration_is_deterministic() {
    let board = Board::new();
    assert_eq!(
        valid_moves(&board, Color::Red),
        valid_moves(&board, Color::Red)
    );
    assert_eq!(
        child_boards(&board, Color::Blue),
        child_boards(&board, Color::Blue)
    );
}
