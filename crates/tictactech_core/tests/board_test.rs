//! Board rules and screen mapping through the public API.

use strum::IntoEnumIterator;
use tictactech_core::{
    Board, BoardState, Geometry, Player, Position, Square, Vec2, check_winner, is_draw, is_full,
};

const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

#[test]
fn test_each_cell_accepts_one_move() {
    let mut state = BoardState::default();
    for y in 0..3 {
        for x in 0..3 {
            assert!(state.make_move(x, y, Player::X));
            assert!(!state.make_move(x, y, Player::O));
            assert_eq!(state.square(x, y), Some(Square::Occupied(Player::X)));
        }
    }
}

#[test]
fn test_every_line_wins_for_both_players() {
    for player in [Player::X, Player::O] {
        for line in LINES {
            let mut state = BoardState::default();
            for (x, y) in line {
                assert_eq!(state.check_winner(), None);
                state.make_move(x, y, player);
            }
            assert_eq!(state.check_winner(), Some(player), "line {line:?}");
        }
    }
}

#[test]
fn test_full_iff_no_empty_cell() {
    let mut state = BoardState::default();
    let order = [
        (Player::X, 0, 0),
        (Player::O, 1, 0),
        (Player::X, 2, 0),
        (Player::X, 0, 1),
        (Player::O, 1, 1),
        (Player::O, 2, 1),
        (Player::O, 0, 2),
        (Player::X, 1, 2),
        (Player::X, 2, 2),
    ];
    for (player, x, y) in order {
        assert!(!state.is_board_full());
        state.make_move(x, y, player);
    }
    assert!(state.is_board_full());
    assert!(Position::iter().all(|pos| !state.board().is_empty(pos)));
}

#[test]
fn test_draw_board() {
    use Player::{O as B, X as A};
    // A B A / B A B / B A B
    let rows = [[A, B, A], [B, A, B], [B, A, B]];
    let mut board = Board::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, player) in row.iter().enumerate() {
            if let Some(pos) = Position::from_coords(x, y) {
                board.set(pos, Square::Occupied(*player));
            }
        }
    }
    assert!(is_full(&board));
    assert_eq!(check_winner(&board), None);
    assert!(is_draw(&board));
}

#[test]
fn test_reset_empties_all_cells() {
    let mut state = BoardState::new(Geometry::new(Vec2::new(5.0, 5.0), 20.0).unwrap());
    state.make_move(1, 1, Player::X);
    state.make_move(0, 2, Player::O);
    state.reset();

    assert!((0..3).all(|y| (0..3).all(|x| state.is_cell_empty(x, y))));
    assert_eq!(state.check_winner(), None);
    assert_eq!(state.geometry().origin(), Vec2::new(5.0, 5.0));
}

#[test]
fn test_reset_after_full_board_is_not_full() {
    use Player::{O, X};
    let mut state = BoardState::default();
    // X X X / O O X / X O O
    let rows = [[X, X, X], [O, O, X], [X, O, O]];
    for (y, row) in rows.iter().enumerate() {
        for (x, player) in row.iter().enumerate() {
            assert!(state.make_move(x, y, *player));
        }
    }
    assert!(state.is_board_full());
    assert_eq!(state.check_winner(), Some(X));

    state.reset();
    assert!(!state.is_board_full());
    assert_eq!(state.check_winner(), None);
}

#[test]
fn test_every_point_maps_to_one_cell() {
    let geometry = Geometry::centered(800.0, 600.0, 100.0).unwrap();
    let mut y = 150.0;
    while y < 450.0 {
        let mut x = 250.0;
        while x < 550.0 {
            let pos = geometry.screen_to_board(x, y).unwrap();
            assert!(geometry.cell_rect(pos).contains(x, y), "({x}, {y}) -> {pos}");
            x += 25.0;
        }
        y += 25.0;
    }
}
