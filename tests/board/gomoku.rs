use std::collections::BTreeSet;

use itertools::Itertools;

use gobang::board::{Board, Outcome, PlayError, Player};
use gobang::games::gomoku::rules::{k_in_row, run_length};
use gobang::games::gomoku::{Direction, GameConfig, GomokuBoard, Square};
use gobang::util::board_gen::{board_with_moves, random_board_with_moves, RandomBoardIterator};
use gobang::util::tiny::consistent_rng;

use crate::board::{board_test_main, board_test_main_without_uniform, print_board_with_moves, unique_boards};

fn board(height: u8, width: u8, k: u8) -> GomokuBoard {
    GomokuBoard::new(GameConfig::new(height, width, k).unwrap())
}

fn squares(coords: &[(u8, u8)]) -> Vec<Square> {
    coords.iter().map(|&c| Square::from(c)).collect()
}

fn all_moves(board: &GomokuBoard) -> Vec<Square> {
    board.config().squares().collect()
}

#[test]
fn config_limits() {
    assert!(GameConfig::new(0, 5, 3).is_err());
    assert!(GameConfig::new(5, 0, 3).is_err());
    assert!(GameConfig::new(5, 5, 0).is_err());
    assert!(GameConfig::new(5, 5, GameConfig::MAX_K + 1).is_err());
    assert!(GameConfig::new(1, 1, 1).is_ok());

    let config = GameConfig::default();
    assert_eq!((config.height(), config.width(), config.k()), (16, 16, 5));
    assert_eq!(config.win_utility(), 1000i128.pow(6));
    assert_eq!(config.center(), Square::new(8, 8));

    let max = GameConfig::new(3, 3, GameConfig::MAX_K).unwrap();
    assert_eq!(max.win_utility(), 1000i128.pow(12));
}

#[test]
fn center_rounds_down() {
    assert_eq!(GameConfig::new(3, 3, 3).unwrap().center(), Square::new(1, 1));
    assert_eq!(GameConfig::new(7, 7, 5).unwrap().center(), Square::new(3, 3));
    assert_eq!(GameConfig::new(4, 7, 3).unwrap().center(), Square::new(3, 2));
    assert_eq!(GameConfig::new(1, 1, 1).unwrap().center(), Square::new(0, 0));

    // the first-move candidates on an odd board surround that center
    let board = board(7, 7, 5);
    let expected: Vec<Square> = (2u8..=4).cartesian_product(2u8..=4).map(Square::from).collect();
    assert_eq!(board.neighbor_actions(), expected);
}

#[test]
fn squares_ascending() {
    let config = GameConfig::new(2, 3, 2).unwrap();
    let expected = squares(&[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    assert_eq!(config.squares().collect_vec(), expected);
    assert!(expected.iter().tuple_windows().all(|(a, b)| a < b));
}

#[test]
fn empty() {
    let board = board(4, 3, 3);
    board_test_main(&board, &all_moves(&board));

    assert_eq!(board.next_player(), Player::A);
    assert_eq!(board.outcome(), None);
    assert_eq!(board.utility(), 0);
    assert_eq!(board.legal_actions().len(), 12);
}

#[test]
fn empty_default() {
    let board = GomokuBoard::new(GameConfig::default());
    board_test_main_without_uniform(&board, &all_moves(&board));
}

#[test]
fn one_move() {
    let mut board = board(5, 5, 3);
    board.play(Square::new(2, 3)).unwrap();

    board_test_main(&board, &all_moves(&board));
    assert_eq!(board.next_player(), Player::B);
    assert_eq!(board.tile(Square::new(2, 3)), Some(Player::A));
    assert!(!board.legal_actions().contains(&Square::new(2, 3)));
}

#[test]
fn random_boards() {
    let start = board(5, 6, 4);
    let boards = unique_boards(RandomBoardIterator::new(start, consistent_rng()).unwrap().take(200));

    for board in boards {
        board_test_main_without_uniform(&board, &all_moves(&board));
    }
}

#[test]
fn win_horizontal() {
    let moves = squares(&[(0, 0), (0, 8), (1, 0), (1, 8), (2, 0), (2, 8), (3, 0), (3, 8), (4, 0)]);
    let board = print_board_with_moves(board(9, 9, 5), &moves);

    assert_eq!(board.outcome(), Some(Outcome::WonBy(Player::A)));
    assert_eq!(board.utility(), 1000i128.pow(6));
    assert_eq!(board.utility_for(Player::B), -1000i128.pow(6));
    board_test_main(&board, &all_moves(&board));
}

#[test]
fn win_diagonal_by_second_player() {
    // o fills the anti-diagonal of a 4x4 board
    let moves = squares(&[(0, 0), (3, 0), (1, 0), (2, 1), (0, 2), (1, 2), (0, 1), (0, 3)]);
    let board = print_board_with_moves(board(4, 4, 4), &moves);

    assert_eq!(board.outcome(), Some(Outcome::WonBy(Player::B)));
    assert_eq!(board.utility(), -1000i128.pow(5));
    assert_eq!(board.next_player(), Player::A);
}

#[test]
fn win_overline_is_exact() {
    // the last move joins two runs into six in a row, the utility stays exactly 1000^(k+1)
    let moves = squares(&[
        (0, 0),
        (0, 8),
        (1, 0),
        (1, 8),
        (2, 0),
        (2, 8),
        (4, 0),
        (3, 8),
        (5, 0),
        (8, 8),
        (3, 0),
    ]);
    let board = board_with_moves(board(9, 9, 5), &moves).unwrap();

    assert_eq!(board.outcome(), Some(Outcome::WonBy(Player::A)));
    assert_eq!(board.utility(), 1000i128.pow(6));
    assert_eq!(run_length(&board, Player::A, Square::new(0, 0), Direction::new(1, 0)), 6);
}

#[test]
fn draw() {
    let moves = squares(&[(0, 0), (1, 0), (2, 0), (1, 1), (1, 2), (0, 2), (0, 1), (2, 2), (2, 1)]);
    let board = print_board_with_moves(board(3, 3, 3), &moves);

    assert!(board.is_full());
    assert_eq!(board.outcome(), Some(Outcome::Draw));
    assert_eq!(board.utility(), 0);
    assert!(board.legal_actions().is_empty());
    board_test_main(&board, &all_moves(&board));
}

#[test]
fn k_one_wins_immediately() {
    let mut board = board(3, 3, 1);
    board.play(Square::new(1, 1)).unwrap();
    assert_eq!(board.outcome(), Some(Outcome::WonBy(Player::A)));
    assert_eq!(board.utility(), 1000i128.pow(2));
}

#[test]
fn play_errors() {
    let mut board = board(3, 3, 3);
    board.play(Square::new(1, 1)).unwrap();
    let before = board.clone();

    assert_eq!(board.play(Square::new(1, 1)), Err(PlayError::UnavailableMove));
    assert_eq!(board.play(Square::new(3, 0)), Err(PlayError::UnavailableMove));
    assert_eq!(board.play(Square::new(0, 7)), Err(PlayError::UnavailableMove));
    assert_eq!(board, before, "failed moves must leave the board unchanged");

    let done = board_with_moves(board, &squares(&[(0, 0), (1, 0), (0, 1), (2, 0), (0, 2)])).unwrap();
    assert!(done.is_done());
    assert_eq!(done.clone().play(Square::new(2, 2)), Err(PlayError::BoardDone));
}

#[test]
fn k_in_row_through_middle() {
    let board = GomokuBoard::from_diagram("x..../.x.../..x.. o 3").unwrap();
    let middle = Square::new(1, 1);

    assert_eq!(run_length(&board, Player::A, middle, Direction::new(1, 1)), 2);
    assert_eq!(run_length(&board, Player::A, middle, Direction::new(-1, -1)), 2);
    assert_eq!(run_length(&board, Player::A, middle, Direction::new(1, 0)), 1);
    assert_eq!(run_length(&board, Player::B, middle, Direction::new(1, 0)), 0);

    assert!(k_in_row(&board, Player::A, middle, 3));
    assert!(k_in_row(&board, Player::A, Square::new(2, 2), 3));
    assert!(!k_in_row(&board, Player::A, middle, 4));
    assert!(!k_in_row(&board, Player::B, middle, 1));
    assert_eq!(board.outcome(), Some(Outcome::WonBy(Player::A)));
}

#[test]
fn neighbor_empty_board() {
    let board = board(11, 11, 5);
    let legal = board.legal_actions();

    assert_eq!(board.config().center(), Square::new(5, 5));
    assert!(board.has_neighbor(Square::new(5, 5), &legal));
    assert!(board.has_neighbor(Square::new(4, 4), &legal));
    assert!(board.has_neighbor(Square::new(6, 5), &legal));
    assert!(!board.has_neighbor(Square::new(3, 3), &legal));
    assert!(!board.has_neighbor(Square::new(0, 0), &legal));

    let expected: Vec<Square> = (4u8..=6).cartesian_product(4u8..=6).map(Square::from).collect();
    assert_eq!(board.neighbor_actions(), expected);
}

#[test]
fn neighbor_after_move() {
    let mut board = board(11, 11, 5);
    board.play(Square::new(5, 5)).unwrap();
    let legal = board.legal_actions();

    for dir in Direction::ALL {
        let sq = Square::new(5, 5).step(dir, 1, 11, 11).unwrap();
        assert!(board.has_neighbor(sq, &legal), "{:?} should have a neighbor", sq);

        let far = Square::new(5, 5).step(dir, 2, 11, 11).unwrap();
        assert!(!board.has_neighbor(far, &legal), "{:?} should not have a neighbor", far);
    }

    assert_eq!(board.neighbor_actions().len(), 8);
}

#[test]
fn neighbor_actions_are_legal() {
    let mut rng = consistent_rng();

    for n in 0..20 {
        let board = random_board_with_moves(&board(7, 8, 4), n, &mut rng);
        let legal: BTreeSet<Square> = board.legal_actions();
        let neighbors = board.neighbor_actions();

        assert!(neighbors.iter().all(|sq| legal.contains(sq)));
        assert!(neighbors.iter().tuple_windows().all(|(a, b)| a < b));
        if n == 0 {
            assert_eq!(board.config().center(), Square::new(4, 3));
            assert_eq!(neighbors.len(), 9);
            assert!(neighbors.iter().all(|sq| sq.diagonal_distance(Square::new(4, 3)) <= 1));
        }
    }
}

#[test]
fn zero_sum() {
    let start = board(5, 5, 3);
    for board in RandomBoardIterator::new(start, consistent_rng()).unwrap().take(500) {
        assert_eq!(board.utility_for(Player::A), -board.utility_for(Player::B));
        assert_eq!(board.utility_for(Player::A), board.utility());

        match board.outcome() {
            Some(Outcome::WonBy(Player::A)) => assert!(board.utility() > 0),
            Some(Outcome::WonBy(Player::B)) => assert!(board.utility() < 0),
            Some(Outcome::Draw) | None => assert_eq!(board.utility(), 0),
        }
    }
}

#[test]
fn diagram_round_trip() {
    let diagram = "x..o/.x../...o o 3";
    let board = GomokuBoard::from_diagram(diagram).unwrap();

    assert_eq!(board.config().height(), 3);
    assert_eq!(board.config().width(), 4);
    assert_eq!(board.config().k(), 3);
    assert_eq!(board.next_player(), Player::B);
    assert_eq!(board.tile(Square::new(3, 0)), Some(Player::B));
    assert_eq!(board.tile(Square::new(1, 1)), Some(Player::A));
    assert_eq!(board.stone_count(), 4);
    assert_eq!(board.to_diagram(), diagram);
    assert_eq!(format!("{:?}", board), format!("GomokuBoard(\"{}\")", diagram));
}

#[test]
fn diagram_matches_played_board() {
    let moves = squares(&[(1, 1), (0, 2), (2, 0)]);
    let played = board_with_moves(board(3, 3, 3), &moves).unwrap();
    let parsed = GomokuBoard::from_diagram("..x/.x./o.. o 3").unwrap();

    assert_eq!(played, parsed);
}

#[test]
fn diagram_won() {
    let board = GomokuBoard::from_diagram("xxx/oo./... o 3").unwrap();
    assert_eq!(board.outcome(), Some(Outcome::WonBy(Player::A)));
    assert_eq!(board.utility(), 1000i128.pow(4));
}

#[test]
fn diagram_invalid() {
    let cases = [
        "",
        "x../... x",
        "x../.. x 3",
        "xa./... x 3",
        "x../... . 3",
        "x../... x 0",
        "x../... x 12",
        "x../... x 300",
        "xxx/ooo/... x 3",
        "x../... x 3 ",
    ];

    for diagram in cases {
        let result = GomokuBoard::from_diagram(diagram);
        println!("{:?} -> {:?}", diagram, result);
        assert!(result.is_err(), "{:?} should be rejected", diagram);
    }
}
