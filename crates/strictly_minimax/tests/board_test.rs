//! Tests for the board: cell access, terminal detection, text and JSON forms.

use strictly_minimax::{Board, MoveError, Outcome, ParseBoardError, Player, Position, Square};

fn board(rows: [[i8; 3]; 3]) -> Board {
    Board::from_values(rows).expect("valid cell values")
}

const X: Square = Square::Occupied(Player::X);
const O: Square = Square::Occupied(Player::O);

#[test]
fn test_initial_empty_board() {
    let board = Board::new();
    assert_eq!(board.check_win(), Outcome::Ongoing);
    assert_eq!(board.check_win().code(), 0);
    assert_eq!(board.empty_count(), 9);
    assert_eq!(board.empty_positions(), Position::ALL.to_vec());
}

#[test]
fn test_set_get_value() {
    let mut board = Board::new();
    board.set_value(0, 0, X);
    board.set_value(1, 1, O);
    board.set_value(2, 2, Square::Empty);

    assert_eq!(board.get_value(0, 0), X);
    assert_eq!(board.get_value(1, 1), O);
    assert_eq!(board.get_value(2, 2), Square::Empty);

    board.set_value(0, 0, O);
    board.set_value(1, 1, X);
    board.set_value(2, 2, X);

    assert_eq!(board.get_value(0, 0), O);
    assert_eq!(board.get_value(1, 1), X);
    assert_eq!(board.get_value(2, 2), X);
}

#[test]
fn test_out_of_bounds_access_is_silent() {
    let mut board = Board::new();
    board.set_value(0, 0, X);

    assert_eq!(board.get_value(3, 0), Square::Empty);
    assert_eq!(board.get_value(0, 3), Square::Empty);
    assert_eq!(board.get_value(usize::MAX, usize::MAX), Square::Empty);

    let before = board.clone();
    board.set_value(3, 0, O);
    board.set_value(0, 3, O);
    assert_eq!(board, before);
}

#[test]
fn test_place_rejects_occupied_square() {
    let mut board = Board::new();
    let center = Position::new(1, 1).unwrap();
    board.place(center, Player::X).unwrap();

    let result = board.place(center, Player::O);
    assert_eq!(result, Err(MoveError::SquareOccupied(center)));
    assert_eq!(board.get(center), X);
    assert!(result.unwrap_err().to_string().contains("occupied"));
}

#[test]
fn test_player1_wins_row() {
    assert_eq!(board([[1, 1, 1], [0, 0, 0], [0, 0, 0]]).check_win().code(), 1);
}

#[test]
fn test_player2_wins_row() {
    assert_eq!(board([[0, 0, 0], [-1, -1, -1], [0, 0, 0]]).check_win().code(), -1);
}

#[test]
fn test_player1_wins_column() {
    assert_eq!(board([[0, 0, 1], [0, 0, 1], [0, 0, 1]]).check_win().code(), 1);
}

#[test]
fn test_player2_wins_column() {
    assert_eq!(
        board([[-1, 0, 0], [-1, 0, 0], [-1, 0, 0]]).check_win(),
        Outcome::Won(Player::O)
    );
}

#[test]
fn test_player1_wins_diagonal() {
    assert_eq!(
        board([[1, 0, 0], [0, 1, 0], [0, 0, 1]]).check_win(),
        Outcome::Won(Player::X)
    );
}

#[test]
fn test_player2_wins_anti_diagonal() {
    assert_eq!(board([[0, 0, -1], [0, -1, 0], [-1, 0, 0]]).check_win().code(), -1);
}

#[test]
fn test_game_draw() {
    let board = board([[1, -1, 1], [-1, 1, -1], [-1, 1, -1]]);
    assert_eq!(board.check_win(), Outcome::Draw);
    assert_eq!(board.check_win().code(), 2);
}

#[test]
fn test_win_on_full_board_is_not_a_draw() {
    let board = board([[1, 1, 1], [-1, -1, 1], [1, -1, -1]]);
    assert!(board.is_full());
    assert_eq!(board.check_win(), Outcome::Won(Player::X));
}

#[test]
fn test_game_not_over() {
    assert_eq!(
        board([[1, 0, 0], [0, -1, 0], [0, 0, 0]]).check_win(),
        Outcome::Ongoing
    );
}

#[test]
fn test_from_values_rejects_unknown_marks() {
    assert!(Board::from_values([[2, 0, 0], [0, 0, 0], [0, 0, 0]]).is_none());
    let rows = [[1, -1, 0], [0, 1, 0], [-1, 0, 0]];
    assert_eq!(board(rows).to_values(), rows);
}

#[test]
fn test_display_parses_back() {
    let board = board([[1, -1, 0], [0, 1, 0], [-1, 0, 0]]);
    let text = board.to_string();
    assert_eq!(text, "X|O|3\n-+-+-\n4|X|6\n-+-+-\nO|8|9");
    assert_eq!(text.parse::<Board>(), Ok(board));
}

#[test]
fn test_parse_compact_forms() {
    let expected = board([[1, 0, 0], [0, -1, 0], [0, 0, 0]]);
    assert_eq!("X../.O./...".parse::<Board>(), Ok(expected.clone()));
    assert_eq!("x__ _o_ ___".parse::<Board>(), Ok(expected));
}

#[test]
fn test_parse_rejects_malformed_text() {
    assert_eq!(
        "XO.".parse::<Board>(),
        Err(ParseBoardError::WrongSquareCount(3))
    );
    assert_eq!(
        "X../.O./....".parse::<Board>(),
        Err(ParseBoardError::WrongSquareCount(10))
    );
    assert_eq!(
        "X../.Q./...".parse::<Board>(),
        Err(ParseBoardError::UnexpectedChar('Q'))
    );
}

#[test]
fn test_board_json_shape() {
    let board = board([[1, 0, 0], [0, 0, 0], [0, 0, -1]]);
    let json = serde_json::to_value(&board).unwrap();
    let squares = json["squares"].as_array().unwrap();
    assert_eq!(squares.len(), 9);
    assert_eq!(squares[0], serde_json::json!({ "Occupied": "X" }));
    assert_eq!(squares[1], serde_json::json!("Empty"));
    assert_eq!(squares[8], serde_json::json!({ "Occupied": "O" }));

    let back: Board = serde_json::from_value(json).unwrap();
    assert_eq!(back, board);
}
