//! Tests for the terminal game loop and move suggestions.

use std::io::Cursor;
use strictly_minimax::{Board, Mode, Outcome, Player};
use strictly_minimax_cli::{CliConfig, Tally, run_rounds, suggest};

fn play(mode: Mode, input: &str) -> (Tally, String) {
    let mut input = Cursor::new(input.as_bytes().to_vec());
    let mut output = Vec::new();
    let tally = run_rounds(&mut input, &mut output, mode, &CliConfig::default()).unwrap();
    (tally, String::from_utf8(output).unwrap())
}

#[test]
fn test_tally_counts_finished_rounds() {
    let mut tally = Tally::default();
    tally.record(Outcome::Won(Player::X));
    tally.record(Outcome::Draw);
    tally.record(Outcome::Ongoing);
    tally.record(Outcome::Won(Player::O));
    assert_eq!(tally.rounds(), 3);
    assert_eq!((tally.x_wins, tally.o_wins, tally.draws), (1, 1, 1));
}

#[test]
fn test_pvp_round_to_a_win() {
    let (tally, output) = play(Mode::PlayerVsPlayer, "1\n4\n2\n5\n3\nn\n");
    assert_eq!(tally.x_wins, 1);
    assert!(output.contains("Game over: Player 1 wins!"));
    assert!(output.contains("Player 2's turn (O)"));
}

#[test]
fn test_invalid_and_occupied_input_reprompts() {
    let (tally, output) = play(Mode::PlayerVsPlayer, "banana\n5\n5\nq\n");
    assert_eq!(tally.rounds(), 0);
    assert!(output.contains("Enter a cell number 1-9"));
    assert!(output.contains("already occupied"));
}

#[test]
fn test_engine_answers_each_move() {
    let (_, output) = play(Mode::PlayerVsEngine, "5\nq\n");
    assert!(output.contains("Engine plays"));
}

#[test]
fn test_engine_round_runs_to_the_end() {
    // Offer every cell in order. Occupied cells are rejected and skipped, so
    // the round is over by the last line; whatever line follows the end is
    // read as the answer to "Play again?".
    let input: String = (1..=9).map(|n| format!("{}\n", n)).collect();
    let (tally, output) = play(Mode::PlayerVsEngine, &input);

    assert_eq!(tally.rounds(), 1);
    assert_eq!(tally.x_wins, 0);
    assert!(output.contains("Game over"));
}

#[test]
fn test_play_again_starts_a_new_round() {
    let (tally, output) = play(Mode::PlayerVsPlayer, "1\n4\n2\n5\n3\ny\n1\n4\n2\n5\n3\nn\n");
    assert_eq!(tally.x_wins, 2);
    assert_eq!(output.matches("Game over").count(), 2);
}

#[test]
fn test_suggest_prints_move_and_scores() {
    let board: Board = "XX./.../...".parse().unwrap();
    let mut output = Vec::new();
    suggest(&mut output, &board, true).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Engine (O) plays Top-right (0, 2)"));
    assert!(output.contains("nodes built:"));
}

#[test]
fn test_suggest_on_finished_board() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    let mut output = Vec::new();
    suggest(&mut output, &board, false).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("Game is already over: X wins"));
}
