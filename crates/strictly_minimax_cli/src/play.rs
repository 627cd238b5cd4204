//! Terminal game loop and move suggestions.

use crate::config::CliConfig;
use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_minimax::{Board, Game, Mode, Outcome, Player, Position, SearchEngine};
use tracing::{debug, info, instrument};

/// Results across the rounds of one session. Nothing is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Rounds won by X.
    pub x_wins: u32,
    /// Rounds won by O.
    pub o_wins: u32,
    /// Drawn rounds.
    pub draws: u32,
}

impl Tally {
    /// Counts a finished round. Unfinished rounds are not counted.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::X) => self.x_wins += 1,
            Outcome::Won(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }

    /// Number of finished rounds.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

fn player_name(config: &CliConfig, mode: Mode, player: Player) -> String {
    match (player, mode) {
        (Player::X, _) => config.human_name().clone(),
        (Player::O, Mode::PlayerVsEngine) => "Engine".to_string(),
        (Player::O, Mode::PlayerVsPlayer) => "Player 2".to_string(),
    }
}

/// Reads one trimmed line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Plays rounds until the user declines another, types `q`, or input ends.
///
/// Moves are read as a cell number (1-9), `row,col`, or a label such as
/// `center`. Invalid or illegal moves are reported and asked for again.
#[instrument(skip(input, output, config))]
pub fn run_rounds<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    mode: Mode,
    config: &CliConfig,
) -> Result<Tally> {
    let mut tally = Tally::default();
    let mut game = Game::new(mode);

    loop {
        writeln!(output, "\n{}\n", game.board())?;

        if game.is_over() {
            let message = match game.status() {
                Outcome::Won(player) => format!("{} wins!", player_name(config, mode, player)),
                _ => "It's a draw!".to_string(),
            };
            writeln!(output, "Game over: {}", message)?;
            tally.record(game.status());
            info!(status = %game.status(), rounds = tally.rounds(), "Round finished");

            write!(output, "Play again? [y/N] ")?;
            output.flush()?;
            match read_line(input)? {
                Some(answer) if answer.eq_ignore_ascii_case("y") => {
                    game.reset();
                    continue;
                }
                _ => break,
            }
        }

        let player = game.to_move();
        write!(
            output,
            "{}'s turn ({}): ",
            player_name(config, mode, player),
            player
        )?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            debug!("Input closed mid-round");
            break;
        };
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            break;
        }

        let Some(pos) = Position::parse(&line) else {
            writeln!(output, "Enter a cell number 1-9, row,col, or q to quit.")?;
            continue;
        };

        let before = game.history().len();
        if let Err(e) = game.play(pos) {
            writeln!(output, "{}", e)?;
            continue;
        }
        if let Some(reply) = game.history().get(before + 1) {
            writeln!(output, "Engine plays {}", reply.position)?;
        }
    }

    writeln!(
        output,
        "\n{} wins: {}, {} wins: {}, draws: {}",
        player_name(config, mode, Player::X),
        tally.x_wins,
        player_name(config, mode, Player::O),
        tally.o_wins,
        tally.draws
    )?;
    Ok(tally)
}

/// Prints the engine's move for `board`, with per-move scores if asked.
#[instrument(skip(output, board))]
pub fn suggest<W: Write>(output: &mut W, board: &Board, show_scores: bool) -> Result<()> {
    writeln!(output, "{}\n", board)?;

    let Some(decision) = SearchEngine::new().decide(board) else {
        writeln!(output, "Game is already over: {}", board.check_win())?;
        return Ok(());
    };

    writeln!(
        output,
        "Engine (O) plays {} with score {}",
        decision.position, decision.score
    )?;

    if show_scores {
        for (pos, score) in &decision.move_scores {
            writeln!(output, "  {:<24} {:>5}", pos.to_string(), score)?;
        }
        let stats = decision.stats;
        writeln!(
            output,
            "nodes built: {}, visited: {}, cutoffs: {}, pruned children: {}",
            stats.nodes_built, stats.nodes_visited, stats.cutoffs, stats.pruned_children
        )?;
    }
    Ok(())
}
