//! Line-based terminal front end.
//!
//! Reads commands from stdin, forwards them to a [`GameController`] running
//! on its own task, and prints the events it publishes.

use anyhow::Result;
use derive_more::{Display, Error};
use std::sync::Arc;
use strictly_reversi::{Board, Coordinate, Disk, Game, GamePhase, PlayerKind, ReversiRuler};
use strictly_reversi_app::{AppConfig, GameController, GameEvent, GameRepository, Input};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  d3                  place a disk (column letter, row number)
  new                 start a new game
  dark <kind>         set dark to manual or computer
  light <kind>        set light to manual or computer
  help                show this help
  quit                leave (the game is saved)";

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place at a cell.
    Place(Coordinate),
    /// Reset the game.
    NewGame,
    /// Change a side's player.
    SetPlayer(Disk, PlayerKind),
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
}

/// A line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized command '{}' (type 'help')", input)]
pub struct CommandError {
    input: String,
}

impl Command {
    /// Parses a trimmed input line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let error = || CommandError {
            input: line.to_string(),
        };
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["new" | "reset"] => Ok(Command::NewGame),
            ["help" | "?"] => Ok(Command::Help),
            ["quit" | "exit" | "q"] => Ok(Command::Quit),
            [side, kind] => {
                let side = match side.to_ascii_lowercase().as_str() {
                    "dark" | "x" => Disk::Dark,
                    "light" | "o" => Disk::Light,
                    _ => return Err(error()),
                };
                let kind = kind.parse::<PlayerKind>().map_err(|_| error())?;
                Ok(Command::SetPlayer(side, kind))
            }
            [cell] => parse_cell(cell).map(Command::Place).ok_or_else(error),
            _ => Err(error()),
        }
    }
}

/// Parses algebraic notation: `d3` is column `d`, row 3. Only the first
/// [`AppConfig::MAX_COLUMNS`] columns are reachable.
fn parse_cell(cell: &str) -> Option<Coordinate> {
    let mut chars = cell.chars();
    let letter = chars.next()?.to_ascii_lowercase();
    if !letter.is_ascii_lowercase() {
        return None;
    }
    let row: usize = chars.as_str().parse().ok()?;
    let column = (letter as u8 - b'a') as usize;
    Some(Coordinate::new(row.checked_sub(1)?, column))
}

/// Formats a coordinate in algebraic notation.
fn cell_name(at: Coordinate) -> String {
    let letter = (b'a' + (at.column % 26) as u8) as char;
    format!("{}{}", letter, at.row + 1)
}

/// Plays interactively until the user quits or stdin closes.
#[instrument(skip_all)]
pub async fn play(
    config: &AppConfig,
    dark: Option<PlayerKind>,
    light: Option<PlayerKind>,
) -> Result<()> {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let controller = GameController::new(
        config,
        Arc::new(ReversiRuler),
        Some(GameRepository::new(config.save_path())),
        &input_tx,
        event_tx,
    );
    let mut board = controller.game().board().clone();
    let controller_task = tokio::spawn(controller.run(input_rx));

    for (side, kind) in [(Disk::Dark, dark), (Disk::Light, light)] {
        if let Some(kind) = kind {
            input_tx.send(Input::SetPlayer { side, kind })?;
        }
    }

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(event) = event_rx.recv() => show_event(&mut board, event),
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("Stdin closed");
                    break;
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match Command::parse(line) {
                    Ok(Command::Quit) => break,
                    Ok(Command::Help) => println!("{}", HELP),
                    Ok(Command::Place(at)) => input_tx.send(Input::Tap(at))?,
                    Ok(Command::NewGame) => input_tx.send(Input::NewGame)?,
                    Ok(Command::SetPlayer(side, kind)) => {
                        input_tx.send(Input::SetPlayer { side, kind })?
                    }
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    info!("Leaving game");
    drop(input_tx);
    controller_task.await?;
    Ok(())
}

/// Prints one controller event, keeping the local board in step.
fn show_event(board: &mut Board, event: GameEvent) {
    match event {
        GameEvent::Synced(game) => {
            *board = game.board().clone();
            println!("\n{}\n", board);
            println!("{}", phase_line(&game));
        }
        GameEvent::DiskPlaced { placement, score } => {
            for at in placement.coordinates() {
                board.set(at, Some(*placement.disk()));
            }
            println!(
                "\n{} plays {}, flipping {}",
                placement.disk(),
                cell_name(*placement.origin()),
                placement.flipped().len()
            );
            println!("\n{}\n", board);
            println!("{}", score);
        }
        GameEvent::Rejected(e) => println!("{}", e),
        GameEvent::Passed { side } => println!("{} has no legal move and passes", side),
        GameEvent::TurnStarted { turn, player } => match player {
            PlayerKind::Manual => println!("{} to move", turn),
            PlayerKind::Computer => println!("{} to move (computer)", turn),
        },
        GameEvent::PlayerChanged { side, kind } => println!("{} is now played by {}", side, kind),
        GameEvent::ComputerThinking { side, thinking } => {
            if thinking {
                println!("Computer is thinking for {}...", side);
            }
        }
        GameEvent::GameOver { winner, score } => match winner {
            Some(winner) => println!("Game over: {} wins ({})", winner, score),
            None => println!("Game over: tie ({})", score),
        },
    }
}

/// Describes the phase and who plays each side.
pub fn phase_line(game: &Game) -> String {
    let players = format!(
        "dark: {}, light: {}",
        game.player(Disk::Dark),
        game.player(Disk::Light)
    );
    match game.phase() {
        GamePhase::Ongoing { turn } => format!("{}'s turn ({})", turn, players),
        GamePhase::Ended => format!("Game over ({})", players),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_commands() {
        assert_eq!(
            Command::parse("d3"),
            Ok(Command::Place(Coordinate::new(2, 3)))
        );
        assert_eq!(
            Command::parse("A1"),
            Ok(Command::Place(Coordinate::new(0, 0)))
        );
        assert!(Command::parse("a0").is_err());
        assert!(Command::parse("3d").is_err());
    }

    #[test]
    fn test_parse_player_commands() {
        assert_eq!(
            Command::parse("light computer"),
            Ok(Command::SetPlayer(Disk::Light, PlayerKind::Computer))
        );
        assert_eq!(
            Command::parse("x Manual"),
            Ok(Command::SetPlayer(Disk::Dark, PlayerKind::Manual))
        );
        assert!(Command::parse("light robot").is_err());
        assert!(Command::parse("grey computer").is_err());
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Command::parse("new"), Ok(Command::NewGame));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert!(Command::parse("new game please").is_err());
    }

    #[test]
    fn test_cell_name_matches_parse() {
        let at = Coordinate::new(7, 2);
        assert_eq!(cell_name(at), "c8");
        assert_eq!(parse_cell(&cell_name(at)), Some(at));
    }

    #[test]
    fn test_phase_line() {
        let mut game = Game::default();
        game.set_player(PlayerKind::Computer, Disk::Light);
        assert_eq!(
            phase_line(&game),
            "Dark's turn (dark: Manual, light: Computer)"
        );
    }
}
