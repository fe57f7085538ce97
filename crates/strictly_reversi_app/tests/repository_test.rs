//! Save file round trips and failure reporting.

use std::fs;
use strictly_reversi::{
    Coordinate, Disk, Game, PlayerKind, ReversiRuler, advance_phase, place_disk,
};
use strictly_reversi_app::{FileOperation, GameRepository};
use tempfile::TempDir;

fn repository_in(dir: &TempDir) -> GameRepository {
    GameRepository::new(dir.path().join("reversi.game"))
}

#[test]
fn test_save_then_load_restores_game() {
    let dir = TempDir::new().unwrap();
    let repository = repository_in(&dir);

    let mut game = Game::default();
    game.set_player(PlayerKind::Computer, Disk::Light);
    place_disk(&mut game, &ReversiRuler, Disk::Dark, Coordinate::new(2, 3)).unwrap();
    advance_phase(&mut game, &ReversiRuler);

    repository.save_game(&game).unwrap();
    let loaded = repository.load_game().unwrap();

    assert_eq!(loaded, game);
}

#[test]
fn test_saved_file_is_symbol_text() {
    let dir = TempDir::new().unwrap();
    let repository = repository_in(&dir);

    repository.save_game(&Game::default()).unwrap();
    let content = fs::read_to_string(repository.path()).unwrap();

    assert_eq!(content.lines().next(), Some("x00"));
    assert_eq!(content.lines().count(), 9);
    assert_eq!(content.lines().nth(4), Some("---ox---"));
    assert!(!dir.path().join("reversi.game.tmp").exists());
}

#[test]
fn test_save_replaces_previous_game() {
    let dir = TempDir::new().unwrap();
    let repository = repository_in(&dir);

    repository.save_game(&Game::with_size(4, 4)).unwrap();
    repository.save_game(&Game::default()).unwrap();

    assert_eq!(repository.load_game().unwrap(), Game::default());
}

#[test]
fn test_missing_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let repository = repository_in(&dir);

    let err = repository.load_game().unwrap_err();

    assert_eq!(err.operation, FileOperation::Read);
    assert_eq!(err.path, repository.path());
    assert!(err.cause.is_some());
}

#[test]
fn test_malformed_file_is_read_error() {
    let dir = TempDir::new().unwrap();
    let repository = repository_in(&dir);
    fs::write(repository.path(), "x00\nxxo\n").unwrap();

    let err = repository.load_game().unwrap_err();

    assert_eq!(err.operation, FileOperation::Read);
    assert!(err.to_string().starts_with("Failed to read game file"));
}

#[test]
fn test_unwritable_location_is_write_error() {
    let dir = TempDir::new().unwrap();
    let repository = GameRepository::new(dir.path().join("missing").join("reversi.game"));

    let err = repository.save_game(&Game::default()).unwrap_err();

    assert_eq!(err.operation, FileOperation::Write);
    assert!(err.to_string().starts_with("Failed to write game file"));
}
