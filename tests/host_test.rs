//! Tests for the terminal host loop and replay.

use std::io::Cursor;
use strictly_gomoku_cli::{
    replay, run_interactive, Coordinate, GameSession, GameSnapshot, HostConfig, MarkKind,
    MoveError,
};

fn run(input: &str) -> (GameSession, String) {
    let mut session = GameSession::new();
    let mut output = Vec::new();
    run_interactive(
        &mut session,
        &HostConfig::default(),
        Cursor::new(input.as_bytes()),
        &mut output,
    )
    .expect("Host loop failed");
    (session, String::from_utf8(output).expect("UTF-8 output"))
}

#[test]
fn test_interactive_game_to_win() {
    let input = "0,0\n0,0\nfoo\n0,1\n1,0\n1,1\n2,0\n2,1\n3,0\n3,1\n4,0\n5,5\n";
    let (session, output) = run(input);

    assert!(session.is_ended());
    assert_eq!(session.winner(), Some(MarkKind::First));
    // The line after the winning move is never read.
    assert_eq!(session.board().mark_at(Coordinate::new(5, 5)), None);

    assert!(output.contains("Cell (0, 0) is already occupied, ignored"));
    assert!(output.contains("Cannot read \"foo\" as a coordinate"));
    assert!(output.contains("X wins: (4, 0) -> (0, 0)"));
    // Rings outside the winning line are drawn faded.
    assert!(output.contains("o  o  o  o"));
}

#[test]
fn test_interactive_quit() {
    let (session, output) = run("quit\n0,0\n");
    assert!(session.board().is_empty());
    assert!(output.contains("X to move"));
}

#[test]
fn test_interactive_end_of_input() {
    let (session, _) = run("0,0\n\n");
    assert_eq!(session.board().len(), 1);
    assert_eq!(session.turn(), Some(MarkKind::Second));
}

#[test]
fn test_replay_to_win() {
    let moves: Vec<Coordinate> = [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2), (0, 3), (3, 3), (9, 9), (4, 4)]
        .into_iter()
        .map(Coordinate::from)
        .collect();
    let session = replay(&moves).expect("Valid replay");
    assert_eq!(session.winner(), Some(MarkKind::First));
}

#[test]
fn test_replay_rejects_moves_after_win() {
    let moves: Vec<Coordinate> = [
        (0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1), (4, 0), (4, 1),
    ]
    .into_iter()
    .map(Coordinate::from)
    .collect();
    let err = replay(&moves).unwrap_err();
    assert_eq!(err.index, 9);
    assert_eq!(err.source, MoveError::GameAlreadyEnded);
}

#[test]
fn test_snapshot_json() {
    let moves: Vec<Coordinate> = [
        (0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1), (4, 0),
    ]
    .into_iter()
    .map(Coordinate::from)
    .collect();
    let session = replay(&moves).expect("Valid replay");

    let json = serde_json::to_value(GameSnapshot::from(&session)).unwrap();
    assert_eq!(json["status"]["state"], "ended");
    assert_eq!(json["status"]["winner"], "First");
    assert_eq!(json["status"]["win_line"].as_array().unwrap().len(), 5);
    assert_eq!(json["marks"].as_array().unwrap().len(), 9);
    assert_eq!(json["marks"][0]["coordinate"]["x"], 0);
    assert_eq!(json["faded"].as_array().unwrap().len(), 4);
    assert_eq!(json["faded"][0]["mark"], "Second");
}
