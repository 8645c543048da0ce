//! Strictly Gomoku - terminal host
//!
//! Hot-seat play and move-list replay for five-in-a-row sessions.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use std::path::PathBuf;
use strictly_gomoku::{Coordinate, GameSession};
use strictly_gomoku_cli::{render_board, replay, run_interactive, status_line, GameSnapshot, HostConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the game.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config),
        Command::Replay {
            moves,
            config,
            json,
        } => run_replay(moves, config, json),
    }
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(config: Option<PathBuf>) -> Result<()> {
    let config = HostConfig::load(config.as_deref())?;
    let mut session = GameSession::new();

    info!("Starting hot-seat game");
    run_interactive(&mut session, &config, io::stdin().lock(), io::stdout().lock())?;

    info!(ended = session.is_ended(), marks = session.board().len(), "Game closed");
    Ok(())
}

/// Replay a move list and print the final state
#[instrument(skip(moves), fields(moves = moves.len()))]
fn run_replay(moves: Vec<Coordinate>, config: Option<PathBuf>, json: bool) -> Result<()> {
    let config = HostConfig::load(config.as_deref())?;
    let session = replay(&moves)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&GameSnapshot::from(&session))?);
    } else {
        print!("{}", render_board(&session, &config));
        println!("{}", status_line(&session, &config));
    }
    Ok(())
}
