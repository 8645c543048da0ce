//! Command-line interface for strictly_gomoku.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_gomoku::Coordinate;
use strictly_gomoku_cli::parse_coordinate;

/// Strictly Gomoku - five in a row on an unbounded grid
#[derive(Parser, Debug)]
#[command(name = "strictly_gomoku")]
#[command(about = "Two-player five-in-a-row on an unbounded grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat game in the terminal, one `x,y` per line
    Play {
        /// Path to a TOML display config
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply a list of moves to a new game and print the result
    Replay {
        /// Moves in play order, each as `x,y`. Put flags before the moves,
        /// since values may start with `-`
        #[arg(required = true, allow_hyphen_values = true, value_parser = parse_coordinate)]
        moves: Vec<Coordinate>,

        /// Path to a TOML display config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the final state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}
