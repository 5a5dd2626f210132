//! Command-line interface for tictactech.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TicTacTech - animated tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactech")]
#[command(about = "Animated tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: ./tictactech.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Starting theme, overriding the config file
    #[arg(long, global = true)]
    pub theme: Option<String>,

    /// Frames per second, overriding the config file
    #[arg(long, global = true)]
    pub fps: Option<u32>,

    /// Disable sound cues
    #[arg(long, global = true)]
    pub mute: bool,

    /// Subcommand to run (default: play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Command {
    /// Play a two-player game
    #[default]
    Play,

    /// List the available themes
    Themes,
}
