//! TicTacTech - animated tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use std::sync::Arc;
use tictactech::{AppConfig, ThemeBook};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// Log file written while the terminal UI owns the screen.
const LOG_FILE: &str = "tictactech.log";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Only the game truncates the log file; listing themes leaves it alone.
    match cli.command.unwrap_or_default() {
        Command::Play => {
            init_tracing(Path::new(LOG_FILE))?;
            run_play(&cli)
        }
        Command::Themes => list_themes(),
    }
}

/// Routes logs to a file so they do not interfere with the TUI.
fn init_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactech=debug")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Loads configuration, applies CLI overrides and runs the game.
#[instrument(skip(cli))]
fn run_play(cli: &Cli) -> Result<()> {
    let themes = ThemeBook::builtin();
    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    if let Some(theme) = &cli.theme {
        config.set_theme(theme.clone());
    }
    if let Some(fps) = cli.fps {
        config.set_fps(fps);
    }
    if cli.mute {
        config.set_sound_enabled(false);
    }
    config.validate(&themes).context("Invalid configuration")?;
    debug!(?config, "Effective configuration");

    tictactech::tui::run(&config, themes)?;
    info!("Goodbye");
    Ok(())
}

/// Prints the theme names, one per line.
fn list_themes() -> Result<()> {
    let themes = ThemeBook::builtin();
    for name in themes.available() {
        println!("{}", name);
    }
    Ok(())
}
