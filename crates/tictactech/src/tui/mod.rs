//! Terminal front-end: the frame loop around the core game.

mod app;
mod input;
mod ui;

pub use app::{App, board_geometry};
pub use input::{digit_position, move_cursor, terminal_to_board};

use crate::config::AppConfig;
use crate::theme::ThemeBook;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tictactech_core::Cue;
use tracing::{error, info, instrument};

/// Runs the game until the user quits.
///
/// Takes over the terminal (raw mode, alternate screen, mouse capture)
/// and restores it on the way out, also when the loop fails.
pub fn run(config: &AppConfig, themes: ThemeBook) -> Result<()> {
    info!("Starting TicTacTech TUI");
    let mut app = App::new(config, themes)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, &mut app, *config.display().fps());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Frame loop: draw, wait for input up to one frame, tick, play cues.
#[instrument(skip(terminal, app))]
fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    fps: u32,
) -> Result<()> {
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(fps.max(1)));
    let size = terminal.size()?;
    app.resize(Rect::new(0, 0, size.width, size.height));

    let mut last_frame = Instant::now();
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(frame_time)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    app.handle_click(mouse.column, mouse.row)
                }
                Event::Resize(width, height) => app.resize(Rect::new(0, 0, width, height)),
                _ => {}
            }
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_frame).as_secs_f32());
        last_frame = now;

        for cue in app.take_cues() {
            ring(terminal.backend_mut(), cue)?;
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Surfaces a cue as a terminal bell.
fn ring(out: &mut impl Write, cue: Cue) -> io::Result<()> {
    info!(sound = cue.sound_name(), "Cue");
    out.write_all(b"\x07")?;
    out.flush()
}
