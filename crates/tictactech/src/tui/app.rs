//! Front-end state: the game, the keyboard cursor and the screen layout.

use super::input::{digit_position, move_cursor, terminal_to_board};
use super::ui;
use crate::config::AppConfig;
use crate::theme::{Theme, ThemeBook};
use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use ratatui::layout::{self, Rect};
use tictactech_core::{ClickOutcome, Cue, Game, Geometry, GeometryError, Player, Position, Vec2};
use tracing::{debug, info, instrument, trace, warn};

/// Everything the render loop needs between frames.
#[derive(Debug)]
pub struct App {
    game: Game,
    themes: ThemeBook,
    cursor: Position,
    cell_size: f32,
    centered: bool,
    sound_enabled: bool,
    board_area: Rect,
    pending_cues: Vec<Cue>,
    should_quit: bool,
}

impl App {
    /// Builds the app from validated configuration.
    #[instrument(skip_all)]
    pub fn new(config: &AppConfig, mut themes: ThemeBook) -> Result<Self> {
        if !themes.set_current(config.display().theme()) {
            warn!(theme = %config.display().theme(), "Falling back to default theme");
        }
        let cell_size = *config.board().cell_size();
        let geometry = Geometry::new(Vec2::ZERO, cell_size).context("Invalid board cell size")?;
        let game =
            Game::new(geometry, *config.animation()).context("Invalid animation settings")?;

        Ok(Self {
            game,
            themes,
            cursor: Position::Center,
            cell_size,
            centered: *config.board().centered(),
            sound_enabled: *config.sound().enabled(),
            board_area: Rect::default(),
            pending_cues: Vec::new(),
            should_quit: false,
        })
    }

    /// Lays the board out inside a terminal of the given area.
    #[instrument(skip(self))]
    pub fn resize(&mut self, area: Rect) {
        let [_, board_area, _] = ui::layout(area);
        self.board_area = board_area;
        match board_geometry(board_area, self.cell_size, self.centered) {
            Ok(geometry) => self.game.set_geometry(geometry),
            Err(error) => warn!(%error, "Keeping previous board geometry"),
        }
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.game.restart();
                self.pending_cues.clear();
            }
            KeyCode::Char('m') => {
                self.sound_enabled = !self.sound_enabled;
                debug!(enabled = self.sound_enabled, "Sound toggled");
            }
            KeyCode::Char('t') => {
                self.themes.cycle();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let outcome = self.game.play(self.cursor);
                self.record(outcome);
            }
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    let outcome = self.game.play(pos);
                    self.record(outcome);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    /// Applies a left click on terminal cell `(column, row)`.
    ///
    /// Clicks outside the board area are ignored, also where a board cell
    /// extends past it on a small terminal.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if !self.board_area.contains(layout::Position::new(column, row)) {
            trace!("Click outside board area");
            return;
        }
        let (x, y) = terminal_to_board(column, row);
        let outcome = self.game.click(x, y);
        self.record(outcome);
    }

    /// Advances animations by `delta` seconds.
    pub fn tick(&mut self, delta: f32) {
        let completed = self.game.tick(delta);
        if !completed.is_empty() {
            trace!(?completed, "Animations completed");
        }
    }

    /// Drains cues produced since the last call. Empty while muted.
    pub fn take_cues(&mut self) -> Vec<Cue> {
        let cues = std::mem::take(&mut self.pending_cues);
        if self.sound_enabled {
            cues
        } else {
            Vec::new()
        }
    }

    fn record(&mut self, outcome: ClickOutcome) {
        if let ClickOutcome::Placed { applied, cues, .. } = outcome {
            self.cursor = applied.position;
            self.pending_cues.extend(cues);
        }
    }

    /// One-line description of the game for the status bar.
    pub fn status(&self) -> String {
        match self.game.phase().outcome() {
            Some(outcome) => format!("{} Press r to play again.", outcome),
            None => format!("Player {} to move", self.game.to_move()),
        }
    }

    /// Winner of a finished game, if it was not a draw.
    pub fn winner(&self) -> Option<Player> {
        self.game.phase().outcome().and_then(|outcome| outcome.winner())
    }

    /// The game session.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The theme in use.
    pub fn theme(&self) -> &Theme {
        self.themes.current()
    }

    /// Name of the theme in use.
    pub fn theme_name(&self) -> &str {
        self.themes.current_name()
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether cues are surfaced.
    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Terminal area reserved for the board.
    pub fn board_area(&self) -> Rect {
        self.board_area
    }
}

/// Board geometry for a terminal area, in board units.
///
/// Board x is the terminal column and board y is twice the terminal row.
/// The origin is snapped so cell edges fall on whole columns and rows.
pub fn board_geometry(
    area: Rect,
    cell_size: f32,
    centered: bool,
) -> Result<Geometry, GeometryError> {
    let side = cell_size * 3.0;
    let mut x = f32::from(area.x);
    let mut y = f32::from(area.y) * 2.0;
    if centered {
        x += ((f32::from(area.width) - side) / 2.0).max(0.0).floor();
        y += ((f32::from(area.height) * 2.0 - side) / 4.0).max(0.0).floor() * 2.0;
    }
    Geometry::new(Vec2::new(x, y), cell_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactech_core::Phase;

    fn app() -> App {
        let mut app = App::new(&AppConfig::default(), ThemeBook::builtin()).unwrap();
        app.resize(Rect::new(0, 0, 80, 24));
        app
    }

    #[test]
    fn test_board_geometry_centers_in_area() {
        let geometry = board_geometry(Rect::new(0, 3, 80, 18), 10.0, true).unwrap();
        // 30 columns wide in 80, 15 rows tall in 18.
        assert_eq!(geometry.origin(), Vec2::new(25.0, 8.0));

        let pinned = board_geometry(Rect::new(0, 3, 80, 18), 10.0, false).unwrap();
        assert_eq!(pinned.origin(), Vec2::new(0.0, 6.0));
    }

    #[test]
    fn test_click_on_cell_plays_there() {
        let mut app = app();
        // Board origin is column 25, row 4; cells are 10 columns by 5 rows.
        app.handle_click(26, 4);
        let top_left = app.game().state().board().get(Position::TopLeft);
        assert_eq!(top_left.player(), Some(Player::X));
        assert_eq!(app.cursor(), Position::TopLeft);

        app.handle_click(40, 18);
        assert_eq!(
            app.game().state().board().get(Position::BottomCenter).player(),
            Some(Player::O)
        );
        assert_eq!(app.take_cues(), vec![Cue::Move(Player::X), Cue::Move(Player::O)]);
    }

    #[test]
    fn test_click_outside_board_ignored() {
        let mut app = app();
        app.handle_click(0, 0);
        app.handle_click(79, 23);
        assert_eq!(app.game().state().board().occupied(), 0);
        assert!(app.take_cues().is_empty());
    }

    #[test]
    fn test_click_below_board_area_ignored() {
        let mut app = app();
        // Too short for a 15-row board: cells spill past the board area.
        app.resize(Rect::new(0, 0, 80, 12));
        let below = app.board_area().bottom();
        let (x, y) = terminal_to_board(40, below);
        assert!(app.game().state().screen_to_board(x, y).is_some());

        app.handle_click(40, below);
        assert_eq!(app.game().state().board().occupied(), 0);
        assert!(app.take_cues().is_empty());
    }

    #[test]
    fn test_keyboard_game_to_win() {
        let mut app = app();
        for c in ['1', '5', '2', '9', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        assert_eq!(app.game().phase(), Phase::Won(Player::X));
        assert!(app.status().starts_with("Player X wins!"));
        assert_eq!(app.winner(), Some(Player::X));
        assert_eq!(app.take_cues().last(), Some(&Cue::Win));

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.game().phase(), Phase::Playing);
        assert_eq!(app.status(), "Player X to move");
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Enter);
        let top_left = app.game().state().board().get(Position::TopLeft);
        assert_eq!(top_left.player(), Some(Player::X));
    }

    #[test]
    fn test_mute_drops_cues() {
        let mut app = app();
        app.handle_key(KeyCode::Char('m'));
        app.handle_key(KeyCode::Char('5'));
        assert!(!app.sound_enabled());
        assert!(app.take_cues().is_empty());
    }

    #[test]
    fn test_theme_cycle_and_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.theme_name(), "colorful");
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}
