//! Named color themes.

use derive_getters::Getters;
use ratatui::style::Color;
use std::collections::BTreeMap;
use tictactech_core::Player;
use tracing::{info, instrument, warn};

/// Colors used to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Theme {
    /// Fill behind the grid.
    board_background: Color,
    /// Cell borders.
    grid_line: Color,
    /// X markers.
    x_marker: Color,
    /// O markers.
    o_marker: Color,
    /// Background of the keyboard cursor cell.
    cursor: Color,
    /// Status text.
    text: Color,
    /// Title bar.
    title: Color,
}

impl Theme {
    /// The classic gray board.
    pub fn classic() -> Self {
        Self {
            board_background: Color::Rgb(50, 50, 50),
            grid_line: Color::White,
            x_marker: Color::Rgb(110, 170, 255),
            o_marker: Color::Rgb(255, 120, 100),
            cursor: Color::Rgb(150, 150, 150),
            text: Color::White,
            title: Color::White,
        }
    }

    /// Low-contrast dark board.
    pub fn dark() -> Self {
        Self {
            board_background: Color::Rgb(20, 20, 20),
            grid_line: Color::Rgb(100, 100, 100),
            x_marker: Color::Rgb(170, 170, 210),
            o_marker: Color::Rgb(210, 150, 150),
            cursor: Color::Rgb(60, 60, 60),
            text: Color::Rgb(200, 200, 200),
            title: Color::Rgb(220, 220, 220),
        }
    }

    /// Blue board with warm accents.
    pub fn colorful() -> Self {
        Self {
            board_background: Color::Rgb(40, 60, 80),
            grid_line: Color::Rgb(220, 220, 100),
            x_marker: Color::Rgb(255, 200, 100),
            o_marker: Color::Rgb(120, 220, 160),
            cursor: Color::Rgb(80, 140, 200),
            text: Color::Rgb(255, 255, 180),
            title: Color::Rgb(255, 200, 100),
        }
    }

    /// Marker color for `player`.
    pub fn marker(&self, player: Player) -> Color {
        match player {
            Player::X => self.x_marker,
            Player::O => self.o_marker,
        }
    }
}

/// Registry of themes with one current selection.
#[derive(Debug, Clone)]
pub struct ThemeBook {
    themes: BTreeMap<String, Theme>,
    current_name: String,
    current: Theme,
}

impl ThemeBook {
    /// The three built-in themes with `default` selected.
    pub fn builtin() -> Self {
        let mut book = Self {
            themes: BTreeMap::new(),
            current_name: "default".to_string(),
            current: Theme::classic(),
        };
        book.add("default", Theme::classic());
        book.add("dark", Theme::dark());
        book.add("colorful", Theme::colorful());
        book
    }

    /// Registers `theme` under `name`, replacing any existing one.
    pub fn add(&mut self, name: impl Into<String>, theme: Theme) {
        let name = name.into();
        if name == self.current_name {
            self.current = theme;
        }
        self.themes.insert(name, theme);
    }

    /// Selects the theme called `name`. Returns `false` if it is unknown.
    #[instrument(skip(self))]
    pub fn set_current(&mut self, name: &str) -> bool {
        match self.themes.get(name) {
            Some(theme) => {
                self.current = *theme;
                self.current_name = name.to_string();
                info!("Theme changed");
                true
            }
            None => {
                warn!("Unknown theme");
                false
            }
        }
    }

    /// Selects the next theme in name order, wrapping around.
    pub fn cycle(&mut self) -> &str {
        let next = self
            .themes
            .keys()
            .skip_while(|name| **name != self.current_name)
            .nth(1)
            .or_else(|| self.themes.keys().next())
            .cloned();
        if let Some(next) = next {
            self.set_current(&next);
        }
        &self.current_name
    }

    /// The selected theme.
    pub fn current(&self) -> &Theme {
        &self.current
    }

    /// Name of the selected theme.
    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    /// Looks up a theme by name.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Theme names in sorted order.
    pub fn available(&self) -> Vec<&str> {
        self.themes.keys().map(String::as_str).collect()
    }

    /// Returns true if a theme called `name` exists.
    pub fn exists(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }
}

impl Default for ThemeBook {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_themes() {
        let book = ThemeBook::builtin();
        assert_eq!(book.available(), vec!["colorful", "dark", "default"]);
        assert_eq!(book.current_name(), "default");
        assert_eq!(book.current(), &Theme::classic());
    }

    #[test]
    fn test_set_current_unknown_keeps_selection() {
        let mut book = ThemeBook::builtin();
        assert!(book.set_current("dark"));
        assert!(!book.set_current("neon"));
        assert_eq!(book.current_name(), "dark");
        assert_eq!(*book.current().board_background(), Color::Rgb(20, 20, 20));
    }

    #[test]
    fn test_cycle_wraps() {
        let mut book = ThemeBook::builtin();
        assert_eq!(book.cycle(), "colorful");
        assert_eq!(book.cycle(), "dark");
        assert_eq!(book.cycle(), "default");
    }

    #[test]
    fn test_add_replaces_current() {
        let mut book = ThemeBook::builtin();
        book.add("default", Theme::dark());
        assert_eq!(book.current(), &Theme::dark());
        assert!(book.get("default").is_some());
    }
}
