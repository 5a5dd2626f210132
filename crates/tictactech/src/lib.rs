//! tictactech application library.
//!
//! Loads configuration, resolves themes and runs the terminal front-end
//! on top of [`tictactech_core`].
//!
//! # Example
//!
//! ```
//! use tictactech::{AppConfig, ThemeBook};
//!
//! let config = AppConfig::parse("[display]\ntheme = \"dark\"\n")?;
//! config.validate(&ThemeBook::builtin())?;
//! assert_eq!(config.display().theme(), "dark");
//! # Ok::<(), tictactech::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod theme;
pub mod tui;

pub use config::{
    AppConfig, BoardConfig, ConfigError, DEFAULT_CONFIG_FILE, DisplayConfig, MIN_CELL_SIZE,
    SoundConfig,
};
pub use theme::{Theme, ThemeBook};
