//! TicTacTech core - board state machine and keyed animation engine.
//!
//! This crate holds everything in the game that has real rules or
//! lifecycle: the authoritative 3x3 grid and its terminal conditions,
//! the mapping from screen space to grid cells, and a time-driven
//! animation engine that tweens marker visuals. Drawing, audio and the
//! event loop live outside and talk to the core through plain data.
//!
//! # Architecture
//!
//! - **Easing**: pure curves reshaping normalized time
//! - **Animation**: timed effects written through the [`Visuals`] seam
//! - **Registry**: keyed collection ticked once per frame
//! - **Board**: grid, rules, geometry ([`BoardState`])
//! - **Controller**: composition root tying moves to grow-in animations
//! - **Game**: turn alternation and the Playing/Won/Draw flow
//!
//! # Example
//!
//! ```
//! use tictactech_core::{AnimationSettings, Game, Geometry, Phase, Vec2};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let geometry = Geometry::new(Vec2::new(0.0, 0.0), 100.0)?;
//! let mut game = Game::new(geometry, AnimationSettings::default())?;
//!
//! // Click the center of the top-left cell.
//! game.click(50.0, 50.0);
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! // Drive the grow-in animation to completion.
//! game.tick(1.0);
//! assert!(!game.controller().animations().has_any());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod animation;
mod board;
mod controller;
mod easing;
mod game;
mod math;

// Crate-level exports - Easing
pub use easing::{Easing, ease_in, ease_in_out, ease_out};

// Crate-level exports - Geometry primitives
pub use math::{Rect, Vec2, lerp};

// Crate-level exports - Animation engine
pub use animation::{
    Animation, AnimationError, AnimationRegistry, Effect, EffectKind, Property, TargetId, Transform,
    TransformStore, Visuals,
};

// Crate-level exports - Board
pub use board::{
    Board, BoardState, Geometry, GeometryError, Player, Position, Square, check_winner, is_draw,
    is_full, winning_line,
};

// Crate-level exports - Controller and game flow
pub use controller::{AnimationSettings, BoardController};
pub use game::{ClickOutcome, Cue, Game, Move, Outcome, Phase};
