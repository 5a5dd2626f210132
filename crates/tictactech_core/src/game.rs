//! Game flow: turn alternation and the Playing/Won/Draw phases.
//!
//! The board only knows legality and terminal lines. This layer decides
//! whose turn it is, when the game is over, and which sound cues a move
//! produces.

use crate::animation::AnimationError;
use crate::board::{BoardState, Geometry, Player, Position};
use crate::controller::{AnimationSettings, BoardController};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {player} wins!"),
            Outcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    Playing,
    /// A player completed a line.
    Won(Player),
    /// Board full without a line.
    Draw,
}

impl Phase {
    /// Returns true for Won and Draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Playing)
    }

    /// The outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Playing => None,
            Phase::Won(player) => Some(Outcome::Winner(*player)),
            Phase::Draw => Some(Outcome::Draw),
        }
    }
}

/// Sound event produced by the game flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// A marker was placed.
    Move(Player),
    /// The game was won.
    Win,
    /// The game ended in a draw.
    Draw,
}

impl Cue {
    /// Name of the sound asset for this cue.
    pub fn sound_name(&self) -> &'static str {
        match self {
            Cue::Move(Player::X) => "x_move",
            Cue::Move(Player::O) => "o_move",
            Cue::Win => "win",
            Cue::Draw => "draw",
        }
    }
}

/// Result of a click or move attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Off the board, on a taken cell, or after the game ended.
    Ignored,
    /// The move was applied.
    Placed {
        /// The applied move.
        applied: Move,
        /// Phase after the move.
        phase: Phase,
        /// Sound cues to play, in order.
        cues: Vec<Cue>,
    },
}

/// A game session: board controller plus turn and phase bookkeeping.
#[derive(Debug, Clone)]
pub struct Game {
    controller: BoardController,
    to_move: Player,
    phase: Phase,
}

impl Game {
    /// Creates a game with X to move.
    ///
    /// # Errors
    ///
    /// Returns [`AnimationError`] if `settings` holds an unusable duration.
    pub fn new(geometry: Geometry, settings: AnimationSettings) -> Result<Self, AnimationError> {
        Ok(Self {
            controller: BoardController::new(geometry, settings)?,
            to_move: Player::X,
            phase: Phase::Playing,
        })
    }

    /// Plays the current player at the cell under a screen point.
    #[instrument(skip(self))]
    pub fn click(&mut self, px: f32, py: f32) -> ClickOutcome {
        if self.phase.is_terminal() {
            debug!("Click after game end ignored");
            return ClickOutcome::Ignored;
        }
        match self.controller.state().screen_to_board(px, py) {
            Some(pos) => self.play(pos),
            None => ClickOutcome::Ignored,
        }
    }

    /// Plays the current player at `pos`.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> ClickOutcome {
        if self.phase.is_terminal() || !self.controller.place_at(pos, self.to_move) {
            return ClickOutcome::Ignored;
        }

        let applied = Move::new(self.to_move, pos);
        let mut cues = vec![Cue::Move(applied.player)];

        if let Some((winner, line)) = self.controller.state().winning_line() {
            self.phase = Phase::Won(winner);
            self.controller.highlight(line);
            cues.push(Cue::Win);
            info!(%winner, "Game won");
        } else if self.controller.state().is_board_full() {
            self.phase = Phase::Draw;
            cues.push(Cue::Draw);
            info!("Game drawn");
        } else {
            self.to_move = self.to_move.opponent();
        }

        debug!(%applied, phase = ?self.phase, "Move applied");
        ClickOutcome::Placed {
            applied,
            phase: self.phase,
            cues,
        }
    }

    /// Starts a new game on the same board, X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.controller.reset();
        self.to_move = Player::X;
        self.phase = Phase::Playing;
    }

    /// Advances animations by `delta` seconds.
    pub fn tick(&mut self, delta: f32) -> Vec<String> {
        self.controller.tick(delta)
    }

    /// Moves the board, e.g. after a window resize.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.controller.set_geometry(geometry);
    }

    /// Player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The board controller.
    pub fn controller(&self) -> &BoardController {
        &self.controller
    }

    /// The board state.
    pub fn state(&self) -> &BoardState {
        self.controller.state()
    }
}
