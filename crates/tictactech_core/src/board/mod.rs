mod geometry;
mod position;
mod rules;
mod state;
mod types;

pub use geometry::{Geometry, GeometryError};
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, winning_line};
pub use state::BoardState;
pub use types::{Board, Player, Square};
