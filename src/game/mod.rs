//! Core game logic: grid representation, player roster, and the game state
//! machine, plus the rules that mediate every mutation.

mod grid;
mod player;
pub mod rules;
mod state;

pub use grid::{Cell, Grid, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use player::{Player, PlayerId, DISC_COLORS};
pub use rules::DropOutcome;
pub use state::{GameOutcome, GameState};
