use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::GameError;
use crate::game::GameState;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal columns. Used as a
/// baseline opponent when measuring search strength.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, state: &GameState) -> Result<usize, GameError> {
        let legal = state.legal_actions();
        if legal.is_empty() {
            return Err(GameError::NoLegalMoves);
        }
        let idx = self.rng.random_range(0..legal.len());
        Ok(legal[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
