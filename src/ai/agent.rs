use crate::error::GameError;
use crate::game::{GameState, PlayerId};

use super::search::MinimaxSearch;

/// Interface for anything that can pick a column to play.
pub trait Agent: Send {
    /// Select a column given the current game state.
    fn select_column(&mut self, state: &GameState) -> Result<usize, GameError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Agent backed by the minimax search at a fixed depth.
pub struct MinimaxAgent {
    player: PlayerId,
    depth: u32,
    search: MinimaxSearch,
}

impl MinimaxAgent {
    pub fn new(player: PlayerId, depth: u32) -> Self {
        MinimaxAgent {
            player,
            depth,
            search: MinimaxSearch::new(),
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, state: &GameState) -> Result<usize, GameError> {
        self.search.optimal_column(state, self.player, self.depth)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::config::GameConfig;
    use crate::game::{rules, GameOutcome};

    fn initial() -> GameState {
        GameState::from_config(&GameConfig::default()).unwrap()
    }

    #[test]
    fn name_is_minimax() {
        let agent = MinimaxAgent::new(PlayerId(0), 4);
        assert_eq!(agent.name(), "Minimax");
    }

    #[test]
    fn full_game_vs_self_completes() {
        let mut first = MinimaxAgent::new(PlayerId(0), 3);
        let mut second = MinimaxAgent::new(PlayerId(1), 3);
        let mut state = initial();

        while !state.is_terminal() {
            let col = if state.current_player() == PlayerId(0) {
                first.select_column(&state).unwrap()
            } else {
                second.select_column(&state).unwrap()
            };
            rules::apply_drop(&mut state, col).unwrap();
        }

        assert!(state.outcome().is_some());
    }

    #[test]
    fn beats_random_agent() {
        let games_per_side = 10;
        let mut minimax_wins = 0;
        let total = games_per_side * 2;

        for minimax_id in [PlayerId(0), PlayerId(1)] {
            for _ in 0..games_per_side {
                let mut minimax = MinimaxAgent::new(minimax_id, 3);
                let mut random = RandomAgent::new();
                let mut state = initial();

                while !state.is_terminal() {
                    let col = if state.current_player() == minimax_id {
                        minimax.select_column(&state).unwrap()
                    } else {
                        random.select_column(&state).unwrap()
                    };
                    rules::apply_drop(&mut state, col).unwrap();
                }

                if state.outcome() == Some(GameOutcome::Winner(minimax_id)) {
                    minimax_wins += 1;
                }
            }
        }

        let win_rate = minimax_wins as f64 / total as f64;
        assert!(
            win_rate > 0.80,
            "minimax should beat random >80% of the time, got {:.0}% ({minimax_wins}/{total})",
            win_rate * 100.0
        );
    }
}
