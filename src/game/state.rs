use std::fmt;

use serde::Serialize;

use crate::config::GameConfig;
use crate::error::ConfigError;

use super::{Cell, Grid, Player, PlayerId};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(PlayerId),
    Draw,
}

/// The authoritative model of one match: grid, roster, whose turn it is,
/// the configured victory condition, and the winner once the game ends.
///
/// Mutation goes through [`super::rules`]; everything else reads snapshots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameState {
    pub(super) grid: Grid,
    pub(super) players: Vec<Player>,
    pub(super) current_player: usize,
    pub(super) victory_condition: usize,
    pub(super) winner_id: Option<PlayerId>,
}

impl GameState {
    /// Build the initial state for a validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(GameState {
            grid: Grid::new(config.grid.width, config.grid.height),
            players: Player::roster(&config.players),
            current_player: 0, // First player starts
            victory_condition: config.victory_condition,
            winner_id: None,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a roster entry by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    /// Id of the player whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        self.players[self.current_player].id()
    }

    pub fn victory_condition(&self) -> usize {
        self.victory_condition
    }

    pub fn winner_id(&self) -> Option<PlayerId> {
        self.winner_id
    }

    /// Check if the game is over: someone won, or the grid filled up.
    pub fn is_terminal(&self) -> bool {
        self.winner_id.is_some() || self.grid.is_full()
    }

    /// Get game outcome if the game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.winner_id {
            Some(id) => Some(GameOutcome::Winner(id)),
            None if self.grid.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.grid.legal_columns().collect()
    }
}

/// Text dump of the grid from top to bottom, `_` for empty spaces and
/// player ids for discs, with the next player to move underneath.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.grid.height()).rev() {
            let line: Vec<String> = (0..self.grid.width())
                .map(|col| match self.grid.cell(row, col) {
                    Cell::Empty => "_".to_string(),
                    Cell::Occupied(id) => id.to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        writeln!(f, "-------------------------")?;
        write!(
            f,
            "Next Player: {}",
            self.players[self.current_player].name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::from_config(&GameConfig::default()).unwrap();
        assert_eq!(state.current_player(), PlayerId(0));
        assert!(!state.is_terminal());
        assert_eq!(state.outcome(), None);
        assert_eq!(state.legal_actions(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_player_lookup() {
        let state = GameState::from_config(&GameConfig::default()).unwrap();
        assert_eq!(state.player(PlayerId(1)).unwrap().name(), "Player Two");
        assert!(state.player(PlayerId(9)).is_none());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = GameConfig::default();
        config.grid.width = 0;
        assert!(GameState::from_config(&config).is_err());
    }

    #[test]
    fn test_display_shows_grid_and_next_player() {
        let mut config = GameConfig::default();
        config.grid.width = 3;
        config.grid.height = 2;
        config.victory_condition = 3;
        let mut state = GameState::from_config(&config).unwrap();

        state.grid.drop_disc(0, PlayerId(0)).unwrap();
        state.grid.drop_disc(2, PlayerId(1)).unwrap();

        let dump = state.to_string();
        let mut lines = dump.lines();
        assert_eq!(lines.next(), Some("_ _ _"));
        assert_eq!(lines.next(), Some("0 _ 1"));
        assert_eq!(lines.next(), Some("-------------------------"));
        assert_eq!(lines.next(), Some("Next Player: Player One"));
    }
}
