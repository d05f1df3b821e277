//! The service layer: one live game behind the fixed operation contract
//! the presentation layer calls.

use std::sync::{Mutex, MutexGuard};

use crate::ai::MinimaxSearch;
use crate::config::{GameConfig, DEFAULT_SEARCH_DEPTH};
use crate::error::{ConfigError, GameError};
use crate::game::{rules, GameState, PlayerId};

/// Operation contract exposed to the UI collaborator.
///
/// A transport adapter (in-process binding, IPC stub, HTTP handler) holds a
/// `GameBridge` and forwards user intents through it; it never reaches into
/// the game state directly. All operations are synchronous call/return.
pub trait GameBridge: Send + Sync {
    /// Full snapshot of the current game state.
    fn get_state(&self) -> GameState;

    /// Drop a disc in a column for the current player. Returns the winner's
    /// id when the move ends the game with a win.
    fn drop_disc(&self, col: usize) -> Result<Option<PlayerId>, GameError>;

    /// Set the current player, or advance to the next roster entry when no
    /// id is given. Returns the new current player.
    fn change_player(&self, player: Option<PlayerId>) -> Result<PlayerId, GameError>;

    /// Check for a run of at least `run_length` same-player discs through
    /// (row, col). Returns the owning player, if any.
    fn check_for_discs_in_row(
        &self,
        row: usize,
        col: usize,
        run_length: usize,
    ) -> Result<Option<PlayerId>, GameError>;

    /// Start a new game on the same roster and victory condition. Returns
    /// the fresh snapshot.
    fn reset_game(&self) -> GameState;

    /// Id of the AI-controlled player, if one is configured.
    fn get_ai_id(&self) -> Option<PlayerId>;

    /// Best column for the AI player at the given search depth, falling
    /// back to the configured default depth when unspecified.
    fn get_optimal_col(&self, depth: Option<u32>) -> Result<usize, GameError>;
}

struct AiOpponent {
    player: PlayerId,
    default_depth: u32,
}

/// Owns the single authoritative [`GameState`] and implements the
/// [`GameBridge`] contract on top of the rules and search modules.
///
/// A mutex serializes the mutating operations, so concurrent callers see
/// either the state before a move or after it, never a partial update.
/// Search always runs on an isolated copy of the state.
pub struct GameService {
    state: Mutex<GameState>,
    search: MinimaxSearch,
    ai: Option<AiOpponent>,
}

impl GameService {
    /// Build a service for a validated configuration.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let state = GameState::from_config(config)?;
        let ai = config.ai.enabled.then(|| AiOpponent {
            player: PlayerId(config.ai.player),
            default_depth: config.ai.search_depth,
        });

        Ok(GameService {
            state: Mutex::new(state),
            search: MinimaxSearch::new(),
            ai,
        })
    }

    fn state(&self) -> MutexGuard<'_, GameState> {
        // Rules validate before they mutate, so even a poisoned lock never
        // holds a half-applied move.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl GameBridge for GameService {
    fn get_state(&self) -> GameState {
        self.state().clone()
    }

    fn drop_disc(&self, col: usize) -> Result<Option<PlayerId>, GameError> {
        let mut state = self.state();
        let outcome = rules::apply_drop(&mut state, col)?;
        Ok(outcome.winner)
    }

    fn change_player(&self, player: Option<PlayerId>) -> Result<PlayerId, GameError> {
        let mut state = self.state();
        rules::change_player(&mut state, player)
    }

    fn check_for_discs_in_row(
        &self,
        row: usize,
        col: usize,
        run_length: usize,
    ) -> Result<Option<PlayerId>, GameError> {
        let state = self.state();
        rules::check_line(&state, row, col, run_length)
    }

    fn reset_game(&self) -> GameState {
        let mut state = self.state();
        rules::reset(&mut state);
        state.clone()
    }

    fn get_ai_id(&self) -> Option<PlayerId> {
        self.ai.as_ref().map(|ai| ai.player)
    }

    fn get_optimal_col(&self, depth: Option<u32>) -> Result<usize, GameError> {
        // Search works on an isolated copy so it cannot race with a move
        // applied while it is thinking.
        let snapshot = self.state().clone();
        let (player, default_depth) = match &self.ai {
            Some(ai) => (ai.player, ai.default_depth),
            None => (snapshot.current_player(), DEFAULT_SEARCH_DEPTH),
        };
        self.search
            .optimal_column(&snapshot, player, depth.unwrap_or(default_depth))
    }
}
