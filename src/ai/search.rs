use crate::error::GameError;
use crate::game::{rules, GameState, PlayerId};

use super::evaluator::{Evaluator, ThreatEvaluator};

/// Searching less than one ply is meaningless, so smaller depths clamp here.
pub const MIN_SEARCH_DEPTH: u32 = 1;

/// Depth-bounded minimax with alpha-beta pruning.
///
/// Every simulated move runs on a cloned [`GameState`], so the caller's
/// state is never touched. The AI player maximizes; every other roster
/// player minimizes. Among equally scored columns the lowest index wins.
/// Root children are searched with the full window, which keeps the pruned
/// result identical to unpruned minimax for the same depth and tie-break.
pub struct MinimaxSearch {
    evaluator: Box<dyn Evaluator>,
}

impl MinimaxSearch {
    pub fn new() -> Self {
        MinimaxSearch {
            evaluator: Box::new(ThreatEvaluator),
        }
    }

    pub fn with_evaluator(evaluator: Box<dyn Evaluator>) -> Self {
        MinimaxSearch { evaluator }
    }

    /// Pick the best column for `ai_player`, looking `depth` plies ahead.
    pub fn optimal_column(
        &self,
        state: &GameState,
        ai_player: PlayerId,
        depth: u32,
    ) -> Result<usize, GameError> {
        let depth = depth.max(MIN_SEARCH_DEPTH);
        let legal = state.legal_actions();
        if legal.is_empty() {
            return Err(GameError::NoLegalMoves);
        }

        let mut best_col = legal[0];
        let mut best_value = i64::MIN;

        for col in legal {
            let mut child = state.clone();
            rules::apply_drop(&mut child, col)?;
            let value = self.minimax(&child, ai_player, depth - 1, i64::MIN, i64::MAX);
            if value > best_value {
                best_value = value;
                best_col = col;
            }
        }

        Ok(best_col)
    }

    fn minimax(
        &self,
        node: &GameState,
        ai_player: PlayerId,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
    ) -> i64 {
        if node.is_terminal() || depth == 0 {
            return self.leaf_value(node, ai_player, depth);
        }

        let maximizing = node.current_player() == ai_player;
        let mut value = if maximizing { i64::MIN } else { i64::MAX };

        for col in node.legal_actions() {
            let mut child = node.clone();
            rules::apply_drop(&mut child, col).unwrap();
            let child_value = self.minimax(&child, ai_player, depth - 1, alpha, beta);

            if maximizing {
                value = value.max(child_value);
                alpha = alpha.max(value);
                if alpha >= beta {
                    break; // Beta cutoff
                }
            } else {
                value = value.min(child_value);
                beta = beta.min(value);
                if beta <= alpha {
                    break; // Alpha cutoff
                }
            }
        }

        value
    }

    /// Evaluator score, with terminal leaves pushed away from zero by the
    /// remaining depth so wins in fewer plies outrank slower ones.
    fn leaf_value(&self, node: &GameState, ai_player: PlayerId, depth_left: u32) -> i64 {
        let score = self.evaluator.score(node, ai_player) as i64;
        if node.winner_id().is_some() {
            if score > 0 {
                score + depth_left as i64
            } else {
                score - depth_left as i64
            }
        } else {
            score
        }
    }
}

impl Default for MinimaxSearch {
    fn default() -> Self {
        Self::new()
    }
}
