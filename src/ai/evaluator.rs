use crate::game::{GameState, PlayerId};

/// Score of a terminal state won by the perspective player. Strictly above
/// anything the heuristic can produce, so search always prefers a real win.
pub const WIN_SCORE: i32 = 1_000_000;

/// Heuristic scores are clamped inside this bound so terminal scores
/// dominate on any grid size.
const HEURISTIC_CAP: i32 = 900_000;

/// Trait for evaluating a position from one player's perspective.
///
/// Implementations must score a won terminal state strictly above every
/// non-terminal state, a lost one strictly below, and a draw at zero.
pub trait Evaluator: Send + Sync {
    fn score(&self, state: &GameState, perspective: PlayerId) -> i32;
}

/// Default heuristic: scans every window of `victory_condition` cells and
/// scores near-complete runs, with a bonus for discs in the center column.
pub struct ThreatEvaluator;

impl ThreatEvaluator {
    /// Score one window given how many discs the perspective player and a
    /// single opponent hold in it. Windows contested by both sides, or by
    /// two different opponents, are dead and score zero.
    fn score_window(own: usize, opponent: usize, run_length: usize) -> i32 {
        if own > 0 && opponent == 0 {
            match run_length - own {
                1 => 50,
                2 => 10,
                _ => 0,
            }
        } else if opponent > 0 && own == 0 {
            match run_length - opponent {
                1 => -80,
                2 => -10,
                _ => 0,
            }
        } else {
            0
        }
    }

    /// Tally one window starting at (row, col) and walking `run_length`
    /// steps along (row_step, col_step).
    fn window(
        state: &GameState,
        perspective: PlayerId,
        row: usize,
        col: usize,
        row_step: isize,
        col_step: isize,
    ) -> i32 {
        let run_length = state.victory_condition();
        let mut own = 0;
        let mut opponent = 0;
        let mut opponent_id = None;

        for i in 0..run_length {
            let r = (row as isize + i as isize * row_step) as usize;
            let c = (col as isize + i as isize * col_step) as usize;
            match state.grid().cell(r, c).owner() {
                Some(id) if id == perspective => own += 1,
                Some(id) => {
                    if *opponent_id.get_or_insert(id) != id {
                        return 0; // Two different opponents share the window
                    }
                    opponent += 1;
                }
                None => {}
            }
        }

        Self::score_window(own, opponent, run_length)
    }
}

impl Evaluator for ThreatEvaluator {
    fn score(&self, state: &GameState, perspective: PlayerId) -> i32 {
        match state.winner_id() {
            Some(id) if id == perspective => return WIN_SCORE,
            Some(_) => return -WIN_SCORE,
            None if state.grid().is_full() => return 0, // Draw
            None => {}
        }

        let grid = state.grid();
        let (width, height) = (grid.width(), grid.height());
        let run = state.victory_condition();
        let mut score = 0;

        // Center column bonus
        let center = width / 2;
        for row in 0..height {
            match grid.cell(row, center).owner() {
                Some(id) if id == perspective => score += 3,
                Some(_) => score -= 3,
                None => {}
            }
        }

        // Window start ranges; empty when the run does not fit on an axis
        let col_starts = width.saturating_sub(run - 1);
        let row_starts = height.saturating_sub(run - 1);

        // Horizontal windows
        for row in 0..height {
            for col in 0..col_starts {
                score += Self::window(state, perspective, row, col, 0, 1);
            }
        }

        // Vertical windows
        for col in 0..width {
            for row in 0..row_starts {
                score += Self::window(state, perspective, row, col, 1, 0);
            }
        }

        // Diagonal windows, both directions
        for row in 0..row_starts {
            for col in 0..col_starts {
                score += Self::window(state, perspective, row, col, 1, 1);
            }
        }
        for row in (run - 1)..height {
            for col in 0..col_starts {
                score += Self::window(state, perspective, row, col, -1, 1);
            }
        }

        score.clamp(-HEURISTIC_CAP, HEURISTIC_CAP)
    }
}
