//! Game rules: legal-move checks, disc placement, win/draw detection, and
//! turn order. All functions operate on a [`GameState`] passed in by the
//! caller and either mutate it atomically or leave it untouched on failure.

use crate::error::GameError;

use super::{GameState, PlayerId};

/// The four axes a winning line can lie on, as (row, col) steps.
const AXES: [(isize, isize); 4] = [
    (0, 1),  // horizontal
    (1, 0),  // vertical
    (1, 1),  // diagonal /
    (1, -1), // diagonal \
];

/// Result of a successful drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropOutcome {
    /// Row the disc landed in.
    pub row: usize,
    /// Column the disc was dropped in.
    pub col: usize,
    /// Winner, if this drop completed a line.
    pub winner: Option<PlayerId>,
    /// Whether the game is over after this drop (win or draw).
    pub terminal: bool,
}

/// Check for a line of at least `run_length` same-player discs along any
/// axis through (row, col).
///
/// The scan starts at the given cell and walks outward in both directions
/// of each axis, so it costs O(axes × run_length) rather than a whole-grid
/// pass. Search calls this after every simulated move.
pub fn check_line(
    state: &GameState,
    row: usize,
    col: usize,
    run_length: usize,
) -> Result<Option<PlayerId>, GameError> {
    let owner = match state.grid.cell_at(row, col)?.owner() {
        Some(owner) => owner,
        None => return Ok(None),
    };

    for (row_step, col_step) in AXES {
        let run = 1
            + chain_length(state, owner, row, col, row_step, col_step)
            + chain_length(state, owner, row, col, -row_step, -col_step);
        if run >= run_length {
            return Ok(Some(owner));
        }
    }

    Ok(None)
}

/// Count contiguous discs owned by `owner` starting one step away from
/// (row, col) and walking in the (row_step, col_step) direction.
fn chain_length(
    state: &GameState,
    owner: PlayerId,
    row: usize,
    col: usize,
    row_step: isize,
    col_step: isize,
) -> usize {
    let grid = &state.grid;
    let mut count = 0;
    let mut row = row as isize + row_step;
    let mut col = col as isize + col_step;

    while row >= 0
        && (row as usize) < grid.height()
        && col >= 0
        && (col as usize) < grid.width()
        && grid.cell(row as usize, col as usize).owner() == Some(owner)
    {
        count += 1;
        row += row_step;
        col += col_step;
    }

    count
}

/// Drop a disc for the current player, detect a win or draw, and advance
/// the turn if the game continues.
pub fn apply_drop(state: &mut GameState, col: usize) -> Result<DropOutcome, GameError> {
    if state.is_terminal() {
        return Err(GameError::GameAlreadyOver);
    }

    let player = state.current_player();
    let row = state.grid.drop_disc(col, player)?;
    let winner = check_line(state, row, col, state.victory_condition)?;

    if let Some(id) = winner {
        state.winner_id = Some(id);
    } else if !state.grid.is_full() {
        advance_turn(state);
    }

    Ok(DropOutcome {
        row,
        col,
        winner,
        terminal: state.is_terminal(),
    })
}

/// Set the current player explicitly, or advance to the next roster entry
/// when no id is given.
pub fn change_player(
    state: &mut GameState,
    requested: Option<PlayerId>,
) -> Result<PlayerId, GameError> {
    if state.is_terminal() {
        return Err(GameError::GameAlreadyOver);
    }

    match requested {
        Some(id) => {
            let index = state
                .players
                .iter()
                .position(|player| player.id() == id)
                .ok_or(GameError::UnknownPlayer(id))?;
            state.current_player = index;
        }
        None => advance_turn(state),
    }

    Ok(state.current_player())
}

/// Start a new game on the same roster and victory condition.
pub fn reset(state: &mut GameState) {
    state.grid.clear();
    state.current_player = 0;
    state.winner_id = None;
}

fn advance_turn(state: &mut GameState) {
    state.current_player = (state.current_player + 1) % state.players.len();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::GameOutcome;

    fn state() -> GameState {
        GameState::from_config(&GameConfig::default()).unwrap()
    }

    fn small_state(width: usize, height: usize, victory_condition: usize) -> GameState {
        let mut config = GameConfig::default();
        config.grid.width = width;
        config.grid.height = height;
        config.victory_condition = victory_condition;
        GameState::from_config(&config).unwrap()
    }

    fn play(state: &mut GameState, cols: &[usize]) -> DropOutcome {
        let mut last = None;
        for &col in cols {
            last = Some(apply_drop(state, col).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn test_apply_drop_advances_turn() {
        let mut state = state();
        let outcome = apply_drop(&mut state, 3).unwrap();

        assert_eq!(outcome.row, 0);
        assert_eq!(outcome.col, 3);
        assert_eq!(outcome.winner, None);
        assert!(!outcome.terminal);
        assert_eq!(state.current_player(), PlayerId(1));
    }

    #[test]
    fn test_horizontal_win() {
        let mut state = state();
        // Player 0 builds the bottom row 0..=3, player 1 stacks on top
        let outcome = play(&mut state, &[0, 0, 1, 1, 2, 2, 3]);

        assert_eq!(outcome.winner, Some(PlayerId(0)));
        assert!(outcome.terminal);
        assert_eq!(state.winner_id(), Some(PlayerId(0)));
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(PlayerId(0))));
        // Turn must not advance past a winning move
        assert_eq!(state.current_player(), PlayerId(0));
    }

    #[test]
    fn test_vertical_win() {
        let mut state = state();
        let outcome = play(&mut state, &[0, 1, 0, 1, 0, 1, 0]);

        assert_eq!(outcome.winner, Some(PlayerId(0)));
        assert_eq!(outcome.row, 3);
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut state = state();
        // Staircase toward the upper right, last drop completes (0,0)..(3,3)
        let outcome = play(&mut state, &[0, 1, 1, 2, 2, 3, 2, 3, 6, 3, 3]);

        assert_eq!(outcome.winner, Some(PlayerId(0)));
        assert_eq!((outcome.row, outcome.col), (3, 3));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut state = state();
        // Mirror staircase toward the upper left
        let outcome = play(&mut state, &[6, 5, 5, 4, 4, 3, 4, 3, 0, 3, 3]);

        assert_eq!(outcome.winner, Some(PlayerId(0)));
        assert_eq!((outcome.row, outcome.col), (3, 3));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut state = state();
        let outcome = play(&mut state, &[0, 0, 1, 1, 2]);

        assert_eq!(outcome.winner, None);
        assert!(!outcome.terminal);
        assert_eq!(check_line(&state, 0, 1, 4), Ok(None));
    }

    #[test]
    fn test_check_line_matches_configured_run_length() {
        let mut state = small_state(5, 4, 3);
        play(&mut state, &[0, 0, 1, 1, 2]);

        assert_eq!(check_line(&state, 0, 1, 3), Ok(Some(PlayerId(0))));
        assert_eq!(state.winner_id(), Some(PlayerId(0)));
    }

    #[test]
    fn test_check_line_on_empty_cell() {
        let state = state();
        assert_eq!(check_line(&state, 0, 0, 4), Ok(None));
    }

    #[test]
    fn test_check_line_out_of_bounds() {
        let state = state();
        assert_eq!(
            check_line(&state, 6, 0, 4),
            Err(GameError::OutOfBounds { row: 6, col: 0 })
        );
    }

    #[test]
    fn test_draw_fills_grid_without_winner() {
        let mut state = small_state(3, 1, 3);
        // Alternation yields 0 1 0 across the single row
        let outcome = play(&mut state, &[0, 1, 2]);

        assert_eq!(outcome.winner, None);
        assert!(outcome.terminal);
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert_eq!(apply_drop(&mut state, 0), Err(GameError::GameAlreadyOver));
    }

    #[test]
    fn test_drop_after_win_rejected() {
        let mut state = state();
        play(&mut state, &[0, 0, 1, 1, 2, 2, 3]);

        let before = state.clone();
        assert_eq!(apply_drop(&mut state, 4), Err(GameError::GameAlreadyOver));
        assert_eq!(state, before);
    }

    #[test]
    fn test_failed_drop_leaves_state_unchanged() {
        let mut state = state();
        for _ in 0..6 {
            apply_drop(&mut state, 0).unwrap();
        }

        let before = state.clone();
        assert_eq!(apply_drop(&mut state, 0), Err(GameError::ColumnFull(0)));
        assert_eq!(apply_drop(&mut state, 9), Err(GameError::InvalidColumn(9)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_change_player_explicit() {
        let mut state = state();
        assert_eq!(change_player(&mut state, Some(PlayerId(1))), Ok(PlayerId(1)));
        assert_eq!(state.current_player(), PlayerId(1));
    }

    #[test]
    fn test_change_player_advances_and_wraps() {
        let mut state = state();
        assert_eq!(change_player(&mut state, None), Ok(PlayerId(1)));
        assert_eq!(change_player(&mut state, None), Ok(PlayerId(0)));
    }

    #[test]
    fn test_change_player_unknown_id() {
        let mut state = state();
        assert_eq!(
            change_player(&mut state, Some(PlayerId(5))),
            Err(GameError::UnknownPlayer(PlayerId(5)))
        );
        assert_eq!(state.current_player(), PlayerId(0));
    }

    #[test]
    fn test_change_player_after_game_over() {
        let mut state = state();
        play(&mut state, &[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(
            change_player(&mut state, None),
            Err(GameError::GameAlreadyOver)
        );
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = state();
        play(&mut state, &[0, 0, 1, 1, 2, 2, 3]);

        reset(&mut state);

        let fresh = GameState::from_config(&GameConfig::default()).unwrap();
        assert_eq!(state, fresh);
        assert_eq!(state.current_player(), PlayerId(0));
        assert_eq!(state.winner_id(), None);
    }
}
