//! Property tests over random legal games.

use quickcheck::quickcheck;
use sanmoku_core::{GameState, Mark, MoveError};

/// Plays a random legal game. Each byte picks one of the remaining
/// empty cells. Calls `check` after every accepted move.
fn play_random(choices: &[u8], mut check: impl FnMut(&GameState) -> bool) -> (GameState, bool) {
    let mut state = GameState::new();
    for choice in choices {
        let legal = state.legal_moves();
        if legal.is_empty() {
            break;
        }
        let coord = legal[*choice as usize % legal.len()];
        let mark = state.current_player();
        if state.place(coord.row, coord.col, mark).is_err() {
            return (state, false);
        }
        if !check(&state) {
            return (state, false);
        }
        if !state.is_over() {
            state.end_turn();
        }
    }
    (state, true)
}

quickcheck! {
    fn prop_marks_stay_balanced(choices: Vec<u8>) -> bool {
        let (_, ok) = play_random(&choices, |state| {
            let x = state.board().count(Mark::X);
            let o = state.board().count(Mark::O);
            x == o || x == o + 1
        });
        ok
    }

    fn prop_win_and_draw_are_exclusive(choices: Vec<u8>) -> bool {
        let (_, ok) = play_random(&choices, |state| !(state.is_won() && state.is_draw()));
        ok
    }

    fn prop_finished_game_rejects_everything(choices: Vec<u8>, row: usize, col: usize) -> bool {
        let mut padded = choices;
        padded.extend(std::iter::repeat_n(0, 9));
        let (mut state, ok) = play_random(&padded, |_| true);
        ok && state.is_over()
            && state.place(row, col, Mark::X) == Err(MoveError::GameAlreadyOver)
            && state.place(row, col, Mark::O) == Err(MoveError::GameAlreadyOver)
    }

    fn prop_render_is_idempotent(choices: Vec<u8>) -> bool {
        let (state, ok) = play_random(&choices, |state| state.render() == state.render());
        ok && state.render() == state.render()
    }
}
