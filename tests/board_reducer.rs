use tally::ui::board::{BoardIntent, BoardReducer, BoardState};
use tally::ui::mvi::Reducer;

fn state(count: i64, input: &str, color: &str, dark_mode: bool) -> BoardState {
    BoardState {
        count,
        input: input.to_string(),
        color: color.to_string(),
        dark_mode,
    }
}

fn samples() -> Vec<BoardState> {
    vec![
        BoardState::default(),
        state(-4, "typed", "react-blue", false),
        state(1_000_000, "  spaced  ", "", true),
    ]
}

#[test]
fn default_snapshot() {
    assert_eq!(BoardState::default(), state(0, "", "", true));
}

#[test]
fn increment_decrement_pairs_restore_state() {
    for s in samples() {
        let mut next = s.clone();
        for _ in 0..3 {
            next = BoardReducer::reduce(next, BoardIntent::Increment);
            next = BoardReducer::reduce(next, BoardIntent::Decrement);
        }
        assert_eq!(next, s);
    }
}

#[test]
fn set_input_stores_payload_exactly() {
    for payload in ["", "hello", "  padded  ", "\ttab\n", "ünïcödé"] {
        let next = BoardReducer::reduce(
            BoardState::default(),
            BoardIntent::SetInput {
                text: payload.to_string(),
            },
        );
        assert_eq!(next.input, payload);
    }
}

#[test]
fn unrecognized_kinds_are_identity() {
    for s in samples() {
        for kind in ["noop", "INCREMENT", "setinput", ""] {
            let next = BoardReducer::reduce(
                s.clone(),
                BoardIntent::Unrecognized {
                    kind: kind.to_string(),
                },
            );
            assert_eq!(next, s);
        }
    }
}

#[test]
fn count_has_no_lower_bound() {
    let mut s = BoardState::default();
    for _ in 0..10 {
        s = BoardReducer::reduce(s, BoardIntent::Decrement);
    }
    assert_eq!(s.count, -10);
}

#[test]
fn set_color_and_dark_mode_replace_only_their_field() {
    let s = state(3, "x", "", true);
    let next = BoardReducer::reduce(
        s.clone(),
        BoardIntent::SetColor {
            color: "react-blue".to_string(),
        },
    );
    assert_eq!(next, state(3, "x", "react-blue", true));

    let next = BoardReducer::reduce(next, BoardIntent::SetDarkMode { enabled: false });
    assert_eq!(next, state(3, "x", "react-blue", false));
}

#[test]
fn scenario_increment_dark_mode_input() {
    let s = BoardState::default();
    let s = BoardReducer::reduce(s, BoardIntent::Increment);
    assert_eq!(s.count, 1);
    let s = BoardReducer::reduce(s, BoardIntent::SetDarkMode { enabled: false });
    assert_eq!(s, state(1, "", "", false));
    let s = BoardReducer::reduce(
        s,
        BoardIntent::SetInput {
            text: "hello".to_string(),
        },
    );
    assert_eq!(s, state(1, "hello", "", false));
}

#[test]
fn inverse_law_holds_at_i64_limits() {
    for count in [i64::MAX, i64::MIN] {
        let s = state(count, "edge", "", true);
        let up_down = BoardReducer::reduce(
            BoardReducer::reduce(s.clone(), BoardIntent::Increment),
            BoardIntent::Decrement,
        );
        assert_eq!(up_down, s);
        let down_up = BoardReducer::reduce(
            BoardReducer::reduce(s.clone(), BoardIntent::Decrement),
            BoardIntent::Increment,
        );
        assert_eq!(down_up, s);
    }
}
