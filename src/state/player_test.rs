use super::*;

#[test]
fn player_starts_paused_at_zero() {
    let state = PlayerState::default();
    assert_eq!(state.current_time, 0.0);
    assert!(!state.is_playing);
}

#[test]
fn position_updates_mirror_the_reported_time() {
    let mut state = PlayerState::default();
    state.set_position(12.345);
    assert_eq!(state.current_time, 12.345);

    state.set_position(12.5);
    assert_eq!(state.current_time, 12.5);
}

#[test]
fn play_and_pause_are_edge_triggered_flags() {
    let mut state = PlayerState::default();

    state.mark_playing();
    assert!(state.is_playing);

    state.mark_paused();
    assert!(!state.is_playing);
}

#[test]
fn repeated_events_are_idempotent() {
    let mut state = PlayerState::default();

    state.mark_playing();
    state.mark_playing();
    assert!(state.is_playing);

    state.set_position(3.0);
    state.set_position(3.0);
    assert_eq!(state.current_time, 3.0);
}
