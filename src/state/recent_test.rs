use super::*;

#[test]
fn recent_state_default_is_empty_and_idle() {
    let state = RecentState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
}

#[test]
fn recent_limit_matches_backend_retention() {
    assert_eq!(RECENT_LIMIT, 5);
}
