use super::*;

#[test]
fn ui_state_default_is_light_mode() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_backend_is_unknown() {
    let state = UiState::default();
    assert_eq!(state.backend, BackendStatus::Unknown);
}

#[test]
fn backend_status_variants_are_distinct() {
    assert_ne!(BackendStatus::Unknown, BackendStatus::Online);
    assert_ne!(BackendStatus::Unknown, BackendStatus::Offline);
    assert_ne!(BackendStatus::Online, BackendStatus::Offline);
}
