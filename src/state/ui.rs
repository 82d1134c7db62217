//! UI state for theme and backend reachability.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Shared UI chrome state.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub backend: BackendStatus,
}

/// Last observed result of the backend health probe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendStatus {
    /// No probe has completed yet.
    #[default]
    Unknown,
    Online,
    Offline,
}
