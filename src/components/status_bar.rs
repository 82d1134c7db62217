//! Bottom status bar showing backend health and the theme toggle.

use leptos::prelude::*;

use crate::state::ui::{BackendStatus, UiState};
use crate::util::dark_mode;

/// Status bar with a backend reachability dot and the dark-mode toggle.
#[component]
pub fn StatusBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let status_class = move || match ui.get().backend {
        BackendStatus::Online => "status-bar__dot status-bar__dot--online",
        BackendStatus::Offline => "status-bar__dot status-bar__dot--offline",
        BackendStatus::Unknown => "status-bar__dot status-bar__dot--unknown",
    };

    let status_label = move || match ui.get().backend {
        BackendStatus::Online => "Backend online",
        BackendStatus::Offline => "Backend unreachable",
        BackendStatus::Unknown => "Checking backend...",
    };

    let on_toggle_dark = move |_| {
        ui.update(|state| state.dark_mode = dark_mode::toggle(state.dark_mode));
    };

    view! {
        <div class="status-bar">
            <span class="status-bar__connection">
                <span class=status_class></span>
                {status_label}
            </span>
            <span class="status-bar__spacer"></span>
            <button class="btn btn--ghost" on:click=on_toggle_dark>
                {move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" }}
            </button>
        </div>
    }
}
