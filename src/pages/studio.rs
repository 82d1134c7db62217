//! Studio page — topic entry, kit display, history sidebar.
//!
//! REQUEST ORCHESTRATION
//! =====================
//! This page owns the network handlers. One logical operation is in flight
//! at a time, tracked by the shared loading flag; the flag disables the UI
//! controls rather than hard-locking anything. Nothing is retried
//! automatically — every failure path ends in a state the user can retry
//! from.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::kit_panel::KitPanel;
use crate::components::recent_list::RecentList;
use crate::components::status_bar::StatusBar;
use crate::components::topic_form::TopicForm;
use crate::state::kit::KitState;
use crate::state::recent::RecentState;
use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
use crate::net::types::{DEFAULT_LANGUAGE, DEFAULT_TONE, Kit};
#[cfg(feature = "hydrate")]
use crate::state::kit::apply_regenerated;
#[cfg(feature = "hydrate")]
use crate::state::recent::RECENT_LIMIT;
#[cfg(feature = "hydrate")]
use crate::state::ui::BackendStatus;

/// Refetch the recent-kit sidebar. Failures silently yield an empty list.
fn refresh_recent(recent: RwSignal<RecentState>) {
    #[cfg(feature = "hydrate")]
    {
        recent.update(|state| state.loading = true);
        leptos::task::spawn_local(async move {
            let items = crate::net::api::fetch_recent_kits(RECENT_LIMIT)
                .await
                .unwrap_or_default();
            recent.update(|state| {
                state.items = items;
                state.loading = false;
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = recent;
    }
}

/// Probe backend health once and record the result for the status bar.
fn probe_backend(ui: RwSignal<UiState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let status = match crate::net::api::fetch_health().await {
                Some(_) => BackendStatus::Online,
                None => BackendStatus::Offline,
            };
            ui.update(|state| state.backend = status);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ui;
    }
}

/// Studio page — composes the topic form, diagnostics banner, kit panel,
/// history sidebar, and status bar, and owns their action callbacks.
#[component]
pub fn StudioPage() -> impl IntoView {
    let kit_state = expect_context::<RwSignal<KitState>>();
    let recent = expect_context::<RwSignal<RecentState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Apply the persisted theme, probe health, and load history on mount.
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|state| state.dark_mode = dark);
        probe_backend(ui);
        refresh_recent(recent);
    });

    let on_generate = Callback::new(move |topic: String| {
        if kit_state.get_untracked().loading {
            return;
        }
        kit_state.update(|state| {
            state.loading = true;
            state.busy_section = None;
        });

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let next =
                    match crate::net::api::generate_kit(&topic, DEFAULT_TONE, DEFAULT_LANGUAGE)
                        .await
                    {
                        Ok(kit) => kit,
                        Err(detail) => {
                            leptos::logging::warn!("generate failed: {detail}");
                            Kit::transport_failure(&topic, &detail)
                        }
                    };
                kit_state.update(|state| {
                    state.kit = Some(next);
                    state.loading = false;
                });
                // The backend persists successful kits; pick the new one up.
                refresh_recent(recent);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = topic;
            kit_state.update(|state| state.loading = false);
        }
    });

    let on_regenerate = Callback::new(move |section: &'static str| {
        let snapshot = kit_state.get_untracked();
        if snapshot.loading {
            return;
        }
        let Some(kit) = snapshot.kit else {
            return;
        };
        kit_state.update(|state| {
            state.loading = true;
            state.busy_section = Some(section.to_owned());
        });

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::regenerate_section(section, &kit).await {
                    Ok(outcome) => {
                        kit_state.update(|state| {
                            if let Some(current) = state.kit.as_mut() {
                                apply_regenerated(current, &outcome);
                            }
                        });
                    }
                    Err(detail) => {
                        leptos::logging::warn!("regenerate {section} failed: {detail}");
                        crate::util::notify::alert(&format!(
                            "Could not regenerate {section}: {detail}"
                        ));
                    }
                }
                kit_state.update(|state| {
                    state.loading = false;
                    state.busy_section = None;
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = kit;
            kit_state.update(|state| {
                state.loading = false;
                state.busy_section = None;
            });
        }
    });

    let on_export = Callback::new(move |(): ()| {
        let snapshot = kit_state.get_untracked();
        if snapshot.loading {
            return;
        }
        let Some(kit) = snapshot.kit else {
            return;
        };
        if kit.has_error() {
            return;
        }
        kit_state.update(|state| state.loading = true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::export_kit(&kit).await {
                    Ok(bytes) => {
                        let filename = crate::util::download::export_file_name(&kit.topic);
                        crate::util::download::save_file(&filename, &bytes);
                    }
                    Err(detail) => {
                        leptos::logging::warn!("export failed: {detail}");
                        crate::util::notify::alert(&format!("Export failed: {detail}"));
                    }
                }
                kit_state.update(|state| state.loading = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = kit;
            kit_state.update(|state| state.loading = false);
        }
    });

    let on_load = Callback::new(move |id: i64| {
        if kit_state.get_untracked().loading {
            return;
        }
        kit_state.update(|state| state.loading = true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let loaded = crate::net::api::fetch_kit_detail(id)
                    .await
                    .and_then(|detail| detail.kit);
                match loaded {
                    Some(kit) => {
                        kit_state.update(|state| {
                            state.kit = Some(kit);
                            state.loading = false;
                        });
                    }
                    None => {
                        kit_state.update(|state| state.loading = false);
                        crate::util::notify::alert("Could not load kit");
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            kit_state.update(|state| state.loading = false);
        }
    });

    view! {
        <div class="studio-page">
            <header class="studio-page__header">
                <h1>"Kit Studio"</h1>
                <TopicForm on_generate=on_generate/>
            </header>
            <div class="studio-page__body">
                <main class="studio-page__main">
                    <ErrorBanner/>
                    <KitPanel on_regenerate=on_regenerate on_export=on_export/>
                </main>
                <RecentList on_load=on_load/>
            </div>
            <div class="studio-page__status-bar">
                <StatusBar/>
            </div>
        </div>
    }
}
