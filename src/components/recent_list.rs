//! Sidebar history of recently generated kits.

use leptos::prelude::*;

use crate::state::kit::KitState;
use crate::state::recent::RecentState;

/// Recent-kit list; clicking an entry reloads that kit from the backend.
///
/// The list is summary-only — the full kit is fetched on click, and the
/// backend stays the source of truth for history.
#[component]
pub fn RecentList(on_load: Callback<i64>) -> impl IntoView {
    let recent = expect_context::<RwSignal<RecentState>>();
    let kit_state = expect_context::<RwSignal<KitState>>();

    view! {
        <aside class="recent-list">
            <h3 class="recent-list__title">"Recent kits"</h3>
            {move || {
                let state = recent.get();
                if state.loading {
                    return view! { <p class="recent-list__empty">"Loading..."</p> }.into_any();
                }
                if state.items.is_empty() {
                    return view! { <p class="recent-list__empty">"No kits yet"</p> }.into_any();
                }

                let disabled = kit_state.get().loading;
                state
                    .items
                    .into_iter()
                    .map(|item| {
                        let id = item.id;
                        view! {
                            <button
                                class="recent-list__item"
                                on:click=move |_| on_load.run(id)
                                disabled=disabled
                            >
                                <span class="recent-list__topic">{item.topic}</span>
                                <span class="recent-list__meta">
                                    {format!("{} · {}", item.tone, item.language)}
                                </span>
                                <span class="recent-list__date">{item.created_at}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </aside>
    }
}
