//! Diagnostics banner for backend-reported generation failures.

use leptos::prelude::*;

use crate::state::kit::KitState;

/// Renders the kit's `error`/`hint` diagnostics, with the `raw`/`fixed`
/// model output behind a details toggle.
///
/// Malformed-but-successful payloads never reach this banner; the coercers
/// absorb them. Only explicit error fields are shown, verbatim.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let kit_state = expect_context::<RwSignal<KitState>>();
    let show_detail = RwSignal::new(false);

    view! {
        {move || {
            let state = kit_state.get();
            let kit = state.kit?;
            let error = kit.error.clone()?;
            let hint = kit.hint.clone();
            let raw = kit.raw.clone();
            let fixed = kit.fixed.clone();
            let has_detail = raw.is_some() || fixed.is_some();

            Some(view! {
                <div class="error-banner">
                    <strong class="error-banner__title">{error}</strong>
                    {hint.map(|hint| view! { <p class="error-banner__hint">{hint}</p> })}
                    {has_detail
                        .then(|| {
                            view! {
                                <button
                                    class="btn btn--ghost"
                                    on:click=move |_| show_detail.update(|open| *open = !*open)
                                >
                                    {move || if show_detail.get() { "Hide model output" } else { "Show model output" }}
                                </button>
                            }
                        })}
                    {move || {
                        if !show_detail.get() {
                            return None;
                        }
                        let raw = raw.clone();
                        let fixed = fixed.clone();
                        Some(view! {
                            <div class="error-banner__detail">
                                {raw.map(|raw| view! {
                                    <div>
                                        <h4>"Raw"</h4>
                                        <pre class="error-banner__pre">{raw}</pre>
                                    </div>
                                })}
                                {fixed.map(|fixed| view! {
                                    <div>
                                        <h4>"After repair"</h4>
                                        <pre class="error-banner__pre">{fixed}</pre>
                                    </div>
                                })}
                            </div>
                        })
                    }}
                </div>
            })
        }}
    }
}
