//! Kit display panel: one card per section with regenerate and export actions.

use leptos::prelude::*;

use crate::net::coerce;
use crate::state::kit::KitState;

/// Full kit view.
///
/// Every section is coerced to its canonical display shape at render time,
/// so a kit holding malformed backend values still renders (possibly empty)
/// instead of breaking the page.
#[component]
pub fn KitPanel(on_regenerate: Callback<&'static str>, on_export: Callback<()>) -> impl IntoView {
    let kit_state = expect_context::<RwSignal<KitState>>();

    view! {
        <div class="kit-panel">
            {move || {
                let state = kit_state.get();
                let Some(kit) = state.kit else {
                    return view! {
                        <div class="kit-panel__empty">
                            "Enter a topic above to generate a content kit."
                        </div>
                    }
                        .into_any();
                };

                let hooks = coerce::to_string_list(&kit.hooks);
                let titles = coerce::to_string_list(&kit.titles);
                let tags = coerce::to_string_list(&kit.tags);
                let shorts = coerce::to_shorts_list(&kit.shorts);
                let thumbnail = coerce::to_thumbnail(&kit.thumbnail);
                let description = coerce::pick_non_empty_string(&kit.description).unwrap_or_default();
                let script = coerce::pick_non_empty_string(&kit.script).unwrap_or_default();
                let can_export = !state.loading && !kit.has_error();

                view! {
                    <header class="kit-panel__header">
                        <div>
                            <h2 class="kit-panel__topic">{kit.topic.clone()}</h2>
                            <span class="kit-panel__meta">
                                {format!("{} · {}", kit.tone, kit.language)}
                            </span>
                        </div>
                        <button
                            class="btn"
                            on:click=move |_| on_export.run(())
                            disabled=!can_export
                        >
                            "Export .txt"
                        </button>
                    </header>

                    <SectionCard title="Hooks" section="hooks" on_regenerate=on_regenerate>
                        <ul class="kit-panel__list">
                            {hooks.into_iter().map(|hook| view! { <li>{hook}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </SectionCard>

                    <SectionCard title="Titles" section="titles" on_regenerate=on_regenerate>
                        <ul class="kit-panel__list">
                            {titles.into_iter().map(|title| view! { <li>{title}</li> }).collect::<Vec<_>>()}
                        </ul>
                    </SectionCard>

                    <SectionCard title="Description" section="description" on_regenerate=on_regenerate>
                        <p class="kit-panel__text">{description}</p>
                    </SectionCard>

                    <SectionCard title="Tags" section="tags" on_regenerate=on_regenerate>
                        <div class="kit-panel__tags">
                            {tags.into_iter().map(|tag| view! { <span class="kit-panel__tag">{tag}</span> }).collect::<Vec<_>>()}
                        </div>
                    </SectionCard>

                    <SectionCard title="Thumbnail" section="thumbnail" on_regenerate=on_regenerate>
                        <dl class="kit-panel__thumbnail">
                            <dt>"Text"</dt>
                            <dd>{thumbnail.text}</dd>
                            <dt>"Prompt"</dt>
                            <dd>{thumbnail.prompt}</dd>
                        </dl>
                    </SectionCard>

                    <SectionCard title="Shorts" section="shorts" on_regenerate=on_regenerate>
                        <div class="kit-panel__shorts">
                            {shorts
                                .into_iter()
                                .map(|short| {
                                    view! {
                                        <div class="kit-panel__short">
                                            <h4 class="kit-panel__short-title">{short.title}</h4>
                                            <p class="kit-panel__short-script">{short.script}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </SectionCard>

                    <SectionCard title="Long script" section="script" on_regenerate=on_regenerate>
                        <pre class="kit-panel__script">{script}</pre>
                    </SectionCard>
                }
                    .into_any()
            }}
        </div>
    }
}

/// One kit section with a header row and a regenerate action.
#[component]
fn SectionCard(
    title: &'static str,
    section: &'static str,
    on_regenerate: Callback<&'static str>,
    children: Children,
) -> impl IntoView {
    let kit_state = expect_context::<RwSignal<KitState>>();

    let busy = move || kit_state.get().busy_section.as_deref() == Some(section);
    let disabled = move || kit_state.get().loading;

    view! {
        <section class="kit-panel__card">
            <div class="kit-panel__card-header">
                <h3>{title}</h3>
                <button
                    class="btn btn--ghost"
                    on:click=move |_| on_regenerate.run(section)
                    disabled=disabled
                >
                    {move || if busy() { "Regenerating..." } else { "Regenerate" }}
                </button>
            </div>
            {children()}
        </section>
    }
}
