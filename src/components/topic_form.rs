//! Topic input form that kicks off kit generation.

use leptos::prelude::*;

use crate::state::kit::KitState;

/// Topic input plus Generate button.
///
/// Generation requires a non-empty trimmed topic; the row is disabled while
/// a request is in flight.
#[component]
pub fn TopicForm(on_generate: Callback<String>) -> impl IntoView {
    let kit_state = expect_context::<RwSignal<KitState>>();
    let topic = RwSignal::new(String::new());

    let do_generate = move || {
        let value = topic.get();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }
        on_generate.run(trimmed.to_owned());
    };

    let on_click = move |_| do_generate();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_generate();
        }
    };

    let loading = move || kit_state.get().loading;
    let can_generate = move || !loading() && !topic.get().trim().is_empty();

    view! {
        <div class="topic-form">
            <input
                class="topic-form__input"
                type="text"
                placeholder="What is the video about?"
                prop:value=move || topic.get()
                on:input=move |ev| topic.set(event_target_value(&ev))
                on:keydown=on_keydown
                disabled=loading
            />
            <button class="btn btn--primary" on:click=on_click disabled=move || !can_generate()>
                {move || if loading() { "Generating..." } else { "Generate kit" }}
            </button>
        </div>
    }
}
