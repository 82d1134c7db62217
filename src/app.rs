//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::studio::StudioPage;
use crate::state::kit::KitState;
use crate::state::recent::RecentState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let kit = RwSignal::new(KitState::default());
    let recent = RwSignal::new(RecentState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(kit);
    provide_context(recent);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/kit-studio.css"/>
        <Title text="Kit Studio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=StudioPage/>
            </Routes>
        </Router>
    }
}
