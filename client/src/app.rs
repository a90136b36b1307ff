//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{CONFIG_META_NAME, ClientConfig};
use crate::pages::todo::TodoPage;
use crate::state::{tasks::TasksState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is embedded as a `<meta>` tag for the browser and provided as
/// context for the server-side render.
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    let meta_content = config.to_meta_content();
    provide_context(config);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=CONFIG_META_NAME content=meta_content/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="light-mode">
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::detect);
    leptos::logging::log!("tasklist using {} backend", config.backend);

    provide_context(StoredValue::new(config));
    provide_context(RwSignal::new(TasksState::default()));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/tasklist.css"/>
        <Title text="TODO App"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=TodoPage/>
            </Routes>
        </Router>
    }
}
