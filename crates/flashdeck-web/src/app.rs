use leptos::prelude::*;
use leptos_meta::{MetaTags, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{DeckPage, HomePage};

/// Document shell rendered around [`App`] by the server.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content="Flashcards: study a deck in order, then quiz yourself on a shuffle." />
                <link rel="stylesheet" href="/pkg/flashdeck-web.css" />
                <AutoReload options=options.clone() />
                // Loads the wasm bundle and calls `hydrate()`, which mounts the widgets
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| view! { <p>"404 - Page not found"</p> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/deck/:slug") view=DeckPage />
            </Routes>
        </Router>
    }
}
