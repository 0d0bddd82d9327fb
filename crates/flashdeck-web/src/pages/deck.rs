use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::{FlashcardDeck, Section};
use crate::config::catalog;

/// A single deck at `/deck/:slug`.
#[component]
pub fn DeckPage() -> impl IntoView {
    let params = use_params_map();
    let slug = params.read_untracked().get("slug").unwrap_or_default();

    match catalog().deck(&slug) {
        Some(deck) => view! {
            <Title text=deck.title.clone() />
            <main>
                <div>
                    <a href="/">"\u{2190} all decks"</a>
                </div>
                <Section id=deck.slug.clone() title=deck.title.clone()>
                    <FlashcardDeck deck=deck.clone() />
                </Section>
            </main>
        }
        .into_any(),
        None => view! {
            <main>
                <p>{format!("No deck named \u{201C}{}\u{201D}.", slug)}</p>
                <a href="/">"\u{2190} all decks"</a>
            </main>
        }
        .into_any(),
    }
}
