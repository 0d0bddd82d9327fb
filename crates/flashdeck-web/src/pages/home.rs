use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{FlashcardDeck, Section};
use crate::config::catalog;

/// Every deck on one page, each an independent widget.
#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = catalog();

    view! {
        <Title text=catalog.title.clone() />
        <main>
            <header class="site-header">
                <h1>{catalog.title.clone()}</h1>
                <div class="tagline">{catalog.tagline.clone()}</div>
            </header>

            {catalog.decks.is_empty().then(|| view! { <p>"No decks configured."</p> })}

            {catalog
                .decks
                .iter()
                .map(|deck| {
                    view! {
                        <Section id=deck.slug.clone() title=deck.title.clone() href=format!("/deck/{}", deck.slug)>
                            <FlashcardDeck deck=deck.clone() />
                        </Section>
                    }
                })
                .collect_view()}
        </main>
    }
}
