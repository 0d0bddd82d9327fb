use flashdeck::{Labels, Mode, markup};
use leptos::prelude::*;

use crate::components::CopyButton;
use crate::config::Deck;

/// Radio group name for a deck's mode selectors.
pub fn mode_group(slug: &str) -> String {
    format!("flashcards-mode-{}", slug)
}

/// Server-rendered flashcard widget.
///
/// Markup follows `flashdeck::markup`; the wasm bundle mounts a controller on
/// it. The initial state is rendered already applied so the page looks
/// right before (or without) the bundle. Toggles are left unlinked: the
/// controller assigns `aria-controls` when it mounts, and until then the
/// answer is the toggle's next sibling.
#[component]
pub fn FlashcardDeck(deck: Deck) -> impl IntoView {
    let group = mode_group(&deck.slug);
    let study = deck.mode == Mode::Study;
    let quiz = deck.mode == Mode::Quiz;

    // Same fallback the runtime applies to the data attributes.
    let show_override = Labels::usable(deck.show_label);
    let hide_override = Labels::usable(deck.hide_label);
    let labels = Labels::with_overrides(show_override.clone(), hide_override.clone());
    let (toggle_label, expanded) = if study { (labels.hide, "true") } else { (labels.show, "false") };
    let list_class = format!("{} {}", markup::LIST_CLASS, deck.mode.class());

    let cards = deck
        .cards
        .into_iter()
        .map(|card| {
            let label = toggle_label.clone();
            let answer = card.answer.clone();
            view! {
                <li class=markup::CARD_CLASS>
                    <p class=markup::PROMPT_CLASS>{card.prompt}</p>
                    <button type="button" class=markup::TOGGLE_CLASS aria-expanded=expanded>
                        {label}
                    </button>
                    <div class=markup::ANSWER_CLASS hidden=quiz>
                        <span>{answer}</span>
                        " "
                        <CopyButton text=card.answer label="copy" />
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class=markup::ROOT_CLASS data-show-label=show_override data-hide-label=hide_override>
            <fieldset class="flashcards-modes">
                <legend>"mode"</legend>
                <label>
                    <input
                        type="radio"
                        class=markup::MODE_CLASS
                        name=group.clone()
                        value=Mode::Study.as_str()
                        checked=study
                    />
                    " study"
                </label>
                <label>
                    <input
                        type="radio"
                        class=markup::MODE_CLASS
                        name=group
                        value=Mode::Quiz.as_str()
                        checked=quiz
                    />
                    " quiz"
                </label>
            </fieldset>
            <ol class=list_class>{cards}</ol>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_per_deck() {
        assert_eq!(mode_group("capitals"), "flashcards-mode-capitals");
        assert_ne!(mode_group("a"), mode_group("b"));
    }
}
