use crate::dom::Dom;
use crate::markup;

/// One prompt/answer/toggle unit, by reference into the host DOM.
#[derive(Debug, Clone, PartialEq)]
pub struct Card<E> {
    /// The card's own element: a child of the list container.
    pub element: E,
    /// Disclosure control. Cards without one can't be revealed and are left alone.
    pub toggle: Option<E>,
}

/// Collect the cards under `list` in their current order and link every
/// toggle to its answer through `aria-controls`.
///
/// Existing links are kept. Otherwise the answer's own `id` is reused, or a
/// deterministic one is assigned from the widget and card positions.
pub fn collect_cards<D: Dom>(dom: &D, list: &D::Element, widget: usize) -> Vec<Card<D::Element>> {
    dom.children(list)
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            let toggle = dom.first_with_class(&element, markup::TOGGLE_CLASS);
            if let Some(toggle) = &toggle {
                link_answer(dom, &element, toggle, widget, index);
            }
            Card { element, toggle }
        })
        .collect()
}

fn link_answer<D: Dom>(dom: &D, card: &D::Element, toggle: &D::Element, widget: usize, index: usize) {
    if dom.has_attribute(toggle, markup::CONTROLS_ATTR) {
        return;
    }
    let Some(answer) = dom.first_with_class(card, markup::ANSWER_CLASS) else {
        return;
    };
    let id = match dom.attribute(&answer, "id") {
        Some(id) if !id.is_empty() => id,
        _ => {
            let id = markup::answer_id(widget, index);
            dom.set_attribute(&answer, "id", &id);
            id
        }
    };
    dom.set_attribute(toggle, markup::CONTROLS_ATTR, &id);
}
