//! Reordering the card list without losing keyboard focus.
//!
//! Detaching a node that holds focus blurs it, so the focused element is
//! recorded first and restored once the cards are back in the document.

use crate::card::Card;
use crate::dom::Dom;

/// Replace `container`'s children with `new_order`, then restore focus.
///
/// Focus goes back to the previously focused element if it is still inside
/// `root`; otherwise to the first toggle in the new order.
pub fn reorder<D: Dom>(dom: &D, root: &D::Element, container: &D::Element, new_order: &[Card<D::Element>]) {
    if rearrange(dom, root, container, new_order) {
        return;
    }
    if let Some(toggle) = new_order.iter().find_map(|card| card.toggle.as_ref()) {
        dom.focus(toggle, true);
    }
}

/// Like [`reorder`], but focus outside `root` is left alone. Returns whether
/// focus was inside `root` (and so was restored).
pub fn rearrange<D: Dom>(dom: &D, root: &D::Element, container: &D::Element, new_order: &[Card<D::Element>]) -> bool {
    let focused = dom.active_element();

    for child in dom.children(container) {
        dom.remove_child(container, &child);
    }
    for card in new_order {
        dom.append_child(container, &card.element);
    }

    match focused {
        Some(element) if dom.contains(root, &element) => {
            dom.focus(&element, true);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessDom, NodeId};
    use crate::markup;

    fn fixture(dom: &HeadlessDom, count: usize) -> (NodeId, NodeId, Vec<Card<NodeId>>) {
        let root = dom.element(dom.body(), "section", &[markup::ROOT_CLASS]);
        let list = dom.element(root, "ol", &[markup::LIST_CLASS]);
        let cards = (0..count)
            .map(|_| {
                let element = dom.element(list, "li", &[]);
                let toggle = dom.element(element, "button", &[markup::TOGGLE_CLASS]);
                Card {
                    element,
                    toggle: Some(toggle),
                }
            })
            .collect();
        (root, list, cards)
    }

    #[test]
    fn restores_focus_inside_a_moved_card() {
        let dom = HeadlessDom::new();
        let (root, list, cards) = fixture(&dom, 3);
        let target = cards[2].toggle.expect("toggle");
        dom.focus(&target, false);

        let reversed: Vec<_> = cards.iter().rev().cloned().collect();
        reorder(&dom, &root, &list, &reversed);

        assert_eq!(dom.children(&list), reversed.iter().map(|c| c.element).collect::<Vec<_>>());
        assert_eq!(dom.active_element(), Some(target));
        assert!(dom.focus_log().last().expect("focus call").prevent_scroll);
    }

    #[test]
    fn restores_focus_outside_the_list() {
        let dom = HeadlessDom::new();
        let (root, list, cards) = fixture(&dom, 2);
        let radio = dom.element(root, "input", &[markup::MODE_CLASS]);
        dom.focus(&radio, false);

        reorder(&dom, &root, &list, &cards);
        assert_eq!(dom.active_element(), Some(radio));
    }

    #[test]
    fn falls_back_to_first_toggle_of_new_order() {
        let dom = HeadlessDom::new();
        let (root, list, cards) = fixture(&dom, 3);
        // Focused card is dropped from the new order, so focus can't survive.
        let dropped = cards[0].toggle.expect("toggle");
        dom.focus(&dropped, false);

        let new_order = vec![cards[2].clone(), cards[1].clone()];
        reorder(&dom, &root, &list, &new_order);

        assert!(!dom.is_connected(dropped));
        assert_eq!(dom.active_element(), new_order[0].toggle);
    }

    #[test]
    fn falls_back_when_nothing_was_focused() {
        let dom = HeadlessDom::new();
        let (root, list, cards) = fixture(&dom, 2);

        reorder(&dom, &root, &list, &cards);
        assert_eq!(dom.active_element(), cards[0].toggle);
    }

    #[test]
    fn skips_cards_without_toggles_when_falling_back() {
        let dom = HeadlessDom::new();
        let (root, list, mut cards) = fixture(&dom, 2);
        cards[0].toggle = None;

        reorder(&dom, &root, &list, &cards);
        assert_eq!(dom.active_element(), cards[1].toggle);
    }

    #[test]
    fn rearrange_leaves_outside_focus_alone() {
        let dom = HeadlessDom::new();
        let (root, list, cards) = fixture(&dom, 2);
        let elsewhere = dom.element(dom.body(), "input", &[]);
        dom.focus(&elsewhere, false);

        let reversed: Vec<_> = cards.iter().rev().cloned().collect();
        assert!(!rearrange(&dom, &root, &list, &reversed));
        assert_eq!(dom.children(&list), vec![cards[1].element, cards[0].element]);
        assert_eq!(dom.active_element(), Some(elsewhere));
        assert_eq!(dom.focus_log().len(), 1);
    }
}
