//! End-to-end widget behavior against the headless DOM.

use std::collections::HashSet;

use flashdeck::headless::{HeadlessDom, NodeId};
use flashdeck::markup;
use flashdeck::{Dom, FlashcardController, Mode, widget_roots};
use rand::rngs::ThreadRng;

type Random = ThreadRng;

fn random() -> Random {
    rand::rng()
}

struct Page {
    dom: HeadlessDom,
}

struct Widget {
    root: NodeId,
    study: NodeId,
    quiz: NodeId,
    cards: Vec<NodeId>,
}

impl Page {
    fn new() -> Self {
        Self { dom: HeadlessDom::new() }
    }

    /// Server-rendered shape: prompt, toggle, answer; no aria-controls yet.
    fn widget(&self, group: &str, prompts: &[&str]) -> Widget {
        let dom = &self.dom;
        let root = dom.element(dom.body(), "section", &[markup::ROOT_CLASS]);
        let fieldset = dom.element(root, "fieldset", &[]);
        let radio = |value: &str| {
            let input = dom.element(fieldset, "input", &[markup::MODE_CLASS]);
            dom.set_attribute(&input, "type", "radio");
            dom.set_attribute(&input, "name", group);
            dom.set_attribute(&input, "value", value);
            input
        };
        let study = radio("study");
        let quiz = radio("quiz");
        dom.check(study);

        let list = dom.element(root, "ol", &[markup::LIST_CLASS]);
        let cards = prompts
            .iter()
            .map(|prompt| {
                let card = dom.element(list, "li", &[markup::CARD_CLASS]);
                dom.set_attribute(&card, "data-prompt", prompt);
                dom.element(card, "p", &[markup::PROMPT_CLASS]);
                dom.element(card, "button", &[markup::TOGGLE_CLASS]);
                dom.element(card, "div", &[markup::ANSWER_CLASS]);
                card
            })
            .collect();
        Widget { root, study, quiz, cards }
    }

    fn mount(&self, widget: &Widget, index: usize) -> FlashcardController<HeadlessDom, Random> {
        FlashcardController::mount(self.dom.clone(), widget.root, index, random()).expect("widget mounts")
    }

    fn select(&self, controller: &mut FlashcardController<HeadlessDom, Random>, radio: NodeId) {
        self.dom.check(radio);
        controller.handle_mode_change();
    }

    fn toggle(&self, card: NodeId) -> NodeId {
        self.dom.first_with_class(&card, markup::TOGGLE_CLASS).expect("toggle")
    }

    fn answer(&self, card: NodeId) -> NodeId {
        self.dom.first_with_class(&card, markup::ANSWER_CLASS).expect("answer")
    }

    fn is_shown(&self, card: NodeId) -> bool {
        !self.dom.has_attribute(&self.answer(card), "hidden")
    }

    /// hidden ⇔ aria-expanded="false" ⇔ "show answer", and the inverse.
    fn assert_coherent(&self, card: NodeId) {
        let toggle = self.toggle(card);
        let expanded = self.dom.attribute(&toggle, "aria-expanded");
        let label = self.dom.text(toggle);
        if self.is_shown(card) {
            assert_eq!(expanded.as_deref(), Some("true"));
            assert_eq!(label, "hide answer");
        } else {
            assert_eq!(expanded.as_deref(), Some("false"));
            assert_eq!(label, "show answer");
        }
    }
}

#[test]
fn three_card_walkthrough() {
    let page = Page::new();
    let w = page.widget("mode-abc", &["A", "B", "C"]);
    let mut controller = page.mount(&w, 0);
    let (a, b, c) = (w.cards[0], w.cards[1], w.cards[2]);

    page.select(&mut controller, w.quiz);
    let shown: HashSet<_> = controller.displayed_order().into_iter().collect();
    assert_eq!(shown, HashSet::from([a, b, c]));
    for card in [a, b, c] {
        assert!(!page.is_shown(card));
        assert_eq!(page.dom.text(page.toggle(card)), "show answer");
    }

    controller.handle_click(&page.toggle(b));
    assert!(page.is_shown(b));
    assert!(!page.is_shown(a) && !page.is_shown(c));
    assert_eq!(page.dom.attribute(&page.toggle(b), "aria-expanded").as_deref(), Some("true"));
    assert_eq!(page.dom.attribute(&page.toggle(a), "aria-expanded").as_deref(), Some("false"));

    page.select(&mut controller, w.study);
    assert_eq!(controller.displayed_order(), vec![a, b, c]);
    for card in [a, b, c] {
        assert!(page.is_shown(card));
        page.assert_coherent(card);
    }
}

#[test]
fn no_card_is_lost_or_duplicated() {
    let page = Page::new();
    let w = page.widget("mode", &["1", "2", "3", "4", "5", "6", "7"]);
    let mut controller = page.mount(&w, 0);

    let mut sorted_original = w.cards.clone();
    sorted_original.sort();
    for step in 0..40 {
        let radio = if step % 3 == 0 { w.study } else { w.quiz };
        page.select(&mut controller, radio);
        let mut shown = controller.displayed_order();
        shown.sort();
        assert_eq!(shown, sorted_original);
    }
}

#[test]
fn study_twice_equals_study_once() {
    let page = Page::new();
    let w = page.widget("mode", &["A", "B", "C"]);
    let mut controller = page.mount(&w, 0);

    page.select(&mut controller, w.quiz);
    controller.handle_click(&page.toggle(w.cards[0]));
    page.select(&mut controller, w.study);
    let snapshot: Vec<_> = w
        .cards
        .iter()
        .map(|&card| (page.is_shown(card), page.dom.text(page.toggle(card))))
        .collect();

    page.select(&mut controller, w.study);
    let again: Vec<_> = w
        .cards
        .iter()
        .map(|&card| (page.is_shown(card), page.dom.text(page.toggle(card))))
        .collect();
    assert_eq!(snapshot, again);
    assert_eq!(controller.displayed_order(), w.cards);
}

#[test]
fn round_trip_restores_exact_order() {
    let page = Page::new();
    let w = page.widget("mode", &["A", "B", "C", "D", "E"]);
    let mut controller = page.mount(&w, 0);

    for _ in 0..10 {
        page.select(&mut controller, w.quiz);
        page.select(&mut controller, w.study);
        assert_eq!(controller.displayed_order(), w.cards);
    }
}

#[test]
fn quiz_orders_vary() {
    let page = Page::new();
    let w = page.widget("mode", &["A", "B", "C", "D"]);
    let mut controller = page.mount(&w, 0);

    let mut orders = HashSet::new();
    for _ in 0..50 {
        page.select(&mut controller, w.quiz);
        orders.insert(controller.displayed_order());
    }
    // 24 possible orders; all fifty landing on one is vanishingly unlikely.
    assert!(orders.len() >= 2, "saw only {:?}", orders);
}

#[test]
fn quiz_reselect_reshuffles_from_the_original() {
    let page = Page::new();
    let w = page.widget("mode", &["A", "B"]);
    let mut controller = page.mount(&w, 0);

    let mut orders = HashSet::new();
    for _ in 0..60 {
        // Re-running the change handler while already in quiz.
        page.select(&mut controller, w.quiz);
        orders.insert(controller.displayed_order());
    }
    assert_eq!(orders.len(), 2);
    assert_eq!(controller.mode(), Mode::Quiz);
}

#[test]
fn attributes_stay_coherent_through_clicks() {
    let page = Page::new();
    let w = page.widget("mode", &["A", "B", "C"]);
    let mut controller = page.mount(&w, 0);

    for &card in &w.cards {
        page.assert_coherent(card);
    }
    page.select(&mut controller, w.quiz);
    for round in 0..5 {
        let card = w.cards[round % w.cards.len()];
        controller.handle_click(&page.toggle(card));
        for &card in &w.cards {
            page.assert_coherent(card);
        }
    }
}

#[test]
fn focused_toggle_keeps_focus_across_shuffles() {
    let page = Page::new();
    let w = page.widget("mode", &["A", "B", "C"]);
    let mut controller = page.mount(&w, 0);

    page.select(&mut controller, w.quiz);
    let toggle = page.toggle(w.cards[1]);
    page.dom.focus(&toggle, false);

    page.select(&mut controller, w.quiz);
    assert_eq!(page.dom.active_element(), Some(toggle));
    assert!(page.dom.focus_log().iter().all(|call| call.prevent_scroll || call.element == toggle));
}

#[test]
fn focused_radio_keeps_focus() {
    let page = Page::new();
    let w = page.widget("mode", &["A", "B"]);
    let mut controller = page.mount(&w, 0);

    page.dom.focus(&w.quiz, false);
    page.select(&mut controller, w.quiz);
    assert_eq!(page.dom.active_element(), Some(w.quiz));
}

#[test]
fn lost_focus_lands_on_first_toggle() {
    let page = Page::new();
    let w = page.widget("mode", &["A", "B", "C"]);
    let mut controller = page.mount(&w, 0);

    page.select(&mut controller, w.quiz);
    let first = controller.displayed_order()[0];
    assert_eq!(page.dom.active_element(), Some(page.toggle(first)));
}

#[test]
fn widgets_on_one_page_are_isolated() {
    let page = Page::new();
    let left = page.widget("left-mode", &["A", "B", "C"]);
    let right = page.widget("right-mode", &["X", "Y"]);
    let body = page.dom.body();
    assert_eq!(widget_roots(&page.dom, &body), vec![left.root, right.root]);

    let mut left_controller = page.mount(&left, 0);
    let right_controller = page.mount(&right, 1);

    page.select(&mut left_controller, left.quiz);
    assert_eq!(left_controller.mode(), Mode::Quiz);
    assert_eq!(right_controller.mode(), Mode::Study);
    assert!(page.dom.is_checked(&right.study));
    assert_eq!(right_controller.displayed_order(), right.cards);
    for &card in &right.cards {
        assert!(page.is_shown(card));
    }

    // A click routed to the wrong widget changes nothing.
    right_controller.handle_click(&page.toggle(left.cards[0]));
    assert!(!page.is_shown(left.cards[0]));

    // Generated links are unique page-wide.
    let ids: HashSet<_> = left
        .cards
        .iter()
        .chain(&right.cards)
        .map(|&card| page.dom.attribute(&page.toggle(card), "aria-controls").expect("linked"))
        .collect();
    assert_eq!(ids.len(), 5);
    assert!(ids.contains("flashcards-1-answer-0"));
}

#[test]
fn broken_widget_does_not_block_others() {
    let page = Page::new();
    let broken = page.dom.element(page.dom.body(), "section", &[markup::ROOT_CLASS]);
    let good = page.widget("mode", &["A"]);

    let body = page.dom.body();
    let results: Vec<_> = widget_roots(&page.dom, &body)
        .into_iter()
        .enumerate()
        .map(|(index, root)| FlashcardController::mount(page.dom.clone(), root, index, random()))
        .collect();

    assert!(results[0].is_err());
    let controller = results[1].as_ref().expect("second widget mounts");
    assert_eq!(controller.root(), &good.root);
    assert_ne!(broken, good.root);
}

#[test]
fn toggle_without_reachable_answer_is_a_no_op() {
    let page = Page::new();
    let w = page.widget("mode", &["A", "B"]);
    // Card A loses its answer entirely after mounting.
    let mut controller = page.mount(&w, 0);
    let answer = page.answer(w.cards[0]);
    page.dom.remove_child(&w.cards[0], &answer);

    page.select(&mut controller, w.quiz);
    controller.handle_click(&page.toggle(w.cards[0]));
    let toggle = page.toggle(w.cards[0]);
    assert_eq!(page.dom.attribute(&toggle, "aria-expanded").as_deref(), Some("true"));
    assert!(!page.is_shown(w.cards[1]));
}
