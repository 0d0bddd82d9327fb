//! One flashcard widget: mode state machine plus the two event entry points.

use crate::card::{Card, collect_cards};
use crate::dom::Dom;
use crate::error::WidgetError;
use crate::focus;
use crate::markup;
use crate::mode::{Mode, read_mode};
use crate::order::shuffle;
use crate::visibility::{self, Labels};
use rand::Rng;

/// Widget roots under `scope`, in document order. The position in this list
/// is the widget index passed to [`FlashcardController::mount`].
pub fn widget_roots<D: Dom>(dom: &D, scope: &D::Element) -> Vec<D::Element> {
    dom.descendants_with_class(scope, markup::ROOT_CLASS)
}

/// Controller for a single widget root. Widgets share nothing; mount one per root.
#[derive(Debug)]
pub struct FlashcardController<D: Dom, R> {
    dom: D,
    root: D::Element,
    list: D::Element,
    selectors: Vec<D::Element>,
    original_order: Vec<Card<D::Element>>,
    mode: Mode,
    labels: Labels,
    rng: R,
}

impl<D: Dom, R: Rng> FlashcardController<D, R> {
    /// Take over `root`: link toggles to answers, read the initial mode and
    /// render it. The order found here is the study order; a widget that
    /// starts in quiz is shuffled right away, without moving focus.
    ///
    /// `widget` is the root's position on the page; it seeds generated ids.
    pub fn mount(dom: D, root: D::Element, widget: usize, mut rng: R) -> Result<Self, WidgetError> {
        let list = dom
            .first_with_class(&root, markup::LIST_CLASS)
            .ok_or(WidgetError::MissingCardList)?;
        let selectors = mode_selectors(&dom, &root);
        let original_order = collect_cards(&dom, &list, widget);
        let labels = Labels::from_root(&dom, &root);
        let mode = read_mode(&dom, &selectors);

        if mode == Mode::Quiz {
            let order = shuffle(&original_order, &mut rng);
            focus::rearrange(&dom, &root, &list, &order);
        }
        visibility::apply_mode(&dom, &list, &original_order, mode, &labels);

        Ok(Self {
            dom,
            root,
            list,
            selectors,
            original_order,
            mode,
            labels,
            rng,
        })
    }

    /// A mode selector changed: reorder, keep focus, re-render visibility.
    ///
    /// Runs the full pipeline on every call, so re-selecting quiz reshuffles.
    pub fn handle_mode_change(&mut self) {
        let mode = read_mode(&self.dom, &self.selectors);
        let order = match mode {
            Mode::Study => self.original_order.clone(),
            Mode::Quiz => shuffle(&self.original_order, &mut self.rng),
        };

        focus::reorder(&self.dom, &self.root, &self.list, &order);
        visibility::apply_mode(&self.dom, &self.list, &order, mode, &self.labels);
        self.mode = mode;
    }

    /// Delegated click from the card list. Flips the clicked card's answer,
    /// but only while the list is presented in quiz mode.
    pub fn handle_click(&self, target: &D::Element) {
        if !self.dom.contains(&self.list, target) || !self.dom.has_class(&self.list, markup::QUIZ_MODE_CLASS) {
            return;
        }
        let Some(toggle) = self.dom.closest_with_class(target, markup::TOGGLE_CLASS, &self.list) else {
            return;
        };
        if let Some(visible) = visibility::is_visible(&self.dom, &toggle) {
            visibility::set_visibility(&self.dom, &toggle, !visible, &self.labels);
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn root(&self) -> &D::Element {
        &self.root
    }

    /// The card list container; the stable ancestor for delegated clicks.
    pub fn card_list(&self) -> &D::Element {
        &self.list
    }

    pub fn mode_selectors(&self) -> &[D::Element] {
        &self.selectors
    }

    /// Cards in the order they were found at mount time.
    pub fn original_order(&self) -> &[Card<D::Element>] {
        &self.original_order
    }

    /// Card elements in their current on-page order.
    pub fn displayed_order(&self) -> Vec<D::Element> {
        self.dom.children(&self.list)
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }
}

/// Mode radios in the root that share the first one's `name`.
fn mode_selectors<D: Dom>(dom: &D, root: &D::Element) -> Vec<D::Element> {
    let candidates = dom.descendants_with_class(root, markup::MODE_CLASS);
    let Some(first) = candidates.first() else {
        return candidates;
    };
    let group = dom.attribute(first, "name");
    candidates
        .into_iter()
        .filter(|selector| dom.attribute(selector, "name") == group)
        .collect()
}
