//! Answer visibility and the toggle's accessibility state.
//!
//! `hidden` on the answer, `aria-expanded` on the toggle and the toggle's
//! label always move together, and only through [`set_visibility`].

use crate::card::Card;
use crate::dom::Dom;
use crate::markup;
use crate::mode::Mode;

/// Toggle label text for each state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Shown while the answer is hidden.
    pub show: String,
    /// Shown while the answer is visible.
    pub hide: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            show: markup::DEFAULT_SHOW_LABEL.to_string(),
            hide: markup::DEFAULT_HIDE_LABEL.to_string(),
        }
    }
}

impl Labels {
    /// Defaults, each replaced by its override unless that is blank.
    pub fn with_overrides(show: Option<String>, hide: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            show: Self::usable(show).unwrap_or(defaults.show),
            hide: Self::usable(hide).unwrap_or(defaults.hide),
        }
    }

    /// Labels from `data-show-label` / `data-hide-label` on the widget root.
    pub fn from_root<D: Dom>(dom: &D, root: &D::Element) -> Self {
        Self::with_overrides(
            dom.attribute(root, markup::SHOW_LABEL_ATTR),
            dom.attribute(root, markup::HIDE_LABEL_ATTR),
        )
    }

    /// An override counts only if it has visible text.
    pub fn usable(label: Option<String>) -> Option<String> {
        label.filter(|label| !label.trim().is_empty())
    }
}

/// The answer region a toggle controls: the `aria-controls` target, else the
/// toggle's next sibling if it is marked as an answer.
pub fn resolve_answer<D: Dom>(dom: &D, toggle: &D::Element) -> Option<D::Element> {
    dom.attribute(toggle, markup::CONTROLS_ATTR)
        .filter(|id| !id.is_empty())
        .and_then(|id| dom.element_by_id(&id))
        .or_else(|| {
            dom.next_sibling(toggle)
                .filter(|sibling| dom.has_class(sibling, markup::ANSWER_CLASS))
        })
}

/// Whether the toggle's answer is currently shown. `None` if it has no answer.
pub fn is_visible<D: Dom>(dom: &D, toggle: &D::Element) -> Option<bool> {
    resolve_answer(dom, toggle).map(|answer| !dom.has_attribute(&answer, markup::HIDDEN_ATTR))
}

/// Show or hide one card's answer. No-op when the answer can't be resolved.
pub fn set_visibility<D: Dom>(dom: &D, toggle: &D::Element, visible: bool, labels: &Labels) {
    let Some(answer) = resolve_answer(dom, toggle) else {
        return;
    };
    if visible {
        dom.remove_attribute(&answer, markup::HIDDEN_ATTR);
        dom.set_attribute(toggle, markup::EXPANDED_ATTR, "true");
        dom.set_text(toggle, &labels.hide);
    } else {
        dom.set_attribute(&answer, markup::HIDDEN_ATTR, "");
        dom.set_attribute(toggle, markup::EXPANDED_ATTR, "false");
        dom.set_text(toggle, &labels.show);
    }
}

/// Put every card and the list container into `mode`'s presentation.
pub fn apply_mode<D: Dom>(dom: &D, list: &D::Element, cards: &[Card<D::Element>], mode: Mode, labels: &Labels) {
    let visible = mode == Mode::Study;
    for toggle in cards.iter().filter_map(|card| card.toggle.as_ref()) {
        set_visibility(dom, toggle, visible, labels);
    }
    dom.set_class(list, markup::STUDY_MODE_CLASS, mode == Mode::Study);
    dom.set_class(list, markup::QUIZ_MODE_CLASS, mode == Mode::Quiz);
}
