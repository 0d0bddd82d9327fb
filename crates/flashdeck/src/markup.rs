//! Class and attribute names shared by the server-rendered markup and the
//! widget runtime. Both sides must agree on these or the widget never mounts.

/// Widget root. One controller per element carrying this class.
pub const ROOT_CLASS: &str = "flashcards";
/// Card list container; its element children are the cards.
pub const LIST_CLASS: &str = "flashcards-list";
/// Mode radio inputs (`value="study"` / `value="quiz"`).
pub const MODE_CLASS: &str = "flashcards-mode";

pub const CARD_CLASS: &str = "flashcard";
pub const PROMPT_CLASS: &str = "flashcard-prompt";
/// Answer marker. Also what the sibling fallback checks for.
pub const ANSWER_CLASS: &str = "flashcard-answer";
pub const TOGGLE_CLASS: &str = "flashcard-toggle";

/// Presentation classes on the list container; exactly one is present.
pub const STUDY_MODE_CLASS: &str = "is-study-mode";
pub const QUIZ_MODE_CLASS: &str = "is-quiz-mode";

/// Optional label overrides on the widget root.
pub const SHOW_LABEL_ATTR: &str = "data-show-label";
pub const HIDE_LABEL_ATTR: &str = "data-hide-label";

pub const HIDDEN_ATTR: &str = "hidden";
pub const EXPANDED_ATTR: &str = "aria-expanded";
pub const CONTROLS_ATTR: &str = "aria-controls";

pub const DEFAULT_SHOW_LABEL: &str = "show answer";
pub const DEFAULT_HIDE_LABEL: &str = "hide answer";

/// Deterministic answer id for card `card` of widget `widget` (both in page order).
pub fn answer_id(widget: usize, card: usize) -> String {
    format!("flashcards-{}-answer-{}", widget, card)
}
