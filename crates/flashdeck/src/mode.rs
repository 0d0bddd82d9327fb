use std::fmt;
use std::str::FromStr;

use crate::dom::Dom;
use crate::error::ParseModeError;
use crate::markup;

/// Which way a widget presents its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Original order, every answer shown.
    #[default]
    Study,
    /// Shuffled order, answers hidden until revealed one by one.
    Quiz,
}

impl Mode {
    /// Radio `value` for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Study => "study",
            Mode::Quiz => "quiz",
        }
    }

    /// Presentation class put on the card list container.
    pub fn class(self) -> &'static str {
        match self {
            Mode::Study => markup::STUDY_MODE_CLASS,
            Mode::Quiz => markup::QUIZ_MODE_CLASS,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "study" => Ok(Mode::Study),
            "quiz" => Ok(Mode::Quiz),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// Mode selected by the radio group. Falls back to [`Mode::Study`] when
/// nothing usable is checked.
pub fn read_mode<D: Dom>(dom: &D, selectors: &[D::Element]) -> Mode {
    selectors
        .iter()
        .filter(|selector| dom.is_checked(selector))
        .find_map(|selector| dom.attribute(selector, "value")?.parse().ok())
        .unwrap_or_default()
}
