use thiserror::Error;

/// Why a widget root could not be mounted.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("widget root has no card list container (.{})", crate::markup::LIST_CLASS)]
    MissingCardList,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown flashcard mode {0:?} (expected \"study\" or \"quiz\")")]
pub struct ParseModeError(pub String);
