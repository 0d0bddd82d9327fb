//! Study/quiz flashcard widget logic.
//!
//! Everything here runs against the [`Dom`] trait so the same controller
//! drives the real page (see `flashdeck-web`, `hydrate` feature) and the
//! in-memory [`headless::HeadlessDom`] used by the tests.

pub mod card;
pub mod controller;
pub mod dom;
mod error;
pub mod focus;
pub mod headless;
pub mod markup;
pub mod mode;
pub mod order;
pub mod visibility;

pub use card::Card;
pub use controller::{FlashcardController, widget_roots};
pub use dom::Dom;
pub use error::{ParseModeError, WidgetError};
pub use mode::Mode;
pub use order::shuffle;
pub use visibility::Labels;
