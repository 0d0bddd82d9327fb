mod copy_button;
mod flashcard_deck;
mod section;

pub use copy_button::CopyButton;
pub use flashcard_deck::FlashcardDeck;
pub use section::Section;
