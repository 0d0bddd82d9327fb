mod deck;
mod home;

pub use deck::DeckPage;
pub use home::HomePage;
