// Public API
pub use cards::{CardToken, Rank};
pub use score::{score, ValidationError, BLACKJACK, MAX_HAND_SIZE};

// Internal modules
mod cards;
mod score;
