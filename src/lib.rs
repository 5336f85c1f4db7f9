// Library crate for blackjack hand scoring
// This file exposes the public API for integration tests

pub mod scoring;

// Re-export commonly used types for easier access in tests
pub use scoring::{score, CardToken, Rank, ValidationError, BLACKJACK, MAX_HAND_SIZE};
