use thiserror::Error;

use super::cards::{CardToken, Rank};

/// Largest hand the scorer accepts.
pub const MAX_HAND_SIZE: usize = 5;

/// A hand totalling more than this is a bust.
pub const BLACKJACK: u8 = 21;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{count} is more than max of 5 cards")]
    TooManyCards { count: usize },
    #[error("{value} is a non-valid card")]
    InvalidCard { value: CardToken },
    #[error("{total} is over 21.BUST!")]
    Bust { total: u8 },
}

/// Score a blackjack hand.
///
/// The hand length is checked before any card is looked at, so an oversized
/// hand reports `TooManyCards` even when it is full of garbage. Card
/// validation runs in hand order and reports the first offender. Aces count
/// as 11, and when that would bust the hand exactly one ace is re-counted
/// as 1, never one per ace.
///
/// An empty hand is valid and scores 0.
pub fn score(hand: &[CardToken]) -> Result<u8, ValidationError> {
    if hand.len() > MAX_HAND_SIZE {
        return Err(ValidationError::TooManyCards { count: hand.len() });
    }

    let mut ranks = Vec::with_capacity(hand.len());
    for token in hand {
        let rank =
            Rank::try_from(token).map_err(|value| ValidationError::InvalidCard { value })?;
        ranks.push(rank);
    }

    let mut total: u8 = ranks.iter().map(|rank| rank.value()).sum();

    if total > BLACKJACK && ranks.contains(&Rank::Ace) {
        total -= 10;
    }

    if total > BLACKJACK {
        return Err(ValidationError::Bust { total });
    }

    Ok(total)
}
