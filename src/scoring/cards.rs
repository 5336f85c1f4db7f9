use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// Point value used when summing a hand. Aces count as 11 here;
    /// demoting one ace to 1 is the scorer's job.
    pub fn value(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    pub fn all() -> Vec<Rank> {
        Rank::iter().collect()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Two => "2",
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "Jack",
                Rank::Queen => "Queen",
                Rank::King => "King",
                Rank::Ace => "Ace",
            }
        )
    }
}

/// A caller-supplied card that has not been validated yet. Hands arrive as
/// mixed lists of numbers and names (`[9, "Ace", 2, 10]`), so the raw token
/// keeps both shapes representable until the scorer checks membership.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum CardToken {
    Number(i64),
    Name(String),
}

impl fmt::Display for CardToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardToken::Number(number) => write!(f, "{}", number),
            CardToken::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<i64> for CardToken {
    fn from(number: i64) -> Self {
        CardToken::Number(number)
    }
}

impl From<&str> for CardToken {
    fn from(name: &str) -> Self {
        CardToken::Name(name.to_string())
    }
}

impl From<Rank> for CardToken {
    fn from(rank: Rank) -> Self {
        match rank {
            Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => {
                CardToken::Name(rank.to_string())
            }
            numeric => CardToken::Number(numeric.value() as i64),
        }
    }
}

impl TryFrom<&CardToken> for Rank {
    type Error = CardToken;

    fn try_from(token: &CardToken) -> Result<Self, Self::Error> {
        match token {
            CardToken::Number(2) => Ok(Rank::Two),
            CardToken::Number(3) => Ok(Rank::Three),
            CardToken::Number(4) => Ok(Rank::Four),
            CardToken::Number(5) => Ok(Rank::Five),
            CardToken::Number(6) => Ok(Rank::Six),
            CardToken::Number(7) => Ok(Rank::Seven),
            CardToken::Number(8) => Ok(Rank::Eight),
            CardToken::Number(9) => Ok(Rank::Nine),
            CardToken::Number(10) => Ok(Rank::Ten),
            CardToken::Name(name) => match name.as_str() {
                "Jack" => Ok(Rank::Jack),
                "Queen" => Ok(Rank::Queen),
                "King" => Ok(Rank::King),
                "Ace" => Ok(Rank::Ace),
                // Name matching is exact: "ace" and "JOKER" are both rejected
                _ => Err(token.clone()),
            },
            _ => Err(token.clone()),
        }
    }
}
