use thiserror::Error;

use crate::card::{Color, Rank};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("card token `{0}` must be a color letter followed by a rank digit")]
    MalformedToken(String),
    #[error("unknown letter `{0}` for color")]
    UnknownColor(char),
    #[error("invalid rank `{0}`, expected a digit from 1 to 5")]
    InvalidRank(char),
    #[error("deck holds {len} cards, at least {required} are needed")]
    TooFewCards { len: usize, required: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("unrecognized command `{0}`")]
    Unrecognized(String),
    #[error("invalid card index `{0}`")]
    InvalidIndex(String),
    #[error("invalid color `{0}`")]
    InvalidColor(String),
    #[error("invalid rank `{0}`")]
    InvalidRank(String),
    #[error("invalid card token `{0}`")]
    InvalidToken(String),
}

/// Rule violations of a structurally valid action. These end the game but never abort it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalAction {
    #[error("{color} {rank} is not the next card for its color")]
    Unplayable { color: Color, rank: Rank },
    #[error("no card at index {0}")]
    NoSuchCard(usize),
    #[error("claimed cards {claimed:?} but the hand holds {actual:?}")]
    HintMismatch {
        claimed: Vec<usize>,
        actual: Vec<usize>,
    },
    #[error(transparent)]
    Malformed(#[from] ParseCommandError),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}
