use std::{fmt, str::FromStr};

use itertools::Itertools;

use crate::{
    card::{Color, Rank},
    error::ParseCommandError,
    player::HAND_SIZE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    PlayCard(usize),
    DropCard(usize),
    TellColor(Color, Vec<usize>),
    TellRank(Rank, Vec<usize>),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::PlayCard(index) => write!(f, "Play card {index}"),
            Action::DropCard(index) => write!(f, "Drop card {index}"),
            Action::TellColor(color, indexes) => {
                write!(f, "Tell color {color} for cards {}", indexes.iter().join(" "))
            }
            Action::TellRank(rank, indexes) => {
                write!(f, "Tell rank {rank} for cards {}", indexes.iter().join(" "))
            }
        }
    }
}

/// One recognized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    StartGame(Vec<String>),
    Action(Action),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words = s.split_whitespace().collect::<Vec<_>>();
        match words.as_slice() {
            ["Start", "new", "game", "with", "deck", tokens @ ..] if !tokens.is_empty() => tokens
                .iter()
                .map(|t| parse_token(t))
                .collect::<Result<Vec<_>, _>>()
                .map(Command::StartGame),
            ["Play", "card", index] => Ok(Command::Action(Action::PlayCard(parse_index(index)?))),
            ["Drop", "card", index] => Ok(Command::Action(Action::DropCard(parse_index(index)?))),
            ["Tell", "color", color, "for", "cards", indexes @ ..] if !indexes.is_empty() => {
                let color = Color::from_str(color)
                    .map_err(|_| ParseCommandError::InvalidColor(color.to_string()))?;
                Ok(Command::Action(Action::TellColor(
                    color,
                    parse_indexes(indexes)?,
                )))
            }
            ["Tell", "rank", rank, "for", "cards", indexes @ ..] if !indexes.is_empty() => {
                let rank = single_char(rank)
                    .and_then(Rank::from_digit)
                    .ok_or_else(|| ParseCommandError::InvalidRank(rank.to_string()))?;
                Ok(Command::Action(Action::TellRank(
                    rank,
                    parse_indexes(indexes)?,
                )))
            }
            _ => Err(ParseCommandError::Unrecognized(s.to_string())),
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_index(s: &str) -> Result<usize, ParseCommandError> {
    single_char(s)
        .and_then(|c| c.to_digit(10))
        .and_then(|d| usize::try_from(d).ok())
        .filter(|&i| i < HAND_SIZE)
        .ok_or_else(|| ParseCommandError::InvalidIndex(s.to_string()))
}

fn parse_indexes(words: &[&str]) -> Result<Vec<usize>, ParseCommandError> {
    words.iter().map(|w| parse_index(w)).collect()
}

// Only the shape is checked here, the deck decides which letters are colors.
fn parse_token(s: &str) -> Result<String, ParseCommandError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(letter), Some(digit), None) if letter.is_alphanumeric() && digit.is_ascii_digit() => {
            Ok(s.to_string())
        }
        _ => Err(ParseCommandError::InvalidToken(s.to_string())),
    }
}
