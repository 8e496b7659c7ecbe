use std::{collections::VecDeque, str::FromStr};

use crate::{
    card::{Card, Color, Rank},
    error::DeckError,
};

/// Draw-once pile, consumed from the front in the order it was specified.
#[derive(Debug, Default)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    pub fn from_tokens<I, S>(tokens: I) -> Result<Self, DeckError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cards = tokens
            .into_iter()
            .map(|t| parse_card(t.as_ref()))
            .collect::<Result<VecDeque<_>, _>>()?;
        Ok(Deck { cards })
    }

    pub fn take_one(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    pub fn take_many(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromStr for Deck {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Deck::from_tokens(s.split_whitespace())
    }
}

fn parse_card(token: &str) -> Result<Card, DeckError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(letter), Some(digit), None) => {
            let color = Color::from_letter(letter).ok_or(DeckError::UnknownColor(letter))?;
            let rank = Rank::from_digit(digit).ok_or(DeckError::InvalidRank(digit))?;
            Ok(Card::new(color, rank))
        }
        _ => Err(DeckError::MalformedToken(token.to_string())),
    }
}
