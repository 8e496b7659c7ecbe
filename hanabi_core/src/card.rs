use std::{collections::BTreeSet, fmt};

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

use crate::utils::SingleElement;

#[derive(
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Copy,
    Clone,
    Display,
    EnumIter,
    EnumString,
    EnumCount,
)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    White,
}

impl Color {
    pub fn from_letter(letter: char) -> Option<Color> {
        Color::iter().find(|c| c.letter() == letter)
    }

    pub fn letter(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::White => 'W',
        }
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, EnumIter, EnumCount)]
pub enum Rank {
    One = 1,
    Two,
    Three,
    Four,
    Five,
}

impl Rank {
    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::iter().find(|r| r.value() == value)
    }

    pub fn from_digit(digit: char) -> Option<Rank> {
        digit
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Rank::from_value)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A single physical card together with what its holder has been told about it.
///
/// The belief sets only ever shrink and always keep the true color and rank.
#[derive(Debug, PartialEq)]
pub struct Card {
    color: Color,
    rank: Rank,
    possible_colors: BTreeSet<Color>,
    possible_ranks: BTreeSet<Rank>,
}

impl Card {
    pub fn new(color: Color, rank: Rank) -> Self {
        Card {
            color,
            rank,
            possible_colors: Color::iter().collect(),
            possible_ranks: Rank::iter().collect(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn possible_colors(&self) -> &BTreeSet<Color> {
        &self.possible_colors
    }

    pub fn possible_ranks(&self) -> &BTreeSet<Rank> {
        &self.possible_ranks
    }

    pub fn is_fully_known(&self) -> bool {
        self.possible_colors.single_element().is_some()
            && self.possible_ranks.single_element().is_some()
    }

    pub fn mark_color(&mut self, color: Color) {
        if self.color == color {
            self.possible_colors.retain(|&c| c == color);
        } else {
            self.possible_colors.remove(&color);
        }
    }

    pub fn mark_rank(&mut self, rank: Rank) {
        if self.rank == rank {
            self.possible_ranks.retain(|&r| r == rank);
        } else {
            self.possible_ranks.remove(&rank);
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color.letter(), self.rank)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeSet, str::FromStr};

    use crate::card::{Card, Color, Rank};

    #[test]
    fn new_card_should_consider_everything_possible() {
        let card = Card::new(Color::Green, Rank::Three);

        assert_eq!(card.possible_colors().len(), 5);
        assert_eq!(card.possible_ranks().len(), 5);
        assert!(!card.is_fully_known());
    }

    #[test]
    fn mark_color_should_collapse_to_true_color_on_match() {
        let mut card = Card::new(Color::Red, Rank::One);
        card.mark_color(Color::Red);

        assert_eq!(card.possible_colors(), &BTreeSet::from([Color::Red]));
    }

    #[test]
    fn mark_color_should_eliminate_other_color() {
        let mut card = Card::new(Color::Red, Rank::One);
        card.mark_color(Color::Blue);
        card.mark_color(Color::Blue);

        assert_eq!(
            card.possible_colors(),
            &BTreeSet::from([Color::Red, Color::Green, Color::Yellow, Color::White])
        );
    }

    #[test]
    fn mark_rank_should_never_drop_the_true_rank() {
        let mut card = Card::new(Color::White, Rank::Four);
        for rank in [Rank::One, Rank::Two, Rank::Three, Rank::Five] {
            card.mark_rank(rank);
        }

        assert_eq!(card.possible_ranks(), &BTreeSet::from([Rank::Four]));
    }

    #[test]
    fn card_should_be_fully_known_after_both_reveals() {
        let mut card = Card::new(Color::Yellow, Rank::Two);
        card.mark_rank(Rank::Two);
        assert!(!card.is_fully_known());

        card.mark_color(Color::Yellow);
        assert!(card.is_fully_known());
    }

    #[test]
    fn color_should_parse_from_name_and_letter() {
        assert_eq!(Color::from_str("White"), Ok(Color::White));
        assert!(Color::from_str("Purple").is_err());
        assert_eq!(Color::from_letter('Y'), Some(Color::Yellow));
        assert_eq!(Color::from_letter('X'), None);
    }

    #[test]
    fn rank_should_parse_digits_one_to_five_only() {
        assert_eq!(Rank::from_digit('1'), Some(Rank::One));
        assert_eq!(Rank::from_digit('5'), Some(Rank::Five));
        assert_eq!(Rank::from_digit('0'), None);
        assert_eq!(Rank::from_digit('6'), None);
        assert_eq!(Rank::from_digit('x'), None);
    }

    #[test]
    fn card_should_display_as_token() {
        assert_eq!(Card::new(Color::Blue, Rank::Five).to_string(), "B5");
    }
}
