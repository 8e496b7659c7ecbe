use std::collections::BTreeSet;

use strum::{EnumCount, IntoEnumIterator};

use crate::card::{Card, Color, Rank};

/// Cards that were played successfully. Callers validate before putting a card here.
#[derive(Debug, Default)]
pub struct Table {
    cards: Vec<Card>,
}

impl Table {
    pub fn new() -> Self {
        Table {
            cards: Vec::with_capacity(Color::COUNT * Rank::COUNT),
        }
    }

    pub fn put(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() == Color::COUNT * Rank::COUNT
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards_with_color(&self, color: Color) -> Vec<&Card> {
        self.cards.iter().filter(|c| c.color() == color).collect()
    }

    pub fn count_with_color(&self, color: Color) -> usize {
        self.cards.iter().filter(|c| c.color() == color).count()
    }

    pub fn accepts(&self, card: &Card) -> bool {
        self.count_with_color(card.color()) + 1 == usize::from(card.rank().value())
    }

    /// Colors on which a card of `rank` would be the next legal play.
    pub fn possible_colors(&self, rank: Rank) -> BTreeSet<Color> {
        Color::iter()
            .filter(|&c| self.count_with_color(c) + 1 == usize::from(rank.value()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use strum::IntoEnumIterator;

    use crate::{
        card::{Card, Color, Rank},
        table::Table,
    };

    #[test]
    fn empty_table_should_accept_every_one() {
        let table = Table::new();

        assert_eq!(
            table.possible_colors(Rank::One),
            Color::iter().collect::<BTreeSet<_>>()
        );
        assert!(table.possible_colors(Rank::Two).is_empty());
        assert!(table.accepts(&Card::new(Color::Green, Rank::One)));
        assert!(!table.accepts(&Card::new(Color::Green, Rank::Two)));
    }

    #[test]
    fn possible_colors_should_follow_per_color_progress() {
        let mut table = Table::new();
        table.put(Card::new(Color::Red, Rank::One));
        table.put(Card::new(Color::Red, Rank::Two));
        table.put(Card::new(Color::Blue, Rank::One));

        assert_eq!(
            table.possible_colors(Rank::Three),
            BTreeSet::from([Color::Red])
        );
        assert_eq!(
            table.possible_colors(Rank::Two),
            BTreeSet::from([Color::Blue])
        );
        assert_eq!(table.cards_with_color(Color::Red).len(), 2);
        assert_eq!(table.count_with_color(Color::White), 0);
    }

    #[test]
    fn table_should_be_full_after_all_twenty_five_cards() {
        let mut table = Table::new();
        for rank in Rank::iter() {
            for color in Color::iter() {
                assert!(!table.is_full());
                table.put(Card::new(color, rank));
            }
        }

        assert_eq!(table.len(), 25);
        assert!(table.is_full());
    }
}
