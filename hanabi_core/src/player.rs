use itertools::Itertools;

use crate::card::{Card, Color, Rank};

pub type PlayerId = usize;

pub const HAND_SIZE: usize = 5;

/// A hand addressed by position. Removing a card shifts every later index down.
#[derive(Debug, Default)]
pub struct Player {
    hand: Vec<Card>,
}

impl Player {
    pub fn new(hand: Vec<Card>) -> Self {
        Player { hand }
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn layout(&mut self, index: usize) -> Option<Card> {
        if index < self.hand.len() {
            Some(self.hand.remove(index))
        } else {
            None
        }
    }

    pub fn take(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn indexes_with_color(&self, color: Color) -> Vec<usize> {
        self.hand.iter().positions(|c| c.color() == color).collect()
    }

    pub fn indexes_with_rank(&self, rank: Rank) -> Vec<usize> {
        self.hand.iter().positions(|c| c.rank() == rank).collect()
    }

    pub fn mark_color(&mut self, color: Color) {
        self.hand.iter_mut().for_each(|c| c.mark_color(color));
    }

    pub fn mark_rank(&mut self, rank: Rank) {
        self.hand.iter_mut().for_each(|c| c.mark_rank(rank));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::{
        card::{Card, Color, Rank},
        deck::Deck,
        player::Player,
    };

    fn player(tokens: &str) -> Player {
        let mut deck: Deck = tokens.parse().unwrap();
        let size = deck.len();
        Player::new(deck.take_many(size))
    }

    #[test]
    fn layout_should_shift_following_indexes() {
        let mut player = player("R1 B2 G3 W4 Y5");

        let card = player.layout(1).unwrap();
        assert_eq!(card.to_string(), "B2");
        assert_eq!(player.hand()[1].to_string(), "G3");
        assert_eq!(player.hand().len(), 4);
    }

    #[test]
    fn layout_should_return_none_out_of_range() {
        let mut player = player("R1 B2");

        assert!(player.layout(2).is_none());
        assert_eq!(player.hand().len(), 2);
    }

    #[test]
    fn take_should_append_to_the_end() {
        let mut player = player("R1 B2");
        player.take(Card::new(Color::White, Rank::Three));

        assert_eq!(player.hand()[2].to_string(), "W3");
    }

    #[test]
    fn indexes_should_list_matching_positions_in_order() {
        let player = player("R1 B1 R3 W1 R5");

        assert_eq!(player.indexes_with_color(Color::Red), vec![0, 2, 4]);
        assert_eq!(player.indexes_with_rank(Rank::One), vec![0, 1, 3]);
        assert!(player.indexes_with_color(Color::Green).is_empty());
    }

    #[test]
    fn mark_color_should_apply_to_whole_hand() {
        let mut player = player("R1 B1 R3");
        player.mark_color(Color::Red);

        assert_eq!(
            player.hand()[0].possible_colors(),
            &BTreeSet::from([Color::Red])
        );
        assert!(!player.hand()[1].possible_colors().contains(&Color::Red));
        assert_eq!(
            player.hand()[2].possible_colors(),
            &BTreeSet::from([Color::Red])
        );
    }

    #[test]
    fn mark_rank_should_apply_to_whole_hand() {
        let mut player = player("R1 B1 R3");
        player.mark_rank(Rank::Three);

        assert!(!player.hand()[0].possible_ranks().contains(&Rank::Three));
        assert_eq!(
            player.hand()[2].possible_ranks(),
            &BTreeSet::from([Rank::Three])
        );
    }
}
