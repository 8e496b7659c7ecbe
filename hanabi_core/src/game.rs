use std::fmt;

use log::{debug, info};
use serde::Serialize;

use crate::{
    card::{Card, Color, Rank},
    command::Action,
    deck::Deck,
    error::{DeckError, IllegalAction, ParseCommandError},
    event::Event,
    player::{Player, PlayerId, HAND_SIZE},
    table::Table,
    utils::SingleElement,
};

const PLAYER_COUNT: usize = 2;

/// Enough cards to deal both hands.
pub const MIN_DECK_SIZE: usize = PLAYER_COUNT * HAND_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unstarted,
    InProgress,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub turn: u32,
    pub cards: usize,
    pub risk: u32,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Turn: {}, cards: {}, with risk: {}",
            self.turn, self.cards, self.risk
        )
    }
}

pub struct Game {
    deck: Deck,
    table: Table,
    players: [Player; PLAYER_COUNT],
    players_turn: PlayerId,
    turn: u32,
    risk: u32,
    phase: Phase,
    log: Vec<Event>,
}

impl Game {
    pub fn new(mut deck: Deck) -> Result<Self, DeckError> {
        if deck.len() < MIN_DECK_SIZE {
            return Err(DeckError::TooFewCards {
                len: deck.len(),
                required: MIN_DECK_SIZE,
            });
        }
        let first = Player::new(deck.take_many(HAND_SIZE));
        let second = Player::new(deck.take_many(HAND_SIZE));
        let mut game = Game {
            deck,
            table: Table::new(),
            players: [first, second],
            players_turn: 0,
            turn: 0,
            risk: 0,
            phase: Phase::InProgress,
            log: vec![],
        };
        info!("new game, {} cards left in deck", game.deck.len());
        game.record(Event::Dealt {
            deck_remaining: game.deck.len(),
        });
        Ok(game)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn risk(&self) -> u32 {
        self.risk
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn active_id(&self) -> PlayerId {
        self.players_turn
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.players_turn]
    }

    pub fn passive_player(&self) -> &Player {
        &self.players[self.passive_id()]
    }

    pub fn events(&self) -> &[Event] {
        &self.log
    }

    pub fn summary(&self) -> Summary {
        Summary {
            turn: self.turn,
            cards: self.table.len(),
            risk: self.risk,
        }
    }

    /// Runs one turn and returns whether the game goes on.
    pub fn execute_action(&mut self, action: &Action) -> bool {
        if self.phase != Phase::InProgress {
            debug!("ignoring `{action}`, the game is over");
            return false;
        }
        self.turn += 1;
        let result = match action {
            Action::PlayCard(index) => self.play_card(*index),
            Action::DropCard(index) => self.drop_card(*index),
            Action::TellColor(color, indexes) => self.tell_color(*color, indexes),
            Action::TellRank(rank, indexes) => self.tell_rank(*rank, indexes),
        };
        if result.is_ok() {
            if let Action::TellColor(..) | Action::TellRank(..) = action {
                self.record(Event::Told {
                    player: self.players_turn,
                    action: action.clone(),
                });
            }
        }
        self.finish_turn(result)
    }

    /// An unreadable line still takes a turn, and loses it.
    pub fn execute_malformed(&mut self, error: ParseCommandError) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        self.turn += 1;
        self.finish_turn(Err(error.into()))
    }

    fn finish_turn(&mut self, result: Result<(), IllegalAction>) -> bool {
        let legal = match result {
            Ok(()) => true,
            Err(reason) => {
                self.record(Event::Rejected {
                    player: self.players_turn,
                    reason,
                });
                false
            }
        };
        let continues = legal && !self.deck.is_empty() && !self.table.is_full();
        self.players_turn = self.passive_id();
        if !continues {
            self.phase = Phase::Ended;
            let summary = self.summary();
            info!("game ended: {summary}");
            self.record(Event::Ended(summary));
        }
        continues
    }

    fn play_card(&mut self, index: usize) -> Result<(), IllegalAction> {
        let card = self.players[self.players_turn]
            .layout(index)
            .ok_or(IllegalAction::NoSuchCard(index))?;
        self.draw();
        if !self.table.accepts(&card) {
            return Err(IllegalAction::Unplayable {
                color: card.color(),
                rank: card.rank(),
            });
        }
        let dangerous = self.is_dangerous(&card);
        if dangerous {
            self.risk += 1;
        }
        self.record(Event::Played {
            player: self.players_turn,
            card: card.to_string(),
            dangerous,
        });
        self.table.put(card);
        Ok(())
    }

    fn drop_card(&mut self, index: usize) -> Result<(), IllegalAction> {
        let card = self.players[self.players_turn]
            .layout(index)
            .ok_or(IllegalAction::NoSuchCard(index))?;
        self.draw();
        self.record(Event::Dropped {
            player: self.players_turn,
            card: card.to_string(),
        });
        Ok(())
    }

    fn tell_color(&mut self, color: Color, claimed: &[usize]) -> Result<(), IllegalAction> {
        let passive_id = self.passive_id();
        let passive = &mut self.players[passive_id];
        let actual = passive.indexes_with_color(color);
        if actual != claimed {
            return Err(IllegalAction::HintMismatch {
                claimed: claimed.to_vec(),
                actual,
            });
        }
        passive.mark_color(color);
        Ok(())
    }

    fn tell_rank(&mut self, rank: Rank, claimed: &[usize]) -> Result<(), IllegalAction> {
        let passive_id = self.passive_id();
        let passive = &mut self.players[passive_id];
        let actual = passive.indexes_with_rank(rank);
        if actual != claimed {
            return Err(IllegalAction::HintMismatch {
                claimed: claimed.to_vec(),
                actual,
            });
        }
        passive.mark_rank(rank);
        Ok(())
    }

    // Only a deck that ran out during the deal gets here empty, and that turn ends the game.
    fn draw(&mut self) {
        if let Some(card) = self.deck.take_one() {
            self.players[self.players_turn].take(card);
        }
    }

    /// A play is safe when the card was fully known, or when its rank was known and
    /// every color it could still be is playable at that rank right now.
    fn is_dangerous(&self, card: &Card) -> bool {
        if card.is_fully_known() {
            return false;
        }
        if card.possible_ranks().single_element().is_none() {
            return true;
        }
        let playable = self.table.possible_colors(card.rank());
        !card.possible_colors().is_subset(&playable)
    }

    fn passive_id(&self) -> PlayerId {
        (self.players_turn + 1) % PLAYER_COUNT
    }

    fn record(&mut self, event: Event) {
        debug!("turn {}: {:?}", self.turn, event);
        self.log.push(event);
    }
}
