use crate::{command::Action, error::IllegalAction, game::Summary, player::PlayerId};

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Dealt { deck_remaining: usize },
    Played {
        player: PlayerId,
        card: String,
        dangerous: bool,
    },
    Dropped { player: PlayerId, card: String },
    Told { player: PlayerId, action: Action },
    Rejected {
        player: PlayerId,
        reason: IllegalAction,
    },
    Ended(Summary),
}
