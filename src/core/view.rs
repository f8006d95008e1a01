//! Player view: what a strategy may see.
//!
//! A `PlayerView` is an owned snapshot built by the engine for one player.
//! It contains the player's own hand and pile, the claim they must respond
//! to, and only the *size* of the opponent's pile. The opponent's hand and
//! the identity of the cards they played are never part of it.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::player::PlayerId;
use super::state::{GameState, Hand, Pile};

/// Read-only information available to one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    player: PlayerId,
    hand: Hand,
    pile: Pile,
    previous_claim: Option<Card>,
    opponent_pile_size: usize,
    starting_player: PlayerId,
}

impl PlayerView {
    /// Project `state` onto what `player` may see.
    #[must_use]
    pub fn project(state: &GameState, player: PlayerId) -> Self {
        Self {
            player,
            hand: state.hands[player].clone(),
            pile: state.piles[player].clone(),
            previous_claim: state.current_claim,
            opponent_pile_size: state.piles[player.opponent()].len(),
            starting_player: state.starting_player,
        }
    }

    /// The player this view belongs to.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Cards in the player's own hand.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Own hand as a vector, in hand order.
    #[must_use]
    pub fn hand_cards(&self) -> Vec<Card> {
        self.hand.iter().copied().collect()
    }

    /// Cards the player has placed this round, most recent last.
    #[must_use]
    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    /// The opponent's most recent claim this round, if any.
    #[must_use]
    pub fn previous_claim(&self) -> Option<Card> {
        self.previous_claim
    }

    /// Number of cards the opponent has placed this round.
    #[must_use]
    pub fn opponent_pile_size(&self) -> usize {
        self.opponent_pile_size
    }

    /// Player who opens the next round.
    #[must_use]
    pub fn starting_player(&self) -> PlayerId {
        self.starting_player
    }

    /// Check if calling is currently allowed.
    #[must_use]
    pub fn can_call(&self) -> bool {
        self.previous_claim.is_some() && self.opponent_pile_size > 0
    }

    /// Check if the previous claim is provably false.
    ///
    /// Cards are unique, so a claimed card sitting in our own hand cannot be
    /// the one the opponent played.
    #[must_use]
    pub fn claim_is_provably_false(&self) -> bool {
        self.previous_claim
            .is_some_and(|claim| self.hand.contains(&claim))
    }
}
