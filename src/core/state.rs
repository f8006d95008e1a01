//! Authoritative game state.
//!
//! `GameState` holds everything, including both hands. Only the engine owns
//! one; strategies see a [`PlayerView`](super::view::PlayerView) projection
//! instead.
//!
//! Hands and piles use `im` persistent collections so that projecting a view
//! is an O(1) clone rather than a copy of the cards.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::card::{full_deck, Card, DECK_SIZE};
use super::player::{PlayerId, PlayerMap};

/// Cards held by a player. Ordered so iteration is reproducible.
pub type Hand = OrdSet<Card>;

/// Cards a player has placed face-down this round, most recent last.
pub type Pile = Vector<Card>;

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Player whose turn it is.
    pub active_player: PlayerId,

    /// Player who opens the next round.
    pub starting_player: PlayerId,

    /// Cards in each player's hand.
    pub hands: PlayerMap<Hand>,

    /// Cards each player has played this round.
    pub piles: PlayerMap<Pile>,

    /// Claim made with the most recent play of this round.
    pub current_claim: Option<Card>,

    /// Set once a player empties their hand.
    pub winner: Option<PlayerId>,

    /// Number of actions applied so far.
    pub actions_taken: u32,
}

impl GameState {
    /// Create a state from dealt hands with empty piles.
    #[must_use]
    pub fn new(hands: PlayerMap<Hand>, starting_player: PlayerId) -> Self {
        Self {
            active_player: starting_player,
            starting_player,
            hands,
            piles: PlayerMap::with_default(),
            current_claim: None,
            winner: None,
            actions_taken: 0,
        }
    }

    /// The player not on turn.
    #[must_use]
    pub fn waiting_player(&self) -> PlayerId {
        self.active_player.opponent()
    }

    /// Move `card` from `player`'s hand to the top of their pile.
    ///
    /// Returns `false` (and changes nothing) if the card is not in the hand.
    pub fn move_to_pile(&mut self, player: PlayerId, card: Card) -> bool {
        if self.hands[player].remove(&card).is_none() {
            return false;
        }
        self.piles[player].push_back(card);
        true
    }

    /// Empty both piles into `player`'s hand. Returns the number of cards moved.
    pub fn collect_piles(&mut self, player: PlayerId) -> usize {
        let mut moved = 0;
        for owner in PlayerId::all() {
            let pile = std::mem::take(&mut self.piles[owner]);
            moved += pile.len();
            self.hands[player].extend(pile);
        }
        moved
    }

    /// Total cards across both hands and both piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        PlayerId::all()
            .map(|p| self.hands[p].len() + self.piles[p].len())
            .sum()
    }

    /// Verify that hands and piles partition the full deck.
    ///
    /// Returns a description of the first violation found.
    pub fn check_conservation(&self) -> Result<(), String> {
        let mut seen = OrdSet::new();
        let locations = PlayerId::all().flat_map(|p| {
            [
                (p, "hand", self.hands[p].iter().copied().collect::<Vec<_>>()),
                (p, "pile", self.piles[p].iter().copied().collect::<Vec<_>>()),
            ]
        });

        for (player, zone, cards) in locations {
            for card in cards {
                if seen.insert(card).is_some() {
                    return Err(format!("{card} duplicated ({player} {zone})"));
                }
            }
        }

        if seen.len() != DECK_SIZE {
            return Err(format!("{} cards in play, expected {DECK_SIZE}", seen.len()));
        }
        if let Some(missing) = full_deck().into_iter().find(|c| !seen.contains(c)) {
            return Err(format!("{missing} missing"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    fn split_deck() -> PlayerMap<Hand> {
        let deck = full_deck();
        let (one, two): (Vec<_>, Vec<_>) = deck.iter().enumerate().partition(|(i, _)| i % 2 == 0);
        PlayerMap::from_pair(
            one.into_iter().map(|(_, c)| *c).collect(),
            two.into_iter().map(|(_, c)| *c).collect(),
        )
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(split_deck(), PlayerId::TWO);

        assert_eq!(state.active_player, PlayerId::TWO);
        assert_eq!(state.waiting_player(), PlayerId::ONE);
        assert_eq!(state.starting_player, PlayerId::TWO);
        assert_eq!(state.current_claim, None);
        assert_eq!(state.card_count(), DECK_SIZE);
        assert!(state.check_conservation().is_ok());
    }

    #[test]
    fn test_move_to_pile() {
        let mut state = GameState::new(split_deck(), PlayerId::ONE);
        let card = *state.hands[PlayerId::ONE].get_min().unwrap();

        assert!(state.move_to_pile(PlayerId::ONE, card));
        assert!(!state.hands[PlayerId::ONE].contains(&card));
        assert_eq!(state.piles[PlayerId::ONE].back(), Some(&card));

        // Already moved
        assert!(!state.move_to_pile(PlayerId::ONE, card));
        assert!(state.check_conservation().is_ok());
    }

    #[test]
    fn test_collect_piles() {
        let mut state = GameState::new(split_deck(), PlayerId::ONE);
        let a = *state.hands[PlayerId::ONE].get_min().unwrap();
        let b = *state.hands[PlayerId::TWO].get_min().unwrap();
        state.move_to_pile(PlayerId::ONE, a);
        state.move_to_pile(PlayerId::TWO, b);

        let moved = state.collect_piles(PlayerId::TWO);

        assert_eq!(moved, 2);
        assert!(state.piles[PlayerId::ONE].is_empty());
        assert!(state.piles[PlayerId::TWO].is_empty());
        assert!(state.hands[PlayerId::TWO].contains(&a));
        assert_eq!(state.hands[PlayerId::TWO].len(), 27);
        assert!(state.check_conservation().is_ok());
    }

    #[test]
    fn test_conservation_detects_duplicate() {
        let mut state = GameState::new(split_deck(), PlayerId::ONE);
        let card = *state.hands[PlayerId::ONE].get_min().unwrap();
        state.piles[PlayerId::TWO].push_back(card);

        let err = state.check_conservation().unwrap_err();
        assert!(err.contains("duplicated"), "{err}");
    }

    #[test]
    fn test_conservation_detects_missing() {
        let mut state = GameState::new(split_deck(), PlayerId::ONE);
        state.hands[PlayerId::TWO].remove(&Card::new(13, Suit::Spades));

        assert!(state.check_conservation().is_err());
    }
}
