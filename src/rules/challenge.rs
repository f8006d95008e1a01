//! Challenge resolution.
//!
//! A call compares the current claim with the top card of the accused
//! player's pile, which is the card that claim was made about:
//!
//! - claim differs from the card: the accused lied, absorbs both piles, and
//!   the caller opens the next round
//! - claim matches the card: the call was wrong, the caller absorbs both
//!   piles, and the accused opens the next round
//!
//! Either way both piles end up empty and the claim is cleared.

use serde::{Deserialize, Serialize};

use crate::core::{Card, CheatError, GameState, PlayerId, Result};

/// What happened when a claim was called.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeOutcome {
    /// Player who called.
    pub caller: PlayerId,
    /// Player whose claim was called.
    pub accused: PlayerId,
    /// The claim that was called.
    pub claim: Card,
    /// The card actually on top of the accused player's pile.
    pub revealed: Card,
    /// Player who took both piles.
    pub absorbed_by: PlayerId,
    /// Number of cards taken.
    pub cards_absorbed: usize,
    /// Player who opens the next round.
    pub next_starting: PlayerId,
}

impl ChallengeOutcome {
    /// Check if the call exposed a bluff.
    #[must_use]
    pub fn claim_was_false(&self) -> bool {
        self.claim != self.revealed
    }
}

/// Resolve a call by `caller` against the waiting player's last claim.
///
/// Updates hands, piles, claim and starting player. Does not change whose
/// turn it is; the engine does that.
///
/// # Errors
///
/// `CheatError::IllegalCall` if there is no claim to challenge this round.
pub fn resolve_challenge(state: &mut GameState, caller: PlayerId) -> Result<ChallengeOutcome> {
    let accused = caller.opponent();
    let claim = state.current_claim.ok_or(CheatError::IllegalCall)?;
    let revealed = *state.piles[accused].back().ok_or(CheatError::IllegalCall)?;

    let (absorbed_by, next_starting) = if claim != revealed {
        (accused, caller)
    } else {
        (caller, accused)
    };

    let cards_absorbed = state.collect_piles(absorbed_by);
    state.starting_player = next_starting;
    state.current_claim = None;

    Ok(ChallengeOutcome {
        caller,
        accused,
        claim,
        revealed,
        absorbed_by,
        cards_absorbed,
        next_starting,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{full_deck, Hand, PlayerMap, Suit};

    fn dealt_state() -> GameState {
        let deck = full_deck();
        let one: Hand = deck[..26].iter().copied().collect();
        let two: Hand = deck[26..].iter().copied().collect();
        GameState::new(PlayerMap::from_pair(one, two), PlayerId::ONE)
    }

    #[test]
    fn test_no_claim_is_illegal() {
        let mut state = dealt_state();
        let before = state.clone();

        assert_eq!(
            resolve_challenge(&mut state, PlayerId::ONE),
            Err(CheatError::IllegalCall)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_exposed_bluff() {
        let mut state = dealt_state();
        let played = *state.hands[PlayerId::ONE].get_min().unwrap();
        let claim = *state.hands[PlayerId::TWO].get_min().unwrap();
        state.move_to_pile(PlayerId::ONE, played);
        state.current_claim = Some(claim);

        let outcome = resolve_challenge(&mut state, PlayerId::TWO).unwrap();

        assert!(outcome.claim_was_false());
        assert_eq!(outcome.absorbed_by, PlayerId::ONE);
        assert_eq!(outcome.next_starting, PlayerId::TWO);
        assert_eq!(outcome.cards_absorbed, 1);
        assert_eq!(state.starting_player, PlayerId::TWO);
        assert_eq!(state.current_claim, None);
        assert!(state.check_conservation().is_ok());
    }

    #[test]
    fn test_wrong_call() {
        let mut state = dealt_state();
        let played = Card::new(13, Suit::Spades);
        state.move_to_pile(PlayerId::TWO, played);
        state.current_claim = Some(played);

        let outcome = resolve_challenge(&mut state, PlayerId::ONE).unwrap();

        assert!(!outcome.claim_was_false());
        assert_eq!(outcome.revealed, played);
        assert_eq!(outcome.absorbed_by, PlayerId::ONE);
        assert_eq!(outcome.next_starting, PlayerId::TWO);
        assert!(state.hands[PlayerId::ONE].contains(&played));
        assert_eq!(state.hands[PlayerId::ONE].len(), 27);
    }
}
