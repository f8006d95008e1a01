//! Parametrized bluff/call strategy.

use super::{random_bluff, random_card, Strategy};
use crate::core::{Action, ConfigError, GameRng, PlayerView};

/// Strategy defined by two probabilities.
///
/// - If a call is legal and the claimed card is in our own hand, the claim is
///   certainly false: always call.
/// - Otherwise, if a call is legal, call with probability `call_prob_uncertain`.
/// - Otherwise play a random card from hand, bluffing with probability
///   `bluff_prob` and telling the truth otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamStrategy {
    bluff_prob: f64,
    call_prob_uncertain: f64,
    name: String,
}

impl ParamStrategy {
    /// Create a strategy. Both probabilities must lie in `[0, 1]`.
    pub fn new(bluff_prob: f64, call_prob_uncertain: f64) -> Result<Self, ConfigError> {
        check_probability("bluff_prob", bluff_prob)?;
        check_probability("call_prob_uncertain", call_prob_uncertain)?;
        Ok(Self {
            bluff_prob,
            call_prob_uncertain,
            name: format!("param(p={bluff_prob:.2}, q={call_prob_uncertain:.2})"),
        })
    }

    /// Never bluffs, only calls provably false claims.
    #[must_use]
    pub fn honest() -> Self {
        Self {
            bluff_prob: 0.0,
            call_prob_uncertain: 0.0,
            name: "param(p=0.00, q=0.00)".to_string(),
        }
    }

    /// Probability of bluffing when playing a card.
    #[must_use]
    pub fn bluff_prob(&self) -> f64 {
        self.bluff_prob
    }

    /// Probability of calling a claim that is not provably false.
    #[must_use]
    pub fn call_prob_uncertain(&self) -> f64 {
        self.call_prob_uncertain
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}

impl Strategy for ParamStrategy {
    fn choose_action(&self, view: &PlayerView, rng: &mut GameRng) -> Option<Action> {
        if view.can_call()
            && (view.claim_is_provably_false() || rng.gen_bool(self.call_prob_uncertain))
        {
            return Some(Action::Call);
        }

        let card = random_card(view, rng)?;
        if rng.gen_bool(self.bluff_prob) {
            random_bluff(card, rng)
        } else {
            Some(Action::Truth(card))
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
