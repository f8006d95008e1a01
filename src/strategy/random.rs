//! Uniform random strategy.

use smallvec::SmallVec;

use super::{random_bluff, random_card, Strategy};
use crate::core::{Action, ActionKind, GameRng, PlayerView};

/// Chooses uniformly among the legal options.
///
/// Truth and lie are always available; call only when there is a claim and
/// the opponent has cards on their pile. A truthful play claims a random card
/// from hand; a lie plays a random card and claims one of the 51 others.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformRandom;

impl UniformRandom {
    pub const NAME: &'static str = "uniform-random";
}

impl Strategy for UniformRandom {
    fn choose_action(&self, view: &PlayerView, rng: &mut GameRng) -> Option<Action> {
        let mut options: SmallVec<[ActionKind; 3]> = SmallVec::new();
        if !view.hand().is_empty() {
            options.push(ActionKind::Truth);
            options.push(ActionKind::Lie);
        }
        if view.can_call() {
            options.push(ActionKind::Call);
        }

        match *rng.choose(&options)? {
            ActionKind::Call => Some(Action::Call),
            ActionKind::Truth => random_card(view, rng).map(Action::Truth),
            ActionKind::Lie => random_bluff(random_card(view, rng)?, rng),
        }
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
