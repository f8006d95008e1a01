//! Strategy protocol.
//!
//! A strategy maps a [`PlayerView`] to an [`Action`]. It sees nothing but the
//! view, borrows it immutably, and draws any randomness from the `GameRng`
//! the engine hands it, so games are reproducible from a seed.
//!
//! Strategies are `Send + Sync` and keep no per-game state, which lets the
//! simulation layer share one instance across many games running in
//! parallel.
//!
//! Reference implementations:
//! - [`UniformRandom`]: uniform over the legal options
//! - [`ParamStrategy`]: bluff with probability `p`, call with probability `q`

mod param;
mod random;

pub use param::ParamStrategy;
pub use random::UniformRandom;

use crate::core::{full_deck, Action, Bluff, Card, GameRng, PlayerView};

/// Decision-making policy for one player.
pub trait Strategy: Send + Sync {
    /// Choose an action for the player the view belongs to.
    ///
    /// Returns `None` only if no legal action exists.
    fn choose_action(&self, view: &PlayerView, rng: &mut GameRng) -> Option<Action>;

    /// Short name for logs and reports.
    fn name(&self) -> &str;
}

/// Strategy backed by a closure.
pub struct FnStrategy<F> {
    name: String,
    f: F,
}

impl<F> Strategy for FnStrategy<F>
where
    F: Fn(&PlayerView, &mut GameRng) -> Option<Action> + Send + Sync,
{
    fn choose_action(&self, view: &PlayerView, rng: &mut GameRng) -> Option<Action> {
        (self.f)(view, rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Wrap a closure as a strategy.
///
/// ```
/// use cheat_engine::core::Action;
/// use cheat_engine::strategy::{from_fn, Strategy};
///
/// // Always play the lowest card honestly
/// let honest = from_fn("lowest-honest", |view, _rng| {
///     view.hand().get_min().copied().map(Action::Truth)
/// });
/// assert_eq!(honest.name(), "lowest-honest");
/// ```
pub fn from_fn<F>(name: impl Into<String>, f: F) -> FnStrategy<F>
where
    F: Fn(&PlayerView, &mut GameRng) -> Option<Action> + Send + Sync,
{
    FnStrategy {
        name: name.into(),
        f,
    }
}

/// Bluff with `card`, claiming a card drawn uniformly from the other 51.
pub fn random_bluff(card: Card, rng: &mut GameRng) -> Option<Action> {
    let others: Vec<Card> = full_deck().into_iter().filter(|c| *c != card).collect();
    let claim = *rng.choose(&others)?;
    Bluff::new(card, claim).ok().map(Action::Lie)
}

/// Pick a card uniformly from the player's hand.
pub(crate) fn random_card(view: &PlayerView, rng: &mut GameRng) -> Option<Card> {
    let hand = view.hand();
    if hand.is_empty() {
        return None;
    }
    hand.iter().nth(rng.gen_range_usize(0..hand.len())).copied()
}
