//! Action representation.
//!
//! On their turn a player either plays a card face-down while claiming a
//! card (truthfully or as a bluff), or calls the opponent's last claim:
//!
//! - `Truth(card)`: play `card`, claim `card`
//! - `Lie(bluff)`: play `bluff.card()`, claim `bluff.claim()`, which differs
//! - `Call`: challenge the opponent's previous claim
//!
//! A bluff claiming the card actually played cannot be built, so an `Action`
//! value always satisfies the per-option field rules. The flat
//! [`RawAction`] record (`option` + optional `card` / `claimed_card`) is the
//! serialized form; converting it back validates those rules.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::error::InvalidAction;

/// The option chosen, without payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Truth,
    Lie,
    Call,
}

/// A played card together with a different claimed card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bluff {
    card: Card,
    claim: Card,
}

impl Bluff {
    /// Create a bluff. Fails if the claim is the card actually played.
    pub fn new(card: Card, claim: Card) -> Result<Self, InvalidAction> {
        if card == claim {
            return Err(InvalidAction::ClaimMatchesCard(card));
        }
        Ok(Self { card, claim })
    }

    /// The card placed on the pile.
    #[must_use]
    pub const fn card(self) -> Card {
        self.card
    }

    /// The card announced.
    #[must_use]
    pub const fn claim(self) -> Card {
        self.claim
    }
}

/// A complete player decision.
///
/// ## Example
///
/// ```
/// use cheat_engine::core::{Action, ActionKind, Card, Suit};
///
/// let seven = Card::new(7, Suit::Clubs);
/// let nine = Card::new(9, Suit::Hearts);
///
/// let honest = Action::Truth(seven);
/// assert_eq!(honest.claimed_card(), Some(seven));
///
/// let bluff = Action::lie(seven, nine).unwrap();
/// assert_eq!(bluff.kind(), ActionKind::Lie);
/// assert_eq!(bluff.card(), Some(seven));
/// assert_eq!(bluff.claimed_card(), Some(nine));
///
/// // Claiming the card you actually played is not a bluff
/// assert!(Action::lie(seven, seven).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAction", into = "RawAction")]
pub enum Action {
    /// Play a card and claim exactly that card.
    Truth(Card),
    /// Play a card and claim a different one.
    Lie(Bluff),
    /// Challenge the opponent's previous claim.
    Call,
}

impl Action {
    /// Build a bluff action.
    pub fn lie(card: Card, claim: Card) -> Result<Self, InvalidAction> {
        Bluff::new(card, claim).map(Action::Lie)
    }

    /// The option chosen.
    #[must_use]
    pub const fn kind(&self) -> ActionKind {
        match self {
            Action::Truth(_) => ActionKind::Truth,
            Action::Lie(_) => ActionKind::Lie,
            Action::Call => ActionKind::Call,
        }
    }

    /// The card placed on the pile, if any.
    #[must_use]
    pub const fn card(&self) -> Option<Card> {
        match self {
            Action::Truth(card) => Some(*card),
            Action::Lie(bluff) => Some(bluff.card),
            Action::Call => None,
        }
    }

    /// The card claimed, if any.
    #[must_use]
    pub const fn claimed_card(&self) -> Option<Card> {
        match self {
            Action::Truth(card) => Some(*card),
            Action::Lie(bluff) => Some(bluff.claim),
            Action::Call => None,
        }
    }

    /// Check if this action plays a card.
    #[must_use]
    pub const fn is_play(&self) -> bool {
        !matches!(self, Action::Call)
    }
}

/// Flat record form of an action.
///
/// Mirrors how actions look on the wire: an option tag plus nullable payload
/// fields. Convert with `Action::try_from`, which rejects records that break
/// the per-option rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAction {
    pub option: ActionKind,
    pub card: Option<Card>,
    pub claimed_card: Option<Card>,
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        Self {
            option: action.kind(),
            card: action.card(),
            claimed_card: action.claimed_card(),
        }
    }
}

impl TryFrom<RawAction> for Action {
    type Error = InvalidAction;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        match raw.option {
            ActionKind::Call => match (raw.card, raw.claimed_card) {
                (None, None) => Ok(Action::Call),
                _ => Err(InvalidAction::UnexpectedPayload),
            },
            kind => {
                let card = raw.card.ok_or(InvalidAction::MissingCard(kind))?;
                let claim = raw.claimed_card.ok_or(InvalidAction::MissingClaim(kind))?;
                if kind == ActionKind::Truth {
                    if card != claim {
                        return Err(InvalidAction::TruthMismatch { card, claim });
                    }
                    Ok(Action::Truth(card))
                } else {
                    Action::lie(card, claim)
                }
            }
        }
    }
}
