//! Dealing the deck into two hands.

use crate::core::{
    full_deck, Card, ConfigError, GameRng, Hand, HandDistribution, PlayerId, PlayerMap, DECK_SIZE,
};

/// Split `deck` into two disjoint hands of equal size.
///
/// `Random` shuffles the deck, then hands out one card at a time, alternating
/// between player 1 and player 2.
///
/// # Errors
///
/// - `ConfigError::OddDeck` if the deck cannot be split evenly
/// - `ConfigError::UnsupportedDistribution` for `Mirror`
pub fn deal(
    distribution: HandDistribution,
    deck: &[Card],
    rng: &mut GameRng,
) -> Result<PlayerMap<Hand>, ConfigError> {
    if deck.len() % 2 != 0 {
        return Err(ConfigError::OddDeck { size: deck.len() });
    }

    match distribution {
        HandDistribution::Random => {
            let mut cards = deck.to_vec();
            rng.shuffle(&mut cards);

            let mut hands: PlayerMap<Hand> = PlayerMap::with_default();
            for pair in cards.chunks_exact(2) {
                hands[PlayerId::ONE].insert(pair[0]);
                hands[PlayerId::TWO].insert(pair[1]);
            }
            Ok(hands)
        }
        HandDistribution::Mirror => Err(ConfigError::UnsupportedDistribution(distribution)),
    }
}

/// Check that two scripted hands partition the full deck.
pub fn validate_hands(hands: &PlayerMap<Hand>) -> Result<(), ConfigError> {
    let one = &hands[PlayerId::ONE];
    let two = &hands[PlayerId::TWO];

    if one.is_empty() || two.is_empty() {
        return Err(ConfigError::HandsNotPartition {
            reason: "each player needs at least one card".to_string(),
        });
    }
    if let Some(card) = one.iter().find(|c| two.contains(*c)) {
        return Err(ConfigError::HandsNotPartition {
            reason: format!("{card} dealt to both players"),
        });
    }
    if one.len() + two.len() != DECK_SIZE {
        return Err(ConfigError::HandsNotPartition {
            reason: format!("{} cards dealt, expected {DECK_SIZE}", one.len() + two.len()),
        });
    }
    if let Some(card) = full_deck()
        .into_iter()
        .find(|c| !one.contains(c) && !two.contains(c))
    {
        return Err(ConfigError::HandsNotPartition {
            reason: format!("{card} not dealt"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    #[test]
    fn test_random_deal_is_fair() {
        let mut rng = GameRng::new(42);
        let hands = deal(HandDistribution::Random, &full_deck(), &mut rng).unwrap();

        assert_eq!(hands[PlayerId::ONE].len(), 26);
        assert_eq!(hands[PlayerId::TWO].len(), 26);
        assert!(validate_hands(&hands).is_ok());
    }

    #[test]
    fn test_deal_is_deterministic() {
        let a = deal(HandDistribution::Random, &full_deck(), &mut GameRng::new(9)).unwrap();
        let b = deal(HandDistribution::Random, &full_deck(), &mut GameRng::new(9)).unwrap();
        let c = deal(HandDistribution::Random, &full_deck(), &mut GameRng::new(10)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_odd_deck_rejected() {
        let deck = &full_deck()[..51];
        let err = deal(HandDistribution::Random, deck, &mut GameRng::new(1)).unwrap_err();
        assert_eq!(err, ConfigError::OddDeck { size: 51 });
    }

    #[test]
    fn test_mirror_unsupported() {
        let err = deal(HandDistribution::Mirror, &full_deck(), &mut GameRng::new(1)).unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedDistribution(HandDistribution::Mirror));
    }

    #[test]
    fn test_validate_hands_rejects_overlap_and_gaps() {
        let deck = full_deck();
        let all: Hand = deck.iter().copied().collect();

        let overlap = PlayerMap::from_pair(all.clone(), Hand::unit(Card::new(1, Suit::Clubs)));
        assert!(validate_hands(&overlap).is_err());

        let short = PlayerMap::from_pair(
            deck[2..27].iter().copied().collect(),
            deck[27..].iter().copied().collect(),
        );
        assert!(validate_hands(&short).is_err());

        let empty = PlayerMap::from_pair(all, Hand::new());
        assert!(validate_hands(&empty).is_err());

        let lopsided = PlayerMap::from_pair(
            deck[..1].iter().copied().collect(),
            deck[1..].iter().copied().collect(),
        );
        assert!(validate_hands(&lopsided).is_ok());
    }
}
