//! Study deck preparation.

use crate::error::{CoreError, Result};
use crate::types::Card;
use rand::seq::SliceRandom;
use rand::Rng;

/// Keep only the cards from the named sections.
///
/// An empty list of names keeps every card.
pub fn filter_sections<S: AsRef<str>>(cards: &[Card], names: &[S]) -> Result<Vec<Card>> {
    if names.is_empty() {
        return Ok(cards.to_vec());
    }

    for name in names {
        let name = name.as_ref();
        if !cards.iter().any(|card| card.section == name) {
            return Err(CoreError::UnknownSection {
                name: name.to_string(),
            });
        }
    }

    Ok(cards
        .iter()
        .filter(|card| names.iter().any(|name| card.section == name.as_ref()))
        .cloned()
        .collect())
}

/// Draw `count` cards with replacement, then shuffle them.
///
/// Drawing with replacement lets a small table fill a larger session.
pub fn prepare_deck<R: Rng + ?Sized>(cards: &[Card], count: usize, rng: &mut R) -> Result<Vec<Card>> {
    if cards.is_empty() {
        return Err(CoreError::EmptyDeck);
    }

    let mut deck: Vec<Card> = (0..count)
        .filter_map(|_| cards.choose(rng).cloned())
        .collect();
    deck.shuffle(rng);

    tracing::debug!(available = cards.len(), drawn = deck.len(), "prepared study deck");
    Ok(deck)
}
