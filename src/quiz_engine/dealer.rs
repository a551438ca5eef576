//! Per-topic no-repeat question dealing.
//!
//! The dealer keeps one [`Deck`] per topic, created the first time the topic
//! is drawn from. A deck is rebuilt from the full topic list only when the
//! previous one is spent, never earlier. Decks are independent of each other
//! and survive any number of selection cycles.

use std::collections::hash_map::{Entry, HashMap};

use rand::Rng;

use crate::quiz_engine::{catalog::Catalog, deck::Deck, models::Question};

#[derive(Debug, Default)]
pub struct Dealer {
    decks: HashMap<String, Deck>,
}

impl Dealer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal the next question for `topic`.
    ///
    /// Returns `None` (and creates no deck) when the topic has no questions.
    pub fn next<'c, R: Rng>(
        &mut self,
        catalog: &'c Catalog,
        topic: &str,
        rng: &mut R,
    ) -> Option<&'c Question> {
        let questions = catalog.questions(topic);
        if questions.is_empty() {
            return None;
        }

        let deck = match self.decks.entry(topic.to_string()) {
            Entry::Occupied(entry) => {
                let deck = entry.into_mut();
                if deck.is_exhausted() {
                    *deck = Deck::new_shuffled(questions.len(), rng);
                    tracing::debug!("Reshuffled deck for '{}' ({} questions)", topic, questions.len());
                }
                deck
            }
            Entry::Vacant(entry) => {
                tracing::debug!("Created deck for '{}' ({} questions)", topic, questions.len());
                entry.insert(Deck::new_shuffled(questions.len(), rng))
            }
        };

        let position = deck.draw()?;
        let question = questions.get(position)?;
        tracing::debug!(
            "Dealt question {} from '{}' ({} left in deck)",
            question.id,
            topic,
            deck.remaining()
        );
        Some(question)
    }

    /// Questions left in the current cycle for `topic`, if a deck exists.
    pub fn remaining(&self, topic: &str) -> Option<usize> {
        self.decks.get(topic).map(Deck::remaining)
    }

    pub fn has_deck(&self, topic: &str) -> bool {
        self.decks.contains_key(topic)
    }

    pub fn deck_count(&self) -> usize {
        self.decks.len()
    }

    /// Drop every deck; the next draw per topic starts a fresh cycle.
    pub fn clear(&mut self) {
        self.decks.clear();
    }
}
