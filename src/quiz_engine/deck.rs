use rand::Rng;

/// One shuffle cycle over a topic's questions.
///
/// Holds positions into the topic's question list, shuffled once at
/// construction. Drawing walks the shuffled order front to back, so no
/// position is returned twice before the deck is rebuilt.
#[derive(Debug, Clone)]
pub struct Deck {
    order: Vec<usize>,
    cursor: usize,
}

impl Deck {
    /// Build a deck over `0..len` and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(len: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..len).collect();

        // Fisher-Yates shuffle
        for i in (1..order.len()).rev() {
            let j = rng.gen_range(0..=i);
            order.swap(i, j);
        }

        Deck { order, cursor: 0 }
    }

    /// Draw the next position, or `None` once the cycle is spent.
    pub fn draw(&mut self) -> Option<usize> {
        let next = self.order.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(next)
    }

    /// Positions not yet drawn in this cycle.
    pub fn remaining(&self) -> usize {
        self.order.len() - self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Positions drawn so far, in draw order.
    pub fn drawn(&self) -> &[usize] {
        &self.order[..self.cursor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn deck_yields_every_position_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut deck = Deck::new_shuffled(20, &mut rng);
        let mut all: Vec<usize> = std::iter::from_fn(|| deck.draw()).collect();
        assert_eq!(all.len(), 20);
        all.sort_unstable();
        assert_eq!(all, (0..20).collect::<Vec<_>>());
        assert!(deck.is_exhausted());
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn deck_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<usize> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut deck = Deck::new_shuffled(30, &mut rng);
            (0..5).filter_map(|_| deck.draw()).collect()
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn drawn_tracks_draw_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut deck = Deck::new_shuffled(4, &mut rng);
        let first = deck.draw().unwrap();
        let second = deck.draw().unwrap();
        assert_eq!(deck.drawn(), &[first, second]);
        assert_eq!(deck.remaining(), 2);
    }

    #[test]
    fn empty_deck_is_exhausted_immediately() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut deck = Deck::new_shuffled(0, &mut rng);
        assert!(deck.is_exhausted());
        assert_eq!(deck.draw(), None);
    }
}
